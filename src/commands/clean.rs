//! Clean generated files

use anyhow::Result;
use std::fs;

use super::generate::output_files;
use crate::Site;

/// Remove the files written by `generate`, leaving anything else in place
pub fn run(site: &Site) -> Result<()> {
    for name in output_files(&site.config) {
        let path = site.output_dir.join(&name);
        if path.is_file() {
            fs::remove_file(&path)?;
            tracing::info!("Deleted: {:?}", path);
        }
    }

    Ok(())
}
