//! Generate static files

use anyhow::Result;
use std::fs;
use std::path::Path;

use crate::config::SiteConfig;
use crate::content::Post;
use crate::templates::TemplateRenderer;
use crate::Site;

/// Generate the static site into the output directory
pub fn run(site: &Site) -> Result<()> {
    let start = std::time::Instant::now();

    let posts = site.posts()?;
    let pages = render_all(&site.config, &posts)?;

    fs::create_dir_all(&site.output_dir)?;
    for (name, html) in &pages {
        let output_path = site.output_dir.join(name);
        fs::write(&output_path, html)?;
        tracing::debug!("Generated: {:?}", output_path);
    }

    let duration = start.elapsed();
    tracing::info!(
        "Generated {} files in {:.2}s",
        pages.len(),
        duration.as_secs_f64()
    );

    Ok(())
}

/// Render every page, paired with its output file name
pub fn render_all(config: &SiteConfig, posts: &[Post]) -> Result<Vec<(String, String)>> {
    let renderer = TemplateRenderer::new(config.clone());

    let mut pages = vec![
        ("index.html".to_string(), renderer.index()),
        ("blog.html".to_string(), renderer.blog(posts)?),
        ("packages.html".to_string(), renderer.packages()),
    ];
    for module in &config.modules {
        pages.push((module_file_name(&module.name), renderer.redirect(module)));
    }

    Ok(pages)
}

/// Names of every file `run` writes
pub fn output_files(config: &SiteConfig) -> Vec<String> {
    let mut files: Vec<String> = ["index.html", "blog.html", "packages.html"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    files.extend(config.modules.iter().map(|m| module_file_name(&m.name)));
    files
}

/// Redirect pages are named after the last component of the module name
fn module_file_name(name: &str) -> String {
    Path::new(name)
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| name.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn site_with_post(dir: &Path) -> Site {
        let posts = dir.join("posts");
        fs::create_dir_all(&posts).unwrap();
        fs::write(
            posts.join("hello.md"),
            "---\ntitle: Hello\npublished: 2024-02-01\n---\nFirst post.\n",
        )
        .unwrap();

        let mut config = SiteConfig::default();
        config.output_dir = "public".to_string();
        Site::new(dir, config)
    }

    #[test]
    fn test_generate_writes_all_pages() {
        let dir = TempDir::new().unwrap();
        let site = site_with_post(dir.path());
        run(&site).unwrap();

        for name in output_files(&site.config) {
            assert!(site.output_dir.join(&name).is_file(), "missing {}", name);
        }
        let blog = fs::read_to_string(site.output_dir.join("blog.html")).unwrap();
        assert!(blog.contains("First post."));

        let redirect = fs::read_to_string(site.output_dir.join("x")).unwrap();
        assert!(redirect.contains(r#"content="go.chrisrx.dev/x git https://github.com/ChrisRx/exp""#));
    }

    #[test]
    fn test_generate_fails_on_bad_post() {
        let dir = TempDir::new().unwrap();
        let site = site_with_post(dir.path());
        fs::write(site.posts_dir.join("broken.md"), "no header at all").unwrap();

        assert!(run(&site).is_err());
        assert!(!site.output_dir.join("index.html").exists());
    }

    #[test]
    fn test_module_file_name() {
        assert_eq!(module_file_name("quake-kube"), "quake-kube");
        assert_eq!(module_file_name("nested/pkg"), "pkg");
    }

    #[test]
    fn test_output_files() {
        let config = SiteConfig::default();
        let files = output_files(&config);
        assert_eq!(files.len(), 13);
        assert_eq!(&files[..3], &["index.html", "blog.html", "packages.html"]);
    }
}
