//! CLI entry point for chrisrx-dev

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "chrisrx-dev")]
#[command(version)]
#[command(about = "Personal website and blog", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    /// Address to listen on, as [host]:port
    #[arg(long, global = true, env = "LOCAL_DEV_ADDR")]
    addr: Option<String>,

    /// Root whose assets/ subdirectory is served under /assets/
    #[arg(long, global = true, env = "LOCAL_DEV_DIR")]
    dir: Option<String>,

    /// Write static files instead of serving
    #[arg(
        long,
        global = true,
        env = "LOCAL_DEV_OUTPUT",
        value_parser = clap::builder::BoolishValueParser::new()
    )]
    output: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the site over HTTP
    #[command(alias = "s")]
    Server,

    /// Generate static files
    #[command(alias = "g")]
    Generate,

    /// List site information
    List {
        /// Type of content to list (post, module)
        #[arg(default_value = "post")]
        r#type: String,
    },

    /// Remove generated files
    Clean,

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "chrisrx_dev=debug,info"
    } else {
        "chrisrx_dev=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    let mut config = chrisrx_dev::config::SiteConfig::load_or_default(&base_dir)?;
    if let Some(addr) = cli.addr {
        config.addr = addr;
    }
    if let Some(dir) = cli.dir {
        config.assets_dir = dir;
    }
    config.output |= cli.output;

    let command = cli.command.unwrap_or(if config.output {
        Commands::Generate
    } else {
        Commands::Server
    });
    let site = chrisrx_dev::Site::new(&base_dir, config);

    match command {
        Commands::Server => {
            let addr = site.config.listen_addr()?;
            tracing::info!("Starting server at {}", addr);
            chrisrx_dev::server::start(&site, addr).await?;
        }

        Commands::Generate => {
            tracing::info!("Generating static files into {:?}", site.output_dir);
            site.generate()?;
            println!("Generated successfully!");
        }

        Commands::List { r#type } => {
            chrisrx_dev::commands::list::run(&site, &r#type)?;
        }

        Commands::Clean => {
            tracing::info!("Cleaning generated files...");
            site.clean()?;
            println!("Cleaned successfully!");
        }

        Commands::Version => {
            println!("chrisrx-dev version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
