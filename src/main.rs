//! CLI entry point for sitegen

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use sitegen::commands::list::ContentType;

#[derive(Parser)]
#[command(name = "sitegen")]
#[command(version)]
#[command(about = "A minimal static site generator for Markdown pages and blog posts", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    /// Defaults to `build`
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the site into the public directory
    #[command(alias = "b")]
    Build,

    /// Delete the public directory
    Clean,

    /// Create a new site with sample content
    Init {
        /// Directory to initialize (defaults to current directory)
        #[arg(default_value = ".")]
        folder: PathBuf,
    },

    /// List pages or posts in build order
    List {
        /// Type of content to list (post, page)
        #[arg(default_value = "post")]
        r#type: ContentType,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "sitegen=debug,info"
    } else {
        "sitegen=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Err(e) = run(cli).await {
        tracing::error!("{:#}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir().context("Cannot determine current directory")?,
    };

    match cli.command.unwrap_or(Commands::Build) {
        Commands::Build => {
            let site = sitegen::Site::new(&base_dir)?;
            site.generate().await.context("Build failed")?;
            println!("Generated successfully!");
        }

        Commands::Clean => {
            let site = sitegen::Site::new(&base_dir)?;
            site.clean()?;
            println!("Cleaned successfully!");
        }

        Commands::Init { folder } => {
            let target_dir = if folder.is_absolute() {
                folder
            } else {
                base_dir.join(folder)
            };
            tracing::info!("Initializing site in {:?}", target_dir);
            sitegen::commands::init::init_site(&target_dir)?;
            println!("Initialized site in {:?}", target_dir);
        }

        Commands::List { r#type } => {
            let site = sitegen::Site::new(&base_dir)?;
            sitegen::commands::list::run(&site, r#type).await?;
        }
    }

    Ok(())
}
