//! CLI entry point for docpress

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "docpress")]
#[command(version)]
#[command(about = "Sidebar, navigation and post listing generator for static documentation sites", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a new site
    Init {
        /// Directory to initialize (defaults to current directory)
        #[arg(default_value = ".")]
        folder: PathBuf,
    },

    /// Create a new post
    New {
        /// Title of the new post
        title: String,

        /// Category directory under posts/
        #[arg(short = 'C', long)]
        category: Option<String>,
    },

    /// Write the site manifest and post listing
    #[command(alias = "g")]
    Generate {
        /// Watch for file changes
        #[arg(short, long)]
        watch: bool,
    },

    /// Clean the output folder
    Clean,

    /// List site information
    List {
        /// Type of content to list (post, sidebar, nav)
        #[arg(default_value = "post")]
        r#type: String,
    },

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "docpress=debug,info"
    } else {
        "docpress=info"
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

    match cli.command {
        Commands::Init { folder } => {
            let target_dir = if folder.is_absolute() {
                folder
            } else {
                base_dir.join(folder)
            };
            tracing::info!("Initializing site in {:?}", target_dir);
            docpress::Press::new(&target_dir)?.init()?;
            println!("Initialized docpress site in {:?}", target_dir);
        }

        Commands::New { title, category } => {
            let press = docpress::Press::new(&base_dir)?;
            tracing::info!("Creating new post with title: {}", title);
            let path = press.new_post(&title, category.as_deref())?;
            println!("Created: {:?}", path);
        }

        Commands::Generate { watch } => {
            let press = docpress::Press::new(&base_dir)?;
            tracing::info!("Generating site data...");

            press.generate()?;
            println!("Generated successfully!");

            if watch {
                tracing::info!("Watching for file changes...");
                docpress::commands::generate::watch(&press).await?;
            }
        }

        Commands::Clean => {
            let press = docpress::Press::new(&base_dir)?;
            tracing::info!("Cleaning output folder...");
            press.clean()?;
            println!("Cleaned successfully!");
        }

        Commands::List { r#type } => {
            let press = docpress::Press::new(&base_dir)?;
            docpress::commands::list::run(&press, &r#type)?;
        }

        Commands::Version => {
            println!("docpress version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
