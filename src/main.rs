//! CLI entry point for travesia

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "travesia")]
#[command(version)]
#[command(about = "A Notion-backed blog server", long_about = None)]
struct Cli {
    /// Set the site directory (defaults to current directory)
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
    /// Start the blog server
    #[command(alias = "s")]
    Server {
        /// Port to listen on
        #[arg(short, long, default_value = "4000")]
        port: u16,

        /// IP address to bind to
        #[arg(short, long, default_value = "localhost")]
        ip: String,
    },

    /// List remote articles
    List {
        /// Only list one category
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "travesia=debug,info"
    } else {
        "travesia=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine the site directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    match cli.command {
        Commands::Server { port, ip } => {
            let app = travesia::Travesia::new(&base_dir)?;
            tracing::info!("Starting server at http://{}:{}", ip, port);
            travesia::server::start(app, &ip, port).await?;
        }

        Commands::List { category } => {
            let app = travesia::Travesia::new(&base_dir)?;
            travesia::commands::list::run(&app, category.as_deref()).await?;
        }

        Commands::Version => {
            println!("travesia version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
