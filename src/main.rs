//! CLI entry point for blog-catalog

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "blog-catalog")]
#[command(version)]
#[command(about = "A small blog catalog with filtering, archives and comments", long_about = None)]
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
    /// Initialize a new site with seed articles
    Init {
        /// Directory to initialize (defaults to current directory)
        #[arg(default_value = ".")]
        folder: PathBuf,
    },

    /// List articles, tags or categories
    #[command(alias = "ls")]
    List {
        /// Type of content to list (post, tag, category)
        #[arg(default_value = "post")]
        r#type: String,

        /// Only articles in this category
        #[arg(short = 'C', long)]
        category: Option<String>,

        /// Only articles with any of these tags (repeatable or comma-separated)
        #[arg(short, long = "tag")]
        tags: Vec<String>,
    },

    /// Show articles grouped by month
    Archive,

    /// Show one article with its comments
    Show {
        /// Article id
        id: String,
    },

    /// Start the JSON API server
    #[command(alias = "s")]
    Server {
        /// Port to listen on (defaults to the configured port)
        #[arg(short, long)]
        port: Option<u16>,

        /// IP address to bind to (defaults to the configured address)
        #[arg(short, long)]
        ip: Option<String>,
    },

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "blog_catalog=debug,info"
    } else {
        "blog_catalog=info"
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
            blog_catalog::commands::init::init_site(&target_dir)?;
            println!("Initialized site in {:?}", target_dir);
        }

        Commands::List {
            r#type,
            category,
            tags,
        } => {
            let blog = blog_catalog::Blog::new(&base_dir)?;
            blog_catalog::commands::list::run(&blog, &r#type, category.as_deref(), &tags)?;
        }

        Commands::Archive => {
            let blog = blog_catalog::Blog::new(&base_dir)?;
            blog_catalog::commands::archive::run(&blog)?;
        }

        Commands::Show { id } => {
            let blog = blog_catalog::Blog::new(&base_dir)?;
            blog_catalog::commands::show::run(&blog, &id)?;
        }

        Commands::Server { port, ip } => {
            let blog = blog_catalog::Blog::new(&base_dir)?;
            let ip = ip.unwrap_or_else(|| blog.config.server.ip.clone());
            let port = port.unwrap_or(blog.config.server.port);

            tracing::info!("Starting server at http://{}:{}", ip, port);
            blog_catalog::server::start(&blog, &ip, port).await?;
        }

        Commands::Version => {
            println!("blog-catalog version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
