//! Catalog Service - seeds an in-memory movie catalog and prints it.

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use catalog_service_lib::config::CatalogConfig;
use catalog_service_lib::ListTarget;
use common::SortOrder;

#[derive(Parser)]
#[command(name = "catalog-service")]
#[command(about = "Movie catalog service")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Seed a demo catalog and print everything as JSON
    Seed {
        /// Pretty-print the output
        #[arg(long)]
        pretty: bool,
    },
    /// Seed, then print one page of movies
    Movies(ListArgs),
    /// Seed, then print one page of actors
    Actors(ListArgs),
}

#[derive(Args)]
struct ListArgs {
    #[arg(long, default_value = "1")]
    page: u64,
    /// Page size (defaults to CATALOG_DEFAULT_PAGE_SIZE)
    #[arg(long)]
    limit: Option<u64>,
    /// Case-insensitive substring filter
    #[arg(long)]
    search: Option<String>,
    /// Field to sort by
    #[arg(long)]
    sort_by: Option<String>,
    /// Sort descending
    #[arg(long)]
    desc: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = CatalogConfig::from_env();

    match cli.command {
        Commands::Seed { pretty } => {
            catalog_service_lib::run_seed(&config, pretty).await?;
        }
        Commands::Movies(args) => {
            let options = list_options(&config, args);
            catalog_service_lib::run_list(&config, ListTarget::Movies, options).await?;
        }
        Commands::Actors(args) => {
            let options = list_options(&config, args);
            catalog_service_lib::run_list(&config, ListTarget::Actors, options).await?;
        }
    }

    Ok(())
}

fn list_options(config: &CatalogConfig, args: ListArgs) -> common::ListOptions {
    let mut options = config.list_options(args.page, args.limit);
    if let Some(search) = args.search {
        options = options.with_search(search);
    }
    if let Some(field) = args.sort_by {
        let order = if args.desc { SortOrder::Desc } else { SortOrder::Asc };
        options = options.sorted_by(field, order);
    }
    options
}
