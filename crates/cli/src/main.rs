mod args;
mod metrics;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::{debug, info, warn};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use zooqle_core::{
    is_exact_identifier, load_config, validate_config, Categories, Config, Item, Language,
    LoggingConfig, Poster, SearchQuery, Size, ZooqleClient,
};

use args::{parse_category, parse_duration, parse_language, parse_size, Duration};

/// Config file read when `--config` is not given.
const DEFAULT_CONFIG_PATH: &str = "zooqle.toml";

/// Search torrents and titles on Zooqle.
#[derive(Parser)]
#[command(name = "zooqle")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to configuration file.
    #[arg(short, long, global = true, env = "ZOOQLE_CONFIG")]
    config: Option<PathBuf>,

    /// Print collected metrics to stderr before exiting.
    #[arg(long, global = true)]
    metrics: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search torrents and print one result page as JSON.
    Search(SearchArgs),

    /// Look up movies, TV shows and actors by name or IMDb id.
    Items {
        /// Name or IMDb id to look up.
        #[arg(required = true)]
        terms: Vec<String>,
    },
}

#[derive(clap::Args)]
struct SearchArgs {
    /// Words to search for. A lone info hash or IMDb id is matched exactly.
    terms: Vec<String>,

    /// Words that must not appear in the title.
    #[arg(short = 'x', long)]
    exclude: Vec<String>,

    /// Phrase that must appear verbatim.
    #[arg(short, long)]
    exact: Option<String>,

    /// Minimum size, e.g. 50MB.
    #[arg(long, value_parser = parse_size)]
    min_size: Option<Size>,

    /// Maximum size, e.g. 1GB.
    #[arg(long, value_parser = parse_size)]
    max_size: Option<Size>,

    /// Only torrents published before this long ago, e.g. 2W.
    #[arg(long, value_parser = parse_duration, conflicts_with = "newer_than")]
    older_than: Option<Duration>,

    /// Only torrents published within this long, e.g. 3D.
    #[arg(long, value_parser = parse_duration)]
    newer_than: Option<Duration>,

    /// Restrict to a category. Repeat for several.
    #[arg(short = 'C', long = "category", value_parser = parse_category)]
    categories: Vec<Categories>,

    /// Two-letter language code, e.g. es.
    #[arg(short, long, value_parser = parse_language)]
    language: Option<Language>,

    /// Match terms against file names instead of titles.
    #[arg(long)]
    only_files: bool,

    /// Result page to fetch, starting at 1.
    #[arg(short, long, default_value = "1")]
    page: u32,

    /// Print the rendered query instead of searching.
    #[arg(long)]
    print_query: bool,
}

/// An item with its poster URLs resolved.
#[derive(Serialize)]
struct ItemOutput {
    #[serde(flatten)]
    item: Item,
    #[serde(skip_serializing_if = "Option::is_none")]
    poster: Option<Poster>,
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    let config = resolve_config(cli.config.as_deref())?;
    init_logging(&config.logging);

    validate_config(&config).context("Configuration validation failed")?;

    let client = ZooqleClient::from_config(&config.client).context("Failed to create client")?;
    info!(base_url = %config.client.base_url, "Client ready");

    match cli.command {
        Commands::Search(args) => {
            let query = build_query(&args);
            if args.print_query {
                println!("{}", query);
            } else {
                let page = client
                    .search_query(&query, args.page)
                    .await
                    .context("Search failed")?;
                println!("{}", serde_json::to_string_pretty(&page)?);
            }
        }
        Commands::Items { terms } => {
            let items = client
                .search_items(&terms.join(" "))
                .await
                .context("Item lookup failed")?;
            let output: Vec<ItemOutput> = items
                .into_iter()
                .map(|item| ItemOutput {
                    poster: client.poster(&item),
                    item,
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    if cli.metrics {
        eprint!("{}", metrics::encode_metrics());
    }

    Ok(())
}

/// Load the config file, falling back to defaults when the default path is
/// absent. An explicitly given path must exist.
fn resolve_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => load_config(path)
            .with_context(|| format!("Failed to load config from {:?}", path)),
        None => {
            let path = Path::new(DEFAULT_CONFIG_PATH);
            if path.exists() {
                load_config(path)
                    .with_context(|| format!("Failed to load config from {:?}", path))
            } else {
                Ok(Config::default())
            }
        }
    }
}

fn init_logging(logging: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.filter));
    let registry = tracing_subscriber::registry().with(filter);

    // stdout carries the JSON output
    if logging.json {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn build_query(args: &SearchArgs) -> SearchQuery {
    let terms = args.terms.join(" ");
    let mut query = if is_exact_identifier(&terms) {
        SearchQuery::exact(&terms)
    } else {
        SearchQuery::new(&terms)
    };

    if !args.exclude.is_empty() {
        query.excluding_terms(&args.exclude.join(" "));
    }
    if let Some(exact) = &args.exact {
        // keeps an identifier phrase from the terms
        let phrase = format!("{} {}", query.exact_match_terms(), exact);
        query.matching_exactly(&phrase);
    }

    if let Some(size) = args.min_size {
        query.larger_than(size.amount, size.unit);
        if query.min_size() != Some(size) {
            warn!(min_size = %size, "Minimum size ignored, it must be below the maximum");
        }
    }
    if let Some(size) = args.max_size {
        query.smaller_than(size.amount, size.unit);
        if query.max_size() != Some(size) {
            warn!(max_size = %size, "Maximum size ignored, it must be above the minimum");
        }
    }

    if let Some(age) = args.older_than {
        query.older_than(age.amount, age.unit);
    }
    if let Some(age) = args.newer_than {
        query.newer_than(age.amount, age.unit);
    }

    let categories = args
        .categories
        .iter()
        .fold(Categories::ANY, |all, category| all | *category);
    query.in_categories(categories);

    if let Some(language) = args.language {
        query.in_language(language);
    }
    query.only_in_files(args.only_files);

    debug!(query = %query, "Built query");
    query
}
