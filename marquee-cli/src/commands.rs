//! CLI command implementations.

use anyhow::Context;
use clap::Subcommand;
use marquee_core::MarqueeConfig;
use marquee_search::client::{CatalogClient, OmdbClient};
use marquee_search::types::{KindFilter, SearchQuery};

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Search the catalog for movies and TV series
    Search {
        /// Search text
        query: String,
        /// Restrict results to movies or series
        #[arg(long)]
        kind: Option<KindFilter>,
        /// Restrict results to a release year
        #[arg(long)]
        year: Option<String>,
        /// Page of results to fetch
        #[arg(long, default_value_t = 1)]
        page: u32,
    },
    /// Show the full record for one title
    Detail {
        /// Catalog identifier, e.g. tt0133093
        imdb_id: String,
    },
    /// Start the web UI
    Serve {
        /// Host to bind to
        #[arg(long)]
        host: Option<String>,
        /// Port to bind to
        #[arg(short, long)]
        port: Option<u16>,
    },
}

/// Handles the parsed CLI command.
///
/// # Errors
///
/// Returns an error when configuration is incomplete or the catalog
/// query fails.
pub async fn handle_command(command: Commands) -> anyhow::Result<()> {
    let config = MarqueeConfig::from_env().context("configuration incomplete")?;

    match command {
        Commands::Search {
            query,
            kind,
            year,
            page,
        } => run_search(&config, query, kind, year, page).await,
        Commands::Detail { imdb_id } => run_detail(&config, &imdb_id).await,
        Commands::Serve { host, port } => {
            let mut config = config;
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            marquee_web::run_server(config)
                .await
                .map_err(|e| anyhow::anyhow!("web server failed: {e}"))
        }
    }
}

async fn run_search(
    config: &MarqueeConfig,
    text: String,
    kind: Option<KindFilter>,
    year: Option<String>,
    page: u32,
) -> anyhow::Result<()> {
    let client = OmdbClient::from_config(&config.catalog)?;
    let query = SearchQuery { text, kind, year };
    let results = client.search(&query, page).await?;

    println!(
        "Found {} result(s), page {} of {}",
        results.total_count,
        results.page,
        results.total_pages()
    );
    for item in &results.items {
        println!(
            "  {}  {} ({}) [{}]",
            item.imdb_id,
            item.title,
            item.year,
            item.kind.label()
        );
    }

    Ok(())
}

async fn run_detail(config: &MarqueeConfig, imdb_id: &str) -> anyhow::Result<()> {
    let client = OmdbClient::from_config(&config.catalog)?;
    let detail = client.detail(imdb_id).await?;

    let or_na = |value: &Option<String>| value.clone().unwrap_or_else(|| "N/A".to_string());

    println!("{} ({})", detail.title, detail.year);
    println!("  Type:     {}", detail.kind.label());
    println!("  Released: {}", or_na(&detail.released));
    println!("  Runtime:  {}", or_na(&detail.runtime));
    println!("  Genre:    {}", or_na(&detail.genre));
    println!("  Director: {}", or_na(&detail.director));
    println!("  Cast:     {}", or_na(&detail.actors));
    if let Some(rating) = &detail.rating {
        println!("  Rating:   {rating}/10 ({} votes)", or_na(&detail.votes));
    }
    if let Some(plot) = &detail.plot {
        println!("\n{plot}");
    }

    Ok(())
}
