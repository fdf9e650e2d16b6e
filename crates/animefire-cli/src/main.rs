//! AnimeFire scraper CLI application.

use animefire_core::{AnimeFireScraper, ClientConfig};
use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "List the episodes of an AnimeFire anime page", long_about = None)]
struct Args {
    /// URL of the anime's listing page
    url: String,

    /// Print the episode list as JSON
    #[arg(long)]
    json: bool,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 30)]
    timeout: u64,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging; RUST_LOG overrides the flag-derived default
    let default_level = if args.verbose { "debug" } else { "warn" };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "animefire={},animefire_core={},hyper=warn,reqwest=warn",
            default_level, default_level
        ))
    });
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let config = ClientConfig {
        timeout_secs: args.timeout,
        ..ClientConfig::default()
    };
    let scraper = AnimeFireScraper::with_config(config).context("failed to create scraper")?;

    info!(url = %args.url, "fetching episode list");
    let episodes = scraper
        .get_anime_episodes(&args.url)
        .await
        .with_context(|| format!("failed to list episodes of {}", args.url))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&episodes)?);
    } else {
        println!("{} episodes", episodes.len());
        for ep in &episodes {
            println!("{:>4}  {}", ep.num, ep.url);
        }
    }

    Ok(())
}
