//! Main AnimeFire scraper API
//!
//! This module provides the high-level API for scraping AnimeFire.
//! It combines the HTTP client with the episodes parser into a single
//! fetch-parse-sort pipeline.

use crate::client::{AnimeFireClient, ClientConfig};
use crate::error::Result;
use crate::parser::{parse_episodes, sort_episodes_by_number};
use crate::types::Episode;

/// Main scraper API for AnimeFire
///
/// # Example
/// ```no_run
/// use animefire_core::AnimeFireScraper;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let scraper = AnimeFireScraper::new()?;
///
///     let episodes = scraper
///         .get_anime_episodes("https://animefire.plus/animes/one-piece-todos-os-episodios")
///         .await?;
///     println!("Found {} episodes", episodes.len());
///
///     Ok(())
/// }
/// ```
pub struct AnimeFireScraper {
    client: AnimeFireClient,
}

impl AnimeFireScraper {
    /// Create a new scraper with default configuration.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created.
    pub fn new() -> Result<Self> {
        let client = AnimeFireClient::new()?;
        Ok(Self { client })
    }

    /// Create a new scraper with custom client configuration.
    ///
    /// # Arguments
    /// * `config` - Client configuration
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created.
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let client = AnimeFireClient::with_config(config)?;
        Ok(Self { client })
    }

    /// Create a new scraper with a pre-built client.
    ///
    /// This is useful for testing or when you need custom client configuration.
    ///
    /// # Arguments
    /// * `client` - Pre-configured AnimeFireClient instance
    pub fn with_client(client: AnimeFireClient) -> Self {
        Self { client }
    }

    /// Get the episode list of an anime, sorted by episode number.
    ///
    /// Fetches the anime's listing page, extracts every episode anchor and
    /// returns the episodes in ascending numeric order. A page without
    /// episode anchors yields an empty list. Anchors whose display text has
    /// no usable episode number are logged and skipped; they never fail the
    /// whole call.
    ///
    /// # Arguments
    /// * `anime_url` - Absolute URL of the anime's listing page
    ///
    /// # Returns
    /// * `Ok(Vec<Episode>)` sorted ascending by episode number
    /// * `Err(AnimeFireError::Fetch)` on any transport failure
    /// * `Err(AnimeFireError::Parse)` if the document cannot be queried
    ///
    /// # Example
    /// ```no_run
    /// use animefire_core::AnimeFireScraper;
    ///
    /// # async fn example() -> Result<(), animefire_core::AnimeFireError> {
    /// let scraper = AnimeFireScraper::new()?;
    /// let episodes = scraper
    ///     .get_anime_episodes("https://animefire.plus/animes/naruto-todos-os-episodios")
    ///     .await?;
    /// for ep in episodes {
    ///     println!("{} -> {}", ep.number, ep.url);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn get_anime_episodes(&self, anime_url: &str) -> Result<Vec<Episode>> {
        let html = self.client.fetch(anime_url).await?;

        let mut episodes = parse_episodes(&html)?;
        sort_episodes_by_number(&mut episodes);

        Ok(episodes)
    }
}
