//! AnimeFire Scraper Core Library
//!
//! This crate provides the core scraping functionality for AnimeFire
//! (animefire.plus).
//!
//! # Features
//! - Fetch an anime's listing page with a browser-like HTTP client
//! - Extract episode numbers and links from the page markup
//! - Return episodes sorted by episode number

pub mod client;
pub mod error;
pub mod parser;
pub mod scraper;
pub mod types;

// Re-export main types for convenience
pub use client::{AnimeFireClient, ClientConfig};
pub use error::{AnimeFireError, Result};
pub use scraper::AnimeFireScraper;
pub use types::Episode;
