//! Error types for the AnimeFire scraper
//!
//! This module defines all error types used throughout the library.

use thiserror::Error;

/// Error type for AnimeFire scraper operations
#[derive(Error, Debug)]
pub enum AnimeFireError {
    /// HTTP request failed (DNS, connection, timeout, non-success status)
    #[error("failed to get anime details: {0}")]
    Fetch(#[from] reqwest::Error),

    /// Failed to parse HTML content
    #[error("failed to parse anime details: {0}")]
    Parse(String),
}

/// Result type alias for AnimeFire scraper operations
pub type Result<T> = std::result::Result<T, AnimeFireError>;
