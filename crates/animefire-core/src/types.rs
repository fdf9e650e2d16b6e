//! Data types for the AnimeFire scraper
//!
//! This module contains the core data structures used throughout the library.
//! All types implement Serialize and Deserialize for JSON output.

use serde::{Deserialize, Serialize};

/// A single episode entry scraped from an anime listing page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Episode {
    /// Raw display text of the episode link, exactly as rendered on the page.
    /// May contain labels, leading zeros or other non-numeric characters.
    pub number: String,
    /// Numeric sort key: the first contiguous digit run found in `number`
    pub num: u32,
    /// Link target from the anchor's `href` attribute; empty when absent
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_episode_serialization_round_trip() {
        let episode = Episode {
            number: "Episode 007".to_string(),
            num: 7,
            url: "/animes/one-piece/7".to_string(),
        };

        let json = serde_json::to_string(&episode).unwrap();
        let deserialized: Episode = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized, episode);
    }

    #[test]
    fn test_episode_keeps_raw_display_text() {
        let episode = Episode {
            number: "  007  ".to_string(),
            num: 7,
            url: String::new(),
        };

        // The display text is stored untouched; only `num` is normalized
        assert_eq!(episode.number, "  007  ");
        assert_eq!(episode.num, 7);
        assert!(episode.url.is_empty());
    }
}
