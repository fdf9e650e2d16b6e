//! HTML parsers for AnimeFire pages
//!
//! This module contains the parser for the anime listing page:
//! - `episodes`: Parse the episode link list

pub mod episodes;

// Re-export main parsing functions
pub use episodes::{parse_episode_number, parse_episodes, sort_episodes_by_number};
