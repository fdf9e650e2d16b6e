//! Episodes parser for AnimeFire
//!
//! Parses HTML from an anime listing page to extract episode links.

use std::num::ParseIntError;

use once_cell::sync::Lazy;
use regex_lite::Regex;
use scraper::{ElementRef, Html, Selector};
use tracing::warn;

use crate::error::{AnimeFireError, Result};
use crate::types::Episode;

/// CSS selector for episode anchors on AnimeFire listing pages.
///
/// The tag and the full class set are tied to the site's current markup.
/// Keep the whole matching rule here so a markup change touches only this
/// constant.
const EPISODE_ANCHOR_SELECTOR: &str = "a.lEp.epT.divNumEp.smallbox.px-2.mx-1.text-left.d-flex";

/// First contiguous run of decimal digits, compiled once per process.
static DIGIT_RUN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+").unwrap());

/// Parse the episode list from anime page HTML.
///
/// Episodes are returned in document order; use [`sort_episodes_by_number`]
/// for numeric order. Anchors whose display text yields no usable episode
/// number are logged and skipped.
///
/// # Arguments
/// * `html` - Raw HTML content of the anime listing page
///
/// # Returns
/// * `Ok(Vec<Episode>)` with the extracted episodes (possibly empty)
/// * `Err(AnimeFireError::Parse)` if the episode selector cannot be built
pub fn parse_episodes(html: &str) -> Result<Vec<Episode>> {
    let document = Html::parse_document(html);
    let mut episodes = Vec::new();

    for anchor in episode_anchors(&document)? {
        if let Some(episode) = parse_episode_anchor(&anchor) {
            episodes.push(episode);
        }
    }

    Ok(episodes)
}

/// Find every episode anchor in the document, in document order.
fn episode_anchors(document: &Html) -> Result<Vec<ElementRef<'_>>> {
    let selector = Selector::parse(EPISODE_ANCHOR_SELECTOR)
        .map_err(|e| AnimeFireError::Parse(format!("invalid episode selector: {:?}", e)))?;

    Ok(document.select(&selector).collect())
}

/// Parse a single episode from its anchor element.
///
/// Returns `None` when the episode number cannot be converted; the anchor is
/// then excluded from the result without failing the extraction.
fn parse_episode_anchor(anchor: &ElementRef) -> Option<Episode> {
    // Display text exactly as rendered, no further normalization
    let number = anchor.text().collect::<String>();

    // Missing href is tolerated and becomes an empty URL
    let url = anchor
        .value()
        .attr("href")
        .unwrap_or_default()
        .to_string();

    let num = match parse_episode_number(&number) {
        Ok(num) => num,
        Err(err) => {
            warn!(text = %number, error = %err, "skipping episode with unparsable number");
            return None;
        }
    };

    Some(Episode { number, num, url })
}

/// Extract the numeric portion of an episode display text.
///
/// Takes the first contiguous run of decimal digits anywhere in the text.
/// Text without any digits defaults to episode 1.
///
/// # Arguments
/// * `text` - Display text of the episode link
///
/// # Returns
/// * `Ok(num)` with the parsed episode number
/// * `Err(ParseIntError)` if the digit run overflows the integer width
///
/// # Examples
/// ```
/// use animefire_core::parser::parse_episode_number;
///
/// assert_eq!(parse_episode_number("Episode 007"), Ok(7));
/// assert_eq!(parse_episode_number("12"), Ok(12));
/// assert_eq!(parse_episode_number("OVA"), Ok(1));
/// assert_eq!(parse_episode_number("ep3extra45"), Ok(3));
/// ```
pub fn parse_episode_number(text: &str) -> std::result::Result<u32, ParseIntError> {
    let num_str = DIGIT_RUN_RE
        .find(text)
        .map(|m| m.as_str())
        // No digits at all defaults to episode 1
        .unwrap_or("1");

    num_str.parse()
}

/// Sort episodes ascending by episode number.
///
/// The sort is stable: anchors with equal numbers keep their document order.
pub fn sort_episodes_by_number(episodes: &mut [Episode]) {
    episodes.sort_by_key(|episode| episode.num);
}
