//! Whole-page extraction for Reelgood title pages

use scraper::Html;

use super::platforms::{count_service_logos, extract_platforms};
use super::region::extract_region;
use super::text::document_title;
use super::title::extract_title;
use crate::types::Platforms;

/// Everything the extractors found on one title page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageExtract {
    pub title: Option<String>,
    pub region: Option<String>,
    pub platforms: Platforms,
    /// Number of platform logos on the page, categorized or not
    pub service_logos: usize,
    /// The page is a bot-challenge interstitial rather than a title page
    pub challenge: bool,
}

/// Parses a title page and runs every extractor once
///
/// # Arguments
/// * `html` - Raw HTML string of a title page
pub fn parse_title_page(html: &str) -> PageExtract {
    let document = Html::parse_document(html);

    PageExtract {
        title: extract_title(&document),
        region: extract_region(&document),
        platforms: extract_platforms(&document),
        service_logos: count_service_logos(&document),
        challenge: is_challenge_page(&document),
    }
}

/// Detects a bot-challenge interstitial ("Just a moment...")
///
/// A missing or empty `<title>` counts as a challenge too, since real
/// title pages always carry one.
pub fn is_challenge_page(document: &Html) -> bool {
    match document_title(document) {
        Some(title) => title.is_empty() || title.to_lowercase().contains("just a moment"),
        None => true,
    }
}
