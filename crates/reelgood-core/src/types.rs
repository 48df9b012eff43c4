//! Core data types for the Reelgood scraper
//!
//! Contains the result structures produced by a scrape. All of them
//! implement Serialize and Deserialize for JSON output.

use serde::{Deserialize, Serialize};

/// Placeholder used when no title could be extracted
pub const UNKNOWN_TITLE: &str = "Unknown Title";

/// Placeholder used when no region could be detected
pub const UNKNOWN_REGION: &str = "Unknown";

/// Streaming platforms offering a title, split by offer type
///
/// Rent and buy offers are not collected. Both lists are sorted and free of
/// duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Platforms {
    /// Platforms that include the title in a subscription
    pub subscription: Vec<String>,

    /// Platforms streaming the title for free
    pub free: Vec<String>,
}

impl Platforms {
    /// Total number of platform entries across both lists
    pub fn count(&self) -> usize {
        self.subscription.len() + self.free.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subscription.is_empty() && self.free.is_empty()
    }
}

/// Availability of a title in a single region
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitleAvailability {
    /// Title name (e.g. "Inception")
    pub title: String,

    pub platforms: Platforms,

    /// Region display name as detected on the page (e.g. "United States")
    pub region: String,

    /// URL that was requested
    pub url: String,

    /// Number of subscription plus free platforms
    pub platform_count: usize,
}

/// Availability in one region of an all-regions scrape
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionAvailability {
    /// Region code (e.g. "uk")
    pub code: String,

    /// Region display name (e.g. "United Kingdom")
    pub region: String,

    pub platforms: Platforms,

    pub platform_count: usize,
}

/// Availability of a title across every individual region
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllRegionsAvailability {
    pub title: String,

    pub url: String,

    /// Per-region results in dropdown order
    pub regions: Vec<RegionAvailability>,
}

/// A scrape that did not produce a result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrapeFailure {
    pub url: String,

    /// Human-readable error message
    pub error: String,
}

/// Outcome of scraping one URL
///
/// Serializes untagged, so JSON output is the bare result object, or
/// `{"url": ..., "error": ...}` for failures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScrapeOutcome {
    AllRegions(AllRegionsAvailability),
    Single(TitleAvailability),
    Failed(ScrapeFailure),
}

impl ScrapeOutcome {
    /// URL this outcome belongs to
    pub fn url(&self) -> &str {
        match self {
            ScrapeOutcome::AllRegions(r) => &r.url,
            ScrapeOutcome::Single(r) => &r.url,
            ScrapeOutcome::Failed(f) => &f.url,
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, ScrapeOutcome::Failed(_))
    }
}
