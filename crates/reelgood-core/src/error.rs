//! Error types for the Reelgood scraper
//!
//! Provides a single error enum with human-readable messages. Errors
//! serialize as their display string so they can sit inside JSON reports.

use serde::{Serialize, Serializer};
use thiserror::Error;

use crate::region::Region;

/// Error type for all Reelgood scraper operations
#[derive(Error, Debug)]
pub enum ReelgoodError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// URL is not a Reelgood title page
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Unknown region code
    #[error("Unknown region '{0}' (valid regions: {codes})", codes = Region::valid_codes())]
    InvalidRegion(String),

    /// Rate limited by server (HTTP 429)
    #[error("Rate limited - too many requests")]
    RateLimited,

    /// Page not found on server
    #[error("Page not found: {0}")]
    NotFound(String),

    /// JSON encoding failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Serialize for ReelgoodError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

/// Result type alias for Reelgood operations
pub type Result<T> = std::result::Result<T, ReelgoodError>;
