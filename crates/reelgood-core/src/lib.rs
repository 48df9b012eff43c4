//! Reelgood Scraper Core Library
//!
//! Provides an async API for looking up where a movie or show can be
//! streamed, by fetching its Reelgood title page and reading the page.
//!
//! # Overview
//!
//! Each lookup is a linear pipeline: fetch the page, parse the HTML, run a
//! set of heuristic extractors (title, region, platforms) and format the
//! result. The extractors are ordered lists of fallback selectors; a field
//! that matched nothing is reported as unknown rather than as an error.
//!
//! - Rate-limited HTTP client with retries for transient errors
//! - HTML extractors for title, region and free/subscription platforms
//! - Text and JSON reports
//! - A sequential batch loop with a delay between URLs
//!
//! # Example
//!
//! ```no_run
//! use reelgood_core::{ReelgoodScraper, Result, ScrapeOutcome, report};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let scraper = ReelgoodScraper::new()?;
//!
//!     let result = scraper
//!         .scrape("https://reelgood.com/movie/inception-2010", None)
//!         .await?;
//!
//!     println!("{}", report::summary(&ScrapeOutcome::Single(result)));
//!     Ok(())
//! }
//! ```

pub mod batch;
mod client;
mod error;
pub mod parser;
mod region;
pub mod report;
mod scraper;
mod types;
pub mod url;

// Re-export client types
pub use client::{ClientConfig, RateLimiter, ReelgoodClient};

// Re-export error types
pub use error::{ReelgoodError, Result};

// Re-export parser entry point
pub use parser::{PageExtract, parse_title_page};

pub use region::Region;

// Re-export main scraper API
pub use scraper::{ReelgoodScraper, ScrapeMode};

// Re-export data types
pub use types::{
    AllRegionsAvailability, Platforms, RegionAvailability, ScrapeFailure, ScrapeOutcome,
    TitleAvailability, UNKNOWN_REGION, UNKNOWN_TITLE,
};

// Re-export batch helpers for convenience
pub use batch::{BatchOptions, BatchProgress, read_url_list, run_batch};
