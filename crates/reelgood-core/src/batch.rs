//! Sequential batch scraping
//!
//! Scrapes a list of URLs one after another with a pause between
//! requests. A failing URL is recorded and the loop moves on.

use std::time::Duration;

use tokio::time::sleep;
use tracing::info;

use crate::scraper::{ReelgoodScraper, ScrapeMode};
use crate::types::ScrapeOutcome;

/// Default pause between URLs
pub const DEFAULT_DELAY: Duration = Duration::from_secs(2);

/// Options for [`run_batch`]
#[derive(Debug, Clone, Copy)]
pub struct BatchOptions {
    /// Pause between consecutive URLs (not after the last one)
    pub delay: Duration,
    pub mode: ScrapeMode,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            delay: DEFAULT_DELAY,
            mode: ScrapeMode::Single(None),
        }
    }
}

/// Progress of [`run_batch`], reported around every URL
///
/// `index` is 1-based.
#[derive(Debug, Clone, Copy)]
pub enum BatchProgress<'a> {
    /// About to fetch `url`
    Started {
        index: usize,
        total: usize,
        url: &'a str,
    },
    /// `outcome` is ready; the delay, if any, has not started yet
    Finished {
        index: usize,
        total: usize,
        outcome: &'a ScrapeOutcome,
    },
}

/// Parses a URL list: one URL per line, blank lines and `#` comments skipped
///
/// # Example
/// ```
/// use reelgood_core::batch::read_url_list;
/// let urls = read_url_list("# watchlist\nhttps://reelgood.com/movie/inception-2010\n\n");
/// assert_eq!(urls, vec!["https://reelgood.com/movie/inception-2010"]);
/// ```
pub fn read_url_list(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

/// Scrapes every URL in order
///
/// # Arguments
/// * `scraper` - Scraper to use for every URL
/// * `urls` - URLs to process
/// * `options` - Delay and scrape mode
/// * `on_progress` - Called before and after each URL
///
/// # Returns
/// One outcome per URL, in input order
pub async fn run_batch<F>(
    scraper: &ReelgoodScraper,
    urls: &[String],
    options: BatchOptions,
    mut on_progress: F,
) -> Vec<ScrapeOutcome>
where
    F: FnMut(BatchProgress<'_>),
{
    let total = urls.len();
    let mut outcomes = Vec::with_capacity(total);

    for (i, url) in urls.iter().enumerate() {
        let index = i + 1;
        info!(index, total, %url, "Processing URL");
        on_progress(BatchProgress::Started {
            index,
            total,
            url: url.as_str(),
        });

        let outcome = scraper.scrape_outcome(url, options.mode).await;
        on_progress(BatchProgress::Finished {
            index,
            total,
            outcome: &outcome,
        });
        outcomes.push(outcome);

        if index < total && !options.delay.is_zero() {
            info!(delay = ?options.delay, "Waiting before next request");
            sleep(options.delay).await;
        }
    }

    let failed = outcomes.iter().filter(|o| o.is_failure()).count();
    info!(total, failed, "Batch complete");
    outcomes
}
