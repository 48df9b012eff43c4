//! HTTP client with rate limiting and retry logic for Reelgood
//!
//! Provides a rate-limited HTTP client that spaces out requests
//! and implements exponential backoff for transient errors.

use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tokio::time::sleep;
use tracing::{debug, warn};

use crate::error::{ReelgoodError, Result};
use crate::url::BASE_URL;

const MAX_BACKOFF_EXPONENT: u32 = 10;

const USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Configuration for the HTTP client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Site root that title pages are fetched from (default: https://reelgood.com)
    pub base_url: String,
    /// Maximum requests per second (default: 2.0)
    pub requests_per_second: f64,
    /// Request timeout in seconds (default: 30)
    pub timeout_secs: u64,
    /// Maximum retry attempts for transient errors (default: 3)
    pub max_retries: u32,
    /// User-Agent header sent with every request
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            requests_per_second: 2.0,
            timeout_secs: 30,
            max_retries: 3,
            user_agent: USER_AGENT.to_string(),
        }
    }
}

/// Rate limiter to control request frequency
///
/// Ensures requests are spaced at least `min_interval` apart.
pub struct RateLimiter {
    min_interval: Duration,
    last_request: Arc<Mutex<Option<Instant>>>,
}

impl RateLimiter {
    /// Create a new rate limiter with the specified requests per second
    ///
    /// Non-positive rates disable limiting.
    pub fn new(requests_per_second: f64) -> Self {
        let min_interval = if requests_per_second > 0.0 {
            Duration::from_secs_f64(1.0 / requests_per_second)
        } else {
            Duration::ZERO
        };
        Self {
            min_interval,
            last_request: Arc::new(Mutex::new(None)),
        }
    }

    /// Acquire permission to make a request
    ///
    /// If called before the minimum interval has passed since the last request,
    /// this method will sleep until the interval has elapsed.
    pub async fn acquire(&self) {
        let mut last = self.last_request.lock().await;

        if let Some(previous) = *last {
            let elapsed = previous.elapsed();
            if elapsed < self.min_interval {
                sleep(self.min_interval - elapsed).await;
            }
        }

        *last = Some(Instant::now());
    }

    /// Get the minimum interval between requests
    pub fn min_interval(&self) -> Duration {
        self.min_interval
    }
}

/// HTTP client wrapper with rate limiting and retry logic
///
/// Handles all HTTP communication with Reelgood, including:
/// - Rate limiting between page fetches
/// - Automatic retries with exponential backoff for transient errors
/// - Browser-like headers (User-Agent, Accept-Language)
pub struct ReelgoodClient {
    client: reqwest::Client,
    rate_limiter: RateLimiter,
    max_retries: u32,
    base_url: String,
}

impl ReelgoodClient {
    /// Create a new client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            reqwest::header::ACCEPT_LANGUAGE,
            reqwest::header::HeaderValue::from_static("en-US,en;q=0.9"),
        );
        headers.insert(
            reqwest::header::ACCEPT,
            reqwest::header::HeaderValue::from_static(
                "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
            ),
        );

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent)
            .cookie_store(true)
            .default_headers(headers)
            .build()
            .map_err(ReelgoodError::HttpError)?;

        Ok(Self {
            client,
            rate_limiter: RateLimiter::new(config.requests_per_second),
            max_retries: config.max_retries,
            base_url: config.base_url,
        })
    }

    /// Site root this client fetches title pages from
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the HTML of a page
    ///
    /// # Arguments
    /// * `url` - Absolute URL of the page
    ///
    /// # Returns
    /// The HTML content as a string, or an error if the request fails
    ///
    /// # Errors
    /// - `HttpError` - Network errors or unexpected HTTP status
    /// - `NotFound` - Server returned 404
    /// - `RateLimited` - Server returned 429 after all retries exhausted
    pub async fn fetch(&self, url: &str) -> Result<String> {
        let mut attempt = 0;

        loop {
            self.rate_limiter.acquire().await;

            match self.do_fetch(url, attempt).await {
                Ok(body) => return Ok(body),
                Err(e) if Self::is_retryable(&e) && attempt < self.max_retries => {
                    let backoff = backoff_delay(attempt);
                    warn!(%url, attempt, error = %e, ?backoff, "Transient fetch error, retrying");
                    sleep(backoff).await;
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Perform a single fetch attempt
    async fn do_fetch(&self, url: &str, attempt: u32) -> Result<String> {
        debug!(%url, attempt, "GET");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(ReelgoodError::HttpError)?;

        let status = response.status();
        debug!(%url, status = status.as_u16(), "Response received");

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(ReelgoodError::RateLimited);
        }

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(ReelgoodError::NotFound(url.to_string()));
        }

        let response = response
            .error_for_status()
            .map_err(ReelgoodError::HttpError)?;

        let body = response.text().await.map_err(ReelgoodError::HttpError)?;
        debug!(%url, bytes = body.len(), "Fetched page");
        Ok(body)
    }

    /// Check if an error is retryable
    fn is_retryable(error: &ReelgoodError) -> bool {
        match error {
            ReelgoodError::RateLimited => true,
            ReelgoodError::HttpError(e) => {
                // Retry on timeout, connection errors, or 5xx status codes
                e.is_timeout()
                    || e.is_connect()
                    || e.status().is_some_and(|s| s.is_server_error())
            }
            _ => false,
        }
    }
}

/// Exponential backoff before retry `attempt` (0-based): 1s, 2s, 4s, ...
///
/// The exponent is capped so large retry counts wait at most ~17 minutes.
fn backoff_delay(attempt: u32) -> Duration {
    Duration::from_secs(1 << attempt.min(MAX_BACKOFF_EXPONENT))
}
