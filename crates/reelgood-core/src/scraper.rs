//! Main scraper API for Reelgood
//!
//! Provides the high-level API combining HTTP client and extractors.

use tracing::{debug, info, warn};

use crate::client::{ClientConfig, ReelgoodClient};
use crate::error::Result;
use crate::parser::{PageExtract, parse_title_page};
use crate::region::Region;
use crate::types::{
    AllRegionsAvailability, RegionAvailability, ScrapeFailure, ScrapeOutcome, TitleAvailability,
    UNKNOWN_REGION, UNKNOWN_TITLE,
};
use crate::url::{build_title_url, parse_title_url};

/// What to scrape for a URL
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrapeMode {
    /// The page as served, or the regional page when a region is given
    Single(Option<Region>),
    /// One page per individual region
    AllRegions,
}

/// Main scraper API for Reelgood
///
/// Combines the rate-limited HTTP client with the page extractors.
pub struct ReelgoodScraper {
    client: ReelgoodClient,
}

impl ReelgoodScraper {
    /// Create a new scraper with default configuration
    ///
    /// # Errors
    /// Returns error if HTTP client initialization fails
    pub fn new() -> Result<Self> {
        let client = ReelgoodClient::new()?;
        Ok(Self { client })
    }

    /// Create a new scraper with custom client configuration
    ///
    /// # Errors
    /// Returns error if HTTP client initialization fails
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let client = ReelgoodClient::with_config(config)?;
        Ok(Self { client })
    }

    /// Scrape streaming availability for one title
    ///
    /// # Arguments
    /// * `url` - Reelgood URL of a movie or show
    /// * `region` - Region page to fetch; `None` keeps the region named in
    ///   the URL, or the site default when it names none
    ///
    /// # Errors
    /// - `InvalidUrl` if the URL is not a Reelgood title page
    /// - `HttpError`, `NotFound`, `RateLimited` if the fetch fails
    ///
    /// # Example
    /// ```no_run
    /// # async fn example() -> reelgood_core::Result<()> {
    /// use reelgood_core::{ReelgoodScraper, Region};
    /// let scraper = ReelgoodScraper::new()?;
    /// let result = scraper
    ///     .scrape("https://reelgood.com/movie/inception-2010", Some(Region::Us))
    ///     .await?;
    /// println!("{} is on {} platforms", result.title, result.platform_count);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn scrape(&self, url: &str, region: Option<Region>) -> Result<TitleAvailability> {
        let path = parse_title_url(url)?;
        let region = region.or(path.region);
        let page_url = build_title_url(self.client.base_url(), region, &path);
        info!(%url, %page_url, region = region.map(Region::code), "Scraping title page");

        let html = self.client.fetch(&page_url).await?;
        Ok(Self::scrape_html(&html, url, region))
    }

    /// Scrape streaming availability for one title in every individual region
    ///
    /// The title is taken from the first regional page that has one.
    ///
    /// # Errors
    /// Same as [`ReelgoodScraper::scrape`]; the first failing region aborts
    /// the whole scrape.
    pub async fn scrape_all_regions(&self, url: &str) -> Result<AllRegionsAvailability> {
        let path = parse_title_url(url)?;
        info!(%url, "Scraping all regions");

        let mut title: Option<String> = None;
        let mut regions = Vec::with_capacity(Region::INDIVIDUAL.len());

        for region in Region::INDIVIDUAL {
            let page_url = build_title_url(self.client.base_url(), Some(region), &path);
            info!(region = region.code(), %page_url, "Scraping region");

            let html = self.client.fetch(&page_url).await?;
            let page = inspect_page(&html, &page_url);

            if title.is_none() {
                title = page.title;
            }

            regions.push(RegionAvailability {
                code: region.code().to_string(),
                region: region.name().to_string(),
                platform_count: page.platforms.count(),
                platforms: page.platforms,
            });
        }

        Ok(AllRegionsAvailability {
            title: title.unwrap_or_else(|| UNKNOWN_TITLE.to_string()),
            url: url.to_string(),
            regions,
        })
    }

    /// Build a result from already-fetched HTML
    ///
    /// # Arguments
    /// * `html` - Raw HTML of a title page
    /// * `url` - URL to report as the source
    /// * `region` - Region the page was requested for, used when the page
    ///   shows none
    pub fn scrape_html(html: &str, url: &str, region: Option<Region>) -> TitleAvailability {
        let page = inspect_page(html, url);

        let region = page
            .region
            .or_else(|| region.map(|r| r.name().to_string()))
            .unwrap_or_else(|| UNKNOWN_REGION.to_string());

        TitleAvailability {
            title: page.title.unwrap_or_else(|| UNKNOWN_TITLE.to_string()),
            platform_count: page.platforms.count(),
            platforms: page.platforms,
            region,
            url: url.to_string(),
        }
    }

    /// Scrape a URL without failing
    ///
    /// Errors are folded into [`ScrapeOutcome::Failed`] so callers looping
    /// over many URLs can keep going.
    pub async fn scrape_outcome(&self, url: &str, mode: ScrapeMode) -> ScrapeOutcome {
        let result = match mode {
            ScrapeMode::Single(region) => self.scrape(url, region).await.map(ScrapeOutcome::Single),
            ScrapeMode::AllRegions => self
                .scrape_all_regions(url)
                .await
                .map(ScrapeOutcome::AllRegions),
        };

        result.unwrap_or_else(|e| {
            warn!(%url, error = %e, "Scrape failed");
            ScrapeOutcome::Failed(ScrapeFailure {
                url: url.to_string(),
                error: format!("Failed to scrape URL: {}", e),
            })
        })
    }
}

/// Runs the extractors and logs what they saw
fn inspect_page(html: &str, url: &str) -> PageExtract {
    let page = parse_title_page(html);

    if page.challenge {
        warn!(%url, "Bot challenge detected - page not loaded properly");
    }
    debug!(
        %url,
        service_logos = page.service_logos,
        title = page.title.as_deref(),
        region = page.region.as_deref(),
        "Extracted page fields"
    );

    page
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ReelgoodError;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn title_page(title: &str, region: &str, sub: &[&str]) -> String {
        let logos: String = sub
            .iter()
            .map(|p| format!(r#"<img src="https://img.reelgood.com/service-logos/x.svg" alt="{}">"#, p))
            .collect();
        format!(
            r#"<html><head><title>{title} | Reelgood</title></head><body>
            <h1>{title}</h1>
            <div class="e3nus5z7"><span class="e3nus5z6">{region}</span></div>
            <div><span>Sub</span>{logos}</div>
            </body></html>"#
        )
    }

    fn config(server: &MockServer) -> ClientConfig {
        ClientConfig {
            base_url: server.uri(),
            requests_per_second: 0.0,
            timeout_secs: 5,
            max_retries: 0,
            ..ClientConfig::default()
        }
    }

    #[test]
    fn test_scraper_creation() {
        let scraper = ReelgoodScraper::new();
        assert!(scraper.is_ok());
    }

    #[test]
    fn test_scrape_html_fills_placeholders() {
        let result = ReelgoodScraper::scrape_html(
            "<html><body></body></html>",
            "https://reelgood.com/movie/x",
            None,
        );
        assert_eq!(result.title, UNKNOWN_TITLE);
        assert_eq!(result.region, UNKNOWN_REGION);
        assert_eq!(result.platform_count, 0);
    }

    #[test]
    fn test_scrape_html_uses_requested_region_when_undetected() {
        let result = ReelgoodScraper::scrape_html(
            "<html><body><h1>Dune</h1></body></html>",
            "https://reelgood.com/movie/dune-2021",
            Some(Region::Au),
        );
        assert_eq!(result.title, "Dune");
        assert_eq!(result.region, "Australia");
    }

    #[tokio::test]
    async fn test_scrape_invalid_url() {
        let scraper = ReelgoodScraper::new().unwrap();
        let result = scraper.scrape("https://example.com/movie/x", None).await;
        assert!(matches!(result, Err(ReelgoodError::InvalidUrl(_))));
    }

    #[tokio::test]
    async fn test_scrape_fetches_regional_page() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/uk/movie/inception-2010"))
            .respond_with(ResponseTemplate::new(200).set_body_string(title_page(
                "Inception",
                "United Kingdom",
                &["Netflix", "Amazon Prime Video"],
            )))
            .expect(1)
            .mount(&server)
            .await;

        let scraper = ReelgoodScraper::with_config(config(&server)).unwrap();
        let result = scraper
            .scrape("https://reelgood.com/movie/inception-2010", Some(Region::Uk))
            .await
            .unwrap();

        assert_eq!(result.title, "Inception");
        assert_eq!(result.region, "United Kingdom");
        assert_eq!(result.platforms.subscription, vec!["Amazon Prime Video", "Netflix"]);
        assert_eq!(result.platform_count, 2);
        assert_eq!(result.url, "https://reelgood.com/movie/inception-2010");
    }

    #[tokio::test]
    async fn test_scrape_keeps_region_from_url() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/uk/movie/inception-2010"))
            .respond_with(ResponseTemplate::new(200).set_body_string(title_page(
                "UK page",
                "United Kingdom",
                &[],
            )))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/movie/inception-2010"))
            .respond_with(ResponseTemplate::new(200).set_body_string(title_page(
                "US page",
                "United States",
                &[],
            )))
            .expect(0)
            .mount(&server)
            .await;

        let scraper = ReelgoodScraper::with_config(config(&server)).unwrap();
        let result = scraper
            .scrape("https://reelgood.com/uk/movie/inception-2010", None)
            .await
            .unwrap();

        assert_eq!(result.title, "UK page");
        assert_eq!(result.region, "United Kingdom");
        assert_eq!(result.url, "https://reelgood.com/uk/movie/inception-2010");
    }

    #[tokio::test]
    async fn test_scrape_explicit_region_overrides_url() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/ca/movie/inception-2010"))
            .respond_with(ResponseTemplate::new(200).set_body_string(title_page(
                "Inception",
                "Canada",
                &["Crave"],
            )))
            .expect(1)
            .mount(&server)
            .await;

        let scraper = ReelgoodScraper::with_config(config(&server)).unwrap();
        let result = scraper
            .scrape("https://reelgood.com/uk/movie/inception-2010", Some(Region::Ca))
            .await
            .unwrap();

        assert_eq!(result.region, "Canada");
        assert_eq!(result.platforms.subscription, vec!["Crave"]);
    }

    #[tokio::test]
    async fn test_scrape_all_regions() {
        let server = MockServer::start().await;
        for region in Region::INDIVIDUAL {
            let platforms: &[&str] = if region == Region::Nz { &[] } else { &["Netflix"] };
            Mock::given(method("GET"))
                .and(path(format!("{}/show/dark-2017", build_prefix(region))))
                .respond_with(ResponseTemplate::new(200).set_body_string(title_page(
                    "Dark",
                    region.name(),
                    platforms,
                )))
                .expect(1)
                .mount(&server)
                .await;
        }

        let scraper = ReelgoodScraper::with_config(config(&server)).unwrap();
        let result = scraper
            .scrape_all_regions("https://reelgood.com/show/dark-2017")
            .await
            .unwrap();

        assert_eq!(result.title, "Dark");
        let codes: Vec<&str> = result.regions.iter().map(|r| r.code.as_str()).collect();
        assert_eq!(codes, vec!["us", "uk", "ca", "au", "nz"]);
        assert_eq!(result.regions[0].platform_count, 1);
        assert_eq!(result.regions[4].platform_count, 0);
        assert_eq!(result.regions[4].region, "New Zealand");
    }

    #[tokio::test]
    async fn test_scrape_outcome_folds_errors() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let scraper = ReelgoodScraper::with_config(config(&server)).unwrap();
        let outcome = scraper
            .scrape_outcome(
                "https://reelgood.com/movie/missing-1999",
                ScrapeMode::Single(None),
            )
            .await;

        match outcome {
            ScrapeOutcome::Failed(failure) => {
                assert_eq!(failure.url, "https://reelgood.com/movie/missing-1999");
                assert!(failure.error.starts_with("Failed to scrape URL: Page not found"));
            }
            other => panic!("Expected failure, got {:?}", other),
        }
    }

    fn build_prefix(region: Region) -> String {
        region
            .path_prefix()
            .map(|p| format!("/{}", p))
            .unwrap_or_default()
    }
}
