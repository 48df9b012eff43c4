//! URL helper functions for Reelgood
//!
//! Validates title page URLs and builds regional page URLs.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ReelgoodError, Result};
use crate::region::Region;

/// Base URL of the live site
pub const BASE_URL: &str = "https://reelgood.com";

const HOST: &str = "reelgood.com";

/// Kind of title page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TitleKind {
    Movie,
    Show,
}

impl TitleKind {
    /// Path segment used by Reelgood for this kind
    pub fn segment(self) -> &'static str {
        match self {
            TitleKind::Movie => "movie",
            TitleKind::Show => "show",
        }
    }

    fn from_segment(segment: &str) -> Option<TitleKind> {
        match segment {
            "movie" => Some(TitleKind::Movie),
            "show" => Some(TitleKind::Show),
            _ => None,
        }
    }
}

/// The site-relative identity of a title page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitlePath {
    pub kind: TitleKind,
    /// Decoded slug (e.g. "inception-2010")
    pub slug: String,
    /// Region named by the URL's leading path segment, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<Region>,
}

impl TitlePath {
    /// Site-relative path with the slug percent-encoded
    ///
    /// # Example
    /// ```
    /// use reelgood_core::url::{TitleKind, TitlePath};
    /// let path = TitlePath {
    ///     kind: TitleKind::Show,
    ///     slug: "breaking-bad-2008".to_string(),
    ///     region: None,
    /// };
    /// assert_eq!(path.path(), "/show/breaking-bad-2008");
    /// ```
    pub fn path(&self) -> String {
        format!("/{}/{}", self.kind.segment(), urlencoding::encode(&self.slug))
    }
}

impl fmt::Display for TitlePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Returns true when the URL points at reelgood.com or one of its subdomains
///
/// # Example
/// ```
/// use reelgood_core::url::is_reelgood_url;
/// assert!(is_reelgood_url("https://reelgood.com/movie/inception-2010"));
/// assert!(!is_reelgood_url("https://example.com/reelgood.com"));
/// ```
pub fn is_reelgood_url(url: &str) -> bool {
    let (host, _) = split_host(url.trim());
    is_reelgood_host(host)
}

/// Parses a Reelgood title page URL
///
/// Accepts `https://reelgood.com[/<region>]/<movie|show>/<slug>`, with or
/// without scheme, query string or fragment. A leading region segment is
/// kept in [`TitlePath::region`].
///
/// # Errors
/// Returns `InvalidUrl` if the URL is empty, not on reelgood.com, or not a
/// movie/show page.
///
/// # Example
/// ```
/// use reelgood_core::Region;
/// use reelgood_core::url::{parse_title_url, TitleKind};
/// let path = parse_title_url("https://reelgood.com/uk/movie/inception-2010?ref=x").unwrap();
/// assert_eq!(path.kind, TitleKind::Movie);
/// assert_eq!(path.slug, "inception-2010");
/// assert_eq!(path.region, Some(Region::Uk));
/// ```
pub fn parse_title_url(url: &str) -> Result<TitlePath> {
    let trimmed = url.trim();
    if trimmed.is_empty() {
        return Err(ReelgoodError::InvalidUrl("URL cannot be empty".to_string()));
    }

    let (host, path) = split_host(trimmed);
    if !is_reelgood_host(host) {
        return Err(ReelgoodError::InvalidUrl(format!(
            "{} is not a Reelgood URL",
            trimmed
        )));
    }

    let path = path.split(['?', '#']).next().unwrap_or_default();
    let mut segments = path.split('/').filter(|s| !s.is_empty()).peekable();

    let region = segments.peek().and_then(|first| first.parse::<Region>().ok());
    if region.is_some() {
        segments.next();
    }

    let kind = segments
        .next()
        .and_then(TitleKind::from_segment)
        .ok_or_else(|| {
            ReelgoodError::InvalidUrl(format!("{} is not a movie or show page", trimmed))
        })?;

    let raw_slug = segments
        .next()
        .ok_or_else(|| ReelgoodError::InvalidUrl(format!("{} has no title slug", trimmed)))?;

    let slug = urlencoding::decode(raw_slug)
        .map_err(|e| ReelgoodError::InvalidUrl(format!("{}: {}", trimmed, e)))?
        .into_owned();

    Ok(TitlePath { kind, slug, region })
}

/// Builds the page URL for a title, optionally for a specific region
///
/// Only `region` picks the prefix; the caller decides whether
/// [`TitlePath::region`] should apply.
///
/// # Example
/// ```
/// use reelgood_core::Region;
/// use reelgood_core::url::{build_title_url, TitleKind, TitlePath};
/// let path = TitlePath {
///     kind: TitleKind::Movie,
///     slug: "inception-2010".to_string(),
///     region: None,
/// };
/// assert_eq!(
///     build_title_url("https://reelgood.com", Some(Region::Uk), &path),
///     "https://reelgood.com/uk/movie/inception-2010"
/// );
/// assert_eq!(
///     build_title_url("https://reelgood.com/", Some(Region::Us), &path),
///     "https://reelgood.com/movie/inception-2010"
/// );
/// ```
pub fn build_title_url(base: &str, region: Option<Region>, path: &TitlePath) -> String {
    let base = base.trim_end_matches('/');
    match region.and_then(Region::path_prefix) {
        Some(prefix) => format!("{}/{}{}", base, prefix, path.path()),
        None => format!("{}{}", base, path.path()),
    }
}

/// Splits a URL into (host, rest-of-path), tolerating a missing scheme
fn split_host(url: &str) -> (&str, &str) {
    let without_scheme = url
        .split_once("://")
        .map(|(_, rest)| rest)
        .unwrap_or(url);
    match without_scheme.find(['/', '?', '#']) {
        Some(idx) => without_scheme.split_at(idx),
        None => (without_scheme, ""),
    }
}

fn is_reelgood_host(host: &str) -> bool {
    let host = host.split(':').next().unwrap_or_default().to_lowercase();
    host == HOST || host.ends_with(".reelgood.com")
}
