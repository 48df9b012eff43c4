//! Title extraction
//!
//! Tries the page heading first, then OpenGraph metadata, then the
//! document title with the site suffix removed.

use regex::Regex;
use scraper::Html;

use super::text::{document_title, first_attr, first_text};

/// Extracts the title name from a title page
///
/// # Returns
/// `None` when no fallback produced any text
pub fn extract_title(document: &Html) -> Option<String> {
    first_text(document, "h1")
        .or_else(|| {
            first_attr(document, r#"meta[property="og:title"]"#, "content")
                .map(|t| strip_site_suffix(&t))
                .filter(|t| !t.is_empty())
        })
        .or_else(|| {
            document_title(document)
                .map(|t| strip_site_suffix(&t))
                .filter(|t| !t.is_empty())
        })
}

/// Removes a trailing "| Reelgood" or "- Reelgood" from a page title
fn strip_site_suffix(title: &str) -> String {
    if let Ok(re) = Regex::new(r"(?i)\s*[|\-–—]\s*reelgood\s*$") {
        return re.replace(title, "").trim().to_string();
    }
    title.trim().to_string()
}
