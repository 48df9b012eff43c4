//! Region detection
//!
//! The title page carries a region dropdown whose button shows the
//! currently selected country. Its generated class names start with
//! `e3nus5z`.

use scraper::{Html, Selector};

use super::text::{element_text, first_line};
use crate::region::Region;

const REGION_LABEL_SELECTOR: &str = r#"div.e3nus5z7 span.e3nus5z6, div[class*="e3nus5z"] > span"#;
const REGION_DROPDOWN_SELECTOR: &str = r#"div.e3nus5z7, div[class*="e3nus5z"]"#;

/// Extracts the region currently shown by the region dropdown
///
/// The dropdown label is accepted only when it is a known region name.
/// Otherwise the first line of the dropdown text is returned as-is.
pub fn extract_region(document: &Html) -> Option<String> {
    if let Ok(selector) = Selector::parse(REGION_LABEL_SELECTOR)
        && let Some(label) = document.select(&selector).next()
    {
        let text = element_text(&label);
        if Region::from_name(&text).is_some() {
            return Some(text);
        }
    }

    let selector = Selector::parse(REGION_DROPDOWN_SELECTOR).ok()?;
    let dropdown = document.select(&selector).next()?;
    first_line(&dropdown)
}
