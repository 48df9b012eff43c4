//! Text helpers shared by the extractors

use scraper::{ElementRef, Html, Selector};

/// Collapses runs of whitespace into single spaces and trims the ends
pub(crate) fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Full text content of an element, whitespace-collapsed
pub(crate) fn element_text(element: &ElementRef) -> String {
    collapse_whitespace(&element.text().collect::<String>())
}

/// First non-empty text node below an element
///
/// Approximates the first rendered line of a dropdown-style widget.
pub(crate) fn first_line(element: &ElementRef) -> Option<String> {
    element
        .text()
        .map(collapse_whitespace)
        .find(|line| !line.is_empty())
}

/// Text of the first element matching `css`, if non-empty
pub(crate) fn first_text(document: &Html, css: &str) -> Option<String> {
    let selector = Selector::parse(css).ok()?;
    document
        .select(&selector)
        .map(|el| element_text(&el))
        .find(|text| !text.is_empty())
}

/// Attribute value of the first element matching `css`, if non-empty
pub(crate) fn first_attr(document: &Html, css: &str, attr: &str) -> Option<String> {
    let selector = Selector::parse(css).ok()?;
    document
        .select(&selector)
        .filter_map(|el| el.value().attr(attr))
        .map(collapse_whitespace)
        .find(|text| !text.is_empty())
}

/// Text of the document `<title>` element, possibly empty
pub(crate) fn document_title(document: &Html) -> Option<String> {
    let selector = Selector::parse("title").ok()?;
    document.select(&selector).next().map(|el| element_text(&el))
}
