//! Streaming platform extraction
//!
//! Every platform on a title page is rendered as a logo image served from
//! a `service-logos` path, with the platform name in its `alt` text. The
//! offer type (free, subscription, rent, buy) is not on the image itself;
//! it has to be inferred from the surrounding markup.

use std::collections::BTreeSet;

use scraper::{ElementRef, Html, Selector};

use super::text::element_text;
use crate::types::Platforms;

const SERVICE_LOGO_SELECTOR: &str = r#"img[src*="service-logos"]"#;

/// How far up the tree to look for a section header or category class
const MAX_ANCESTOR_DEPTH: usize = 15;

/// How far up the tree to look for a preceding category label
const MAX_LABEL_DEPTH: usize = 5;

/// Offer type of a platform listing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OfferCategory {
    Free,
    Sub,
    Rent,
    Buy,
    Unknown,
}

impl OfferCategory {
    /// Parses a section header label ("Free", "Sub", "Rent", "Buy")
    fn from_label(text: &str) -> Option<OfferCategory> {
        match text.trim() {
            "Free" => Some(OfferCategory::Free),
            "Sub" => Some(OfferCategory::Sub),
            "Rent" => Some(OfferCategory::Rent),
            "Buy" => Some(OfferCategory::Buy),
            _ => None,
        }
    }

    /// Infers a category from a class attribute
    fn from_class(class: &str) -> Option<OfferCategory> {
        if class.contains("free") {
            Some(OfferCategory::Free)
        } else if class.contains("sub") {
            Some(OfferCategory::Sub)
        } else if class.contains("rent") {
            Some(OfferCategory::Rent)
        } else if class.contains("buy") {
            Some(OfferCategory::Buy)
        } else {
            None
        }
    }
}

/// A single platform logo and the offer type it was filed under
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformOffer {
    pub platform: String,
    pub category: OfferCategory,
}

/// Counts the platform logos on the page
pub fn count_service_logos(document: &Html) -> usize {
    Selector::parse(SERVICE_LOGO_SELECTOR)
        .map(|selector| document.select(&selector).count())
        .unwrap_or(0)
}

/// Lists every platform logo with its inferred offer type, in page order
///
/// Logos without `alt` text are skipped.
pub fn extract_offers(document: &Html) -> Vec<PlatformOffer> {
    let Ok(selector) = Selector::parse(SERVICE_LOGO_SELECTOR) else {
        return Vec::new();
    };

    document
        .select(&selector)
        .filter_map(|img| {
            let platform = img.value().attr("alt")?.trim();
            if platform.is_empty() {
                return None;
            }
            Some(PlatformOffer {
                platform: platform.to_string(),
                category: categorize(&img),
            })
        })
        .collect()
}

/// Extracts free and subscription platforms from a title page
///
/// Rent, buy and uncategorized listings are dropped.
pub fn extract_platforms(document: &Html) -> Platforms {
    let mut subscription = BTreeSet::new();
    let mut free = BTreeSet::new();

    for offer in extract_offers(document) {
        match offer.category {
            OfferCategory::Sub => {
                subscription.insert(offer.platform);
            }
            OfferCategory::Free => {
                free.insert(offer.platform);
            }
            _ => {}
        }
    }

    Platforms {
        subscription: subscription.into_iter().collect(),
        free: free.into_iter().collect(),
    }
}

fn categorize(img: &ElementRef) -> OfferCategory {
    category_from_ancestors(img)
        .or_else(|| category_from_preceding_label(img))
        .unwrap_or(OfferCategory::Unknown)
}

/// Walks up from the logo looking for a section whose first child is a
/// category header, or whose class names a category
fn category_from_ancestors(img: &ElementRef) -> Option<OfferCategory> {
    for ancestor in img
        .ancestors()
        .take(MAX_ANCESTOR_DEPTH)
        .filter_map(ElementRef::wrap)
    {
        if let Some(header) = ancestor.children().find_map(ElementRef::wrap)
            && let Some(category) = OfferCategory::from_label(&element_text(&header))
        {
            return Some(category);
        }

        if let Some(category) = ancestor
            .value()
            .attr("class")
            .and_then(OfferCategory::from_class)
        {
            return Some(category);
        }
    }
    None
}

/// Looks for a category label immediately before the logo's container,
/// or before one of its next few ancestors
fn category_from_preceding_label(img: &ElementRef) -> Option<OfferCategory> {
    let mut current = img.parent().and_then(ElementRef::wrap);

    for _ in 0..MAX_LABEL_DEPTH {
        let element = current?;
        if let Some(previous) = element.prev_siblings().find_map(ElementRef::wrap)
            && let Some(category) = OfferCategory::from_label(&element_text(&previous))
        {
            return Some(category);
        }
        current = element.parent().and_then(ElementRef::wrap);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHERE_TO_WATCH: &str = r#"
    <html><body>
    <section>
        <h2>Where to Watch</h2>
        <div class="css-offers">
            <div>
                <span>Sub</span>
                <ul>
                    <li><a><img src="https://img.reelgood.com/service-logos/netflix.svg" alt="Netflix"></a></li>
                    <li><a><img src="https://img.reelgood.com/service-logos/hulu.svg" alt="Hulu"></a></li>
                    <li><a><img src="https://img.reelgood.com/service-logos/netflix.svg" alt="Netflix"></a></li>
                </ul>
            </div>
            <div>
                <span>Free</span>
                <ul>
                    <li><a><img src="https://img.reelgood.com/service-logos/tubi.svg" alt="Tubi"></a></li>
                </ul>
            </div>
            <div>
                <span>Rent</span>
                <ul>
                    <li><a><img src="https://img.reelgood.com/service-logos/apple.svg" alt="Apple TV"></a></li>
                </ul>
            </div>
            <div>
                <span>Buy</span>
                <ul>
                    <li><a><img src="https://img.reelgood.com/service-logos/vudu.svg" alt="Vudu"></a></li>
                </ul>
            </div>
        </div>
    </section>
    </body></html>
    "#;

    #[test]
    fn test_extract_platforms_by_section_header() {
        let document = Html::parse_document(WHERE_TO_WATCH);
        let platforms = extract_platforms(&document);
        assert_eq!(platforms.subscription, vec!["Hulu", "Netflix"]);
        assert_eq!(platforms.free, vec!["Tubi"]);
    }

    #[test]
    fn test_extract_offers_keeps_rent_and_buy() {
        let document = Html::parse_document(WHERE_TO_WATCH);
        let offers = extract_offers(&document);
        assert_eq!(offers.len(), 6);
        assert_eq!(
            offers.iter().find(|o| o.platform == "Apple TV").map(|o| o.category),
            Some(OfferCategory::Rent)
        );
        assert_eq!(
            offers.iter().find(|o| o.platform == "Vudu").map(|o| o.category),
            Some(OfferCategory::Buy)
        );
        assert_eq!(count_service_logos(&document), 6);
    }

    #[test]
    fn test_category_from_class_name() {
        let html = r#"
        <div class="offers-free">
            <a><img src="/service-logos/pluto.png" alt="Pluto TV"></a>
        </div>
        <div class="offers-subscription">
            <a><img src="/service-logos/max.png" alt="Max"></a>
        </div>
        "#;
        let document = Html::parse_document(html);
        let platforms = extract_platforms(&document);
        assert_eq!(platforms.free, vec!["Pluto TV"]);
        assert_eq!(platforms.subscription, vec!["Max"]);
    }

    #[test]
    fn test_category_from_preceding_label() {
        // The label sits after a non-label first child, so only the sibling
        // scan can find it.
        let html = r#"
        <div>
            <p>Streaming options</p>
            <b>Sub</b>
            <div>
                <img src="/service-logos/peacock.png" alt="Peacock">
            </div>
        </div>
        "#;
        let document = Html::parse_document(html);
        let offers = extract_offers(&document);
        assert_eq!(offers.len(), 1);
        assert_eq!(offers[0].category, OfferCategory::Sub);
    }

    #[test]
    fn test_uncategorized_logos_are_dropped() {
        let html = r#"
        <div><p>Logos</p><img src="/service-logos/starz.png" alt="Starz"></div>
        "#;
        let document = Html::parse_document(html);
        let offers = extract_offers(&document);
        assert_eq!(offers[0].category, OfferCategory::Unknown);
        assert!(extract_platforms(&document).is_empty());
    }

    #[test]
    fn test_logos_without_alt_are_skipped() {
        let html = r#"
        <div><span>Free</span>
            <img src="/service-logos/unknown.png">
            <img src="/service-logos/blank.png" alt="  ">
            <img src="/posters/inception.jpg" alt="Inception poster">
        </div>
        "#;
        let document = Html::parse_document(html);
        assert!(extract_offers(&document).is_empty());
        assert_eq!(count_service_logos(&document), 2);
    }

    #[test]
    fn test_no_logos() {
        let document = Html::parse_document("<html><body><h1>Inception</h1></body></html>");
        assert!(extract_platforms(&document).is_empty());
        assert_eq!(count_service_logos(&document), 0);
    }
}
