//! HTML extractors for Reelgood title pages
//!
//! Each extractor is a list of fallbacks tried in order. None of them fail:
//! a field that matched nothing is simply absent.

pub mod page;
pub mod platforms;
pub mod region;
mod text;
pub mod title;

pub use page::{PageExtract, is_challenge_page, parse_title_page};
pub use platforms::{OfferCategory, PlatformOffer, count_service_logos, extract_offers, extract_platforms};
pub use region::extract_region;
pub use title::extract_title;
