//! Reelgood region table
//!
//! Reelgood shows availability per country. The order of [`Region::ALL`]
//! matches the region dropdown on a title page.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ReelgoodError;

/// A region selectable on Reelgood
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    /// Combined view across every country
    All,
    Us,
    Uk,
    Ca,
    Au,
    Nz,
}

impl Region {
    /// Every region, in dropdown order
    pub const ALL: [Region; 6] = [
        Region::All,
        Region::Us,
        Region::Uk,
        Region::Ca,
        Region::Au,
        Region::Nz,
    ];

    /// The individual countries scraped by all-regions mode
    pub const INDIVIDUAL: [Region; 5] = [
        Region::Us,
        Region::Uk,
        Region::Ca,
        Region::Au,
        Region::Nz,
    ];

    /// Short code used on the command line and in URLs (e.g. "uk")
    pub fn code(self) -> &'static str {
        match self {
            Region::All => "all",
            Region::Us => "us",
            Region::Uk => "uk",
            Region::Ca => "ca",
            Region::Au => "au",
            Region::Nz => "nz",
        }
    }

    /// Display name as it appears in the region dropdown
    pub fn name(self) -> &'static str {
        match self {
            Region::All => "All Regions",
            Region::Us => "United States",
            Region::Uk => "United Kingdom",
            Region::Ca => "Canada",
            Region::Au => "Australia",
            Region::Nz => "New Zealand",
        }
    }

    /// Looks up a region by its dropdown display name
    ///
    /// # Example
    /// ```
    /// use reelgood_core::Region;
    /// assert_eq!(Region::from_name("Canada"), Some(Region::Ca));
    /// assert_eq!(Region::from_name("Germany"), None);
    /// ```
    pub fn from_name(name: &str) -> Option<Region> {
        let name = name.trim();
        Region::ALL.into_iter().find(|r| r.name() == name)
    }

    /// Path prefix for the regional version of a title page
    ///
    /// The US page is the site default and has no prefix.
    pub fn path_prefix(self) -> Option<&'static str> {
        match self {
            Region::Us => None,
            other => Some(other.code()),
        }
    }

    /// Comma-separated list of valid codes, for help and error output
    pub fn valid_codes() -> String {
        Region::ALL
            .iter()
            .map(|r| r.code())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Region {
    type Err = ReelgoodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_lowercase();
        Region::ALL
            .into_iter()
            .find(|r| r.code() == code)
            .ok_or_else(|| ReelgoodError::InvalidRegion(s.to_string()))
    }
}
