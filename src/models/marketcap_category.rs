use std::fmt;
use std::str::FromStr;

use crate::constants::MARKETCAP_CATEGORY_BOUNDARIES;
use crate::types::Marketcap;
use crate::Error;

/// Size bucket of a company by market capitalization.
///
/// | Category | Range (dollars)                    |
/// |----------|------------------------------------|
/// | Nano     | < 50 million                       |
/// | Micro    | 50 million <= cap < 300 million    |
/// | Small    | 300 million <= cap < 2 billion     |
/// | Mid      | 2 billion <= cap < 10 billion      |
/// | Large    | 10 billion <= cap < 200 billion    |
/// | Mega     | 200 billion <= cap                 |
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MarketcapCategory {
    Nano,
    Micro,
    Small,
    Mid,
    Large,
    Mega,
}

impl MarketcapCategory {
    pub const ALL: [MarketcapCategory; 6] = [
        MarketcapCategory::Nano,
        MarketcapCategory::Micro,
        MarketcapCategory::Small,
        MarketcapCategory::Mid,
        MarketcapCategory::Large,
        MarketcapCategory::Mega,
    ];

    /// Buckets are half-open, so a value sitting exactly on a boundary lands in the upper one.
    pub fn categorize(marketcap: Marketcap) -> Self {
        let rank = MARKETCAP_CATEGORY_BOUNDARIES
            .iter()
            .take_while(|&&boundary| marketcap >= boundary)
            .count();

        Self::ALL[rank]
    }

    /// Position of the category from smallest (`0`) to largest (`5`).
    pub fn rank(self) -> usize {
        self as usize
    }

    pub fn as_str(self) -> &'static str {
        match self {
            MarketcapCategory::Nano => "Nano",
            MarketcapCategory::Micro => "Micro",
            MarketcapCategory::Small => "Small",
            MarketcapCategory::Mid => "Mid",
            MarketcapCategory::Large => "Large",
            MarketcapCategory::Mega => "Mega",
        }
    }
}

impl fmt::Display for MarketcapCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MarketcapCategory {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::ParserError(format!("Unknown market cap category: {}", s)))
    }
}

impl From<Marketcap> for MarketcapCategory {
    fn from(marketcap: Marketcap) -> Self {
        Self::categorize(marketcap)
    }
}
