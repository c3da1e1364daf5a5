use std::collections::HashMap;

use crate::models::MarketcapCategory;

// Types listed here are either shared across multiple files and/or exposed via the library.

/// Represents a ticker symbol (e.g., stock ticker) as an owned `String`.
pub type TickerSymbol = String;

/// Represents the name of a company as an owned `String`.
pub type CompanyName = String;

/// Represents an industry category (e.g. "Computer Hardware"). An empty string means the
/// category is not available.
pub type IndustryLabel = String;

/// Calendar year of a market capitalization value.
pub type Year = u16;

/// Market capitalization in whole currency units. Missing values are stored as `0`.
pub type Marketcap = u64;

/// Ticker symbol to legal company name, as reported by the name feed.
pub type NameFeed = HashMap<TickerSymbol, CompanyName>;

/// Ticker symbol to industry category, as reported by the industry feed.
pub type IndustryFeed = HashMap<TickerSymbol, IndustryLabel>;

/// Similarity between two strings, from `0` (nothing in common) to `100` (identical).
pub type SimilarityScore = u8;

/// A company reduced to its size category and its (underscored) industry label.
pub type CompanyGeneralization = (MarketcapCategory, IndustryLabel);
