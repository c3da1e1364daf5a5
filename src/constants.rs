use crate::types::{Marketcap, SimilarityScore, Year};

/// Substrings always removed from legal names, in this order, before any caller-supplied extras.
pub const BASE_NAME_REMOVALS: &[&str] = &[" Inc", " Corp", " Group"];

/// Lower bounds (inclusive) of the Micro, Small, Mid, Large and Mega categories, in dollars.
pub const MARKETCAP_CATEGORY_BOUNDARIES: [Marketcap; 5] = [
    50_000_000,
    300_000_000,
    2_000_000_000,
    10_000_000_000,
    200_000_000_000,
];

pub const DEFAULT_FUZZY_THRESHOLD: SimilarityScore = 95;

// Last year covered by the reference data set
pub const DEFAULT_YEAR: Year = 2018;

/// Colloquial names which don't survive name cleaning, mapped explicitly to their tickers.
///
/// Entries whose ticker is absent from the loaded data are dropped when the lexicon is built.
pub const DEFAULT_NAME_OVERRIDES: &[(&str, &str)] = &[
    ("Google", "GOOGL"),
    ("Facebook", "FB"),
    ("Berkshire", "BRK.B"),
    ("Coca-Cola", "KO"),
];

pub const NAME_FEED_FILE_NAME: &str = "marketcap.csv";
pub const INDUSTRY_FEED_FILE_NAME: &str = "industry.csv";
pub const YEARLY_MARKETCAP_FEED_FILE_NAME: &str = "marketcap-years.csv";

pub const GZIP_FILE_EXTENSION: &str = "gz";
