#[cfg(doctest)]
doc_comment::doctest!("../README.md");

mod config;
pub use config::DEFAULT_MISSING_NAME_POLICY;
pub mod constants;
pub mod models;
pub use models::{
    CompanyRecord, Error, FeedLoader, Feeds, FieldValue, LevenshteinScorer, Lexicon,
    LexiconConfig, MarketcapCategory, MissingNamePolicy, NameCleaner, NameMatch, RecordField,
    SimilarityScorer, YearlyMarketcapFeed,
};
pub mod types;
mod utils;
pub use types::{
    CompanyGeneralization, CompanyName, IndustryFeed, IndustryLabel, Marketcap, NameFeed,
    SimilarityScore, TickerSymbol, Year,
};
pub use utils::{
    categorize_marketcaps, clean_company_names, normalize_industry_label,
    sort_names_for_text_search,
};

use std::path::Path;

/// Loads the three feeds from `data_directory` and builds a lexicon with the default config.
pub fn load_lexicon<P: AsRef<Path>>(data_directory: P) -> Result<Lexicon, Error> {
    load_lexicon_with_custom_config(data_directory, &LexiconConfig::default())
}

/// Loads the three feeds from `data_directory` and builds a lexicon with `config`.
pub fn load_lexicon_with_custom_config<P: AsRef<Path>>(
    data_directory: P,
    config: &LexiconConfig,
) -> Result<Lexicon, Error> {
    FeedLoader::load_lexicon(data_directory, config)
}
