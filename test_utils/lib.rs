pub mod constants;

use std::collections::HashMap;
use stocks_lexicon::{IndustryFeed, Lexicon, LexiconConfig, NameFeed, YearlyMarketcapFeed};

/// Small synthetic feeds shared by the integration tests and benchmarks.
///
/// | Ticker | Legal name               | Industry           | 2007            | 2008            |
/// |--------|--------------------------|--------------------|-----------------|-----------------|
/// | AAA    | Alpha Inc                | Tech               | 100             | 200             |
/// | AAPL   | Apple Inc                | Computer Hardware  | 150_000_000_000 | 210_000_000_000 |
/// | BAC    | Bank of America Corp     | Banking            | 180_000_000_000 | 90_000_000_000  |
/// | AMER   | America Group            | (none)             | 300_000_000     | 0               |
/// | GOOGL  | Alphabet Inc             | Internet           | 160_000_000_000 | 100_000_000_000 |
/// | DUPA   | Duplicate Holdings Inc   | Retail             | 60_000_000      | 60_000_000      |
/// | DUPB   | Duplicate Holdings Corp  | Specialty Retail   | 2_000_000_000   | 2_000_000_000   |
pub fn sample_feeds() -> (NameFeed, IndustryFeed, YearlyMarketcapFeed) {
    let name_feed: NameFeed = to_owned_map(&[
        ("AAA", "Alpha Inc"),
        ("AAPL", "Apple Inc"),
        ("BAC", "Bank of America Corp"),
        ("AMER", "America Group"),
        ("GOOGL", "Alphabet Inc"),
        ("DUPA", "Duplicate Holdings Inc"),
        ("DUPB", "Duplicate Holdings Corp"),
    ]);

    let industry_feed: IndustryFeed = to_owned_map(&[
        ("AAA", "Tech"),
        ("AAPL", "Computer Hardware"),
        ("BAC", "Banking"),
        ("GOOGL", "Internet"),
        ("DUPA", "Retail"),
        ("DUPB", "Specialty Retail"),
    ]);

    let yearly_marketcap_feed = YearlyMarketcapFeed::new(vec![2007, 2008])
        .with_row("AAA", vec![100, 200])
        .and_then(|feed| feed.with_row("AAPL", vec![150_000_000_000, 210_000_000_000]))
        .and_then(|feed| feed.with_row("BAC", vec![180_000_000_000, 90_000_000_000]))
        .and_then(|feed| feed.with_row("AMER", vec![300_000_000, 0]))
        .and_then(|feed| feed.with_row("GOOGL", vec![160_000_000_000, 100_000_000_000]))
        .and_then(|feed| feed.with_row("DUPA", vec![60_000_000, 60_000_000]))
        .and_then(|feed| feed.with_row("DUPB", vec![2_000_000_000, 2_000_000_000]))
        .expect("Sample rows have one value per year");

    (name_feed, industry_feed, yearly_marketcap_feed)
}

/// Builds a lexicon from `sample_feeds` with the default config.
pub fn sample_lexicon() -> Lexicon {
    sample_lexicon_with_config(&LexiconConfig::default())
}

pub fn sample_lexicon_with_config(config: &LexiconConfig) -> Lexicon {
    let (name_feed, industry_feed, yearly_marketcap_feed) = sample_feeds();

    Lexicon::build_with_config(&name_feed, &industry_feed, &yearly_marketcap_feed, config)
        .expect("Failed to build sample lexicon")
}

pub fn to_owned_map(entries: &[(&str, &str)]) -> HashMap<String, String> {
    entries
        .iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect()
}
