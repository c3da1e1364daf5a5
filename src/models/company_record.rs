use std::collections::BTreeMap;

use crate::types::{CompanyName, IndustryLabel, Marketcap, TickerSymbol, Year};

/// Everything the lexicon knows about a single ticker symbol.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompanyRecord {
    pub ticker_symbol: TickerSymbol,
    /// Name as reported by the name feed. May be empty.
    pub legal_name: CompanyName,
    /// `legal_name` with corporate suffixes removed. Not guaranteed to be unique.
    pub display_name: CompanyName,
    /// Empty when no category is available (ETFs for example).
    pub industry: IndustryLabel,
    /// Every record tracks the same set of years.
    pub marketcap_by_year: BTreeMap<Year, Marketcap>,
}

impl CompanyRecord {
    /// Market cap for the given year, or `0` when the year isn't tracked.
    pub fn marketcap(&self, year: Year) -> Marketcap {
        self.marketcap_by_year.get(&year).copied().unwrap_or(0)
    }

    pub fn has_industry(&self) -> bool {
        !self.industry.is_empty()
    }
}
