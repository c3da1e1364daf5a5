use crate::types::{CompanyName, SimilarityScore, TickerSymbol, Year};

/// What to do with a ticker that has market cap history but no entry in the name feed.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MissingNamePolicy {
    /// Fail construction with `Error::MissingCompanyName`.
    Error,
    /// Keep the record with an empty legal and display name.
    EmptyName,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LexiconConfig {
    /// Removed from legal names after `" Inc"`, `" Corp"` and `" Group"`.
    pub extra_name_removals: Vec<String>,
    /// Minimum score (0..=100) a fuzzy candidate needs to be accepted.
    pub fuzzy_threshold: SimilarityScore,
    /// Year used by queries when the caller doesn't pick one.
    pub default_year: Year,
    pub missing_name_policy: MissingNamePolicy,
    /// Colloquial names mapped explicitly to tickers. These win over derived display names.
    pub name_overrides: Vec<(CompanyName, TickerSymbol)>,
}

impl LexiconConfig {
    pub fn with_extra_name_removals<S: Into<String>>(
        mut self,
        removals: impl IntoIterator<Item = S>,
    ) -> Self {
        self.extra_name_removals = removals.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_missing_name_policy(mut self, missing_name_policy: MissingNamePolicy) -> Self {
        self.missing_name_policy = missing_name_policy;
        self
    }

    pub fn with_fuzzy_threshold(mut self, fuzzy_threshold: SimilarityScore) -> Self {
        self.fuzzy_threshold = fuzzy_threshold;
        self
    }

    pub fn with_default_year(mut self, default_year: Year) -> Self {
        self.default_year = default_year;
        self
    }

    pub fn with_name_overrides<N: Into<CompanyName>, T: Into<TickerSymbol>>(
        mut self,
        name_overrides: impl IntoIterator<Item = (N, T)>,
    ) -> Self {
        self.name_overrides = name_overrides
            .into_iter()
            .map(|(name, ticker_symbol)| (name.into(), ticker_symbol.into()))
            .collect();
        self
    }
}
