use crate::constants::{DEFAULT_FUZZY_THRESHOLD, DEFAULT_NAME_OVERRIDES, DEFAULT_YEAR};
use crate::models::{LexiconConfig, MissingNamePolicy};

pub const DEFAULT_MISSING_NAME_POLICY: MissingNamePolicy = MissingNamePolicy::Error;

impl Default for LexiconConfig {
    fn default() -> Self {
        Self {
            extra_name_removals: Vec::new(),
            fuzzy_threshold: DEFAULT_FUZZY_THRESHOLD,
            default_year: DEFAULT_YEAR,
            missing_name_policy: DEFAULT_MISSING_NAME_POLICY,
            name_overrides: DEFAULT_NAME_OVERRIDES
                .iter()
                .map(|(name, ticker_symbol)| (name.to_string(), ticker_symbol.to_string()))
                .collect(),
        }
    }
}
