use crate::models::MarketcapCategory;
use crate::types::Marketcap;

/// Categorizes every value independently, preserving order.
///
/// ### Example:
/// ```rust
/// use stocks_lexicon::{categorize_marketcaps, MarketcapCategory};
///
/// assert_eq!(
///     categorize_marketcaps(&[49_999_999, 50_000_000, 250_000_000_000]),
///     vec![MarketcapCategory::Nano, MarketcapCategory::Micro, MarketcapCategory::Mega]
/// );
/// ```
pub fn categorize_marketcaps(marketcaps: &[Marketcap]) -> Vec<MarketcapCategory> {
    marketcaps
        .iter()
        .map(|&marketcap| MarketcapCategory::categorize(marketcap))
        .collect()
}
