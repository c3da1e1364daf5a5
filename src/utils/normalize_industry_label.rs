use crate::types::IndustryLabel;

/// Turns an industry category into a single token by replacing spaces with underscores.
///
/// ### Example:
/// ```rust
/// use stocks_lexicon::normalize_industry_label;
///
/// assert_eq!(normalize_industry_label("Computer Software & Services"), "Computer_Software_&_Services");
/// assert_eq!(normalize_industry_label(""), "");
/// ```
pub fn normalize_industry_label(industry: &str) -> IndustryLabel {
    industry.trim().replace(' ', "_")
}
