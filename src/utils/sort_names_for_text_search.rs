use crate::types::CompanyName;

/// Orders names for substring scanning: longest first, then alphabetically.
///
/// Scanning longest names first means "Bank of America" is found before "America" would be.
/// Empty names are dropped since they would match any text. Duplicates are collapsed.
///
/// ### Example:
/// ```rust
/// use stocks_lexicon::sort_names_for_text_search;
///
/// let names = vec!["Apple".to_string(), "Alpha".to_string(), "Bank of America".to_string()];
/// assert_eq!(
///     sort_names_for_text_search(&names),
///     vec!["Bank of America", "Alpha", "Apple"]
/// );
/// ```
pub fn sort_names_for_text_search<'a, I>(names: I) -> Vec<CompanyName>
where
    I: IntoIterator<Item = &'a CompanyName>,
{
    let mut sorted_names: Vec<CompanyName> = names
        .into_iter()
        .filter(|name| !name.is_empty())
        .cloned()
        .collect();

    sorted_names.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
    sorted_names.dedup();

    sorted_names
}
