use crate::models::NameCleaner;
use crate::types::CompanyName;

/// Removes `" Inc"`, `" Corp"`, `" Group"` and any `extra_removals` from each name.
///
/// Convenience over `NameCleaner` for one-off batches.
///
/// ### Example:
/// ```rust
/// use stocks_lexicon::clean_company_names;
///
/// let names = clean_company_names(&["Apple Inc", "Alphabet Inc Class A"], &[" Class A"]);
/// assert_eq!(names, vec!["Apple", "Alphabet"]);
/// ```
pub fn clean_company_names<N: AsRef<str>, R: AsRef<str>>(
    names: &[N],
    extra_removals: &[R],
) -> Vec<CompanyName> {
    NameCleaner::new(extra_removals).clean_all(names)
}
