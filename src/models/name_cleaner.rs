use crate::constants::BASE_NAME_REMOVALS;
use crate::types::CompanyName;

/// Derives display names from legal company names by stripping corporate suffixes.
///
/// Removal is literal and case-sensitive: every occurrence of each removal substring is
/// dropped (not only a trailing one), in list order, and the result is trimmed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NameCleaner {
    removals: Vec<String>,
}

impl NameCleaner {
    pub fn new<S: AsRef<str>>(extra_removals: &[S]) -> Self {
        let removals = BASE_NAME_REMOVALS
            .iter()
            .map(|removal| removal.to_string())
            .chain(
                extra_removals
                    .iter()
                    .map(|removal| removal.as_ref().to_string())
                    // Removing "" would be a no-op at best
                    .filter(|removal| !removal.is_empty()),
            )
            .collect();

        Self { removals }
    }

    pub fn removals(&self) -> &[String] {
        &self.removals
    }

    pub fn clean(&self, name: &str) -> CompanyName {
        let mut cleaned = name.to_string();

        // A removal can splice together a new occurrence (e.g. " I Incnc"), so passes repeat
        // until nothing changes. This keeps `clean` idempotent.
        loop {
            let mut changed = false;

            for removal in &self.removals {
                if cleaned.contains(removal.as_str()) {
                    cleaned = cleaned.replace(removal.as_str(), "");
                    changed = true;
                }
            }

            if !changed {
                break;
            }
        }

        cleaned.trim().to_string()
    }

    pub fn clean_all<S: AsRef<str>>(&self, names: &[S]) -> Vec<CompanyName> {
        names.iter().map(|name| self.clean(name.as_ref())).collect()
    }
}

impl Default for NameCleaner {
    fn default() -> Self {
        Self::new::<&str>(&[])
    }
}
