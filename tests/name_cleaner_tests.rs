use stocks_lexicon::{clean_company_names, NameCleaner};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_removes_default_suffixes() {
        let name_cleaner = NameCleaner::default();

        assert_eq!(name_cleaner.clean("Apple Inc"), "Apple");
        assert_eq!(name_cleaner.clean("Bank of America Corp"), "Bank of America");
        assert_eq!(name_cleaner.clean("America Group"), "America");
        assert_eq!(name_cleaner.clean("Corpus Group Inc"), "Corpus");
    }

    #[test]
    fn test_removes_every_occurrence() {
        let name_cleaner = NameCleaner::default();

        assert_eq!(name_cleaner.clean("Inc Inc Foo Inc"), "Inc Foo");
    }

    #[test]
    fn test_is_literal_substring_removal() {
        let name_cleaner = NameCleaner::default();

        // " Inc" is removed from the middle of a word too
        assert_eq!(name_cleaner.clean("Big Incubator Inc"), "Bigubator");
        // Leading removals need the space
        assert_eq!(name_cleaner.clean("Incredible Foods Inc"), "Incredible Foods");
    }

    #[test]
    fn test_is_case_sensitive() {
        let name_cleaner = NameCleaner::default();

        assert_eq!(name_cleaner.clean("Apple INC"), "Apple INC");
        assert_eq!(name_cleaner.clean("Apple inc"), "Apple inc");
    }

    #[test]
    fn test_trims_whitespace() {
        let name_cleaner = NameCleaner::default();

        assert_eq!(name_cleaner.clean("   Apple Inc   "), "Apple");
        assert_eq!(name_cleaner.clean(""), "");
        assert_eq!(name_cleaner.clean(" Inc"), "");
    }

    #[test]
    fn test_extra_removals_follow_base_removals() {
        let name_cleaner = NameCleaner::new(&[" Holdings", " Ltd", ""]);

        assert_eq!(
            name_cleaner.removals(),
            &[" Inc", " Corp", " Group", " Holdings", " Ltd"]
        );
        assert_eq!(name_cleaner.clean("Duplicate Holdings Inc"), "Duplicate");
        assert_eq!(name_cleaner.clean("Widget Ltd"), "Widget");
    }

    #[test]
    fn test_clean_is_idempotent() {
        let name_cleaner = NameCleaner::new(&["x"]);

        let names = [
            "Apple Inc",
            "Foo I Incnc",
            "Foo Ixnc",
            "  Spaced   Corp ",
            "Group Group Group",
            "Plain",
            "",
        ];

        for name in names {
            let once = name_cleaner.clean(name);
            let twice = name_cleaner.clean(&once);
            assert_eq!(once, twice, "Cleaning \"{}\" is not idempotent", name);
        }

        assert_eq!(name_cleaner.clean("Foo I Incnc"), "Foo");
        assert_eq!(name_cleaner.clean("Foo Ixnc"), "Foo");
    }

    #[test]
    fn test_batch_cleaning_matches_single_cleaning() {
        let names = ["Apple Inc", "Alphabet Inc Class A", "Bank of America Corp"];
        let name_cleaner = NameCleaner::new(&[" Class A"]);

        let cleaned = clean_company_names(&names, &[" Class A"]);

        assert_eq!(cleaned, vec!["Apple", "Alphabet", "Bank of America"]);
        for (name, cleaned_name) in names.iter().zip(&cleaned) {
            assert_eq!(&name_cleaner.clean(name), cleaned_name);
        }
    }
}
