use std::collections::HashMap;
use stocks_lexicon::{
    Error, LevenshteinScorer, Lexicon, LexiconConfig, SimilarityScore, SimilarityScorer,
    YearlyMarketcapFeed,
};
use test_utils::{sample_lexicon, sample_lexicon_with_config};

fn apple_scorer(score_for_apple: SimilarityScore) -> impl Fn(&str, &str) -> SimilarityScore {
    move |_query: &str, candidate: &str| {
        if candidate == "Apple" {
            score_for_apple
        } else {
            10
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_best_match_below_threshold() {
        let lexicon = sample_lexicon();

        let result = lexicon.fuzzy_ticker_from_name_with_scorer("Aple", 95, &apple_scorer(94));

        match result {
            Err(Error::NoConfidentMatch {
                query,
                best_score,
                threshold,
            }) => {
                assert_eq!(query, "Aple");
                assert_eq!(best_score, Some(94));
                assert_eq!(threshold, 95);
            }
            other => panic!("Expected no confident match, got {:?}", other),
        }
    }

    #[test]
    fn test_accepts_best_match_at_threshold() {
        let lexicon = sample_lexicon();

        assert_eq!(
            lexicon
                .fuzzy_ticker_from_name_with_scorer("Aple", 95, &apple_scorer(95))
                .unwrap(),
            "AAPL"
        );
        assert_eq!(
            lexicon
                .fuzzy_ticker_from_name_with_scorer("Aple", 95, &apple_scorer(100))
                .unwrap(),
            "AAPL"
        );
    }

    #[test]
    fn test_first_best_match_wins_ties() {
        let lexicon = sample_lexicon();
        let constant_scorer = |_: &str, _: &str| -> SimilarityScore { 50 };

        // "Alpha" is the first name of the corpus
        assert_eq!(
            lexicon
                .fuzzy_ticker_from_name_with_scorer("anything", 50, &constant_scorer)
                .unwrap(),
            "AAA"
        );
    }

    #[test]
    fn test_duplicate_names_resolve_like_exact_lookup() {
        let lexicon = sample_lexicon();
        let scorer = |_: &str, candidate: &str| -> SimilarityScore {
            if candidate == "Duplicate Holdings" {
                99
            } else {
                0
            }
        };

        assert_eq!(
            lexicon
                .fuzzy_ticker_from_name_with_scorer("Duplicate Holding", 95, &scorer)
                .unwrap(),
            lexicon.ticker_from_name("Duplicate Holdings").unwrap()
        );
    }

    #[test]
    fn test_empty_corpus_has_no_best_score() {
        let lexicon = Lexicon::build(
            &HashMap::new(),
            &HashMap::new(),
            &YearlyMarketcapFeed::new(vec![2018]),
        )
        .unwrap();

        assert!(matches!(
            lexicon.fuzzy_ticker_from_name("Apple"),
            Err(Error::NoConfidentMatch {
                best_score: None,
                ..
            })
        ));
    }

    #[test]
    fn test_default_scorer() {
        assert_eq!(LevenshteinScorer.score("Apple", "Apple"), 100);
        assert_eq!(LevenshteinScorer.score("Aple", "Apple"), 80);
        assert_eq!(LevenshteinScorer.score("abc", "xyz"), 0);
    }

    #[test]
    fn test_default_threshold() {
        let lexicon = sample_lexicon();

        assert_eq!(lexicon.fuzzy_ticker_from_name("Apple").unwrap(), "AAPL");
        assert!(matches!(
            lexicon.fuzzy_ticker_from_name("Aple"),
            Err(Error::NoConfidentMatch {
                best_score: Some(80),
                threshold: 95,
                ..
            })
        ));
        assert_eq!(
            lexicon
                .fuzzy_ticker_from_name_with_threshold("Aple", 80)
                .unwrap(),
            "AAPL"
        );
    }

    #[test]
    fn test_configured_threshold() {
        let lexicon = sample_lexicon_with_config(&LexiconConfig::default().with_fuzzy_threshold(80));

        assert_eq!(lexicon.fuzzy_ticker_from_name("Aple").unwrap(), "AAPL");
    }
}
