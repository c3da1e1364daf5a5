use crate::types::SimilarityScore;

/// String similarity used for fuzzy name resolution.
///
/// Implementations return `0` for nothing in common and `100` for identical strings.
pub trait SimilarityScorer {
    fn score(&self, query: &str, candidate: &str) -> SimilarityScore;
}

impl<F> SimilarityScorer for F
where
    F: Fn(&str, &str) -> SimilarityScore,
{
    fn score(&self, query: &str, candidate: &str) -> SimilarityScore {
        self(query, candidate)
    }
}

/// Default scorer: normalized Levenshtein similarity scaled to 0..=100.
#[derive(Copy, Clone, Debug, Default)]
pub struct LevenshteinScorer;

impl SimilarityScorer for LevenshteinScorer {
    fn score(&self, query: &str, candidate: &str) -> SimilarityScore {
        let similarity = strsim::normalized_levenshtein(query, candidate);

        (similarity * 100.0).round().clamp(0.0, 100.0) as SimilarityScore
    }
}
