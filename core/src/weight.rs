use crate::idf::IdfTable;
use crate::vector::{TermCounts, TermVector};
use std::str::FromStr;

/// How raw term counts are turned into vector weights.
///
/// A single selectable strategy instead of parallel ranking paths: plain
/// cosine over raw counts and TF-IDF-weighted cosine share everything but
/// this step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WeightingScheme {
    /// Use the raw counts unchanged.
    RawCount,
    /// Multiply each count by the corpus IDF of its term.
    #[default]
    TfIdf,
}

impl WeightingScheme {
    /// Weight a count vector against the corpus statistics.
    ///
    /// Terms whose weight comes out zero (unknown to the corpus, or present
    /// in every document) are omitted from the sparse result; they would
    /// contribute nothing to the dot product or either norm.
    pub fn weight(&self, counts: &TermCounts, idf: &IdfTable) -> TermVector {
        match self {
            Self::RawCount => counts
                .iter()
                .filter(|(_, &count)| count > 0)
                .map(|(term, &count)| (term.clone(), f64::from(count)))
                .collect(),
            Self::TfIdf => counts
                .iter()
                .filter_map(|(term, &count)| {
                    let weight = f64::from(count) * idf.idf(term);
                    (weight != 0.0).then(|| (term.clone(), weight))
                })
                .collect(),
        }
    }
}

impl FromStr for WeightingScheme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tfidf" | "tf-idf" => Ok(Self::TfIdf),
            "counts" | "raw" => Ok(Self::RawCount),
            other => Err(format!(
                "unknown weighting scheme: {other} (expected tfidf or counts)"
            )),
        }
    }
}
