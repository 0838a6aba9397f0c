use crate::error::RankError;
use crate::vector::TermCounts;
use std::collections::HashMap;

/// Immutable inverse-document-frequency table, built once from the corpus
/// and shared read-only by the weighting engine and the ranker.
///
/// Every term that appears in at least one document has exactly one entry;
/// looking up any other term yields 0.0.
#[derive(Debug, Clone)]
pub struct IdfTable {
    idf: HashMap<String, f64>,
    num_docs: usize,
}

impl IdfTable {
    /// Compute `idf(t) = ln(N / df(t))` over per-document term counts.
    ///
    /// `df(t)` is the number of documents whose counts contain `t` with a
    /// count above zero. A term present in every document gets idf 0.0; a
    /// term present in exactly one document gets `ln(N)`, the maximum.
    ///
    /// Fails with [`RankError::EmptyCorpus`] when no documents are given.
    pub fn build(doc_counts: &[TermCounts]) -> Result<Self, RankError> {
        if doc_counts.is_empty() {
            return Err(RankError::EmptyCorpus);
        }
        let num_docs = doc_counts.len();

        let mut df: HashMap<String, usize> = HashMap::new();
        for counts in doc_counts {
            for (term, &count) in counts {
                if count > 0 {
                    *df.entry(term.clone()).or_insert(0) += 1;
                }
            }
        }

        let idf = df
            .into_iter()
            .map(|(term, df_t)| (term, (num_docs as f64 / df_t as f64).ln()))
            .collect();

        Ok(Self { idf, num_docs })
    }

    /// IDF weight for a term; 0.0 for terms absent from the corpus.
    pub fn idf(&self, term: &str) -> f64 {
        self.idf.get(term).copied().unwrap_or(0.0)
    }

    pub fn contains(&self, term: &str) -> bool {
        self.idf.contains_key(term)
    }

    /// Number of documents the table was built from.
    pub fn num_docs(&self) -> usize {
        self.num_docs
    }

    /// Number of distinct terms across the corpus.
    pub fn vocab_size(&self) -> usize {
        self.idf.len()
    }
}
