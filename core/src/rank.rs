use crate::corpus::Document;
use crate::error::RankError;
use crate::idf::IdfTable;
use crate::tokenizer::tokenize;
use crate::vector::{count_terms, TermVector};
use crate::weight::WeightingScheme;
use serde::Serialize;
use std::cmp::Ordering;

/// Guards the cosine denominator so all-zero vectors score 0 instead of NaN.
const EPSILON: f64 = 1e-10;

/// One entry of a ranked result list.
#[derive(Debug, Clone, Serialize)]
pub struct DocScore {
    pub doc_id: String,
    pub text: String,
    pub score: f64,
}

/// Cosine similarity of two sparse vectors.
///
/// The dot product runs over the terms of `a`; each norm runs over its own
/// vector's entries. With non-negative weights the result lies in [0, 1].
pub fn cosine_similarity(a: &TermVector, b: &TermVector) -> f64 {
    let mut dot = 0.0;
    for (term, a_weight) in a {
        if let Some(b_weight) = b.get(term) {
            dot += a_weight * b_weight;
        }
    }
    let norm_a = a.values().map(|w| w * w).sum::<f64>().sqrt();
    let norm_b = b.values().map(|w| w * w).sum::<f64>().sqrt();
    dot / (norm_a * norm_b + EPSILON)
}

/// The ranking engine: corpus documents, their precomputed weighted vectors,
/// and the corpus IDF table, all immutable after construction. Safe to share
/// across threads behind an `Arc`; queries never mutate it.
pub struct Ranker {
    docs: Vec<Document>,
    vectors: Vec<TermVector>,
    idf: IdfTable,
    scheme: WeightingScheme,
}

impl Ranker {
    /// Build the engine from a corpus: tokenize and vectorize every
    /// document, derive the IDF table, and cache per-document weighted
    /// vectors. Fails with [`RankError::EmptyCorpus`] for an empty corpus.
    pub fn build(docs: Vec<Document>, scheme: WeightingScheme) -> Result<Self, RankError> {
        let doc_counts: Vec<_> = docs
            .iter()
            .map(|doc| count_terms(&tokenize(&doc.text)))
            .collect();
        let idf = IdfTable::build(&doc_counts)?;
        let vectors: Vec<TermVector> = doc_counts
            .iter()
            .map(|counts| scheme.weight(counts, &idf))
            .collect();

        tracing::info!(
            num_docs = docs.len(),
            vocab_size = idf.vocab_size(),
            ?scheme,
            "ranking engine built"
        );
        Ok(Self {
            docs,
            vectors,
            idf,
            scheme,
        })
    }

    /// Rank every corpus document against a free-text query.
    ///
    /// Returns the full list, scores descending; equal scores keep their
    /// corpus insertion order (stable sort). A query with no surviving
    /// tokens is valid and scores 0.0 against everything, so callers still
    /// get the whole corpus back in its original order.
    pub fn rank(&self, query: &str) -> Vec<DocScore> {
        let query_counts = count_terms(&tokenize(query));
        let query_vector = self.scheme.weight(&query_counts, &self.idf);

        let mut ranked: Vec<DocScore> = self
            .docs
            .iter()
            .zip(&self.vectors)
            .map(|(doc, vector)| DocScore {
                doc_id: doc.id.clone(),
                text: doc.text.clone(),
                score: cosine_similarity(&query_vector, vector),
            })
            .collect();

        ranked.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
        ranked
    }

    pub fn num_docs(&self) -> usize {
        self.docs.len()
    }

    pub fn vocab_size(&self) -> usize {
        self.idf.vocab_size()
    }

    pub fn scheme(&self) -> WeightingScheme {
        self.scheme
    }

    /// Corpus statistics, for callers that weight their own vectors.
    pub fn idf(&self) -> &IdfTable {
        &self.idf
    }
}
