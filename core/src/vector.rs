use std::collections::HashMap;

/// Sparse raw term-count vector. Zero counts are never inserted.
pub type TermCounts = HashMap<String, u32>;

/// Sparse weighted term vector. Zero-valued entries are omitted.
pub type TermVector = HashMap<String, f64>;

/// Count occurrences of each distinct term in a token sequence.
pub fn count_terms(tokens: &[String]) -> TermCounts {
    let mut counts = TermCounts::new();
    for token in tokens {
        *counts.entry(token.clone()).or_insert(0) += 1;
    }
    counts
}
