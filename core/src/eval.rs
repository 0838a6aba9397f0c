use crate::error::RankError;
use std::collections::HashSet;

/// Precision@k: the fraction of the first `min(k, retrieved.len())`
/// retrieved ids that are relevant. An empty window (k = 0, or nothing
/// retrieved) yields 0.0.
pub fn precision_at_k(retrieved: &[String], relevant: &HashSet<String>, k: usize) -> f64 {
    let window = k.min(retrieved.len());
    if window == 0 {
        return 0.0;
    }
    let hits = retrieved[..window]
        .iter()
        .filter(|id| relevant.contains(*id))
        .count();
    hits as f64 / window as f64
}

/// Recall@k: the number of relevant ids found in the first
/// `min(k, retrieved.len())` retrieved, divided by the total relevant count.
///
/// Fails with [`RankError::EmptyRelevantSet`] when `relevant` is empty,
/// rather than dividing by zero.
pub fn recall_at_k(
    retrieved: &[String],
    relevant: &HashSet<String>,
    k: usize,
) -> Result<f64, RankError> {
    if relevant.is_empty() {
        return Err(RankError::EmptyRelevantSet);
    }
    let window = k.min(retrieved.len());
    let hits = retrieved[..window]
        .iter()
        .filter(|id| relevant.contains(*id))
        .count();
    Ok(hits as f64 / relevant.len() as f64)
}
