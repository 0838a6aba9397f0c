use thiserror::Error;

/// Errors surfaced by the ranking engine and the evaluator.
#[derive(Debug, Error)]
pub enum RankError {
    /// The corpus contained zero documents at statistics-build time.
    /// Fatal to engine construction; callers must abort startup.
    #[error("corpus is empty: cannot compute document statistics")]
    EmptyCorpus,

    /// Recall was requested against an empty relevant-id set.
    #[error("relevant-id set is empty: recall is undefined")]
    EmptyRelevantSet,
}
