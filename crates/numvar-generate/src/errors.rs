use thiserror::Error;

/// Errors emitted by the variation pipeline.
///
/// Per-row problems (unparseable numbers, operator mismatches, exhausted
/// attempt budgets) are absorbed by the pipeline and surfaced only through
/// the run report; the variants here are the caller-visible failures.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error(
        "cannot vary {requested} digits: only {available} digits follow a {prefix_len}-digit prefix"
    )]
    InvalidDigitsToVary {
        requested: usize,
        available: usize,
        prefix_len: usize,
    },
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
