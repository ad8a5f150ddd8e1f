use thiserror::Error;

/// Rejected before any hand is enumerated.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("batch size must be positive")]
    BatchSize,
    #[error("worker count must be positive")]
    Workers,
}

/// A census that did not produce a complete tally.
#[derive(Debug, Error)]
pub enum CensusError {
    #[error("failed to build worker pool: {0}")]
    Pool(#[from] rayon::ThreadPoolBuildError),
    #[error("a worker panicked while classifying a batch")]
    Worker,
    #[error("result channel closed before every batch was merged")]
    Disconnected,
    #[error("merged {actual} hands, expected {expected}")]
    Incomplete { expected: u64, actual: u64 },
}
