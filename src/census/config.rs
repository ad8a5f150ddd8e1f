use super::error::ConfigError;
use crate::BATCH_SIZE;
use crate::N_WORKERS;

/// Pipeline tuning: hands per batch and threads in the pool.
///
/// Neither affects the resulting counts, only how the work is split.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    batch: usize,
    workers: usize,
}

impl Config {
    pub fn new(batch: usize, workers: usize) -> Result<Self, ConfigError> {
        match (batch, workers) {
            (0, _) => Err(ConfigError::BatchSize),
            (_, 0) => Err(ConfigError::Workers),
            (batch, workers) => Ok(Self { batch, workers }),
        }
    }
    pub fn batch(&self) -> usize {
        self.batch
    }
    pub fn workers(&self) -> usize {
        self.workers
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            batch: BATCH_SIZE,
            workers: N_WORKERS,
        }
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "batch {} workers {}", self.batch, self.workers)
    }
}
