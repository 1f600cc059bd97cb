//! Configuration for the dispatch engine
//!
//! Controls registry sizing, how read-only reports are evaluated and the seed
//! used when generating demo order streams.

use serde::{Deserialize, Serialize};

/// How the readiness report walks the queue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConcurrencyMode {
    /// Orders are evaluated one after another on the calling thread
    #[default]
    Sequential,
    /// Orders are evaluated in parallel using Rayon
    Rayon,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DispatchConfig {
    /// Upper bound on registered stations; unbounded when `None`
    pub max_stations: Option<usize>,
    /// Evaluation mode for the readiness report
    pub concurrency_mode: ConcurrencyMode,
    /// The size of the thread pool for parallel evaluation
    /// Only relevant when concurrency_mode is Rayon
    pub thread_pool_size: Option<usize>,
    /// Seed for generated order streams
    pub rush_seed: u64,
}

impl DispatchConfig {
    /// Create a configuration with default values
    ///
    /// Default configuration is unbounded and sequential
    pub fn new() -> Self {
        Self {
            max_stations: None,
            concurrency_mode: ConcurrencyMode::default(),
            thread_pool_size: None,
            rush_seed: 42,
        }
    }

    pub fn with_max_stations(mut self, max_stations: usize) -> Self {
        self.max_stations = Some(max_stations);
        self
    }

    pub fn with_concurrency(mut self, mode: ConcurrencyMode) -> Self {
        self.concurrency_mode = mode;
        self
    }

    /// Set the thread pool size for parallel evaluation
    ///
    /// # Note
    /// This setting only affects evaluation when concurrency_mode is Rayon
    pub fn with_thread_pool_size(mut self, size: usize) -> Self {
        self.thread_pool_size = Some(size);
        self
    }

    pub fn with_rush_seed(mut self, seed: u64) -> Self {
        self.rush_seed = seed;
        self
    }
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self::new()
    }
}
