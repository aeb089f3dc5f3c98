use jobboard_core::{FetchGeneration, JobRecord};
use thiserror::Error;

/// Generic user-facing message for any failed load. Failure detail goes to
/// the log, not the user.
pub const LOAD_FAILURE_MESSAGE: &str = "Failed to load jobs";

/// Terminal outcome of one feed-load activation, stamped with its
/// generation so the state machine can discard stale deliveries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedEvent {
    Loaded {
        generation: FetchGeneration,
        jobs: Vec<JobRecord>,
    },
    Failed {
        generation: FetchGeneration,
        message: String,
    },
    Cancelled {
        generation: FetchGeneration,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeedError {
    #[error("feed returned http status {0}")]
    Status(u16),
    #[error("network error: {0}")]
    Network(String),
    #[error("malformed feed payload: {0}")]
    Malformed(String),
    #[error("cancelled")]
    Cancelled,
}
