//! Jobboard engine: feed IO and cooperative cancellation.
//!
//! The engine owns a background tokio runtime; the driver talks to it over
//! plain channels and never awaits anything itself. Cancellation is a
//! token checked inside the fetch, so a superseded load can be proven
//! never to deliver a result.
mod decode;
mod engine;
mod fetch;
mod types;

pub use decode::parse_feed;
pub use engine::EngineHandle;
pub use fetch::{FeedFetcher, FetchSettings, ReqwestFeedFetcher};
pub use types::{FeedError, FeedEvent, LOAD_FAILURE_MESSAGE};

// The cancellation token is part of the `FeedFetcher` contract.
pub use tokio_util::sync::CancellationToken;
