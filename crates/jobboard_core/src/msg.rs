use std::time::Instant;

use crate::{FetchGeneration, JobRecord};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Startup activation or user retry: load the feed from scratch.
    FetchRequested,
    /// User edited the search box (raw keystroke, not yet settled).
    QueryEdited { text: String, now: Instant },
    /// User flipped the remote-only toggle.
    RemoteOnlyToggled(bool),
    /// Driver tick; advances the debounce window.
    Tick { now: Instant },
    /// Engine delivered the parsed feed.
    FeedLoaded {
        generation: FetchGeneration,
        jobs: Vec<JobRecord>,
    },
    /// Engine gave up on the feed.
    FeedFailed {
        generation: FetchGeneration,
        message: String,
    },
    /// Engine confirmed a cooperative cancellation.
    FeedCancelled { generation: FetchGeneration },
}
