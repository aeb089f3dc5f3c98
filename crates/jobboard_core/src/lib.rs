//! Jobboard core: pure filtering state machine and view-model helpers.
//!
//! Everything in this crate is synchronous and deterministic. Time enters
//! through message payloads and IO is delegated to the driver via [`Effect`]
//! values, so the whole pipeline can be exercised from plain unit tests.
mod debounce;
mod effect;
mod filter;
mod index;
mod job;
mod msg;
mod state;
mod update;
mod url_state;
mod view_model;

pub use debounce::Debouncer;
pub use effect::Effect;
pub use filter::filter_jobs;
pub use index::{SearchIndex, SearchableJob};
pub use job::JobRecord;
pub use msg::Msg;
pub use state::{AppState, FetchGeneration, FilterState, LoadPhase, DEBOUNCE_DELAY};
pub use update::update;
pub use url_state::{hydrate, reflect, MemoryUrlStore, UrlStore};
pub use view_model::{JobRowView, JobsViewModel};
