use std::time::{Duration, Instant};

use crate::view_model::{JobRowView, JobsViewModel};
use crate::{filter_jobs, hydrate, reflect, Debouncer, JobRecord, SearchIndex};

/// Monotonic id for feed-load activations. Events stamped with an older
/// generation are discarded without touching state.
pub type FetchGeneration = u64;

/// Debounce window applied to the raw search query.
pub const DEBOUNCE_DELAY: Duration = Duration::from_millis(300);

/// The pair of user-controlled filter inputs.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterState {
    pub query: String,
    pub remote_only: bool,
}

/// Lifecycle of the single-shot feed load.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadPhase {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed(String),
}

/// Filtered result memoized on the inputs that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
struct FilteredCache {
    revision: u64,
    query: String,
    remote_only: bool,
    jobs: Vec<JobRecord>,
}

/// Whole-session state: filter inputs, debounce window, load lifecycle,
/// search index and the memoized filtered result.
///
/// Mutation happens only through [`crate::update`]; the driver observes via
/// [`AppState::view`] and `consume_dirty`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    filter: FilterState,
    debounced_query: String,
    debounce: Debouncer<String>,
    load: LoadPhase,
    generation: FetchGeneration,
    index: SearchIndex,
    filtered: FilteredCache,
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_delay(DEBOUNCE_DELAY)
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_delay(delay: Duration) -> Self {
        Self {
            filter: FilterState::default(),
            debounced_query: String::new(),
            debounce: Debouncer::new(delay),
            load: LoadPhase::Idle,
            generation: 0,
            index: SearchIndex::empty(),
            filtered: FilteredCache::default(),
            dirty: false,
        }
    }

    /// Seeds filter state from the location's query string, once, at
    /// startup. The seeded query counts as already settled: it does not
    /// pass through the debounce window and does not reflect back.
    pub fn hydrated(query_string: &str, delay: Duration) -> Self {
        let filter = hydrate(query_string);
        let mut state = Self::with_delay(delay);
        state.debounced_query = filter.query.clone();
        state.filtered.query = filter.query.clone();
        state.filtered.remote_only = filter.remote_only;
        state.filter = filter;
        state
    }

    pub fn view(&self) -> JobsViewModel {
        JobsViewModel {
            loading: matches!(self.load, LoadPhase::Loading),
            error: match &self.load {
                LoadPhase::Failed(message) => Some(message.clone()),
                _ => None,
            },
            jobs: self.filtered.jobs.iter().map(JobRowView::from_record).collect(),
            total_count: self.filtered.jobs.len(),
            query: self.filter.query.clone(),
            remote_only: self.filter.remote_only,
            share_query_string: reflect(&self.settled_filter()),
            dirty: self.dirty,
        }
    }

    /// Returns and clears the dirty flag, so the driver re-renders at most
    /// once per batch of messages.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub fn filtered_jobs(&self) -> &[JobRecord] {
        &self.filtered.jobs
    }

    pub fn generation(&self) -> FetchGeneration {
        self.generation
    }

    /// Identity stamp of the current search index; bumps only when the
    /// record collection is replaced.
    pub fn index_revision(&self) -> u64 {
        self.index.revision()
    }

    /// True while an edited query is still inside the debounce window.
    pub fn query_pending(&self) -> bool {
        self.debounce.is_armed()
    }

    pub fn load_phase(&self) -> &LoadPhase {
        &self.load
    }

    pub(crate) fn settled_filter(&self) -> FilterState {
        FilterState {
            query: self.debounced_query.clone(),
            remote_only: self.filter.remote_only,
        }
    }

    /// Allocates a new generation and enters `Loading`. Returns the
    /// generation and whether an in-flight load is being superseded.
    pub(crate) fn begin_fetch(&mut self) -> (FetchGeneration, bool) {
        let supersedes = matches!(self.load, LoadPhase::Loading);
        self.generation += 1;
        self.load = LoadPhase::Loading;
        self.dirty = true;
        (self.generation, supersedes)
    }

    pub(crate) fn edit_query(&mut self, text: String, now: Instant) {
        if text == self.filter.query {
            return;
        }
        self.filter.query = text.clone();
        self.debounce.push(text, now);
        self.dirty = true;
    }

    pub(crate) fn poll_settled_query(&mut self, now: Instant) -> Option<String> {
        self.debounce.poll(now)
    }

    /// Installs a settled query. Returns false when it matches the current
    /// settled value, in which case nothing changes and nothing reflects.
    pub(crate) fn settle_query(&mut self, query: String) -> bool {
        if query == self.debounced_query {
            return false;
        }
        self.debounced_query = query;
        self.refilter();
        true
    }

    pub(crate) fn toggle_remote(&mut self, remote_only: bool) -> bool {
        if remote_only == self.filter.remote_only {
            return false;
        }
        self.filter.remote_only = remote_only;
        self.dirty = true;
        self.refilter();
        true
    }

    pub(crate) fn apply_loaded(&mut self, generation: FetchGeneration, jobs: Vec<JobRecord>) {
        if !self.accepts(generation) {
            return;
        }
        self.index.rebuild(&jobs);
        self.load = LoadPhase::Loaded;
        self.dirty = true;
        self.refilter();
    }

    pub(crate) fn apply_failed(&mut self, generation: FetchGeneration, message: String) {
        if !self.accepts(generation) {
            return;
        }
        self.load = LoadPhase::Failed(message);
        self.dirty = true;
    }

    pub(crate) fn apply_cancelled(&mut self, generation: FetchGeneration) {
        if !self.accepts(generation) {
            return;
        }
        self.load = LoadPhase::Idle;
        self.dirty = true;
    }

    /// A terminal feed event only lands if it carries the current
    /// generation while a load is actually in flight.
    fn accepts(&self, generation: FetchGeneration) -> bool {
        generation == self.generation && matches!(self.load, LoadPhase::Loading)
    }

    /// Recomputes the filtered result iff one of its inputs changed since
    /// the cached computation.
    fn refilter(&mut self) {
        let unchanged = self.filtered.revision == self.index.revision()
            && self.filtered.query == self.debounced_query
            && self.filtered.remote_only == self.filter.remote_only;
        if unchanged {
            return;
        }
        self.filtered = FilteredCache {
            revision: self.index.revision(),
            query: self.debounced_query.clone(),
            remote_only: self.filter.remote_only,
            jobs: filter_jobs(&self.index, &self.debounced_query, self.filter.remote_only),
        };
        self.dirty = true;
    }
}
