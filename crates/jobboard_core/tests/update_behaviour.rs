use std::sync::Once;
use std::time::{Duration, Instant};

use jobboard_core::{update, AppState, Effect, JobRecord, LoadPhase, Msg, DEBOUNCE_DELAY};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(board_logging::initialize_for_tests);
}

fn job(url: &str, title: &str, location: &str, remote: bool) -> JobRecord {
    JobRecord {
        url: url.to_string(),
        title: title.to_string(),
        company: "Acme".to_string(),
        location: location.to_string(),
        tags: "qa,sdet".to_string(),
        is_remote_us: remote,
        ..JobRecord::default()
    }
}

fn sample_jobs() -> Vec<JobRecord> {
    vec![
        job("https://a.example/1", "QA Engineer", "Remote", true),
        job("https://a.example/2", "SDET II", "Wichita, KS", false),
        job("https://a.example/3", "Test Lead", "Remote", true),
    ]
}

/// Dispatches an activation and pulls the generation out of its effect.
fn started(state: AppState) -> (AppState, u64) {
    let (state, effects) = update(state, Msg::FetchRequested);
    let generation = effects
        .iter()
        .find_map(|effect| match effect {
            Effect::StartFetch { generation } => Some(*generation),
            _ => None,
        })
        .expect("activation emits StartFetch");
    (state, generation)
}

fn loaded_state() -> AppState {
    let (state, generation) = started(AppState::new());
    let (state, _effects) = update(
        state,
        Msg::FeedLoaded {
            generation,
            jobs: sample_jobs(),
        },
    );
    state
}

fn at(base: Instant, ms: u64) -> Instant {
    base + Duration::from_millis(ms)
}

fn settle_ms() -> u64 {
    DEBOUNCE_DELAY.as_millis() as u64
}

#[test]
fn activation_enters_loading_and_starts_one_fetch() {
    init_logging();
    let state = AppState::new();

    let (mut state, effects) = update(state, Msg::FetchRequested);

    assert_eq!(effects, vec![Effect::StartFetch { generation: 1 }]);
    let view = state.view();
    assert!(view.loading);
    assert_eq!(view.error, None);
    assert!(view.jobs.is_empty());
    assert!(state.consume_dirty());
}

#[test]
fn loaded_feed_replaces_items_and_clears_loading() {
    init_logging();
    let mut state = loaded_state();

    let view = state.view();
    assert!(!view.loading);
    assert_eq!(view.error, None);
    assert_eq!(view.total_count, 3);
    assert_eq!(state.index_revision(), 1);
    assert!(state.consume_dirty());
}

#[test]
fn failed_load_surfaces_generic_message_and_keeps_it_until_retry() {
    init_logging();
    let (state, generation) = started(AppState::new());

    let (state, effects) = update(
        state,
        Msg::FeedFailed {
            generation,
            message: "Failed to load jobs".to_string(),
        },
    );

    assert!(effects.is_empty());
    let view = state.view();
    assert!(!view.loading);
    assert_eq!(view.error.as_deref(), Some("Failed to load jobs"));
    assert!(view.jobs.is_empty());

    // The error is not cleared by ticks; only the next activation clears it.
    let base = Instant::now();
    let (state, _effects) = update(state, Msg::Tick { now: base });
    assert_eq!(state.view().error.as_deref(), Some("Failed to load jobs"));

    let (state, effects) = update(state, Msg::FetchRequested);
    assert_eq!(effects, vec![Effect::StartFetch { generation: 2 }]);
    assert!(state.view().loading);
    assert_eq!(state.view().error, None);
}

#[test]
fn retry_while_loading_cancels_before_restarting() {
    init_logging();
    let (state, _generation) = started(AppState::new());

    let (state, effects) = update(state, Msg::FetchRequested);
    assert_eq!(
        effects,
        vec![Effect::CancelFetch, Effect::StartFetch { generation: 2 }]
    );
    assert_eq!(state.generation(), 2);
}

#[test]
fn stale_generation_results_are_discarded() {
    init_logging();
    let (state, first) = started(AppState::new());
    // Supersede the first load before it lands.
    let (state, second) = started(state);
    assert_ne!(first, second);

    let (state, _effects) = update(
        state,
        Msg::FeedLoaded {
            generation: first,
            jobs: sample_jobs(),
        },
    );
    let view = state.view();
    assert!(view.loading);
    assert_eq!(view.total_count, 0);
    assert_eq!(state.index_revision(), 0);

    // The current generation still lands normally.
    let (state, _effects) = update(
        state,
        Msg::FeedLoaded {
            generation: second,
            jobs: sample_jobs(),
        },
    );
    assert_eq!(state.view().total_count, 3);
}

#[test]
fn cancellation_returns_to_neutral_without_error() {
    init_logging();
    let (state, generation) = started(AppState::new());

    let (state, effects) = update(state, Msg::FeedCancelled { generation });

    assert!(effects.is_empty());
    assert_eq!(state.load_phase(), &LoadPhase::Idle);
    let view = state.view();
    assert!(!view.loading);
    assert_eq!(view.error, None);
    assert_eq!(view.total_count, 0);

    // A response arriving after the cancellation is discarded.
    let (state, _effects) = update(
        state,
        Msg::FeedLoaded {
            generation,
            jobs: sample_jobs(),
        },
    );
    assert_eq!(state.view().total_count, 0);
    assert_eq!(state.index_revision(), 0);
}

#[test]
fn raw_query_edits_neither_filter_nor_reflect() {
    init_logging();
    let state = loaded_state();
    let base = Instant::now();

    let (state, effects) = update(
        state,
        Msg::QueryEdited {
            text: "wichita".to_string(),
            now: base,
        },
    );

    assert!(effects.is_empty());
    let view = state.view();
    assert_eq!(view.query, "wichita");
    // Still unfiltered until the query settles.
    assert_eq!(view.total_count, 3);
    assert_eq!(view.share_query_string, "");
}

#[test]
fn settled_query_filters_and_reflects_once() {
    init_logging();
    let state = loaded_state();
    let base = Instant::now();

    let (state, _effects) = update(
        state,
        Msg::QueryEdited {
            text: "wichita".to_string(),
            now: base,
        },
    );

    // Not settled yet.
    let (state, effects) = update(
        state,
        Msg::Tick {
            now: at(base, settle_ms() - 1),
        },
    );
    assert!(effects.is_empty());

    let (state, effects) = update(
        state,
        Msg::Tick {
            now: at(base, settle_ms()),
        },
    );
    assert_eq!(
        effects,
        vec![Effect::ReflectUrl {
            query_string: "q=wichita".to_string(),
        }]
    );
    assert_eq!(state.view().total_count, 1);
    assert_eq!(state.view().jobs[0].location, "Wichita, KS");

    // Subsequent ticks are quiet.
    let (_state, effects) = update(
        state,
        Msg::Tick {
            now: at(base, settle_ms() * 2),
        },
    );
    assert!(effects.is_empty());
}

#[test]
fn rapid_edits_settle_to_the_last_value_only() {
    init_logging();
    let state = loaded_state();
    let base = Instant::now();

    let (state, _) = update(
        state,
        Msg::QueryEdited {
            text: "w".to_string(),
            now: base,
        },
    );
    let (state, _) = update(
        state,
        Msg::QueryEdited {
            text: "wi".to_string(),
            now: at(base, 80),
        },
    );
    let (state, _) = update(
        state,
        Msg::QueryEdited {
            text: "wichita".to_string(),
            now: at(base, 160),
        },
    );

    // The window restarts from the final edit.
    let (state, effects) = update(
        state,
        Msg::Tick {
            now: at(base, 160 + settle_ms() - 1),
        },
    );
    assert!(effects.is_empty());

    let (_state, effects) = update(
        state,
        Msg::Tick {
            now: at(base, 160 + settle_ms()),
        },
    );
    assert_eq!(
        effects,
        vec![Effect::ReflectUrl {
            query_string: "q=wichita".to_string(),
        }]
    );
}

#[test]
fn a_burst_ending_where_it_started_does_not_reflect() {
    init_logging();
    let state = loaded_state();
    let base = Instant::now();

    let (state, _) = update(
        state,
        Msg::QueryEdited {
            text: "w".to_string(),
            now: base,
        },
    );
    let (state, _) = update(
        state,
        Msg::QueryEdited {
            text: String::new(),
            now: at(base, 100),
        },
    );

    let (state, effects) = update(
        state,
        Msg::Tick {
            now: at(base, 100 + settle_ms()),
        },
    );
    assert!(effects.is_empty());
    assert_eq!(state.view().total_count, 3);
}

#[test]
fn remote_toggle_filters_and_reflects_immediately() {
    init_logging();
    let state = loaded_state();

    let (state, effects) = update(state, Msg::RemoteOnlyToggled(true));

    assert_eq!(
        effects,
        vec![Effect::ReflectUrl {
            query_string: "remote=1".to_string(),
        }]
    );
    let view = state.view();
    assert_eq!(view.total_count, 2);
    assert!(view.jobs.iter().all(|row| row.is_remote_us));

    // Re-asserting the same value is a no-op.
    let (_state, effects) = update(state, Msg::RemoteOnlyToggled(true));
    assert!(effects.is_empty());
}

#[test]
fn reflect_carries_the_settled_query_and_flag_together() {
    init_logging();
    let state = loaded_state();
    let base = Instant::now();

    let (state, _) = update(
        state,
        Msg::QueryEdited {
            text: "qa".to_string(),
            now: base,
        },
    );
    let (state, effects) = update(
        state,
        Msg::Tick {
            now: at(base, settle_ms()),
        },
    );
    assert_eq!(
        effects,
        vec![Effect::ReflectUrl {
            query_string: "q=qa".to_string(),
        }]
    );

    let (_state, effects) = update(state, Msg::RemoteOnlyToggled(true));
    assert_eq!(
        effects,
        vec![Effect::ReflectUrl {
            query_string: "q=qa&remote=1".to_string(),
        }]
    );
}

#[test]
fn hydration_seeds_a_settled_filter() {
    init_logging();
    let state = AppState::hydrated("q=wichita&remote=0", DEBOUNCE_DELAY);
    let mut view = state.view();
    assert_eq!(view.query, "wichita");
    assert!(!view.remote_only);
    assert_eq!(view.share_query_string, "q=wichita");

    // The seeded query filters as soon as the feed lands; no tick needed.
    let (state, generation) = started(state);
    let (state, _effects) = update(
        state,
        Msg::FeedLoaded {
            generation,
            jobs: sample_jobs(),
        },
    );
    view = state.view();
    assert_eq!(view.total_count, 1);
    assert_eq!(view.jobs[0].location, "Wichita, KS");
}

#[test]
fn index_is_rebuilt_only_when_the_collection_changes() {
    init_logging();
    let state = loaded_state();
    let base = Instant::now();
    assert_eq!(state.index_revision(), 1);

    let (state, _) = update(
        state,
        Msg::QueryEdited {
            text: "qa".to_string(),
            now: base,
        },
    );
    let (state, _) = update(
        state,
        Msg::Tick {
            now: at(base, settle_ms()),
        },
    );
    let (state, _) = update(state, Msg::RemoteOnlyToggled(true));
    assert_eq!(state.index_revision(), 1);

    // A fresh load replaces the collection and the index with it.
    let (state, generation) = started(state);
    let (state, _effects) = update(
        state,
        Msg::FeedLoaded {
            generation,
            jobs: vec![job("https://a.example/9", "QA Engineer", "Remote", true)],
        },
    );
    assert_eq!(state.index_revision(), 2);
    assert_eq!(state.filtered_jobs().len(), 1);
}

#[test]
fn idle_ticks_do_not_mark_the_state_dirty() {
    init_logging();
    let mut state = loaded_state();
    assert!(state.consume_dirty());

    let (mut state, effects) = update(
        state,
        Msg::Tick {
            now: Instant::now(),
        },
    );
    assert!(effects.is_empty());
    assert!(!state.consume_dirty());
}
