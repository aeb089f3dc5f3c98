use crate::{reflect, AppState, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
///
/// URL reflection is emitted only from settled debounced-query changes and
/// remote-toggle changes, never from raw keystrokes, so the location's
/// query string always encodes the settled filter.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::FetchRequested => {
            let (generation, supersedes) = state.begin_fetch();
            let mut effects = Vec::with_capacity(2);
            if supersedes {
                effects.push(Effect::CancelFetch);
            }
            effects.push(Effect::StartFetch { generation });
            effects
        }
        Msg::QueryEdited { text, now } => {
            state.edit_query(text, now);
            Vec::new()
        }
        Msg::RemoteOnlyToggled(remote_only) => {
            if state.toggle_remote(remote_only) {
                vec![reflect_effect(&state)]
            } else {
                Vec::new()
            }
        }
        Msg::Tick { now } => {
            // A settled value equal to the current one (e.g. a burst that
            // ended back where it started) neither refilters nor reflects.
            match state.poll_settled_query(now) {
                Some(query) => {
                    if state.settle_query(query) {
                        vec![reflect_effect(&state)]
                    } else {
                        Vec::new()
                    }
                }
                None => Vec::new(),
            }
        }
        Msg::FeedLoaded { generation, jobs } => {
            state.apply_loaded(generation, jobs);
            Vec::new()
        }
        Msg::FeedFailed {
            generation,
            message,
        } => {
            state.apply_failed(generation, message);
            Vec::new()
        }
        Msg::FeedCancelled { generation } => {
            state.apply_cancelled(generation);
            Vec::new()
        }
    };

    (state, effects)
}

fn reflect_effect(state: &AppState) -> Effect {
    Effect::ReflectUrl {
        query_string: reflect(&state.settled_filter()),
    }
}
