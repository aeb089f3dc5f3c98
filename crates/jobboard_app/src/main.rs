//! Terminal front end for the jobboard filter core.
//!
//! Purely a consumer: stdin lines and engine events become messages, the
//! update function owns every transition, and this binary just prints the
//! resulting view model. No filtering happens here.
mod render;

use std::io::{self, BufRead};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use board_logging::board_debug;
use clap::Parser;
use jobboard_core::{update, AppState, Effect, MemoryUrlStore, Msg, UrlStore, DEBOUNCE_DELAY};
use jobboard_engine::{EngineHandle, FeedEvent, FetchSettings};

/// Job postings browser: loads a JSON feed once and filters it locally.
///
/// Type a line to search, `/remote` to toggle the remote-only filter,
/// `/retry` to reload the feed, `/quit` to exit.
#[derive(Debug, Parser)]
#[command(name = "jobboard", version, about)]
struct Cli {
    /// Feed URL returning a JSON array of job postings.
    #[arg(long)]
    feed: String,
    /// Page URL or bare query string to hydrate the filter from,
    /// e.g. "https://jobs.example/?q=qa&remote=1" or "q=qa&remote=1".
    #[arg(long)]
    link: Option<String>,
    /// Debounce window for the search query, in milliseconds.
    #[arg(long, default_value_t = DEBOUNCE_DELAY.as_millis() as u64)]
    debounce_ms: u64,
    /// Render the first load and exit instead of reading stdin.
    #[arg(long)]
    once: bool,
}

enum Input {
    Line(String),
    Eof,
}

fn main() {
    let cli = Cli::parse();
    init_logging();

    let mut url_store = MemoryUrlStore::with_query(extract_query(cli.link.as_deref()));
    let mut state = AppState::hydrated(
        &url_store.query_string(),
        Duration::from_millis(cli.debounce_ms),
    );
    let engine = EngineHandle::new(FetchSettings::default());

    render::print_frame(&state.view(), &url_store);

    let (input_tx, input_rx) = mpsc::channel();
    if cli.once {
        drop(input_tx);
    } else {
        spawn_stdin_reader(input_tx);
    }

    // Kick off the single-shot load.
    dispatch(&mut state, Msg::FetchRequested, &engine, &cli.feed, &mut url_store);

    let mut stdin_closed = cli.once;
    let tick = Duration::from_millis(50);
    loop {
        while let Some(event) = engine.try_recv() {
            dispatch(&mut state, feed_msg(event), &engine, &cli.feed, &mut url_store);
        }

        loop {
            match input_rx.try_recv() {
                Ok(Input::Line(line)) => {
                    if !handle_line(line, &mut state, &engine, &cli.feed, &mut url_store) {
                        return;
                    }
                }
                Ok(Input::Eof) | Err(mpsc::TryRecvError::Disconnected) => {
                    stdin_closed = true;
                    break;
                }
                Err(mpsc::TryRecvError::Empty) => break,
            }
        }

        dispatch(
            &mut state,
            Msg::Tick {
                now: Instant::now(),
            },
            &engine,
            &cli.feed,
            &mut url_store,
        );

        if state.consume_dirty() {
            render::print_frame(&state.view(), &url_store);
        }

        // With input exhausted, leave once the load is settled and the
        // debounce window has drained.
        if stdin_closed && !state.view().loading && !state.query_pending() {
            return;
        }

        thread::sleep(tick);
    }
}

/// Routes one stdin line: slash commands drive the session, anything else
/// is a raw query edit. Returns false when the user asked to quit.
fn handle_line(
    line: String,
    state: &mut AppState,
    engine: &EngineHandle,
    feed_url: &str,
    url_store: &mut MemoryUrlStore,
) -> bool {
    let trimmed = line.trim();
    if trimmed == "/quit" || trimmed == "/q" {
        return false;
    }
    if trimmed == "/retry" {
        dispatch(state, Msg::FetchRequested, engine, feed_url, url_store);
        return true;
    }
    if trimmed == "/remote" {
        let remote_only = !state.view().remote_only;
        dispatch(
            state,
            Msg::RemoteOnlyToggled(remote_only),
            engine,
            feed_url,
            url_store,
        );
        return true;
    }
    dispatch(
        state,
        Msg::QueryEdited {
            text: line,
            now: Instant::now(),
        },
        engine,
        feed_url,
        url_store,
    );
    true
}

fn dispatch(
    state: &mut AppState,
    msg: Msg,
    engine: &EngineHandle,
    feed_url: &str,
    url_store: &mut MemoryUrlStore,
) {
    let (next, effects) = update(std::mem::take(state), msg);
    *state = next;
    for effect in effects {
        match effect {
            Effect::CancelFetch => engine.cancel(),
            Effect::StartFetch { generation } => engine.start_fetch(generation, feed_url),
            Effect::ReflectUrl { query_string } => {
                board_debug!("location query is now ?{query_string}");
                url_store.replace_query(&query_string);
            }
        }
    }
}

fn feed_msg(event: FeedEvent) -> Msg {
    match event {
        FeedEvent::Loaded { generation, jobs } => Msg::FeedLoaded { generation, jobs },
        FeedEvent::Failed {
            generation,
            message,
        } => Msg::FeedFailed {
            generation,
            message,
        },
        FeedEvent::Cancelled { generation } => Msg::FeedCancelled { generation },
    }
}

/// Accepts a full page URL or a bare query string and returns the query
/// string to hydrate from.
fn extract_query(link: Option<&str>) -> String {
    let Some(link) = link else {
        return String::new();
    };
    if let Ok(parsed) = url::Url::parse(link) {
        return parsed.query().unwrap_or("").to_string();
    }
    match link.split_once('?') {
        Some((_, query)) => query.to_string(),
        None => link.to_string(),
    }
}

fn spawn_stdin_reader(tx: mpsc::Sender<Input>) {
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            match line {
                Ok(line) => {
                    if tx.send(Input::Line(line)).is_err() {
                        return;
                    }
                }
                Err(_) => break,
            }
        }
        let _ = tx.send(Input::Eof);
    });
}

fn init_logging() {
    use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

    // Stderr keeps stdout clean for the rendered job list.
    let _ = TermLogger::init(
        log::LevelFilter::Info,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    );
}
