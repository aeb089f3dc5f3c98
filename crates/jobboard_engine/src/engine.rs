use std::sync::{mpsc, Arc};
use std::thread;

use board_logging::{board_debug, board_info, board_warn};
use tokio_util::sync::CancellationToken;

use crate::fetch::{FeedFetcher, FetchSettings, ReqwestFeedFetcher};
use crate::{FeedError, FeedEvent, LOAD_FAILURE_MESSAGE};
use jobboard_core::FetchGeneration;

enum EngineCommand {
    StartFetch {
        generation: FetchGeneration,
        url: String,
    },
    CancelFetch,
}

/// Handle to the background fetch engine.
///
/// Commands go in over a channel, feed events come back out. At most one
/// load is in flight; starting a new one cancels the previous token first,
/// and dropping the handle cancels whatever is still running.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<FeedEvent>,
}

impl EngineHandle {
    pub fn new(settings: FetchSettings) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let fetcher = Arc::new(ReqwestFeedFetcher::new(settings));

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            let mut in_flight: Option<CancellationToken> = None;
            while let Ok(command) = cmd_rx.recv() {
                match command {
                    EngineCommand::StartFetch { generation, url } => {
                        if let Some(token) = in_flight.take() {
                            token.cancel();
                        }
                        let token = CancellationToken::new();
                        in_flight = Some(token.clone());
                        let fetcher = fetcher.clone();
                        let event_tx = event_tx.clone();
                        runtime.spawn(async move {
                            run_fetch(fetcher.as_ref(), generation, &url, token, event_tx).await;
                        });
                    }
                    EngineCommand::CancelFetch => {
                        if let Some(token) = in_flight.take() {
                            token.cancel();
                        }
                    }
                }
            }
            // Handle dropped: cancel the in-flight load before the runtime
            // goes down with the thread.
            if let Some(token) = in_flight.take() {
                token.cancel();
            }
        });

        Self { cmd_tx, event_rx }
    }

    pub fn start_fetch(&self, generation: FetchGeneration, url: impl Into<String>) {
        let _ = self.cmd_tx.send(EngineCommand::StartFetch {
            generation,
            url: url.into(),
        });
    }

    pub fn cancel(&self) {
        let _ = self.cmd_tx.send(EngineCommand::CancelFetch);
    }

    pub fn try_recv(&self) -> Option<FeedEvent> {
        self.event_rx.try_recv().ok()
    }
}

async fn run_fetch(
    fetcher: &dyn FeedFetcher,
    generation: FetchGeneration,
    url: &str,
    cancel: CancellationToken,
    event_tx: mpsc::Sender<FeedEvent>,
) {
    board_debug!("feed load {generation} starting: {url}");
    let event = match fetcher.fetch(url, &cancel).await {
        Ok(jobs) => {
            board_info!("feed load {generation} returned {} jobs", jobs.len());
            FeedEvent::Loaded { generation, jobs }
        }
        Err(FeedError::Cancelled) => {
            board_debug!("feed load {generation} cancelled");
            FeedEvent::Cancelled { generation }
        }
        Err(err) => {
            board_warn!("feed load {generation} failed: {err}");
            FeedEvent::Failed {
                generation,
                message: LOAD_FAILURE_MESSAGE.to_string(),
            }
        }
    };
    let _ = event_tx.send(event);
}
