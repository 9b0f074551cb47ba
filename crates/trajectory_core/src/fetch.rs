//! Fetch Controller
//!
//! Issues the one GET per activation and moves the view state
//! `Empty -> Pending -> Loaded | Empty`. Failures are logged and leave the
//! view empty; there is no retry.

use std::io::Read;
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info};

use crate::error::FetchError;
use crate::payload::TrainingResult;
use crate::state::ViewState;

/// Somewhere a training result can be fetched from. Called from a blocking thread.
pub trait PayloadSource: Send + 'static {
    fn fetch(&self) -> Result<TrainingResult, FetchError>;
}

/// Plain unauthenticated GET against the backend URL.
pub struct HttpSource {
    url: String,
    agent: ureq::Agent,
}

impl HttpSource {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(timeout).build();
        Self {
            url: url.into(),
            agent,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl PayloadSource for HttpSource {
    fn fetch(&self) -> Result<TrainingResult, FetchError> {
        info!("Fetching training result from {}", self.url);

        let response = match self.agent.get(&self.url).call() {
            Ok(response) => response,
            Err(ureq::Error::Status(code, _)) => return Err(FetchError::Status(code)),
            Err(e) => return Err(FetchError::Transport(e.to_string())),
        };

        let status = response.status();
        if !(200..300).contains(&status) {
            return Err(FetchError::Status(status));
        }

        let mut body = Vec::new();
        response.into_reader().read_to_end(&mut body)?;
        debug!("Received {} bytes", body.len());

        Ok(TrainingResult::from_slice(&body)?)
    }
}

/// Owns the view-state cell and the continuation of the single fetch.
///
/// Dropping the controller (or calling [`cancel`](Self::cancel)) cancels the
/// continuation. A response that arrives after cancellation is discarded
/// unwritten. One that completes while the drop is in progress may still be
/// written, but only into the state cell, which no controller reads anymore.
pub struct FetchController {
    state: watch::Receiver<ViewState>,
    cancel: CancellationToken,
}

impl FetchController {
    /// Starts the fetch on `runtime` and returns immediately in `Pending`.
    ///
    /// `notify` runs after every state write (e.g. to request a repaint).
    pub fn activate<S, N>(runtime: &Handle, source: S, notify: N) -> Self
    where
        S: PayloadSource,
        N: Fn() + Send + 'static,
    {
        let (tx, rx) = watch::channel(ViewState::Empty);
        let cancel = CancellationToken::new();

        tx.send_replace(ViewState::Pending);
        notify();

        let token = cancel.clone();
        runtime.spawn(async move {
            let request = tokio::task::spawn_blocking(move || source.fetch());

            let outcome = tokio::select! {
                biased;
                _ = token.cancelled() => {
                    debug!("Fetch cancelled before the response arrived");
                    return;
                }
                joined = request => joined,
            };

            if token.is_cancelled() {
                debug!("Dropping late fetch response");
                return;
            }

            let next = match outcome {
                Ok(Ok(result)) => {
                    info!(
                        "Loaded {} epochs ({} probability rows, {} history records)",
                        result.aligned_len(),
                        result.probabilities.len(),
                        result.training_history.len()
                    );
                    ViewState::Loaded(result.into())
                }
                Ok(Err(e)) => {
                    error!("Fetch failed: {}", e);
                    ViewState::Empty
                }
                Err(e) => {
                    error!("Fetch failed: {}", FetchError::Join(e.to_string()));
                    ViewState::Empty
                }
            };

            tx.send_replace(next);
            notify();
        });

        Self { state: rx, cancel }
    }

    /// Snapshot of the current view state.
    pub fn view(&self) -> ViewState {
        self.state.borrow().clone()
    }

    /// Read-only handle on the state cell.
    pub fn subscribe(&self) -> watch::Receiver<ViewState> {
        self.state.clone()
    }

    /// Waits until the fetch has resolved one way or the other.
    ///
    /// Returns the last written state if the continuation ended without writing.
    pub async fn settled(&self) -> ViewState {
        let mut rx = self.state.clone();
        let settled = match rx.wait_for(|state| !state.is_pending()).await {
            Ok(state) => Some((*state).clone()),
            Err(_) => None,
        };
        settled.unwrap_or_else(|| self.view())
    }

    pub fn cancel(&self) {
        self.cancel.cancel();
    }
}

impl Drop for FetchController {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
