//! Presentation-facing handle for the suggestion daemon.
//!
//! The handle is the entire surface the presentation layer sees: one
//! write entry point ([`SuggestHandle::set_query`]) and the published
//! [`SuggestionState`] read side. It is cloneable; all clones drive the
//! same daemon.

use tokio::sync::{mpsc, watch};
use tokio_util::sync::CancellationToken;
use tracing::warn;

use super::state::SuggestionState;

/// Handle to a running [`SuggestDaemon`](super::SuggestDaemon).
#[derive(Clone)]
pub struct SuggestHandle {
    query_tx: mpsc::Sender<String>,
    state_rx: watch::Receiver<SuggestionState>,
    shutdown: CancellationToken,
}

impl SuggestHandle {
    pub(crate) fn new(
        query_tx: mpsc::Sender<String>,
        state_rx: watch::Receiver<SuggestionState>,
        shutdown: CancellationToken,
    ) -> Self {
        Self {
            query_tx,
            state_rx,
            shutdown,
        }
    }

    /// Sends a query update, waiting for channel capacity if needed.
    ///
    /// Returns false if the daemon has stopped.
    pub async fn set_query(&self, query: impl Into<String>) -> bool {
        self.query_tx.send(query.into()).await.is_ok()
    }

    /// Sends a query update without waiting.
    ///
    /// Intended for synchronous UI event loops. Returns false if the
    /// update could not be delivered.
    pub fn try_set_query(&self, query: impl Into<String>) -> bool {
        match self.query_tx.try_send(query.into()) {
            Ok(()) => true,
            Err(mpsc::error::TrySendError::Full(_)) => {
                warn!("Query channel full, update dropped");
                false
            }
            Err(mpsc::error::TrySendError::Closed(_)) => false,
        }
    }

    /// Returns a snapshot of the most recently published state.
    pub fn state(&self) -> SuggestionState {
        self.state_rx.borrow().clone()
    }

    /// Waits until the published state changes.
    ///
    /// Returns false once the daemon has stopped and no further change
    /// will ever arrive.
    pub async fn changed(&mut self) -> bool {
        self.state_rx.changed().await.is_ok()
    }

    /// Tears the daemon down: pending debounce and in-flight request are
    /// cancelled, and no further state is published.
    pub fn shutdown(&self) {
        self.shutdown.cancel();
    }
}
