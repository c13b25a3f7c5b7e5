//! Suggestion daemon - the debounce/cancel event loop.
//!
//! The [`SuggestDaemon`] owns every piece of mutable scheduling state:
//! the pending debounce deadline, the handle to the single in-flight
//! request, and the epoch counter that guards against stale completions.
//! Input events, timer fires and fetch completions are processed as
//! discrete steps of one `tokio::select!` loop, so supersession can never
//! race a completion.
//!
//! # Stale outcomes
//!
//! Cancelling a request is advisory: the transport may still produce a
//! completion afterwards. Every issued request is therefore tagged with
//! an epoch, and a completion is applied only when its epoch matches the
//! live request. Handle replacement alone is not trusted to make old
//! callbacks unreachable.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, trace, warn};

use crate::catalog::{CatalogClient, CatalogError, Product};

use super::config::SuggestConfig;
use super::handle::SuggestHandle;
use super::state::{SuggestionState, FETCH_FAILED_MESSAGE};

/// Capacity of the internal fetch outcome channel.
const OUTCOME_CAPACITY: usize = 8;

/// Outcome of one catalog search, tagged with the epoch it was issued at.
struct FetchOutcome {
    epoch: u64,
    result: Result<Vec<Product>, CatalogError>,
}

/// Handle to the single in-flight request.
struct InFlightRequest {
    epoch: u64,
    cancel: CancellationToken,
}

/// Debounced suggestion fetcher.
///
/// Given a stream of query updates, issues at most one outstanding
/// catalog request per settled query, cancels requests made obsolete by
/// newer input, and publishes the latest [`SuggestionState`].
///
/// # Lifecycle
///
/// 1. **Creation**: [`SuggestDaemon::new`] returns the daemon and its
///    [`SuggestHandle`]
/// 2. **Operation**: [`SuggestDaemon::start`] spawns the event loop;
///    the handle feeds it queries and reads published state
/// 3. **Shutdown**: [`SuggestHandle::shutdown`] cancels the loop, which
///    cancels any in-flight request and stops publishing
pub struct SuggestDaemon<C: CatalogClient> {
    /// Transport used to search the catalog.
    client: Arc<C>,

    /// Scheduler configuration.
    config: SuggestConfig,

    /// Query updates from the presentation layer.
    query_rx: mpsc::Receiver<String>,

    /// Published state consumed by the presentation layer.
    state_tx: watch::Sender<SuggestionState>,

    /// Shutdown token shared with the handle.
    shutdown: CancellationToken,

    /// Epoch of the most recently issued request.
    epoch: u64,

    /// The single live request, if any.
    in_flight: Option<InFlightRequest>,
}

impl<C: CatalogClient + 'static> SuggestDaemon<C> {
    /// Creates a new daemon and the handle the presentation layer uses
    /// to drive it.
    pub fn new(client: C, config: SuggestConfig) -> (Self, SuggestHandle) {
        let (query_tx, query_rx) = mpsc::channel(config.query_capacity);
        let (state_tx, state_rx) = watch::channel(SuggestionState::default());
        let shutdown = CancellationToken::new();

        let daemon = Self {
            client: Arc::new(client),
            config,
            query_rx,
            state_tx,
            shutdown: shutdown.clone(),
            epoch: 0,
            in_flight: None,
        };
        let handle = SuggestHandle::new(query_tx, state_rx, shutdown);

        (daemon, handle)
    }

    /// Starts the daemon as an async task.
    pub fn start(self) -> JoinHandle<()> {
        tokio::spawn(self.run())
    }

    /// Runs the event loop until shutdown or until every handle is gone.
    pub async fn run(mut self) {
        info!(
            debounce_ms = self.config.debounce_interval.as_millis() as u64,
            "Suggestion daemon started"
        );

        let (outcome_tx, mut outcome_rx) = mpsc::channel(OUTCOME_CAPACITY);
        let shutdown = self.shutdown.clone();

        // At most one armed debounce window: re-arming overwrites the
        // pending query and resets the shared timer.
        let mut pending: Option<String> = None;
        let timer = tokio::time::sleep(Duration::ZERO);
        tokio::pin!(timer);

        loop {
            tokio::select! {
                biased;

                _ = shutdown.cancelled() => {
                    debug!("Suggestion daemon shutting down");
                    break;
                }

                maybe_query = self.query_rx.recv() => {
                    match maybe_query {
                        Some(query) if query.is_empty() => {
                            pending = None;
                            self.clear();
                        }
                        Some(query) => {
                            self.state_tx.send_modify(|state| state.query = query.clone());
                            pending = Some(query);
                            timer.as_mut().reset(Instant::now() + self.config.debounce_interval);
                        }
                        None => {
                            debug!("All suggestion handles dropped, stopping");
                            break;
                        }
                    }
                }

                () = timer.as_mut(), if pending.is_some() => {
                    if let Some(query) = pending.take() {
                        self.issue(query, &outcome_tx);
                    }
                }

                Some(outcome) = outcome_rx.recv() => {
                    self.apply_outcome(outcome);
                }
            }
        }

        // Teardown: whatever is still in flight gets cancelled and no
        // state is published past this point.
        self.cancel_in_flight();
        info!("Suggestion daemon stopped");
    }

    /// Empty query: cancel everything, clear published state. No request
    /// is made.
    fn clear(&mut self) {
        trace!("Query cleared, cancelling any in-flight search");
        self.cancel_in_flight();
        self.state_tx.send_modify(|state| state.clear());
    }

    /// Cancels the live request, if any. Idempotent.
    fn cancel_in_flight(&mut self) {
        if let Some(in_flight) = self.in_flight.take() {
            trace!(epoch = in_flight.epoch, "Cancelling in-flight search");
            in_flight.cancel.cancel();
        }
    }

    /// Issues a catalog search for a settled query.
    fn issue(&mut self, query: String, outcome_tx: &mpsc::Sender<FetchOutcome>) {
        // Cancel the previous request, then create its replacement. The
        // explicit two-step keeps at most one live request at any instant.
        self.cancel_in_flight();

        self.epoch += 1;
        let epoch = self.epoch;
        let cancel = CancellationToken::new();
        self.in_flight = Some(InFlightRequest {
            epoch,
            cancel: cancel.clone(),
        });

        self.state_tx.send_modify(|state| {
            state.loading = true;
            state.error = None;
        });

        debug!(query = %query, epoch, "Issuing catalog search");

        let client = Arc::clone(&self.client);
        let outcome_tx = outcome_tx.clone();
        tokio::spawn(async move {
            let result = client.search(&query, &cancel).await;
            // The daemon may already be gone; a closed channel is fine.
            let _ = outcome_tx.send(FetchOutcome { epoch, result }).await;
        });
    }

    /// Applies a fetch completion to published state, unless it is
    /// cancelled or stale.
    fn apply_outcome(&mut self, outcome: FetchOutcome) {
        // Cancellation is silent: discarded without touching state.
        if let Err(CatalogError::Cancelled) = &outcome.result {
            trace!(epoch = outcome.epoch, "Cancelled search outcome discarded");
            return;
        }

        // A completion that does not match the live request is stale.
        // Its cancellation may still be propagating, so this epoch check
        // is what actually protects published state.
        let live_epoch = self.in_flight.as_ref().map(|r| r.epoch);
        if live_epoch != Some(outcome.epoch) {
            trace!(
                epoch = outcome.epoch,
                live_epoch,
                "Stale search outcome discarded"
            );
            return;
        }
        self.in_flight = None;

        match outcome.result {
            Ok(products) => {
                debug!(
                    epoch = outcome.epoch,
                    products = products.len(),
                    "Catalog search succeeded"
                );
                self.state_tx.send_modify(|state| {
                    state.suggestions = products;
                    state.error = None;
                    state.loading = false;
                });
            }
            Err(error) => {
                warn!(epoch = outcome.epoch, error = %error, "Catalog search failed");
                self.state_tx.send_modify(|state| {
                    state.error = Some(FETCH_FAILED_MESSAGE.to_string());
                    state.loading = false;
                });
            }
        }
    }
}
