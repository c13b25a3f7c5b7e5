//! End-to-end scenarios for the debounced suggestion pipeline.
//!
//! These tests drive a [`SuggestDaemon`] through a scripted transport and
//! assert on the published state, using a short debounce interval and
//! generous settle margins so timing stays reliable on slow machines.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio_util::sync::CancellationToken;
use typeahead::catalog::{CatalogClient, CatalogError, Product};
use typeahead::suggest::{SuggestConfig, SuggestDaemon, FETCH_FAILED_MESSAGE};

/// Debounce interval used across these tests.
const DEBOUNCE: Duration = Duration::from_millis(50);

/// Long enough for a debounce window plus a fast fetch to settle.
const SETTLE: Duration = Duration::from_millis(300);

type Responder = Box<dyn Fn(usize, &str) -> Result<Vec<Product>, CatalogError> + Send + Sync>;

/// Transport double that records every search and answers from a closure.
struct ScriptedCatalog {
    requests: Arc<Mutex<Vec<String>>>,
    respond: Responder,
    delay: Duration,
}

impl ScriptedCatalog {
    fn new(
        respond: impl Fn(usize, &str) -> Result<Vec<Product>, CatalogError> + Send + Sync + 'static,
    ) -> Self {
        Self {
            requests: Arc::new(Mutex::new(Vec::new())),
            respond: Box::new(respond),
            delay: Duration::ZERO,
        }
    }

    /// Simulates network latency before the scripted answer.
    fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    fn requests(&self) -> Arc<Mutex<Vec<String>>> {
        Arc::clone(&self.requests)
    }
}

impl CatalogClient for ScriptedCatalog {
    async fn search(
        &self,
        query: &str,
        cancel: &CancellationToken,
    ) -> Result<Vec<Product>, CatalogError> {
        let index = {
            let mut requests = self.requests.lock().unwrap();
            requests.push(query.to_string());
            requests.len() - 1
        };

        tokio::select! {
            biased;

            _ = cancel.cancelled() => Err(CatalogError::Cancelled),

            _ = tokio::time::sleep(self.delay) => (self.respond)(index, query),
        }
    }
}

fn product(id: u64, title: &str) -> Product {
    Product {
        id,
        title: title.to_string(),
    }
}

fn test_config() -> SuggestConfig {
    SuggestConfig::default().with_debounce_interval(DEBOUNCE)
}

#[tokio::test]
async fn burst_issues_single_request_for_final_query() {
    let catalog = ScriptedCatalog::new(|_, query| Ok(vec![Product {
        id: 1,
        title: query.to_string(),
    }]));
    let requests = catalog.requests();

    let (daemon, handle) = SuggestDaemon::new(catalog, test_config());
    let _daemon_task = daemon.start();

    // Three keystrokes well inside one debounce window.
    assert!(handle.set_query("a").await);
    assert!(handle.set_query("ab").await);
    assert!(handle.set_query("abc").await);

    tokio::time::sleep(SETTLE).await;

    assert_eq!(*requests.lock().unwrap(), vec!["abc".to_string()]);
    let state = handle.state();
    assert_eq!(state.suggestions, vec![product(1, "abc")]);
    assert!(!state.loading);
}

#[tokio::test]
async fn success_populates_suggestions() {
    let catalog = ScriptedCatalog::new(|_, _| Ok(vec![Product {
        id: 1,
        title: "Red Shoes".to_string(),
    }]));

    let (daemon, handle) = SuggestDaemon::new(catalog, test_config());
    let _daemon_task = daemon.start();

    handle.set_query("shoes").await;
    tokio::time::sleep(SETTLE).await;

    let state = handle.state();
    assert_eq!(state.query, "shoes");
    assert_eq!(state.suggestions, vec![product(1, "Red Shoes")]);
    assert!(state.error.is_none());
    assert!(!state.loading);
}

#[tokio::test]
async fn server_error_keeps_previous_suggestions() {
    // First search succeeds, second hits a server error.
    let catalog = ScriptedCatalog::new(|index, _| match index {
        0 => Ok(vec![Product {
            id: 2,
            title: "Dress Shoes".to_string(),
        }]),
        _ => Err(CatalogError::Status(500)),
    });

    let (daemon, handle) = SuggestDaemon::new(catalog, test_config());
    let _daemon_task = daemon.start();

    handle.set_query("shoes").await;
    tokio::time::sleep(SETTLE).await;
    assert_eq!(handle.state().suggestions, vec![product(2, "Dress Shoes")]);

    handle.set_query("x").await;
    tokio::time::sleep(SETTLE).await;

    let state = handle.state();
    assert_eq!(state.error.as_deref(), Some(FETCH_FAILED_MESSAGE));
    // The failed search must not disturb what was already shown.
    assert_eq!(state.suggestions, vec![product(2, "Dress Shoes")]);
    assert!(!state.loading);
}

#[tokio::test]
async fn clearing_query_cancels_in_flight_request() {
    let catalog =
        ScriptedCatalog::new(|_, _| Ok(vec![Product {
            id: 1,
            title: "A".to_string(),
        }]))
        .with_delay(Duration::from_millis(500));
    let requests = catalog.requests();

    let (daemon, handle) = SuggestDaemon::new(catalog, test_config());
    let _daemon_task = daemon.start();

    handle.set_query("a").await;

    // Let the debounce fire and the slow request get airborne.
    tokio::time::sleep(Duration::from_millis(150)).await;
    assert_eq!(*requests.lock().unwrap(), vec!["a".to_string()]);
    assert!(handle.state().loading);

    handle.set_query("").await;
    tokio::time::sleep(Duration::from_millis(100)).await;

    let state = handle.state();
    assert!(state.query.is_empty());
    assert!(state.suggestions.is_empty());
    assert!(state.error.is_none());
    assert!(!state.loading);

    // Even after the cancelled request's latency has elapsed, nothing
    // about it may land.
    tokio::time::sleep(Duration::from_millis(600)).await;
    let state = handle.state();
    assert!(state.suggestions.is_empty());
    assert!(state.error.is_none());
    assert_eq!(*requests.lock().unwrap(), vec!["a".to_string()]);
}

#[tokio::test]
async fn empty_query_never_contacts_transport() {
    let catalog = ScriptedCatalog::new(|_, _| Ok(Vec::new()));
    let requests = catalog.requests();

    let (daemon, handle) = SuggestDaemon::new(catalog, test_config());
    let _daemon_task = daemon.start();

    handle.set_query("").await;
    handle.set_query("").await;
    tokio::time::sleep(SETTLE).await;

    assert!(requests.lock().unwrap().is_empty());
}

#[tokio::test]
async fn superseded_request_never_overwrites_newer_result() {
    let catalog = ScriptedCatalog::new(|index, query| {
        Ok(vec![Product {
            id: index as u64,
            title: query.to_string(),
        }])
    })
    .with_delay(Duration::from_millis(150));
    let requests = catalog.requests();

    let (daemon, handle) = SuggestDaemon::new(catalog, test_config());
    let _daemon_task = daemon.start();

    // First query settles and goes out...
    handle.set_query("red").await;
    tokio::time::sleep(Duration::from_millis(120)).await;

    // ...then a second query supersedes it while it is still in flight.
    handle.set_query("blue").await;
    tokio::time::sleep(Duration::from_millis(500)).await;

    assert_eq!(
        *requests.lock().unwrap(),
        vec!["red".to_string(), "blue".to_string()]
    );
    let state = handle.state();
    assert_eq!(state.suggestions, vec![product(1, "blue")]);
    assert!(state.error.is_none());
    assert!(!state.loading);
}

#[tokio::test]
async fn loading_spans_the_whole_request() {
    let catalog =
        ScriptedCatalog::new(|_, _| Ok(Vec::new())).with_delay(Duration::from_millis(300));

    let (daemon, handle) = SuggestDaemon::new(catalog, test_config());
    let _daemon_task = daemon.start();

    handle.set_query("shoes").await;

    tokio::time::sleep(Duration::from_millis(150)).await;
    let state = handle.state();
    assert!(state.loading);
    assert!(state.error.is_none());

    tokio::time::sleep(Duration::from_millis(400)).await;
    assert!(!handle.state().loading);
}

#[tokio::test]
async fn shutdown_cancels_in_flight_request() {
    let catalog =
        ScriptedCatalog::new(|_, _| Ok(Vec::new())).with_delay(Duration::from_secs(10));
    let requests = catalog.requests();

    let (daemon, handle) = SuggestDaemon::new(catalog, test_config());
    let task = daemon.start();

    handle.set_query("a").await;
    tokio::time::sleep(Duration::from_millis(150)).await;
    assert_eq!(*requests.lock().unwrap(), vec!["a".to_string()]);

    handle.shutdown();

    let result = tokio::time::timeout(Duration::from_secs(1), task).await;
    assert!(result.is_ok(), "daemon should stop promptly on shutdown");
}
