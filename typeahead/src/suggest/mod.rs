//! Debounced suggestion scheduling.
//!
//! This module is the core of the library: it coalesces bursty query
//! updates into at most one catalog request per pause in typing, cancels
//! requests made obsolete by newer input, and publishes the latest
//! [`SuggestionState`] to the presentation layer.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐  set_query   ┌──────────────────┐  search   ┌───────────────┐
//! │ Presentation │ ───────────► │  SuggestDaemon   │ ────────► │ CatalogClient │
//! │ (TUI, tests) │              │  (event loop)    │ ◄──────── │  (transport)  │
//! └──────▲───────┘              └────────┬─────────┘  outcome  └───────────────┘
//!        │                               │
//!        └────── watch<SuggestionState> ─┘
//! ```
//!
//! All mutable state (pending debounce deadline, in-flight request handle,
//! epoch counter) is owned by the daemon's single task; input events,
//! timer fires and fetch completions are handled as discrete, serialized
//! steps, so no locking is needed.

mod config;
mod daemon;
mod handle;
mod state;

pub use config::{SuggestConfig, DEFAULT_DEBOUNCE_INTERVAL};
pub use daemon::SuggestDaemon;
pub use handle::SuggestHandle;
pub use state::{SuggestionState, FETCH_FAILED_MESSAGE};
