//! Typeahead - debounced product search suggestions
//!
//! This library turns a stream of query-string updates (one per keystroke)
//! into at most one outstanding catalog request per pause in typing, and
//! publishes the latest suggestions to a presentation layer.
//!
//! # High-Level API
//!
//! ```ignore
//! use typeahead::catalog::{CatalogConfig, HttpCatalogClient};
//! use typeahead::suggest::{SuggestConfig, SuggestDaemon};
//!
//! let client = HttpCatalogClient::new(CatalogConfig::default())?;
//! let (daemon, handle) = SuggestDaemon::new(client, SuggestConfig::default());
//! daemon.start();
//!
//! // One write entry point, four read fields.
//! handle.set_query("shoes").await;
//! let state = handle.state();
//! ```

pub mod catalog;
pub mod logging;
pub mod suggest;

/// Version of the typeahead library and CLI.
///
/// This is synchronized across all components in the workspace.
/// The version is defined in `Cargo.toml` and injected at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
