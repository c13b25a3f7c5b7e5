//! Remote product catalog access.
//!
//! The [`CatalogClient`] trait abstracts over the HTTP transport so the
//! suggestion scheduler can be driven by a mock in tests. The
//! [`HttpCatalogClient`] implementation fetches the catalog's
//! `products.json` search endpoint via `reqwest`.

mod client;
mod config;
mod error;
mod types;

pub use client::{CatalogClient, HttpCatalogClient};
pub use config::{CatalogConfig, DEFAULT_ENDPOINT, DEFAULT_PAGE_LIMIT};
pub use error::CatalogError;
pub use types::{Product, ProductPage};
