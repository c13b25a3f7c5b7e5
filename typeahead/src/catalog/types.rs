//! Catalog payload types.

use serde::Deserialize;

/// A single product from the remote catalog.
///
/// This is our own type, decoupled from any particular shop backend.
/// Only the fields needed for suggestion display are deserialized:
/// `id` is the stable list key, `title` is what gets rendered.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Product {
    pub id: u64,
    pub title: String,
}

/// One page of catalog search results.
///
/// We only deserialize the `products` array; other fields are ignored.
/// The provider's ordering is preserved as-is — no dedup, no re-sort.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductPage {
    pub products: Vec<Product>,
}
