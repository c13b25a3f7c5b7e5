//! Catalog client configuration.

use std::time::Duration;

/// Default catalog search endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://everyhuman.com.au/products.json";

/// Default number of suggestions requested per search.
pub const DEFAULT_PAGE_LIMIT: u32 = 5;

/// Default HTTP timeout for catalog requests.
pub const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(10);

/// Configuration for a catalog client.
///
/// The page number is fixed at 1: suggestions only ever show the first
/// page of results.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Search endpoint returning `{ "products": [...] }`.
    pub endpoint: String,

    /// Number of products requested per search.
    pub page_limit: u32,

    /// HTTP timeout for a single request.
    pub timeout: Duration,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            page_limit: DEFAULT_PAGE_LIMIT,
            timeout: DEFAULT_HTTP_TIMEOUT,
        }
    }
}

impl CatalogConfig {
    /// Sets a custom search endpoint.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Sets the number of products requested per search.
    pub fn with_page_limit(mut self, limit: u32) -> Self {
        self.page_limit = limit;
        self
    }

    /// Sets a custom HTTP timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
