//! Catalog client trait and HTTP implementation.
//!
//! The [`CatalogClient`] trait is the transport seam of the suggestion
//! pipeline: the scheduler only ever talks to this trait, so the real
//! `reqwest` transport and test mocks are interchangeable at composition
//! time. The [`HttpCatalogClient`] implementation performs
//! `GET <endpoint>?limit=<n>&page=1&q=<query>` and decodes the product
//! list from the JSON body.

use std::future::Future;

use tokio_util::sync::CancellationToken;

use super::config::CatalogConfig;
use super::error::CatalogError;
use super::types::{Product, ProductPage};

/// Page number sent with every search. Suggestions only show page one.
const SEARCH_PAGE: u32 = 1;

/// Trait for searching the remote product catalog.
///
/// The cancellation token is part of the contract: implementations must
/// stop work and return [`CatalogError::Cancelled`] once the token is
/// cancelled, rather than letting the request run to completion.
pub trait CatalogClient: Send + Sync {
    /// Searches the catalog for products matching `query`.
    ///
    /// # Arguments
    ///
    /// * `query` - The raw (un-encoded) search term
    /// * `cancel` - Token signalling that the result is no longer wanted
    ///
    /// # Returns
    ///
    /// The matching products in provider order, or an error.
    fn search(
        &self,
        query: &str,
        cancel: &CancellationToken,
    ) -> impl Future<Output = Result<Vec<Product>, CatalogError>> + Send;
}

/// Catalog client using direct HTTP requests.
///
/// Uses a reusable `reqwest::Client` with connection pooling and timeouts.
#[derive(Clone)]
pub struct HttpCatalogClient {
    /// Reusable HTTP client with connection pooling.
    http: reqwest::Client,

    /// Endpoint and paging configuration.
    config: CatalogConfig,
}

impl HttpCatalogClient {
    /// Creates a new HTTP catalog client from the given configuration.
    pub fn new(config: CatalogConfig) -> Result<Self, CatalogError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| CatalogError::Http(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { http, config })
    }

    /// Builds the search URL for a query, URL-encoding the term.
    fn search_url(&self, query: &str) -> Result<reqwest::Url, CatalogError> {
        reqwest::Url::parse_with_params(
            &self.config.endpoint,
            &[
                ("limit", self.config.page_limit.to_string()),
                ("page", SEARCH_PAGE.to_string()),
                ("q", query.to_string()),
            ],
        )
        .map_err(|e| CatalogError::InvalidUrl(e.to_string()))
    }

    /// Performs the HTTP GET and decodes the product list.
    async fn fetch(&self, url: reqwest::Url) -> Result<Vec<Product>, CatalogError> {
        let response = match self.http.get(url.clone()).send().await {
            Ok(resp) => {
                tracing::debug!(
                    url = %url,
                    status = resp.status().as_u16(),
                    "Catalog response received"
                );
                resp
            }
            Err(e) => {
                tracing::warn!(url = %url, error = %e, "Catalog request failed");
                return Err(CatalogError::Http(format!("Request failed: {}", e)));
            }
        };

        // Check HTTP status
        if !response.status().is_success() {
            tracing::warn!(
                url = %url,
                status = response.status().as_u16(),
                "Catalog error status"
            );
            return Err(CatalogError::Status(response.status().as_u16()));
        }

        // Read and decode the response body
        let bytes = response
            .bytes()
            .await
            .map_err(|e| CatalogError::Http(format!("Failed to read response: {}", e)))?;

        let page: ProductPage =
            serde_json::from_slice(&bytes).map_err(|e| CatalogError::Json(e.to_string()))?;

        tracing::debug!(products = page.products.len(), "Catalog page decoded");

        Ok(page.products)
    }
}

impl CatalogClient for HttpCatalogClient {
    async fn search(
        &self,
        query: &str,
        cancel: &CancellationToken,
    ) -> Result<Vec<Product>, CatalogError> {
        let url = self.search_url(query)?;

        tokio::select! {
            biased;

            _ = cancel.cancelled() => {
                tracing::trace!(query = query, "Catalog search cancelled");
                Err(CatalogError::Cancelled)
            }

            result = self.fetch(url) => result,
        }
    }
}
