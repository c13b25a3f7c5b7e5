//! Published suggestion state.

use crate::catalog::Product;

/// Generic user-facing message for any catalog failure.
///
/// Network errors, bad statuses and malformed bodies all surface
/// identically; no structured detail is retained for the user.
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch products.";

/// The state the presentation layer renders from.
///
/// Mutated only by the outcome of the most recent non-cancelled request;
/// stale outcomes are discarded before they reach this struct.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuggestionState {
    /// Current search string, updated on every keystroke.
    pub query: String,

    /// Latest suggestions, in provider order.
    pub suggestions: Vec<Product>,

    /// True from the moment a request is issued until its
    /// (non-cancelled) completion.
    pub loading: bool,

    /// User-facing error message, if the latest request failed.
    pub error: Option<String>,
}

impl SuggestionState {
    /// Resets to the empty-query state: no suggestions, no error,
    /// not loading.
    pub fn clear(&mut self) {
        self.query.clear();
        self.suggestions.clear();
        self.loading = false;
        self.error = None;
    }
}
