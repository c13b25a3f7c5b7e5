//! Suggestion scheduler configuration.

use std::time::Duration;

/// Default debounce interval between the last keystroke and the request.
pub const DEFAULT_DEBOUNCE_INTERVAL: Duration = Duration::from_millis(500);

/// Default capacity of the query update channel.
pub const DEFAULT_QUERY_CAPACITY: usize = 32;

/// Configuration for the suggestion daemon.
#[derive(Debug, Clone)]
pub struct SuggestConfig {
    /// How long the input must stay quiet before a request is issued.
    pub debounce_interval: Duration,

    /// Capacity of the query update channel between the presentation
    /// layer and the daemon.
    pub query_capacity: usize,
}

impl Default for SuggestConfig {
    fn default() -> Self {
        Self {
            debounce_interval: DEFAULT_DEBOUNCE_INTERVAL,
            query_capacity: DEFAULT_QUERY_CAPACITY,
        }
    }
}

impl SuggestConfig {
    /// Sets a custom debounce interval.
    pub fn with_debounce_interval(mut self, interval: Duration) -> Self {
        self.debounce_interval = interval;
        self
    }

    /// Sets a custom query channel capacity (minimum 1).
    pub fn with_query_capacity(mut self, capacity: usize) -> Self {
        self.query_capacity = capacity.max(1);
        self
    }
}
