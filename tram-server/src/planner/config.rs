//! Search configuration for the route planner.

/// Configuration parameters for route search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchConfig {
    /// Maximum number of transfers an itinerary may contain.
    /// `None` searches the whole network.
    pub max_transfers: Option<usize>,
}

impl SearchConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(max_transfers: Option<usize>) -> Self {
        Self { max_transfers }
    }

    /// Returns true if a state that has already ridden `hops` lines may
    /// board another one.
    pub fn may_board(&self, hops: usize) -> bool {
        // One more hop means `hops` transfers
        self.max_transfers.is_none_or(|max| hops <= max)
    }
}
