//! Route planner using BFS search.
//!
//! This module implements the core route planning algorithm that answers:
//! "how do I get from this stop to that one with the fewest changes?"
//!
//! The search explores every stop reachable on the lines serving the
//! current stop before considering one more transfer, so the first route
//! found uses the fewest lines.

mod config;
mod search;

pub use config::SearchConfig;
pub use search::{Planner, find_route};
