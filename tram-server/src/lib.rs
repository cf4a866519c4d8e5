//! Tram route planner server.
//!
//! Loads a city's tram network from a text description and answers:
//! "which trams do I take to get from here to there with the fewest
//! changes?"

pub mod config;
pub mod domain;
pub mod format;
pub mod index;
pub mod loader;
pub mod planner;
pub mod web;

#[cfg(test)]
mod test_support;
