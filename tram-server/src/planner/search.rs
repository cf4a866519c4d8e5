//! BFS route search.
//!
//! Finds the itinerary with the fewest hops (lines ridden) between two
//! stops, exploring every stop reachable without changing lines before
//! considering one more transfer.

use std::collections::{HashSet, VecDeque};

use tracing::{debug, trace, warn};

use crate::domain::{Direction, Hop, Itinerary, LineId, Network};

use super::config::SearchConfig;

/// A hop found during search, as positions into a line-direction.
///
/// Stop names are only copied out once the winning route is known.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct HopSpan {
    line: LineId,
    direction: Direction,
    board: usize,
    alight: usize,
}

/// BFS state: a partial itinerary ending at a stop.
#[derive(Debug, Clone)]
struct SearchState<'a> {
    stop: &'a str,
    hops: Vec<HopSpan>,
    /// Number of hops taken to get here.
    depth: usize,
}

impl<'a> SearchState<'a> {
    fn extend(&self, stop: &'a str, hop: HopSpan) -> Self {
        let mut hops = Vec::with_capacity(self.hops.len() + 1);
        hops.extend_from_slice(&self.hops);
        hops.push(hop);
        Self {
            stop,
            hops,
            depth: self.depth + 1,
        }
    }
}

/// Route planner over a borrowed network.
///
/// Each call to [`Planner::find_route`] allocates its own frontier and
/// visited set, so one planner (or many) can serve concurrent queries.
#[derive(Debug, Clone)]
pub struct Planner<'a> {
    network: &'a Network,
    config: SearchConfig,
}

impl<'a> Planner<'a> {
    /// Create a planner with the default (unbounded) configuration.
    pub fn new(network: &'a Network) -> Self {
        Self::with_config(network, SearchConfig::default())
    }

    /// Create a planner with an explicit configuration.
    pub fn with_config(network: &'a Network, config: SearchConfig) -> Self {
        Self { network, config }
    }

    /// Find an itinerary from `start` to `end` using the fewest lines.
    ///
    /// Returns `None` if no itinerary exists; that is an ordinary answer,
    /// not a failure. `start == end` gives the empty itinerary. Stop names
    /// are not validated: an unknown stop simply can't be reached.
    ///
    /// Among itineraries with the same number of hops, the first one
    /// discovered wins: lines are tried in ascending id order, forward
    /// before reverse, and alighting stops in travel order. Total stop
    /// count is not minimised.
    ///
    /// # Examples
    ///
    /// ```
    /// use tram_server::domain::{LineId, LineRecord, Network};
    /// use tram_server::planner::Planner;
    ///
    /// let one = LineId::new(1).unwrap();
    /// let network = Network::load(vec![
    ///     LineRecord::new(one, "Depot - Square", &["Depot", "Market", "Square"], &[]),
    /// ])
    /// .unwrap()
    /// .network;
    ///
    /// let planner = Planner::new(&network);
    /// let route = planner.find_route("Depot", "Square").unwrap();
    /// assert_eq!(route.hop_count(), 1);
    /// assert_eq!(route.total_stops(), 2);
    ///
    /// // Lines are directed
    /// assert!(planner.find_route("Square", "Depot").is_none());
    /// ```
    pub fn find_route(&self, start: &str, end: &str) -> Option<Itinerary> {
        let mut frontier = VecDeque::from([SearchState {
            stop: start,
            hops: Vec::new(),
            depth: 0,
        }]);

        // (stop, depth) pairs already expanded
        let mut visited: HashSet<(&str, usize)> = HashSet::new();
        let mut states_explored: usize = 0;

        // A fewest-hop route never revisits a stop, so it has fewer hops
        // than the network has stops
        let max_depth = self.network.stop_count();

        while let Some(state) = frontier.pop_front() {
            if state.stop == end {
                debug!(start, end, states_explored, "Route found");
                return self.to_itinerary(&state.hops);
            }

            if !visited.insert((state.stop, state.depth)) {
                continue;
            }
            states_explored += 1;

            if state.depth >= max_depth || !self.config.may_board(state.depth) {
                continue;
            }

            trace!(
                stop = state.stop,
                depth = state.depth,
                frontier = frontier.len(),
                "Expanding stop"
            );

            for line in self.network.lines() {
                for direction in Direction::BOTH {
                    let Some(board) = line.position(direction, state.stop) else {
                        continue;
                    };

                    let stops = line.stops(direction);
                    for (alight, candidate) in stops.iter().enumerate().skip(board + 1) {
                        let hop = HopSpan {
                            line: line.id(),
                            direction,
                            board,
                            alight,
                        };

                        if candidate == end {
                            debug!(start, end, states_explored, "Route found");
                            return self.to_itinerary(&state.extend(candidate, hop).hops);
                        }

                        if visited.contains(&(candidate.as_str(), state.depth + 1)) {
                            continue;
                        }
                        frontier.push_back(state.extend(candidate, hop));
                    }
                }
            }
        }

        debug!(start, end, states_explored, "No route found");
        None
    }

    /// Copy the stop names of the winning spans into an itinerary.
    ///
    /// Spans produced by the search always index into their line and
    /// connect; `None` here means the spans did not come from this
    /// network, and is logged so it can't pass for "no route".
    fn to_itinerary(&self, spans: &[HopSpan]) -> Option<Itinerary> {
        let itinerary = spans
            .iter()
            .map(|span| {
                let line = self.network.line(span.line)?;
                let stops = line.stops(span.direction).get(span.board..=span.alight)?;
                Hop::new(span.line, span.direction, stops.to_vec()).ok()
            })
            .collect::<Option<Vec<_>>>()
            .and_then(|hops| Itinerary::new(hops).ok());

        if itinerary.is_none() {
            warn!(?spans, "Search produced spans that don't form an itinerary");
        }

        itinerary
    }
}

/// Find an itinerary with the default configuration.
///
/// Shorthand for `Planner::new(network).find_route(start, end)`.
pub fn find_route(network: &Network, start: &str, end: &str) -> Option<Itinerary> {
    Planner::new(network).find_route(start, end)
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod tests;
