//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{Direction, Hop, Itinerary, Line};
use crate::format::{can_reach, narrate, summarize};

/// Query for a route between two stops.
#[derive(Debug, Deserialize)]
pub struct RouteRequest {
    /// Origin stop name
    pub from: String,

    /// Destination stop name
    pub to: String,
}

/// Query for the lines serving a stop.
#[derive(Debug, Deserialize)]
pub struct LinesAtRequest {
    /// Stop name (exact match)
    pub stop: String,
}

/// A line with both of its stop lists.
#[derive(Debug, Serialize)]
pub struct LineResult {
    pub id: u32,
    pub name: String,
    pub forward: Vec<String>,
    pub reverse: Vec<String>,
}

impl LineResult {
    pub fn from_line(line: &Line) -> Self {
        Self {
            id: line.id().get(),
            name: line.name().to_string(),
            forward: line.stops(Direction::Forward).to_vec(),
            reverse: line.stops(Direction::Reverse).to_vec(),
        }
    }
}

/// Response listing lines.
#[derive(Debug, Serialize)]
pub struct LinesResponse {
    pub lines: Vec<LineResult>,
}

/// Response listing every stop in display order.
#[derive(Debug, Serialize)]
pub struct StopsResponse {
    pub stops: Vec<String>,
}

/// Response listing the lines serving one stop.
#[derive(Debug, Serialize)]
pub struct LinesAtResponse {
    pub stop: String,
    pub lines: Vec<u32>,
}

/// One ride within a route.
#[derive(Debug, Serialize)]
pub struct HopResult {
    /// Line number
    pub line: u32,

    /// Direction ridden
    pub direction: Direction,

    /// Stops from boarding to alighting, inclusive
    pub stops: Vec<String>,

    /// Stops travelled
    pub stop_count: usize,
}

impl HopResult {
    pub fn from_hop(hop: &Hop) -> Self {
        Self {
            line: hop.line().get(),
            direction: hop.direction(),
            stops: hop.stops().to_vec(),
            stop_count: hop.stop_count(),
        }
    }
}

/// Answer to a route query.
///
/// An unreachable destination is a normal answer: `reachable` is false,
/// `hops` is empty and the totals are absent.
#[derive(Debug, Serialize)]
pub struct RouteResponse {
    pub from: String,
    pub to: String,
    pub reachable: bool,
    pub hops: Vec<HopResult>,
    pub total_stops: Option<usize>,
    pub transfers: Option<usize>,
    pub narrative: Option<String>,
}

impl RouteResponse {
    pub fn from_route(from: &str, to: &str, route: Option<&Itinerary>) -> Self {
        let summary = route.map(summarize);
        Self {
            from: from.to_string(),
            to: to.to_string(),
            reachable: can_reach(route),
            hops: route
                .map(|it| it.hops().iter().map(HopResult::from_hop).collect())
                .unwrap_or_default(),
            total_stops: summary.map(|s| s.total_stops),
            transfers: summary.map(|s| s.transfers),
            narrative: route.map(narrate),
        }
    }
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
