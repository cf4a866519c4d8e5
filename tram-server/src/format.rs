//! Human-readable descriptions of itineraries.
//!
//! Pure functions over [`Itinerary`] values; nothing here needs the
//! network.

use std::fmt;

use crate::domain::{Hop, Itinerary};

/// Stop and transfer totals for an itinerary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteSummary {
    /// Stop-to-stop edges travelled over all hops.
    pub total_stops: usize,
    /// Changes between lines.
    pub transfers: usize,
}

impl fmt::Display for RouteSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {}",
            count(self.total_stops, "stop", "stops"),
            count(self.transfers, "transfer", "transfers")
        )
    }
}

/// Count stops and transfers.
pub fn summarize(itinerary: &Itinerary) -> RouteSummary {
    RouteSummary {
        total_stops: itinerary.total_stops(),
        transfers: itinerary.transfer_count(),
    }
}

/// Returns true if a route was found, however short.
pub fn can_reach(route: Option<&Itinerary>) -> bool {
    route.is_some()
}

/// Describe an itinerary, one sentence per hop.
///
/// # Examples
///
/// ```
/// use tram_server::domain::{Direction, Hop, Itinerary, LineId};
/// use tram_server::format::narrate;
///
/// let stops = vec!["Depot".to_string(), "Market".to_string(), "Square".to_string()];
/// let hop = Hop::new(LineId::new(1).unwrap(), Direction::Forward, stops).unwrap();
/// let itinerary = Itinerary::new(vec![hop]).unwrap();
///
/// assert_eq!(
///     narrate(&itinerary),
///     "Board line 1, ride 2 stops: Depot - Market - Square."
/// );
/// ```
pub fn narrate(itinerary: &Itinerary) -> String {
    if itinerary.is_empty() {
        return "You are already at your destination.".to_string();
    }

    itinerary
        .hops()
        .iter()
        .enumerate()
        .map(|(i, hop)| describe_hop(hop, i == 0))
        .collect::<Vec<_>>()
        .join("\n")
}

fn describe_hop(hop: &Hop, first: bool) -> String {
    let verb = if first { "Board" } else { "Transfer to" };
    format!(
        "{verb} line {}, ride {}: {}.",
        hop.line(),
        count(hop.stop_count(), "stop", "stops"),
        hop.stops().join(" - ")
    )
}

fn count(n: usize, singular: &str, plural: &str) -> String {
    if n == 1 {
        format!("{n} {singular}")
    } else {
        format!("{n} {plural}")
    }
}
