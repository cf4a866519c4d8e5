//! Hop and itinerary types.
//!
//! A `Hop` is one uninterrupted ride on a single line-direction; an
//! `Itinerary` chains hops that meet at transfer stops.

use super::{Direction, DomainError, LineId};

/// One ride on a single line-direction, from boarding to alighting.
///
/// # Invariants
///
/// - At least one stop (the boarding stop)
/// - All stops lie on `line` in `direction`, in travel order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hop {
    line: LineId,
    direction: Direction,
    stops: Vec<String>,
}

impl Hop {
    /// Construct a hop from the stops ridden, boarding and alighting
    /// stops included.
    ///
    /// # Errors
    ///
    /// Returns `Err` if `stops` is empty.
    pub fn new(line: LineId, direction: Direction, stops: Vec<String>) -> Result<Self, DomainError> {
        if stops.is_empty() {
            return Err(DomainError::EmptyHop(line));
        }
        Ok(Hop {
            line,
            direction,
            stops,
        })
    }

    /// Returns the line ridden.
    pub fn line(&self) -> LineId {
        self.line
    }

    /// Returns the direction ridden.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns all stops from board to alight, inclusive.
    pub fn stops(&self) -> &[String] {
        &self.stops
    }

    /// Returns the boarding stop.
    pub fn board_stop(&self) -> &str {
        // Safe: validated non-empty at construction
        &self.stops[0]
    }

    /// Returns the alighting stop.
    pub fn alight_stop(&self) -> &str {
        &self.stops[self.stops.len() - 1]
    }

    /// Returns the number of stop-to-stop edges travelled.
    pub fn stop_count(&self) -> usize {
        self.stops.len() - 1
    }
}

/// An answer to a route query.
///
/// The empty itinerary is valid: it is the answer when origin and
/// destination are the same stop.
///
/// # Invariants
///
/// - Consecutive hops connect (alight stop of one = board stop of next)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Itinerary {
    hops: Vec<Hop>,
}

impl Itinerary {
    /// Constructs an itinerary from hops in travel order.
    ///
    /// # Errors
    ///
    /// Returns `Err` if two consecutive hops don't meet at the same stop.
    ///
    /// # Examples
    ///
    /// ```
    /// use tram_server::domain::{Direction, Hop, Itinerary, LineId};
    ///
    /// let one = LineId::new(1).unwrap();
    /// let two = LineId::new(2).unwrap();
    /// let stops = |names: &[&str]| names.iter().map(|s| s.to_string()).collect::<Vec<_>>();
    ///
    /// let first = Hop::new(one, Direction::Forward, stops(&["Depot", "Market"])).unwrap();
    /// let second = Hop::new(two, Direction::Reverse, stops(&["Market", "Park", "Bridge"])).unwrap();
    ///
    /// let itinerary = Itinerary::new(vec![first, second]).unwrap();
    /// assert_eq!(itinerary.hop_count(), 2);
    /// assert_eq!(itinerary.transfer_count(), 1);
    /// assert_eq!(itinerary.total_stops(), 3);
    /// ```
    pub fn new(hops: Vec<Hop>) -> Result<Self, DomainError> {
        for window in hops.windows(2) {
            let alight = window[0].alight_stop();
            let board = window[1].board_stop();
            if alight != board {
                return Err(DomainError::DisconnectedHops {
                    alight: alight.to_string(),
                    board: board.to_string(),
                });
            }
        }

        Ok(Itinerary { hops })
    }

    /// The zero-hop itinerary.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns all hops in order.
    pub fn hops(&self) -> &[Hop] {
        &self.hops
    }

    /// Returns the number of hops (lines ridden).
    pub fn hop_count(&self) -> usize {
        self.hops.len()
    }

    /// Returns the number of transfers (hops - 1, or 0 for direct/empty).
    pub fn transfer_count(&self) -> usize {
        self.hop_count().saturating_sub(1)
    }

    /// Returns the total number of stop-to-stop edges over all hops.
    pub fn total_stops(&self) -> usize {
        self.hops.iter().map(Hop::stop_count).sum()
    }

    /// Returns true if no riding is needed.
    pub fn is_empty(&self) -> bool {
        self.hops.is_empty()
    }

    /// Returns the first boarding stop, if any hop exists.
    pub fn origin(&self) -> Option<&str> {
        self.hops.first().map(Hop::board_stop)
    }

    /// Returns the final alighting stop, if any hop exists.
    pub fn destination(&self) -> Option<&str> {
        self.hops.last().map(Hop::alight_stop)
    }

    /// Returns the stops where one hop ends and the next begins.
    pub fn transfer_stops(&self) -> impl Iterator<Item = &str> {
        self.hops.iter().skip(1).map(Hop::board_stop)
    }
}
