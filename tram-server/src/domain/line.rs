//! Tram line types.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::LineId;

/// One of the two traversal orders of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Forward,
    Reverse,
}

impl Direction {
    /// Both directions, in search order.
    pub const BOTH: [Direction; 2] = [Direction::Forward, Direction::Reverse];

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Forward => "forward",
            Direction::Reverse => "reverse",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A raw line description, as produced by a loader.
///
/// Nothing about a record is validated; [`crate::domain::Network::load`]
/// turns records into [`Line`]s.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineRecord {
    pub id: LineId,
    pub name: String,
    #[serde(default)]
    pub forward: Vec<String>,
    #[serde(default)]
    pub reverse: Vec<String>,
}

impl LineRecord {
    /// Create a record from borrowed stop names.
    pub fn new(id: LineId, name: impl Into<String>, forward: &[&str], reverse: &[&str]) -> Self {
        Self {
            id,
            name: name.into(),
            forward: forward.iter().map(|s| (*s).to_string()).collect(),
            reverse: reverse.iter().map(|s| (*s).to_string()).collect(),
        }
    }
}

/// A validated tram line.
///
/// # Invariants
///
/// - At least one direction has stops
/// - No stop name appears twice within one direction
/// - No stop name is empty
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    id: LineId,
    name: String,
    forward: Vec<String>,
    reverse: Vec<String>,
}

impl Line {
    /// Validate a record into a line.
    ///
    /// On failure returns a static description of what is wrong; the
    /// caller wraps it with the line id.
    pub(super) fn from_record(record: LineRecord) -> Result<Self, &'static str> {
        if record.forward.is_empty() && record.reverse.is_empty() {
            return Err("both directions are empty");
        }

        for stops in [&record.forward, &record.reverse] {
            let mut seen = HashSet::with_capacity(stops.len());
            for stop in stops {
                if stop.is_empty() {
                    return Err("stop name is empty");
                }
                if !seen.insert(stop.as_str()) {
                    return Err("stop repeated within one direction");
                }
            }
        }

        Ok(Line {
            id: record.id,
            name: record.name,
            forward: record.forward,
            reverse: record.reverse,
        })
    }

    /// Returns the line number.
    pub fn id(&self) -> LineId {
        self.id
    }

    /// Returns the display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the ordered stops of one direction.
    pub fn stops(&self, direction: Direction) -> &[String] {
        match direction {
            Direction::Forward => &self.forward,
            Direction::Reverse => &self.reverse,
        }
    }

    /// Returns the non-empty directions, forward first.
    pub fn directions(&self) -> impl Iterator<Item = Direction> + '_ {
        Direction::BOTH
            .into_iter()
            .filter(|d| !self.stops(*d).is_empty())
    }

    /// Returns the index of `stop` within `direction`, if it is served there.
    pub fn position(&self, direction: Direction, stop: &str) -> Option<usize> {
        self.stops(direction).iter().position(|s| s == stop)
    }

    /// Returns true if either direction calls at `stop`.
    pub fn serves(&self, stop: &str) -> bool {
        Direction::BOTH
            .into_iter()
            .any(|d| self.position(d, stop).is_some())
    }

    /// Returns every stop of the line once, in first-appearance order
    /// (forward list, then stops only found in the reverse list).
    pub fn stop_names(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.forward
            .iter()
            .chain(self.reverse.iter())
            .map(String::as_str)
            .filter(|s| seen.insert(*s))
            .collect()
    }
}
