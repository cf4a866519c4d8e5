//! Line identifier type.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error returned when parsing an invalid line number.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid line id {input:?}: {reason}")]
pub struct InvalidLineId {
    input: String,
    reason: &'static str,
}

/// A tram line number.
///
/// Line numbers are positive integers. This type guarantees that any
/// `LineId` value is non-zero by construction.
///
/// # Examples
///
/// ```
/// use tram_server::domain::LineId;
///
/// let six = LineId::parse("6").unwrap();
/// assert_eq!(six.get(), 6);
///
/// // Surrounding whitespace is tolerated
/// assert_eq!(LineId::parse(" 6 ").unwrap(), six);
///
/// // Zero and non-numbers are rejected
/// assert!(LineId::parse("0").is_err());
/// assert!(LineId::parse("6a").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct LineId(u32);

impl LineId {
    /// Create a line id from a number.
    ///
    /// Returns an error for zero.
    pub fn new(n: u32) -> Result<Self, InvalidLineId> {
        if n == 0 {
            return Err(InvalidLineId {
                input: n.to_string(),
                reason: "must be a positive integer",
            });
        }
        Ok(LineId(n))
    }

    /// Parse a line id from text.
    ///
    /// The trimmed input must be ASCII digits forming a positive number
    /// that fits in a `u32`.
    pub fn parse(s: &str) -> Result<Self, InvalidLineId> {
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return Err(InvalidLineId {
                input: s.to_string(),
                reason: "must not be empty",
            });
        }

        if !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return Err(InvalidLineId {
                input: s.to_string(),
                reason: "must contain only digits",
            });
        }

        let n = trimmed.parse::<u32>().map_err(|_| InvalidLineId {
            input: s.to_string(),
            reason: "out of range",
        })?;

        Self::new(n).map_err(|e| InvalidLineId {
            input: s.to_string(),
            reason: e.reason,
        })
    }

    /// Returns the numeric value.
    pub fn get(self) -> u32 {
        self.0
    }
}

impl TryFrom<u32> for LineId {
    type Error = InvalidLineId;

    fn try_from(n: u32) -> Result<Self, Self::Error> {
        Self::new(n)
    }
}

impl From<LineId> for u32 {
    fn from(id: LineId) -> Self {
        id.0
    }
}

impl FromStr for LineId {
    type Err = InvalidLineId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Debug for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LineId({})", self.0)
    }
}

impl fmt::Display for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
