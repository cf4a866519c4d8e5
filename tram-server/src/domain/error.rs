//! Domain error types.
//!
//! These errors represent validation failures and data inconsistencies
//! in the domain layer. They are distinct from file/IO errors.

use super::LineId;

/// Errors from building a [`crate::domain::Network`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NetworkError {
    /// A line's own data is inconsistent; only that line is rejected
    #[error("malformed line {id}: {reason}")]
    MalformedLine { id: LineId, reason: &'static str },

    /// Two records claim the same line number
    #[error("duplicate line id {0}")]
    DuplicateLineId(LineId),
}

/// Errors from constructing hops and itineraries.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// A hop must contain at least its boarding stop
    #[error("hop on line {0} has no stops")]
    EmptyHop(LineId),

    /// Consecutive hops don't meet at the same stop
    #[error("hops do not connect: alight at {alight:?}, next board at {board:?}")]
    DisconnectedHops { alight: String, board: String },
}
