//! Domain types for the tram route planner.
//!
//! This module contains the core domain model types that represent
//! validated network data. All types enforce their invariants at
//! construction time, so code that receives these types can trust their
//! validity.

mod error;
mod itinerary;
mod line;
mod line_id;
mod network;

pub use error::{DomainError, NetworkError};
pub use itinerary::{Hop, Itinerary};
pub use line::{Direction, Line, LineRecord};
pub use line_id::{InvalidLineId, LineId};
pub use network::{LoadedNetwork, Network};
