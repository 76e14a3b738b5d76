//! Domain types for the metro router.
//!
//! This module contains the value types describing a transit network:
//! station and line identifiers, station attributes and planar coordinates.
//! All types enforce their invariants at construction time, so code that
//! receives these types can trust their validity.

mod coord;
mod station;

pub use coord::{Coord, InvalidCoord};
pub use station::{InvalidStationId, LineId, Station, StationId};
