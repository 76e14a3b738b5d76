//! Network construction and loading errors.

use std::path::PathBuf;

use crate::domain::{InvalidCoord, LineId, StationId};

/// Errors raised while building or loading a [`Network`](super::Network).
///
/// A network that builds successfully is never rejected mid-search: every
/// structural problem is reported here.
#[derive(Debug, thiserror::Error)]
pub enum NetworkError {
    /// Two stations were given the same id
    #[error("duplicate station id {0}")]
    DuplicateStation(StationId),

    /// A connection references a station that was never added
    #[error("connection {from} -> {to} references unknown station {missing}")]
    UnknownStation {
        from: StationId,
        to: StationId,
        missing: StationId,
    },

    /// A connection has a negative, NaN or infinite travel time
    #[error("connection {from} -> {to} has invalid travel time {time}")]
    InvalidWeight {
        from: StationId,
        to: StationId,
        time: f64,
    },

    /// A station position is not a finite coordinate
    #[error("station {station} has an invalid position: {source}")]
    InvalidPosition {
        station: StationId,
        source: InvalidCoord,
    },

    /// A station or line velocity is not a positive finite number
    #[error("station {station} has invalid velocity {velocity}")]
    InvalidVelocity { station: StationId, velocity: f64 },

    /// Neither the station nor its line carries a velocity
    #[error("station {station} has no velocity and line {line} has none either")]
    MissingVelocity { station: StationId, line: LineId },

    /// Reading the network file failed
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The network file is not valid JSON for the expected schema
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}
