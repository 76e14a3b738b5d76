//! Station and line types.

use std::fmt;
use std::str::FromStr;

use super::Coord;

/// Error returned when parsing an invalid station identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid station id: {reason}")]
pub struct InvalidStationId {
    reason: &'static str,
}

/// Identifier of a station (a graph node).
///
/// A station that serves several lines appears once per line, each with its
/// own id, usually sharing the same coordinates.
///
/// # Examples
///
/// ```
/// use metro_router::domain::StationId;
///
/// let id: StationId = "14".parse().unwrap();
/// assert_eq!(id, StationId(14));
/// assert!("-1".parse::<StationId>().is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct StationId(pub u32);

impl fmt::Debug for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationId({})", self.0)
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for StationId {
    type Err = InvalidStationId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<u32>().map(StationId).map_err(|_| InvalidStationId {
            reason: "must be a non-negative integer",
        })
    }
}

/// Identifier of a transit line.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct LineId(pub u32);

impl fmt::Debug for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LineId({})", self.0)
    }
}

impl fmt::Display for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "L{}", self.0)
    }
}

/// A station: one stop of one line at one place.
///
/// Immutable once it is part of a [`Network`](crate::network::Network).
#[derive(Debug, Clone, PartialEq)]
pub struct Station {
    pub id: StationId,

    /// Human-readable name, shared by all the per-line entries of a stop.
    pub name: String,

    pub line: LineId,

    pub position: Coord,

    /// Travel speed on the line serving this station, in distance units per
    /// time unit. Distance travelled over an edge is `time * velocity`.
    pub velocity: f64,
}

impl Station {
    /// Create a station.
    pub fn new(
        id: StationId,
        name: impl Into<String>,
        line: LineId,
        position: Coord,
        velocity: f64,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            line,
            position,
            velocity,
        }
    }

    /// Whether this station lies on the same line as `other`.
    pub fn same_line(&self, other: &Station) -> bool {
        self.line == other.line
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Roundtrip: display then parse returns the original id.
        #[test]
        fn roundtrip(n in any::<u32>()) {
            let id = StationId(n);
            prop_assert_eq!(id.to_string().parse::<StationId>().unwrap(), id);
        }

        /// Non-numeric strings are always rejected.
        #[test]
        fn letters_rejected(s in "[a-zA-Z]{1,8}") {
            prop_assert!(s.parse::<StationId>().is_err());
        }
    }
}
