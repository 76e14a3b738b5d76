//! Planar coordinates.

use std::fmt;
use std::str::FromStr;

/// Error returned when a coordinate is not usable for distance computations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("invalid coordinate: {reason}")]
pub struct InvalidCoord {
    reason: &'static str,
}

/// A point on the network's map plane.
///
/// Both components are guaranteed finite, so Euclidean distances between
/// two `Coord` values are always finite as well.
///
/// # Examples
///
/// ```
/// use metro_router::domain::Coord;
///
/// let a = Coord::new(0.0, 0.0).unwrap();
/// let b = Coord::new(3.0, 4.0).unwrap();
/// assert_eq!(a.distance(&b), 5.0);
///
/// assert!(Coord::new(f64::NAN, 1.0).is_err());
/// ```
#[derive(Clone, Copy, PartialEq)]
pub struct Coord {
    x: f64,
    y: f64,
}

impl Coord {
    /// Create a coordinate, rejecting NaN and infinite components.
    pub fn new(x: f64, y: f64) -> Result<Self, InvalidCoord> {
        if !x.is_finite() || !y.is_finite() {
            return Err(InvalidCoord {
                reason: "components must be finite",
            });
        }
        Ok(Self { x, y })
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    /// Euclidean distance to another coordinate.
    pub fn distance(&self, other: &Coord) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Squared Euclidean distance, used for nearest-neighbour comparisons.
    pub fn distance_squared(&self, other: &Coord) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    /// Whether both coordinates denote the exact same point.
    pub fn same_location(&self, other: &Coord) -> bool {
        self.x == other.x && self.y == other.y
    }

    pub(crate) fn as_array(&self) -> [f64; 2] {
        [self.x, self.y]
    }
}

impl fmt::Debug for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Coord({}, {})", self.x, self.y)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

/// Parses the `x,y` form used on the command line.
impl FromStr for Coord {
    type Err = InvalidCoord;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (x, y) = s.split_once(',').ok_or(InvalidCoord {
            reason: "expected `x,y`",
        })?;
        let x = x.trim().parse::<f64>().map_err(|_| InvalidCoord {
            reason: "x is not a number",
        })?;
        let y = y.trim().parse::<f64>().map_err(|_| InvalidCoord {
            reason: "y is not a number",
        })?;
        Coord::new(x, y)
    }
}
