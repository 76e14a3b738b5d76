//! Cost and heuristic models.
//!
//! A [`Criterion`] selects what a route costs. The [`Evaluator`] binds a
//! criterion to a network once per search and then annotates paths with
//! accumulated cost (`g`) and an admissible estimate of the remaining cost
//! (`h`).

use std::fmt;
use std::str::FromStr;

use crate::domain::{Station, StationId};
use crate::network::Network;

use super::{Path, SearchError};

/// Time heuristic divisor that keeps estimates below the real travel times
/// of the reference Barcelona dataset.
pub const DEFAULT_TIME_CALIBRATION: f64 = 5.960756012864304 / 1.8544574262244504;

/// Error returned for a criterion id or name that is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid criterion {input:?}: expected 0-3 or one of adjacency, time, distance, transfers")]
pub struct InvalidCriterion {
    input: String,
}

/// Error returned for a time calibration that cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid time calibration {input:?}: expected fixed, derived or a positive number")]
pub struct InvalidCalibration {
    input: String,
}

/// What a route costs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Criterion {
    /// One per connection travelled.
    Adjacency,
    /// Travel time of each connection.
    Time,
    /// Distance covered, `time * velocity` of the station reached. Moving
    /// between two stations at the same position is free.
    Distance,
    /// One per change of line.
    Transfers,
}

impl Criterion {
    pub const ALL: [Criterion; 4] = [
        Criterion::Adjacency,
        Criterion::Time,
        Criterion::Distance,
        Criterion::Transfers,
    ];

    /// Numeric id (0 to 3).
    pub fn id(self) -> u8 {
        match self {
            Criterion::Adjacency => 0,
            Criterion::Time => 1,
            Criterion::Distance => 2,
            Criterion::Transfers => 3,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Criterion::Adjacency => "adjacency",
            Criterion::Time => "time",
            Criterion::Distance => "distance",
            Criterion::Transfers => "transfers",
        }
    }
}

impl TryFrom<u8> for Criterion {
    type Error = InvalidCriterion;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        Criterion::ALL
            .into_iter()
            .find(|c| c.id() == id)
            .ok_or(InvalidCriterion {
                input: id.to_string(),
            })
    }
}

/// Accepts either the numeric id or the name, case-insensitively.
impl FromStr for Criterion {
    type Err = InvalidCriterion;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(id) = s.parse::<u8>() {
            return Criterion::try_from(id);
        }
        Criterion::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(s))
            .ok_or(InvalidCriterion {
                input: s.to_string(),
            })
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How the time heuristic converts straight-line distance into time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TimeCalibration {
    /// Divide the raw estimate by this constant.
    Fixed(f64),

    /// Derive the divisor from the network so the estimate can never
    /// exceed a real travel time: the fastest ground covered per unit of
    /// time on any connection, over the slowest station velocity.
    Derived,
}

impl TimeCalibration {
    /// The divisor to apply on `network`.
    pub fn divisor(&self, network: &Network) -> f64 {
        match self {
            TimeCalibration::Fixed(c) => *c,
            TimeCalibration::Derived => match (network.max_speed_ratio(), network.min_velocity()) {
                (Some(ratio), Some(velocity)) if ratio > 0.0 => ratio / velocity,
                _ => DEFAULT_TIME_CALIBRATION,
            },
        }
    }
}

impl Default for TimeCalibration {
    fn default() -> Self {
        TimeCalibration::Fixed(DEFAULT_TIME_CALIBRATION)
    }
}

/// `fixed` for the default constant, `derived`, or a positive divisor.
impl FromStr for TimeCalibration {
    type Err = InvalidCalibration;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("fixed") {
            return Ok(TimeCalibration::default());
        }
        if s.eq_ignore_ascii_case("derived") {
            return Ok(TimeCalibration::Derived);
        }
        match s.parse::<f64>() {
            Ok(c) if c.is_finite() && c > 0.0 => Ok(TimeCalibration::Fixed(c)),
            _ => Err(InvalidCalibration {
                input: s.to_string(),
            }),
        }
    }
}

/// Cost and heuristic evaluation for one criterion on one network.
#[derive(Debug, Clone, Copy)]
pub struct Evaluator<'n> {
    network: &'n Network,
    criterion: Criterion,
    time_divisor: f64,
}

impl<'n> Evaluator<'n> {
    /// Bind `criterion` to `network`, resolving the time calibration once.
    pub fn new(network: &'n Network, criterion: Criterion, calibration: TimeCalibration) -> Self {
        Self {
            network,
            criterion,
            time_divisor: calibration.divisor(network),
        }
    }

    pub fn criterion(&self) -> Criterion {
        self.criterion
    }

    fn station(&self, id: StationId) -> Result<&'n Station, SearchError> {
        self.network
            .station(id)
            .ok_or(SearchError::UnknownStation(id))
    }

    /// Cost of travelling the connection `from -> to`.
    pub fn step_cost(&self, from: StationId, to: StationId) -> Result<f64, SearchError> {
        let weight = || {
            self.network
                .weight(from, to)
                .ok_or(SearchError::MissingConnection { from, to })
        };

        match self.criterion {
            Criterion::Adjacency => Ok(1.0),
            Criterion::Time => weight(),
            Criterion::Distance => {
                let (a, b) = (self.station(from)?, self.station(to)?);
                if a.position.same_location(&b.position) {
                    Ok(0.0)
                } else {
                    Ok(weight()? * b.velocity)
                }
            }
            Criterion::Transfers => {
                let (a, b) = (self.station(from)?, self.station(to)?);
                Ok(if a.same_line(b) { 0.0 } else { 1.0 })
            }
        }
    }

    /// Add the cost of each path's last connection to its `g`.
    ///
    /// Single-station paths have no connection and are left untouched.
    pub fn calculate_cost(&self, paths: &mut [Path]) -> Result<(), SearchError> {
        for path in paths {
            if let Some(from) = path.penultimate() {
                let increment = self.step_cost(from, path.last())?;
                path.add_cost(increment);
            }
        }
        Ok(())
    }

    /// Estimated remaining cost from `at` to `destination`.
    ///
    /// Never more than the true remaining cost for adjacency, transfers and
    /// distance on networks whose connections are at least as long as the
    /// straight line; for time, admissibility depends on the calibration.
    pub fn estimate(&self, at: StationId, destination: StationId) -> Result<f64, SearchError> {
        match self.criterion {
            Criterion::Adjacency => {
                if at == destination || self.network.is_adjacent(at, destination) {
                    Ok(0.0)
                } else {
                    Ok(1.0)
                }
            }
            Criterion::Time => {
                let (a, b) = (self.station(at)?, self.station(destination)?);
                let distance = a.position.distance(&b.position);
                Ok(distance / a.velocity.max(b.velocity) / self.time_divisor)
            }
            Criterion::Distance => {
                let (a, b) = (self.station(at)?, self.station(destination)?);
                if a.position.same_location(&b.position) {
                    Ok(0.0)
                } else {
                    Ok(a.position.distance(&b.position))
                }
            }
            Criterion::Transfers => {
                let (a, b) = (self.station(at)?, self.station(destination)?);
                Ok(if a.same_line(b) { 0.0 } else { 1.0 })
            }
        }
    }

    /// Overwrite each path's `h` with the estimate from its last station.
    pub fn calculate_heuristics(
        &self,
        paths: &mut [Path],
        destination: StationId,
    ) -> Result<(), SearchError> {
        for path in paths {
            let h = self.estimate(path.last(), destination)?;
            path.set_heuristic(h);
        }
        Ok(())
    }
}
