//! Validated construction of a [`Network`].

use std::collections::{HashMap, HashSet};

use rstar::RTree;
use rstar::primitives::GeomWithData;
use tracing::debug;

use crate::domain::{Coord, LineId, Station, StationId};

use super::{Network, NetworkError};

/// A station as declared to the builder, before validation.
#[derive(Debug, Clone)]
struct PendingStation {
    id: StationId,
    name: String,
    line: LineId,
    x: f64,
    y: f64,
    velocity: Option<f64>,
}

/// Builder for creating a [`Network`].
///
/// Provides a fluent API for declaring stations, per-line velocities and
/// connections. Nothing is checked until [`build`](Self::build), which
/// rejects the whole network on the first problem found.
///
/// # Example
///
/// ```
/// use metro_router::domain::{LineId, StationId};
/// use metro_router::network::NetworkBuilder;
///
/// let network = NetworkBuilder::new()
///     .line_velocity(LineId(1), 1.5)
///     .station(StationId(1), "Clot", LineId(1), 0.0, 0.0)
///     .station(StationId(2), "Glories", LineId(1), 6.0, 0.0)
///     .bidirectional(StationId(1), StationId(2), 4.0)
///     .build()
///     .unwrap();
///
/// assert_eq!(network.len(), 2);
/// assert_eq!(network.weight(StationId(2), StationId(1)), Some(4.0));
/// ```
#[derive(Debug, Default)]
pub struct NetworkBuilder {
    stations: Vec<PendingStation>,
    line_velocities: HashMap<LineId, f64>,
    connections: Vec<(StationId, StationId, f64)>,
}

impl NetworkBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a station whose velocity comes from its line.
    pub fn station(
        mut self,
        id: StationId,
        name: impl Into<String>,
        line: LineId,
        x: f64,
        y: f64,
    ) -> Self {
        self.stations.push(PendingStation {
            id,
            name: name.into(),
            line,
            x,
            y,
            velocity: None,
        });
        self
    }

    /// Add a station with its own velocity.
    pub fn station_with_velocity(
        mut self,
        id: StationId,
        name: impl Into<String>,
        line: LineId,
        x: f64,
        y: f64,
        velocity: f64,
    ) -> Self {
        self.stations.push(PendingStation {
            id,
            name: name.into(),
            line,
            x,
            y,
            velocity: Some(velocity),
        });
        self
    }

    /// Set the velocity used by stations of `line` that declare none.
    pub fn line_velocity(mut self, line: LineId, velocity: f64) -> Self {
        self.line_velocities.insert(line, velocity);
        self
    }

    /// Add a directed connection.
    ///
    /// Declaring the same `from -> to` pair again replaces its travel time.
    pub fn connection(mut self, from: StationId, to: StationId, time: f64) -> Self {
        self.connections.push((from, to, time));
        self
    }

    /// Add a connection in both directions with the same travel time.
    pub fn bidirectional(self, a: StationId, b: StationId, time: f64) -> Self {
        self.connection(a, b, time).connection(b, a, time)
    }

    /// Validate everything and build the network.
    pub fn build(self) -> Result<Network, NetworkError> {
        let mut stations = HashMap::with_capacity(self.stations.len());
        let mut order = Vec::with_capacity(self.stations.len());

        for pending in self.stations {
            let station = validate_station(pending, &self.line_velocities)?;
            if stations.contains_key(&station.id) {
                return Err(NetworkError::DuplicateStation(station.id));
            }
            order.push(station.id);
            stations.insert(station.id, station);
        }

        let mut connections: HashMap<StationId, Vec<(StationId, f64)>> = HashMap::new();
        for (from, to, time) in self.connections {
            for endpoint in [from, to] {
                if !stations.contains_key(&endpoint) {
                    return Err(NetworkError::UnknownStation {
                        from,
                        to,
                        missing: endpoint,
                    });
                }
            }
            if !time.is_finite() || time < 0.0 {
                return Err(NetworkError::InvalidWeight { from, to, time });
            }

            let edges = connections.entry(from).or_default();
            match edges.iter_mut().find(|(n, _)| *n == to) {
                Some(edge) => edge.1 = time,
                None => edges.push((to, time)),
            }
        }

        let index = RTree::bulk_load(
            order
                .iter()
                .filter_map(|id| stations.get(id))
                .map(|s: &Station| GeomWithData::new(s.position.as_array(), s.id))
                .collect(),
        );

        let lines: HashSet<LineId> = stations.values().map(|s| s.line).collect();
        debug!(
            stations = stations.len(),
            lines = lines.len(),
            connections = connections.values().map(Vec::len).sum::<usize>(),
            "Network built"
        );

        Ok(Network {
            stations,
            order,
            connections,
            index,
        })
    }
}

/// Validate one pending station, resolving its velocity.
fn validate_station(
    pending: PendingStation,
    line_velocities: &HashMap<LineId, f64>,
) -> Result<Station, NetworkError> {
    let position = Coord::new(pending.x, pending.y).map_err(|source| {
        NetworkError::InvalidPosition {
            station: pending.id,
            source,
        }
    })?;

    let velocity = pending
        .velocity
        .or_else(|| line_velocities.get(&pending.line).copied())
        .ok_or(NetworkError::MissingVelocity {
            station: pending.id,
            line: pending.line,
        })?;
    if !velocity.is_finite() || velocity <= 0.0 {
        return Err(NetworkError::InvalidVelocity {
            station: pending.id,
            velocity,
        });
    }

    Ok(Station::new(
        pending.id,
        pending.name,
        pending.line,
        position,
        velocity,
    ))
}
