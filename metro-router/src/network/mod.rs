//! Read-only transit network.
//!
//! The [`Network`] is the graph every search runs against: stations with
//! their attributes and directed, time-weighted connections between them.
//! It is validated once by [`NetworkBuilder::build`] and never mutated
//! afterwards, so a single instance can be shared by concurrent searches.

mod builder;
mod error;
mod loader;
mod locate;

#[cfg(test)]
pub(crate) mod fixtures;

use std::collections::HashMap;
use std::fmt;

use rstar::RTree;
use rstar::primitives::GeomWithData;

use crate::domain::{LineId, Station, StationId};

pub use builder::NetworkBuilder;
pub use error::NetworkError;
pub use loader::{ConnectionRecord, NetworkFile, StationRecord};
pub use locate::coord_to_nodes;

/// Spatial index entry: station position tagged with its id.
type IndexedStation = GeomWithData<[f64; 2], StationId>;

/// A validated transit network.
pub struct Network {
    /// Stations by id.
    stations: HashMap<StationId, Station>,

    /// Station ids in insertion order, for deterministic iteration.
    order: Vec<StationId>,

    /// Outgoing connections per station, in insertion order.
    connections: HashMap<StationId, Vec<(StationId, f64)>>,

    /// R-tree over station positions.
    index: RTree<IndexedStation>,
}

impl Network {
    /// Look up a station by id.
    pub fn station(&self, id: StationId) -> Option<&Station> {
        self.stations.get(&id)
    }

    /// Returns true if the network has a station with this id.
    pub fn contains(&self, id: StationId) -> bool {
        self.stations.contains_key(&id)
    }

    /// Outgoing connections of a station as `(neighbour, travel time)` pairs.
    ///
    /// Stations without outgoing connections (or unknown ids) yield an
    /// empty slice.
    pub fn neighbours(&self, id: StationId) -> &[(StationId, f64)] {
        self.connections.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Travel time of the direct connection `from -> to`, if any.
    pub fn weight(&self, from: StationId, to: StationId) -> Option<f64> {
        self.neighbours(from)
            .iter()
            .find(|(n, _)| *n == to)
            .map(|(_, w)| *w)
    }

    /// Whether a direct connection `from -> to` exists.
    pub fn is_adjacent(&self, from: StationId, to: StationId) -> bool {
        self.weight(from, to).is_some()
    }

    /// All stations, in the order they were added.
    pub fn stations(&self) -> impl Iterator<Item = &Station> + '_ {
        self.order.iter().filter_map(|id| self.stations.get(id))
    }

    /// Find the station with the given name on the given line.
    pub fn find_by_name(&self, name: &str, line: LineId) -> Option<StationId> {
        self.stations()
            .find(|s| s.line == line && s.name == name)
            .map(|s| s.id)
    }

    /// Number of stations.
    pub fn len(&self) -> usize {
        self.stations.len()
    }

    /// Returns true if the network has no stations.
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// Number of directed connections.
    pub fn connection_count(&self) -> usize {
        self.connections.values().map(Vec::len).sum()
    }

    /// Lowest station velocity, or `None` for an empty network.
    pub fn min_velocity(&self) -> Option<f64> {
        self.stations()
            .map(|s| s.velocity)
            .min_by(|a, b| a.total_cmp(b))
    }

    /// Highest straight-line distance per unit of travel time over all
    /// connections with positive travel time.
    ///
    /// No connection covers ground faster than this, so it bounds how much
    /// time any remaining straight-line distance can cost at least.
    pub fn max_speed_ratio(&self) -> Option<f64> {
        self.connections
            .iter()
            .flat_map(|(from, edges)| edges.iter().map(move |(to, w)| (*from, *to, *w)))
            .filter(|(_, _, w)| *w > 0.0)
            .filter_map(|(from, to, w)| {
                let a = self.station(from)?;
                let b = self.station(to)?;
                Some(a.position.distance(&b.position) / w)
            })
            .max_by(|a, b| a.total_cmp(b))
    }

    pub(crate) fn index(&self) -> &RTree<IndexedStation> {
        &self.index
    }
}

impl fmt::Debug for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Network")
            .field("stations", &self.len())
            .field("connections", &self.connection_count())
            .finish()
    }
}
