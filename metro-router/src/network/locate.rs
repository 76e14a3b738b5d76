//! Nearest-station resolution.

use std::collections::BTreeSet;

use crate::domain::{Coord, StationId};

use super::Network;

/// Every station tied for the minimum distance to `coord`.
///
/// Ties are part of the answer: an interchange usually has one station per
/// line at the same position, and a point halfway between two stops is as
/// close to either. The set is empty only for an empty network.
pub fn coord_to_nodes(coord: &Coord, network: &Network) -> BTreeSet<StationId> {
    let query = coord.as_array();
    let mut nearest = network.index().nearest_neighbor_iter(&query);

    let Some(first) = nearest.next() else {
        return BTreeSet::new();
    };
    let best = squared_distance(first.geom(), &query);

    let mut found = BTreeSet::from([first.data]);
    found.extend(
        nearest
            .take_while(|entry| squared_distance(entry.geom(), &query) == best)
            .map(|entry| entry.data),
    );
    found
}

fn squared_distance(a: &[f64; 2], b: &[f64; 2]) -> f64 {
    let dx = a[0] - b[0];
    let dy = a[1] - b[1];
    dx * dx + dy * dy
}

impl Network {
    /// See [`coord_to_nodes`].
    pub fn nearest_stations(&self, coord: &Coord) -> BTreeSet<StationId> {
        coord_to_nodes(coord, self)
    }
}
