//! Small networks shared by unit tests.

use proptest::prelude::*;

use crate::domain::{LineId, StationId};

use super::{Network, NetworkBuilder};

pub(crate) fn id(n: u32) -> StationId {
    StationId(n)
}

/// Two stations joined by a single directed connection of weight `w`.
pub(crate) fn two_node(w: f64) -> Network {
    NetworkBuilder::new()
        .line_velocity(LineId(1), 1.0)
        .station(id(1), "A", LineId(1), 0.0, 0.0)
        .station(id(2), "B", LineId(1), 10.0, 0.0)
        .connection(id(1), id(2), w)
        .build()
        .unwrap()
}

/// A - B - C - D along one line, 10 units apart, times 2, 3, 4.
pub(crate) fn linear() -> Network {
    linear_builder().build().unwrap()
}

/// [`linear`] plus a slow direct A - D connection of time 100.
pub(crate) fn linear_with_shortcut() -> Network {
    linear_builder().bidirectional(id(1), id(4), 100.0).build().unwrap()
}

fn linear_builder() -> NetworkBuilder {
    NetworkBuilder::new()
        .line_velocity(LineId(1), 1.0)
        .station(id(1), "A", LineId(1), 0.0, 0.0)
        .station(id(2), "B", LineId(1), 10.0, 0.0)
        .station(id(3), "C", LineId(1), 20.0, 0.0)
        .station(id(4), "D", LineId(1), 30.0, 0.0)
        .bidirectional(id(1), id(2), 2.0)
        .bidirectional(id(2), id(3), 3.0)
        .bidirectional(id(3), id(4), 4.0)
}

/// Two lines meeting at a shared "Hub" stop.
///
/// ```text
///   5 North (0,10) ---12--- 6 Hub (20,0) ---5--- 7 South (20,-10)     line 2, v=2
///   |5                      |2
///   1 West (0,0) --10-- 2 Mid (10,0) --10-- 3 Hub (20,0) --10-- 4 East (30,0)   line 1, v=1
/// ```
///
/// All connections run both ways.
pub(crate) fn metro() -> Network {
    NetworkBuilder::new()
        .line_velocity(LineId(1), 1.0)
        .line_velocity(LineId(2), 2.0)
        .station(id(1), "West", LineId(1), 0.0, 0.0)
        .station(id(2), "Mid", LineId(1), 10.0, 0.0)
        .station(id(3), "Hub", LineId(1), 20.0, 0.0)
        .station(id(4), "East", LineId(1), 30.0, 0.0)
        .station(id(5), "North", LineId(2), 0.0, 10.0)
        .station(id(6), "Hub", LineId(2), 20.0, 0.0)
        .station(id(7), "South", LineId(2), 20.0, -10.0)
        .bidirectional(id(1), id(2), 10.0)
        .bidirectional(id(2), id(3), 10.0)
        .bidirectional(id(3), id(4), 10.0)
        .bidirectional(id(1), id(5), 5.0)
        .bidirectional(id(5), id(6), 12.0)
        .bidirectional(id(6), id(7), 5.0)
        .bidirectional(id(3), id(6), 2.0)
        .build()
        .unwrap()
}

/// Random small networks on a 4x4 grid, one station per cell.
///
/// Every connection takes at least `ceil(distance / velocity(target))`, so
/// both the distance heuristic and a derived time calibration stay
/// admissible, and distinct positions keep every time, distance and
/// adjacency cost strictly positive. Integer weights keep cost sums exact.
pub(crate) fn arb_network() -> impl Strategy<Value = Network> {
    (2usize..7).prop_flat_map(|n| {
        let cells = prop::sample::subsequence((0i32..16).collect::<Vec<_>>(), n).prop_shuffle();
        (cells, attributes(n), edges(n))
            .prop_map(|(cells, attributes, edges)| grid_network(4, &cells, &attributes, edges))
    })
}

/// Like [`arb_network`] on a 3x3 grid where several stations may share a
/// cell, the way an interchange has one station per line. Connections
/// between co-located stations may take no time and cover no distance.
pub(crate) fn arb_colocated_network() -> impl Strategy<Value = Network> {
    (2usize..7).prop_flat_map(|n| {
        let cells = prop::collection::vec(0i32..9, n);
        (cells, attributes(n), edges(n))
            .prop_map(|(cells, attributes, edges)| grid_network(3, &cells, &attributes, edges))
    })
}

/// `(line, velocity)` for `n` stations.
fn attributes(n: usize) -> impl Strategy<Value = Vec<(u32, u32)>> {
    prop::collection::vec((1u32..4, 1u32..3), n)
}

/// `(from, to, extra time)` triples over `n` stations.
fn edges(n: usize) -> impl Strategy<Value = Vec<(usize, usize, u32)>> {
    prop::collection::vec((0..n, 0..n, 0u32..3), 0..(n * 3))
}

fn grid_network(
    width: i32,
    cells: &[i32],
    attributes: &[(u32, u32)],
    edges: Vec<(usize, usize, u32)>,
) -> Network {
    let stations: Vec<(i32, i32, u32, u32)> = cells
        .iter()
        .zip(attributes)
        .map(|(cell, (line, velocity))| (cell % width, cell / width, *line, *velocity))
        .collect();

    let mut builder = NetworkBuilder::new();
    for (i, (x, y, line, velocity)) in stations.iter().enumerate() {
        builder = builder.station_with_velocity(
            id(i as u32),
            format!("S{i}"),
            LineId(*line),
            f64::from(*x),
            f64::from(*y),
            f64::from(*velocity),
        );
    }
    for (from, to, extra) in edges {
        if from == to {
            continue;
        }
        let (fx, fy, _, _) = stations[from];
        let (tx, ty, _, velocity) = stations[to];
        let distance = f64::from(fx - tx).hypot(f64::from(fy - ty));
        let minimum = (distance / f64::from(velocity)).ceil();
        builder = builder.connection(id(from as u32), id(to as u32), minimum + f64::from(extra));
    }
    builder.build().unwrap()
}
