//! Dominance pruning for A*.

use std::collections::HashMap;

use tracing::trace;

use crate::domain::StationId;

use super::{Frontier, Path};

/// Best `g` seen so far for every station reached during one A* run.
///
/// Recorded costs only ever decrease.
#[derive(Debug, Clone, Default)]
pub struct VisitedCost {
    best: HashMap<StationId, f64>,
}

impl VisitedCost {
    /// A map that has seen only the origin, at zero cost.
    pub fn starting_at(origin: StationId) -> Self {
        Self {
            best: HashMap::from([(origin, 0.0)]),
        }
    }

    /// Best recorded cost for `station`, or `None` if never reached.
    pub fn get(&self, station: StationId) -> Option<f64> {
        self.best.get(&station).copied()
    }

    pub fn len(&self) -> usize {
        self.best.len()
    }

    pub fn is_empty(&self) -> bool {
        self.best.is_empty()
    }
}

/// Keep only the children that reach their last station more cheaply than
/// any path seen before.
///
/// A child reaching an unseen station is kept and recorded. A child beating
/// the recorded cost is kept, recorded, and every frontier path (or earlier
/// kept sibling) passing through that station is evicted. Any other child
/// is dropped.
pub fn remove_redundant_paths(
    children: Vec<Path>,
    frontier: &mut Frontier,
    visited: &mut VisitedCost,
) -> Vec<Path> {
    let mut kept = Vec::with_capacity(children.len());

    for child in children {
        let station = child.last();
        match visited.get(station) {
            None => {
                visited.best.insert(station, child.g());
                kept.push(child);
            }
            Some(best) if child.g() < best => {
                visited.best.insert(station, child.g());
                kept.retain(|p: &Path| !p.contains(station));
                let evicted = frontier.retain(|p| !p.contains(station));
                trace!(
                    station = %station,
                    cost = child.g(),
                    previous = best,
                    evicted,
                    "Cheaper path found"
                );
                kept.push(child);
            }
            Some(_) => {}
        }
    }

    kept
}
