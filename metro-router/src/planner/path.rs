//! Candidate routes carried through a search.

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use crate::domain::StationId;

/// One link of a route, pointing back to the route it extends.
#[derive(Debug)]
struct Hop {
    station: StationId,
    parent: Option<Arc<Hop>>,
}

/// A candidate route plus its cost state.
///
/// Routes are persistent: extending a path shares the parent's hops instead
/// of copying them, so siblings produced by one expansion cost one
/// allocation each regardless of depth. The node sequence is rebuilt by
/// [`route`](Self::route) only when it is needed.
///
/// `g` accumulates the cost so far, `h` holds the latest estimate of the
/// remaining cost, and `f` is always `g + h`.
#[derive(Clone)]
pub struct Path {
    tip: Arc<Hop>,
    len: usize,
    g: f64,
    h: f64,
}

impl Path {
    /// A route consisting of the origin alone, with zero cost.
    pub fn new(origin: StationId) -> Self {
        Self {
            tip: Arc::new(Hop {
                station: origin,
                parent: None,
            }),
            len: 1,
            g: 0.0,
            h: 0.0,
        }
    }

    /// A new path one station longer, carrying this path's `g` and `h`.
    pub fn extend(&self, station: StationId) -> Self {
        Self {
            tip: Arc::new(Hop {
                station,
                parent: Some(Arc::clone(&self.tip)),
            }),
            len: self.len + 1,
            g: self.g,
            h: self.h,
        }
    }

    /// Final station of the route.
    pub fn last(&self) -> StationId {
        self.tip.station
    }

    /// Second-to-last station, or `None` for a single-station route.
    pub fn penultimate(&self) -> Option<StationId> {
        self.tip.parent.as_ref().map(|hop| hop.station)
    }

    /// First station of the route.
    pub fn origin(&self) -> StationId {
        let mut hop = &self.tip;
        while let Some(parent) = &hop.parent {
            hop = parent;
        }
        hop.station
    }

    /// Number of stations on the route.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always false: a route holds at least its origin.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Number of connections travelled.
    pub fn hops(&self) -> usize {
        self.len - 1
    }

    pub fn g(&self) -> f64 {
        self.g
    }

    pub fn h(&self) -> f64 {
        self.h
    }

    pub fn f(&self) -> f64 {
        self.g + self.h
    }

    /// Add `increment` to the accumulated cost.
    pub fn add_cost(&mut self, increment: f64) {
        self.g += increment;
    }

    /// Replace the remaining-cost estimate.
    pub fn set_heuristic(&mut self, h: f64) {
        self.h = h;
    }

    /// Stations from last to first, without allocating.
    pub fn stations(&self) -> impl Iterator<Item = StationId> + '_ {
        let mut next = Some(&self.tip);
        std::iter::from_fn(move || {
            let hop = next?;
            next = hop.parent.as_ref();
            Some(hop.station)
        })
    }

    /// The route from origin to last station.
    pub fn route(&self) -> Vec<StationId> {
        let mut route: Vec<StationId> = self.stations().collect();
        route.reverse();
        route
    }

    /// Whether the route passes through `station`.
    pub fn contains(&self, station: StationId) -> bool {
        self.stations().any(|s| s == station)
    }

    /// Whether no station appears twice on the route.
    pub fn is_simple(&self) -> bool {
        let mut seen = HashSet::with_capacity(self.len);
        self.stations().all(|s| seen.insert(s))
    }
}

impl fmt::Debug for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Path")
            .field("route", &self.route())
            .field("g", &self.g)
            .field("h", &self.h)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(n: u32) -> StationId {
        StationId(n)
    }

    fn path(route: &[u32]) -> Path {
        let mut p = Path::new(id(route[0]));
        for &n in &route[1..] {
            p = p.extend(id(n));
        }
        p
    }

    #[test]
    fn singleton() {
        let p = Path::new(id(4));
        assert_eq!(p.route(), vec![id(4)]);
        assert_eq!(p.last(), id(4));
        assert_eq!(p.origin(), id(4));
        assert_eq!(p.penultimate(), None);
        assert_eq!(p.len(), 1);
        assert_eq!(p.hops(), 0);
        assert_eq!((p.g(), p.h(), p.f()), (0.0, 0.0, 0.0));
    }

    #[test]
    fn extend_does_not_touch_parent() {
        let mut parent = path(&[1, 2]);
        parent.add_cost(3.0);
        parent.set_heuristic(1.0);

        let mut child = parent.extend(id(3));
        child.add_cost(2.0);

        assert_eq!(parent.route(), vec![id(1), id(2)]);
        assert_eq!(parent.g(), 3.0);
        assert_eq!(child.route(), vec![id(1), id(2), id(3)]);
        assert_eq!(child.g(), 5.0);
        assert_eq!(child.h(), 1.0);
        assert_eq!(child.penultimate(), Some(id(2)));
        assert_eq!(child.origin(), id(1));
    }

    #[test]
    fn siblings_are_independent() {
        let parent = path(&[1, 2]);
        let a = parent.extend(id(3));
        let b = parent.extend(id(4));
        assert_eq!(a.route(), vec![id(1), id(2), id(3)]);
        assert_eq!(b.route(), vec![id(1), id(2), id(4)]);
    }

    #[test]
    fn f_tracks_g_and_h() {
        let mut p = path(&[1, 2]);
        p.add_cost(2.5);
        p.set_heuristic(4.0);
        assert_eq!(p.f(), 6.5);

        p.add_cost(1.0);
        p.set_heuristic(0.5);
        assert_eq!(p.f(), 4.0);
    }

    #[test]
    fn stations_run_backwards() {
        let p = path(&[1, 2, 3]);
        let back: Vec<StationId> = p.stations().collect();
        assert_eq!(back, vec![id(3), id(2), id(1)]);
    }

    #[test]
    fn contains_and_simple() {
        let p = path(&[1, 2, 3]);
        assert!(p.contains(id(2)));
        assert!(!p.contains(id(9)));
        assert!(p.is_simple());

        let cyclic = path(&[1, 2, 3, 2]);
        assert!(!cyclic.is_simple());
    }

    #[test]
    fn debug_shows_route() {
        let mut p = path(&[1, 2]);
        p.add_cost(1.5);
        assert_eq!(
            format!("{:?}", p),
            "Path { route: [StationId(1), StationId(2)], g: 1.5, h: 0.0 }"
        );
    }
}
