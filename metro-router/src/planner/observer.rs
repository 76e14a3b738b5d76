//! Hooks into the search loop.

use tracing::{debug, trace};

use super::{Frontier, Path, RunState};

/// Receives notifications at fixed points of every search run.
///
/// All methods default to doing nothing. Observers must be `Sync` because
/// multi-candidate A* may run several searches at once.
pub trait SearchObserver: Sync {
    /// A path was popped and its surviving children computed.
    fn on_expand(&self, _head: &Path, _children: &[Path]) {}

    /// Children were inserted into the frontier.
    fn on_insert(&self, _inserted: usize, _frontier: &Frontier) {}

    /// The run reached a terminal state.
    fn on_terminate(&self, _state: RunState, _path: Option<&Path>, _expanded: usize) {}
}

/// Observer that ignores everything. The default.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl SearchObserver for NoopObserver {}

/// Observer that reports search progress through `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl SearchObserver for TracingObserver {
    fn on_expand(&self, head: &Path, children: &[Path]) {
        trace!(
            route = ?head.route(),
            cost = head.g(),
            children = children.len(),
            "Expanding"
        );
    }

    fn on_insert(&self, inserted: usize, frontier: &Frontier) {
        trace!(inserted, frontier = frontier.len(), "Inserted");
    }

    fn on_terminate(&self, state: RunState, path: Option<&Path>, expanded: usize) {
        match path {
            Some(path) => debug!(
                ?state,
                route = ?path.route(),
                cost = path.g(),
                expanded,
                "Search finished"
            ),
            None => debug!(?state, expanded, "Search finished without a route"),
        }
    }
}
