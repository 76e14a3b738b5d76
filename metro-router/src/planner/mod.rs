//! Route search over a transit network.
//!
//! Four algorithms share one expand/filter/evaluate/insert loop and differ
//! only in how the frontier is ordered and how paths are evaluated:
//!
//! - depth-first and breadth-first ignore cost entirely;
//! - uniform cost orders by accumulated cost `g`;
//! - A* orders by `g + h` and prunes paths dominated by a cheaper one
//!   reaching the same station, which makes its first route optimal when
//!   the heuristic is admissible.
//!
//! Only simple routes are explored, which guarantees termination on any
//! finite network.

mod config;
mod criterion;
mod error;
mod expand;
mod frontier;
mod observer;
mod path;
mod prune;
mod search;


pub use config::SearchConfig;
pub use criterion::{
    Criterion, DEFAULT_TIME_CALIBRATION, Evaluator, InvalidCalibration, InvalidCriterion,
    TimeCalibration,
};
pub use error::SearchError;
pub use expand::{expand, remove_cycles};
pub use frontier::{Discipline, Frontier};
pub use observer::{NoopObserver, SearchObserver, TracingObserver};
pub use path::Path;
pub use prune::{VisitedCost, remove_redundant_paths};
pub use search::{
    Planner, RunState, SearchResult, astar, breadth_first, depth_first, uniform_cost,
};
