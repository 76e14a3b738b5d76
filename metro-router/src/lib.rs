//! Metro route planner.
//!
//! Finds routes through a transit network of stations joined by timed
//! connections. Depth-first, breadth-first, uniform-cost and A* search
//! are available, the latter two under one of four cost criteria.

pub mod domain;
pub mod network;
pub mod planner;
pub mod report;
