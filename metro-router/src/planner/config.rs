//! Search configuration for the route planner.

use super::TimeCalibration;

/// Configuration parameters for route searches.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// How the time heuristic turns distance into time.
    pub time_calibration: TimeCalibration,

    /// Maximum number of paths a single run may expand.
    /// `None` lets the run go until the frontier is exhausted.
    pub max_expansions: Option<usize>,

    /// Run the per-destination A* searches on the rayon thread pool.
    pub parallel_candidates: bool,
}

impl SearchConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(
        time_calibration: TimeCalibration,
        max_expansions: Option<usize>,
        parallel_candidates: bool,
    ) -> Self {
        Self {
            time_calibration,
            max_expansions,
            parallel_candidates,
        }
    }

    /// Set the time calibration.
    pub fn with_time_calibration(mut self, calibration: TimeCalibration) -> Self {
        self.time_calibration = calibration;
        self
    }

    /// Cap the number of expansions per run.
    pub fn with_max_expansions(mut self, limit: usize) -> Self {
        self.max_expansions = Some(limit);
        self
    }

    /// Run multi-candidate A* searches one after the other.
    pub fn sequential(mut self) -> Self {
        self.parallel_candidates = false;
        self
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            time_calibration: TimeCalibration::default(),
            max_expansions: None,
            parallel_candidates: true,
        }
    }
}
