//! Search orchestration.
//!
//! Every algorithm runs the same loop: pop the frontier head, stop if it
//! ends at the destination, otherwise expand it, drop cyclic children,
//! evaluate them as the algorithm requires and insert the survivors.

use rayon::prelude::*;
use tracing::debug;

use crate::domain::{Coord, StationId};
use crate::network::{Network, coord_to_nodes};

use super::config::SearchConfig;
use super::criterion::{Criterion, Evaluator};
use super::expand::{expand, remove_cycles};
use super::frontier::{Discipline, Frontier};
use super::observer::{NoopObserver, SearchObserver};
use super::prune::{VisitedCost, remove_redundant_paths};
use super::{Path, SearchError};

/// Lifecycle of a single search run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Initialized,
    Expanding,
    Found,
    NotFound,
}

impl RunState {
    pub fn is_terminal(self) -> bool {
        matches!(self, RunState::Found | RunState::NotFound)
    }
}

/// Result of a route search.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// The best route found, with `h = 0`. `None` when no route exists.
    pub path: Option<Path>,

    /// Number of paths expanded, summed over all runs.
    pub expanded: usize,
}

impl SearchResult {
    /// A result without a route.
    pub fn not_found(expanded: usize) -> Self {
        Self {
            path: None,
            expanded,
        }
    }

    /// Whether a route was found.
    pub fn is_found(&self) -> bool {
        self.path.is_some()
    }

    pub fn into_path(self) -> Option<Path> {
        self.path
    }
}

/// How a run evaluates children before inserting them.
enum Evaluation<'n> {
    /// Depth- and breadth-first: no cost at all.
    None,
    /// Uniform cost: accumulate `g`.
    Cost(Evaluator<'n>),
    /// A*: accumulate `g`, estimate `h`, prune dominated paths.
    Informed {
        evaluator: Evaluator<'n>,
        visited: VisitedCost,
    },
}

/// State owned by one search run.
struct Run<'p, 'n, O: SearchObserver> {
    planner: &'p Planner<'n, O>,
    destination: StationId,
    frontier: Frontier,
    evaluation: Evaluation<'n>,
    state: RunState,
    expanded: usize,
}

impl<'p, 'n, O: SearchObserver> Run<'p, 'n, O> {
    fn new(
        planner: &'p Planner<'n, O>,
        origin: StationId,
        destination: StationId,
        discipline: Discipline,
        evaluation: Evaluation<'n>,
    ) -> Self {
        Self {
            planner,
            destination,
            frontier: Frontier::seeded(discipline, Path::new(origin)),
            evaluation,
            state: RunState::Initialized,
            expanded: 0,
        }
    }

    /// Loop until the head reaches the destination or the frontier empties.
    fn execute(mut self) -> Result<SearchResult, SearchError> {
        self.state = RunState::Expanding;
        let planner = self.planner;
        let network = planner.network;
        let observer = &planner.observer;

        while let Some(head) = self.frontier.pop_front() {
            if head.last() == self.destination {
                return Ok(self.terminate(RunState::Found, Some(head)));
            }

            if let Some(limit) = planner.config.max_expansions
                && self.expanded >= limit
            {
                debug!(expanded = self.expanded, "Expansion budget exhausted");
                return Err(SearchError::BudgetExhausted {
                    expanded: self.expanded,
                });
            }
            self.expanded += 1;

            let mut children = remove_cycles(expand(&head, network));
            match &mut self.evaluation {
                Evaluation::None => {}
                Evaluation::Cost(evaluator) => evaluator.calculate_cost(&mut children)?,
                Evaluation::Informed { evaluator, visited } => {
                    evaluator.calculate_cost(&mut children)?;
                    evaluator.calculate_heuristics(&mut children, self.destination)?;
                    children = remove_redundant_paths(children, &mut self.frontier, visited);
                }
            }

            observer.on_expand(&head, &children);
            let inserted = children.len();
            self.frontier.insert(children);
            observer.on_insert(inserted, &self.frontier);
        }

        Ok(self.terminate(RunState::NotFound, None))
    }

    fn terminate(mut self, state: RunState, path: Option<Path>) -> SearchResult {
        self.state = state;
        let path = path.map(|mut p| {
            p.set_heuristic(0.0);
            p
        });
        self.planner
            .observer
            .on_terminate(self.state, path.as_ref(), self.expanded);
        SearchResult {
            path,
            expanded: self.expanded,
        }
    }
}

/// Route planner over a network.
///
/// Holds no search state of its own; every call owns its frontier and
/// paths, so one planner can serve concurrent searches.
pub struct Planner<'a, O: SearchObserver = NoopObserver> {
    network: &'a Network,
    config: &'a SearchConfig,
    observer: O,
}

impl<'a> Planner<'a, NoopObserver> {
    /// Create a new planner.
    pub fn new(network: &'a Network, config: &'a SearchConfig) -> Self {
        Self {
            network,
            config,
            observer: NoopObserver,
        }
    }
}

impl<'a, O: SearchObserver> Planner<'a, O> {
    /// Replace the observer.
    pub fn with_observer<P: SearchObserver>(self, observer: P) -> Planner<'a, P> {
        Planner {
            network: self.network,
            config: self.config,
            observer,
        }
    }

    pub fn network(&self) -> &'a Network {
        self.network
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    fn check_station(&self, id: StationId) -> Result<(), SearchError> {
        if self.network.contains(id) {
            Ok(())
        } else {
            Err(SearchError::UnknownStation(id))
        }
    }

    fn evaluator(&self, criterion: Criterion) -> Evaluator<'a> {
        Evaluator::new(self.network, criterion, self.config.time_calibration)
    }

    fn run(
        &self,
        origin: StationId,
        destination: StationId,
        discipline: Discipline,
        evaluation: Evaluation<'a>,
    ) -> Result<SearchResult, SearchError> {
        self.check_station(origin)?;
        self.check_station(destination)?;
        Run::new(self, origin, destination, discipline, evaluation).execute()
    }

    /// Depth-first search. Finds some simple route, not necessarily a
    /// good one.
    pub fn depth_first(
        &self,
        origin: StationId,
        destination: StationId,
    ) -> Result<SearchResult, SearchError> {
        self.run(origin, destination, Discipline::Stack, Evaluation::None)
    }

    /// Breadth-first search. Finds a route with the fewest connections.
    pub fn breadth_first(
        &self,
        origin: StationId,
        destination: StationId,
    ) -> Result<SearchResult, SearchError> {
        self.run(origin, destination, Discipline::Queue, Evaluation::None)
    }

    /// Uniform-cost search. Finds a route of minimum cost under `criterion`.
    pub fn uniform_cost(
        &self,
        origin: StationId,
        destination: StationId,
        criterion: Criterion,
    ) -> Result<SearchResult, SearchError> {
        let evaluation = Evaluation::Cost(self.evaluator(criterion));
        self.run(origin, destination, Discipline::ByCost, evaluation)
    }

    /// A* between two known stations.
    pub fn astar_between(
        &self,
        origin: StationId,
        destination: StationId,
        criterion: Criterion,
    ) -> Result<SearchResult, SearchError> {
        let evaluation = Evaluation::Informed {
            evaluator: self.evaluator(criterion),
            visited: VisitedCost::starting_at(origin),
        };
        self.run(origin, destination, Discipline::ByEstimate, evaluation)
    }

    /// A* between two points on the map.
    ///
    /// Both points resolve to their nearest stations. The lowest-numbered
    /// nearest station is the single origin; every station tied for
    /// nearest to `destination` is tried, and the cheapest route wins
    /// (the first destination in id order on equal cost).
    pub fn astar(
        &self,
        origin: &Coord,
        destination: &Coord,
        criterion: Criterion,
    ) -> Result<SearchResult, SearchError> {
        let Some(from) = coord_to_nodes(origin, self.network).first().copied() else {
            return Ok(SearchResult::not_found(0));
        };
        let targets: Vec<StationId> = coord_to_nodes(destination, self.network)
            .into_iter()
            .collect();

        debug!(
            origin = %from,
            destinations = targets.len(),
            %criterion,
            "Resolved A* candidates"
        );

        let runs: Vec<Result<SearchResult, SearchError>> =
            if self.config.parallel_candidates && targets.len() > 1 {
                targets
                    .par_iter()
                    .map(|to| self.astar_between(from, *to, criterion))
                    .collect()
            } else {
                targets
                    .iter()
                    .map(|to| self.astar_between(from, *to, criterion))
                    .collect()
            };

        let mut best: Option<Path> = None;
        let mut expanded = 0;
        for run in runs {
            let run = run?;
            expanded += run.expanded;
            if let Some(path) = run.path
                && best.as_ref().is_none_or(|b| path.g() < b.g())
            {
                best = Some(path);
            }
        }

        Ok(SearchResult {
            path: best,
            expanded,
        })
    }
}

/// Depth-first search with the default configuration.
pub fn depth_first(
    origin: StationId,
    destination: StationId,
    network: &Network,
) -> Result<Option<Path>, SearchError> {
    let config = SearchConfig::default();
    Ok(Planner::new(network, &config)
        .depth_first(origin, destination)?
        .into_path())
}

/// Breadth-first search with the default configuration.
pub fn breadth_first(
    origin: StationId,
    destination: StationId,
    network: &Network,
) -> Result<Option<Path>, SearchError> {
    let config = SearchConfig::default();
    Ok(Planner::new(network, &config)
        .breadth_first(origin, destination)?
        .into_path())
}

/// Uniform-cost search with the default configuration.
pub fn uniform_cost(
    origin: StationId,
    destination: StationId,
    network: &Network,
    criterion: Criterion,
) -> Result<Option<Path>, SearchError> {
    let config = SearchConfig::default();
    Ok(Planner::new(network, &config)
        .uniform_cost(origin, destination, criterion)?
        .into_path())
}

/// Coordinate-based A* with the default configuration.
pub fn astar(
    origin: &Coord,
    destination: &Coord,
    network: &Network,
    criterion: Criterion,
) -> Result<Option<Path>, SearchError> {
    let config = SearchConfig::default();
    Ok(Planner::new(network, &config)
        .astar(origin, destination, criterion)?
        .into_path())
}
