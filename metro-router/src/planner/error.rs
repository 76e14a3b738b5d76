//! Search error types.

use crate::domain::StationId;

use super::InvalidCriterion;

/// Error from a route search.
///
/// Not finding a route is not an error; see
/// [`SearchResult::path`](super::SearchResult::path).
#[derive(Debug, Clone, thiserror::Error)]
pub enum SearchError {
    /// Origin or destination is not a station of the network
    #[error("station {0} is not part of the network")]
    UnknownStation(StationId),

    /// A path uses a connection the network does not have
    #[error("no connection from {from} to {to}")]
    MissingConnection { from: StationId, to: StationId },

    /// A criterion id or name failed to parse.
    ///
    /// Searches take a [`Criterion`](super::Criterion) and never produce
    /// this themselves; it lets callers parse raw user input with `?` in a
    /// function returning `SearchError`.
    #[error(transparent)]
    Criterion(#[from] InvalidCriterion),

    /// The configured expansion budget ran out before the search finished
    #[error("search stopped after expanding {expanded} paths")]
    BudgetExhausted { expanded: usize },
}
