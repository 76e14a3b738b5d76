//! Path expansion and cycle filtering.

use crate::network::Network;

use super::Path;

/// Every one-connection extension of `path`, in neighbour order.
///
/// Children inherit the parent's `g` and `h`; evaluating them is left to
/// the [`Evaluator`](super::Evaluator).
pub fn expand(path: &Path, network: &Network) -> Vec<Path> {
    network
        .neighbours(path.last())
        .iter()
        .map(|(neighbour, _)| path.extend(*neighbour))
        .collect()
}

/// Keep only the paths that visit no station twice.
pub fn remove_cycles(paths: Vec<Path>) -> Vec<Path> {
    paths.into_iter().filter(Path::is_simple).collect()
}
