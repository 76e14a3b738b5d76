//! Human-readable route descriptions.

use crate::network::Network;
use crate::planner::Path;

/// One line describing `path`, origin first.
///
/// ```text
/// West (L1) -> North (L2) -> Hub (L2)  g=17.00 h=0.00 f=17.00
/// ```
///
/// Stations missing from `network` are shown by id.
pub fn describe(path: &Path, network: &Network) -> String {
    let stops: Vec<String> = path
        .route()
        .into_iter()
        .map(|id| match network.station(id) {
            Some(station) => format!("{} ({})", station.name, station.line),
            None => id.to_string(),
        })
        .collect();

    format!(
        "{}  g={:.2} h={:.2} f={:.2}",
        stops.join(" -> "),
        path.g(),
        path.h(),
        path.f()
    )
}

/// A numbered list of descriptions, one per line.
pub fn describe_all(paths: &[Path], network: &Network) -> String {
    paths
        .iter()
        .enumerate()
        .map(|(i, path)| format!("{}. {}\n", i + 1, describe(path, network)))
        .collect()
}
