//! JSON network files.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::{LineId, StationId};

use super::{Network, NetworkBuilder, NetworkError};

/// On-disk description of a network.
///
/// ```json
/// {
///   "line_velocities": { "1": 1.5 },
///   "stations": [
///     { "id": 1, "name": "Clot", "line": 1, "x": 0.0, "y": 0.0 },
///     { "id": 2, "name": "Glories", "line": 1, "x": 6.0, "y": 0.0, "velocity": 2.0 }
///   ],
///   "connections": [
///     { "from": 1, "to": 2, "time": 4.0, "bidirectional": true }
///   ]
/// }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NetworkFile {
    /// Velocity of each line, used by stations that declare none.
    #[serde(default)]
    pub line_velocities: BTreeMap<LineId, f64>,

    pub stations: Vec<StationRecord>,

    #[serde(default)]
    pub connections: Vec<ConnectionRecord>,
}

/// One station entry of a [`NetworkFile`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StationRecord {
    pub id: StationId,
    pub name: String,
    pub line: LineId,
    pub x: f64,
    pub y: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub velocity: Option<f64>,
}

/// One connection entry of a [`NetworkFile`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionRecord {
    pub from: StationId,
    pub to: StationId,
    pub time: f64,
    #[serde(default)]
    pub bidirectional: bool,
}

impl NetworkFile {
    /// Parse a network description from JSON text.
    pub fn from_json(json: &str) -> Result<Self, NetworkError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Validate the description and build the network.
    pub fn into_network(self) -> Result<Network, NetworkError> {
        let mut builder = NetworkBuilder::new();

        for (line, velocity) in self.line_velocities {
            builder = builder.line_velocity(line, velocity);
        }

        for record in self.stations {
            builder = match record.velocity {
                Some(velocity) => builder.station_with_velocity(
                    record.id,
                    record.name,
                    record.line,
                    record.x,
                    record.y,
                    velocity,
                ),
                None => builder.station(record.id, record.name, record.line, record.x, record.y),
            };
        }

        for record in self.connections {
            builder = if record.bidirectional {
                builder.bidirectional(record.from, record.to, record.time)
            } else {
                builder.connection(record.from, record.to, record.time)
            };
        }

        builder.build()
    }
}

impl Network {
    /// Load and validate a network from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, NetworkError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| NetworkError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        debug!(path = %path.display(), bytes = contents.len(), "Loading network");
        NetworkFile::from_json(&contents)?.into_network()
    }
}
