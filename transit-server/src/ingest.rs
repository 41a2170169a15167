//! Typed ingestion of a network description.
//!
//! The boundary between the wire format and the core: records are plain
//! serde types, and `build_network` applies them in the contract order
//! (all stops, then all distances, then all buses) before freezing the
//! network. Records inside one description may therefore be listed in any
//! order; referencing a stop the description never declares is an error.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::catalogue::TransportCatalogue;
use crate::domain::IngestError;
use crate::geo::Coordinates;
use crate::network::TransitNetwork;
use crate::routing::RoutingSettings;

/// A stop to add: name plus coordinates in degrees.
#[derive(Debug, Clone, Deserialize)]
pub struct StopRecord {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// A measured road distance between two named stops, in meters.
#[derive(Debug, Clone, Deserialize)]
pub struct DistanceRecord {
    pub from: String,
    pub to: String,
    pub meters: f64,
}

/// A bus route: forward-leg stop names plus the round-trip flag.
#[derive(Debug, Clone, Deserialize)]
pub struct BusRecord {
    pub name: String,
    pub stops: Vec<String>,
    pub is_roundtrip: bool,
}

/// Routing cost-model parameters as they appear on the wire.
#[derive(Debug, Clone, Deserialize)]
pub struct RoutingRecord {
    pub bus_wait_time: u32,
    pub bus_velocity: f64,
}

/// A complete network description.
#[derive(Debug, Clone, Deserialize)]
pub struct NetworkDescription {
    pub stops: Vec<StopRecord>,
    #[serde(default)]
    pub distances: Vec<DistanceRecord>,
    pub buses: Vec<BusRecord>,
    pub routing: RoutingRecord,
}

/// Errors from loading a description out of its wire format.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read network description: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed network description: {0}")]
    Parse(#[from] serde_json::Error),
}

impl NetworkDescription {
    pub fn from_json_str(json: &str) -> Result<Self, LoadError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_reader(reader: impl Read) -> Result<Self, LoadError> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let file = std::fs::File::open(path)?;
        Self::from_json_reader(std::io::BufReader::new(file))
    }
}

/// Populate a catalogue from a description and freeze it into a network.
pub fn build_network(description: &NetworkDescription) -> Result<TransitNetwork, IngestError> {
    if description.routing.bus_velocity <= 0.0 {
        return Err(IngestError::InvalidVelocity {
            velocity: description.routing.bus_velocity,
        });
    }

    let mut catalogue = TransportCatalogue::new();
    for stop in &description.stops {
        catalogue.add_stop(&stop.name, Coordinates::new(stop.latitude, stop.longitude));
    }
    for distance in &description.distances {
        catalogue.set_distance(&distance.from, &distance.to, distance.meters)?;
    }
    for bus in &description.buses {
        catalogue.add_bus(&bus.name, &bus.stops, bus.is_roundtrip)?;
    }

    info!(
        stops = description.stops.len(),
        distances = description.distances.len(),
        buses = description.buses.len(),
        "network description ingested"
    );

    let settings = RoutingSettings::new(
        description.routing.bus_wait_time,
        description.routing.bus_velocity,
    );
    Ok(TransitNetwork::build(catalogue, settings))
}
