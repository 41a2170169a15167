//! The transit catalogue: owner of stops, buses, and measured distances.
//!
//! The catalogue is populated during the build phase and read-only
//! afterwards. Entities live in id-indexed arenas (`Vec`s); every
//! cross-reference holds a `StopId`/`BusId`, so growing the arenas never
//! invalidates anything and no long-lived borrows are needed.

use std::collections::{BTreeSet, HashMap, HashSet};

use crate::domain::{Bus, BusId, BusInfo, IngestError, Stop, StopId, StopInfo, expand_route};
use crate::geo::{self, Coordinates};

/// In-memory store of the transit network's entities.
#[derive(Debug, Default)]
pub struct TransportCatalogue {
    stops: Vec<Stop>,
    stop_ids: HashMap<String, StopId>,
    buses: Vec<Bus>,
    bus_ids: HashMap<String, BusId>,
    buses_for_stop: HashMap<StopId, BTreeSet<BusId>>,
    distances: HashMap<(StopId, StopId), f64>,
}

impl TransportCatalogue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a stop, or update an existing stop's coordinates.
    ///
    /// The id assigned at first insertion never changes: re-adding the
    /// same name moves the stop, it does not create a new one. Distances
    /// recorded against the stop are keyed by id and survive the update.
    pub fn add_stop(&mut self, name: &str, coordinates: Coordinates) -> StopId {
        if let Some(&id) = self.stop_ids.get(name) {
            self.stops[id.0].coordinates = coordinates;
            return id;
        }

        let id = StopId(self.stops.len());
        self.stops.push(Stop::new(name, coordinates));
        self.stop_ids.insert(name.to_string(), id);
        id
    }

    pub fn find_stop(&self, name: &str) -> Option<StopId> {
        self.stop_ids.get(name).copied()
    }

    pub fn stop(&self, id: StopId) -> &Stop {
        &self.stops[id.0]
    }

    pub fn stop_count(&self) -> usize {
        self.stops.len()
    }

    /// All stops in id order.
    pub fn stops(&self) -> impl Iterator<Item = (StopId, &Stop)> {
        self.stops.iter().enumerate().map(|(i, s)| (StopId(i), s))
    }

    /// Record a bus route.
    ///
    /// `stop_names` is the forward leg; the stored sequence is expanded
    /// per the round-trip rule. Every name must already resolve to a stop:
    /// an unknown name means the ingestion-order contract was violated, so
    /// this fails fast instead of recording a partial route.
    pub fn add_bus<S: AsRef<str>>(
        &mut self,
        name: &str,
        stop_names: &[S],
        is_roundtrip: bool,
    ) -> Result<BusId, IngestError> {
        let mut forward = Vec::with_capacity(stop_names.len());
        for stop_name in stop_names {
            let stop_name = stop_name.as_ref();
            let id = self
                .find_stop(stop_name)
                .ok_or_else(|| IngestError::UnknownStopInRoute {
                    bus: name.to_string(),
                    stop: stop_name.to_string(),
                })?;
            forward.push(id);
        }
        let final_stop = *forward.last().ok_or_else(|| IngestError::EmptyRoute {
            bus: name.to_string(),
        })?;

        let id = BusId(self.buses.len());
        self.buses.push(Bus {
            name: name.to_string(),
            stops: expand_route(&forward, is_roundtrip),
            is_roundtrip,
            final_stop,
        });
        self.bus_ids.insert(name.to_string(), id);

        for &stop in &self.buses[id.0].stops {
            self.buses_for_stop.entry(stop).or_default().insert(id);
        }
        Ok(id)
    }

    pub fn find_bus(&self, name: &str) -> Option<BusId> {
        self.bus_ids.get(name).copied()
    }

    pub fn bus(&self, id: BusId) -> &Bus {
        &self.buses[id.0]
    }

    /// All buses in insertion order.
    pub fn buses(&self) -> impl Iterator<Item = (BusId, &Bus)> {
        self.buses.iter().enumerate().map(|(i, b)| (BusId(i), b))
    }

    /// Record a directed measured road distance in meters.
    ///
    /// Both stops must already exist. Calling twice for the same ordered
    /// pair overwrites: last write wins.
    pub fn set_distance(&mut self, from: &str, to: &str, meters: f64) -> Result<(), IngestError> {
        let from = self
            .find_stop(from)
            .ok_or_else(|| IngestError::UnknownStopInDistance {
                stop: from.to_string(),
            })?;
        let to = self
            .find_stop(to)
            .ok_or_else(|| IngestError::UnknownStopInDistance {
                stop: to.to_string(),
            })?;
        self.distances.insert((from, to), meters);
        Ok(())
    }

    /// Measured road distance in meters between two stops.
    ///
    /// Falls back to the reverse-ordered pair when only one direction was
    /// recorded, and to 0.0 when neither was. The zero default is part of
    /// the contract: aggregate statistics and graph edge weights both rely
    /// on it instead of treating missing data as an error.
    pub fn distance(&self, from: StopId, to: StopId) -> f64 {
        self.distances
            .get(&(from, to))
            .or_else(|| self.distances.get(&(to, from)))
            .copied()
            .unwrap_or(0.0)
    }

    /// Aggregate statistics for a named bus, or `None` if unknown.
    pub fn bus_info(&self, name: &str) -> Option<BusInfo> {
        let bus = self.bus(self.find_bus(name)?);

        let unique: HashSet<StopId> = bus.stops.iter().copied().collect();
        let route_length = self.route_length(bus);
        let geo_length = self.geo_length(bus);
        // A degenerate route over a single point has no geographic extent;
        // report zero curvature rather than dividing by zero.
        let curvature = if geo_length > 0.0 {
            route_length / geo_length
        } else {
            0.0
        };

        Some(BusInfo {
            name: bus.name.clone(),
            stop_count: bus.stops.len(),
            unique_stop_count: unique.len(),
            route_length,
            geo_length,
            curvature,
        })
    }

    /// The buses serving a named stop, or `None` if the stop is unknown.
    ///
    /// A known stop with no service yields an empty set.
    pub fn stop_info(&self, name: &str) -> Option<StopInfo> {
        let id = self.find_stop(name)?;
        let buses = self
            .buses_for_stop
            .get(&id)
            .map(|ids| ids.iter().map(|&b| self.bus(b).name.clone()).collect())
            .unwrap_or_default();

        Some(StopInfo {
            name: self.stop(id).name.clone(),
            buses,
        })
    }

    fn route_length(&self, bus: &Bus) -> f64 {
        bus.stops
            .windows(2)
            .map(|pair| self.distance(pair[0], pair[1]))
            .sum()
    }

    fn geo_length(&self, bus: &Bus) -> f64 {
        bus.stops
            .windows(2)
            .map(|pair| {
                geo::distance(self.stop(pair[0]).coordinates, self.stop(pair[1]).coordinates)
            })
            .sum()
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn stop_name(i: usize) -> String {
        format!("stop-{i}")
    }

    fn catalogue_with_stops(n: usize) -> TransportCatalogue {
        let mut catalogue = TransportCatalogue::new();
        for i in 0..n {
            catalogue.add_stop(&stop_name(i), Coordinates::new(i as f64 * 0.01, 0.0));
        }
        catalogue
    }

    proptest! {
        /// With a distance recorded in one direction only, both lookups
        /// agree; with none recorded, both are zero.
        #[test]
        fn symmetric_fallback(
            n in 2usize..20,
            from in 0usize..20,
            to in 0usize..20,
            meters in 1.0..100_000.0f64,
        ) {
            let (from, to) = (from % n, to % n);
            prop_assume!(from != to);

            let mut catalogue = catalogue_with_stops(n);
            let from_id = catalogue.find_stop(&stop_name(from)).unwrap();
            let to_id = catalogue.find_stop(&stop_name(to)).unwrap();

            prop_assert_eq!(catalogue.distance(from_id, to_id), 0.0);
            prop_assert_eq!(catalogue.distance(to_id, from_id), 0.0);

            catalogue.set_distance(&stop_name(from), &stop_name(to), meters).unwrap();
            prop_assert_eq!(catalogue.distance(from_id, to_id), meters);
            prop_assert_eq!(catalogue.distance(to_id, from_id), meters);
        }

        /// Stop ids are dense, contiguous, and insertion-ordered, however
        /// often names repeat.
        #[test]
        fn ids_dense_and_stable(names in proptest::collection::vec(0usize..8, 1..40)) {
            let mut catalogue = TransportCatalogue::new();
            for (round, &i) in names.iter().enumerate() {
                catalogue.add_stop(&stop_name(i), Coordinates::new(round as f64, 0.0));
            }

            let unique: std::collections::HashSet<usize> = names.iter().copied().collect();
            prop_assert_eq!(catalogue.stop_count(), unique.len());
            for (expected, (id, _)) in catalogue.stops().enumerate() {
                prop_assert_eq!(id, StopId(expected));
            }
        }
    }
}
