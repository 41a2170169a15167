//! The frozen transit network: catalogue, graph, and router behind one
//! query facade.
//!
//! `TransitNetwork::build` is the only way to obtain a queryable network,
//! so nothing can be queried before the build phase completes. After it,
//! every operation is read-only: the network can be shared across threads
//! without locking.

use tracing::info;

use crate::catalogue::TransportCatalogue;
use crate::domain::{BusInfo, StopInfo};
use crate::render::{self, BusShape};
use crate::routing::{Router, RoutingSettings, build_graph};

/// Error for route queries whose endpoints do not name known stops.
///
/// Distinct from "no route": here the names themselves are invalid, which
/// callers are expected to report differently.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    #[error("unknown stop: {0}")]
    UnknownStop(String),
}

/// One leg of a planned route.
#[derive(Debug, Clone, PartialEq)]
pub enum RouteLeg {
    /// Wait at a stop for the configured boarding time.
    Wait { stop: String, time: f64 },

    /// Ride a bus for `span_count` hops without alighting.
    Ride {
        bus: String,
        span_count: usize,
        time: f64,
    },
}

/// A planned route: total minutes plus the wait/ride legs in order.
///
/// Built fresh for every query; never cached.
#[derive(Debug, Clone, PartialEq)]
pub struct RoutePlan {
    pub total_time: f64,
    pub legs: Vec<RouteLeg>,
}

impl RoutePlan {
    /// The zero-length plan for a traveler already at their destination.
    fn already_there() -> Self {
        Self {
            total_time: 0.0,
            legs: Vec::new(),
        }
    }
}

/// The immutable product of the build phase.
#[derive(Debug)]
pub struct TransitNetwork {
    catalogue: TransportCatalogue,
    router: Router,
    settings: RoutingSettings,
}

impl TransitNetwork {
    /// Freeze a populated catalogue into a queryable network.
    ///
    /// Builds the ride graph and preprocesses the router exactly once;
    /// the catalogue is consumed, ending the mutation phase.
    pub fn build(catalogue: TransportCatalogue, settings: RoutingSettings) -> Self {
        let graph = build_graph(&catalogue, &settings);
        info!(
            stops = catalogue.stop_count(),
            edges = graph.edge_count(),
            "transit network built"
        );
        let router = Router::new(graph);
        Self {
            catalogue,
            router,
            settings,
        }
    }

    pub fn catalogue(&self) -> &TransportCatalogue {
        &self.catalogue
    }

    pub fn settings(&self) -> &RoutingSettings {
        &self.settings
    }

    /// Aggregate statistics for a named bus, or `None` if unknown.
    pub fn bus_info(&self, name: &str) -> Option<BusInfo> {
        self.catalogue.bus_info(name)
    }

    /// The buses serving a named stop, or `None` if the stop is unknown.
    pub fn stop_info(&self, name: &str) -> Option<StopInfo> {
        self.catalogue.stop_info(name)
    }

    /// Fastest route between two named stops.
    ///
    /// `Err` when either name is unknown; `Ok(None)` when both are valid
    /// but no path exists; `Ok(Some(..))` with zero legs when the two
    /// names resolve to the same stop.
    pub fn find_route(&self, from: &str, to: &str) -> Result<Option<RoutePlan>, QueryError> {
        let from_id = self
            .catalogue
            .find_stop(from)
            .ok_or_else(|| QueryError::UnknownStop(from.to_string()))?;
        let to_id = self
            .catalogue
            .find_stop(to)
            .ok_or_else(|| QueryError::UnknownStop(to.to_string()))?;

        if from_id == to_id {
            return Ok(Some(RoutePlan::already_there()));
        }

        let Some(route) = self.router.find_route(from_id, to_id) else {
            return Ok(None);
        };

        let wait = self.settings.wait_minutes();
        let mut legs = Vec::with_capacity(route.edges.len() * 2);
        for edge_id in route.edges {
            let edge = self.router.graph().edge(edge_id);
            legs.push(RouteLeg::Wait {
                stop: self.catalogue.stop(edge.from).name.clone(),
                time: wait,
            });
            legs.push(RouteLeg::Ride {
                bus: self.catalogue.bus(edge.bus).name.clone(),
                span_count: edge.span_count,
                time: edge.weight - wait,
            });
        }

        Ok(Some(RoutePlan {
            total_time: route.weight,
            legs,
        }))
    }

    /// Per-bus polylines for an external map renderer.
    pub fn bus_shapes(&self) -> Vec<BusShape> {
        render::bus_shapes(&self.catalogue)
    }
}
