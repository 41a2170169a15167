//! Route-graph construction and shortest-time search.
//!
//! The catalogue's buses become a directed weighted graph: one vertex per
//! stop, one edge per reachable (board, alight) pair along a bus's
//! traversal, weighted by a fixed boarding wait plus distance-derived
//! travel time. The router preprocesses the graph once and then answers
//! any number of point-to-point queries with full path reconstruction.

mod build;
mod graph;
mod router;
mod settings;

pub use build::build_graph;
pub use graph::{EdgeId, RideEdge, RouteGraph};
pub use router::{RouteInfo, Router};
pub use settings::RoutingSettings;
