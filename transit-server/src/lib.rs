//! Transit catalogue and route planner.
//!
//! Models a bus network — stops, routes, measured road distances — and
//! answers aggregate statistics and fastest-route queries over a frozen
//! wait-plus-ride graph.

pub mod catalogue;
pub mod domain;
pub mod geo;
pub mod ingest;
pub mod network;
pub mod render;
pub mod routing;
pub mod web;
