//! Aggregate query results.

use std::collections::BTreeSet;

/// Aggregate statistics for one bus route.
///
/// Lengths are in meters over the expanded stop sequence. `route_length`
/// sums measured road distances, `geo_length` sums great-circle distances,
/// and `curvature` is their ratio.
#[derive(Debug, Clone, PartialEq)]
pub struct BusInfo {
    pub name: String,
    pub stop_count: usize,
    pub unique_stop_count: usize,
    pub route_length: f64,
    pub geo_length: f64,
    pub curvature: f64,
}

/// The set of buses serving one stop.
///
/// Bus names are kept in a `BTreeSet` so serialized output is
/// deterministic (lexicographic order). A stop served by no bus has an
/// empty set; that is still a present stop, not an absence.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StopInfo {
    pub name: String,
    pub buses: BTreeSet<String>,
}
