//! Shortest-time preprocessing and path reconstruction.
//!
//! `Router::new` runs a Dijkstra relaxation from every vertex of the
//! graph, recording for each reachable (source, target) pair the best
//! label and the last edge on the best path. Queries after that are a
//! lookup plus a walk back along `prev_edge` links; nothing is rebuilt
//! per query.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use ordered_float::OrderedFloat;
use tracing::debug;

use crate::domain::StopId;

use super::{EdgeId, RouteGraph};

/// The answer to one shortest-path query: total weight in minutes and the
/// ordered ride edges of the path.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteInfo {
    pub weight: f64,
    pub edges: Vec<EdgeId>,
}

/// Best-known label for one (source, target) pair.
///
/// Labels order lexicographically by `(weight, hops)`: among equal-weight
/// alternatives the path with fewer ride edges wins, which makes query
/// results deterministic under a fixed ingestion order.
#[derive(Debug, Clone, Copy)]
struct Label {
    weight: f64,
    hops: usize,
    /// Last edge on the best path; `None` only at the source itself.
    prev_edge: Option<EdgeId>,
}

/// Shortest-path router over a built ride graph.
///
/// Owns the graph: together they are the immutable product of the build
/// phase, answering any number of queries without further mutation.
#[derive(Debug)]
pub struct Router {
    graph: RouteGraph,
    labels: Vec<Vec<Option<Label>>>,
}

impl Router {
    /// Preprocess the graph for repeated queries.
    pub fn new(graph: RouteGraph) -> Self {
        let labels = (0..graph.vertex_count())
            .map(|source| dijkstra(&graph, StopId(source)))
            .collect();
        debug!(vertices = graph.vertex_count(), "router preprocessed");
        Self { graph, labels }
    }

    pub fn graph(&self) -> &RouteGraph {
        &self.graph
    }

    /// Minimum-cost route between two vertices, or `None` when `to` is
    /// unreachable from `from`.
    ///
    /// Querying a vertex against itself yields a zero-weight route with no
    /// edges; callers that want "already there" semantics should special-
    /// case it before consulting the router.
    pub fn find_route(&self, from: StopId, to: StopId) -> Option<RouteInfo> {
        let label = self.labels[from.0][to.0]?;

        let mut edges = Vec::with_capacity(label.hops);
        let mut cursor = label;
        while let Some(edge_id) = cursor.prev_edge {
            edges.push(edge_id);
            // Every edge on a best path starts at a labeled vertex.
            cursor = self.labels[from.0][self.graph.edge(edge_id).from.0]
                .expect("path predecessor must be labeled");
        }
        edges.reverse();

        Some(RouteInfo {
            weight: label.weight,
            edges,
        })
    }
}

/// Single-source relaxation with deterministic `(weight, hops, vertex)`
/// pop order.
fn dijkstra(graph: &RouteGraph, source: StopId) -> Vec<Option<Label>> {
    let mut labels: Vec<Option<Label>> = vec![None; graph.vertex_count()];
    if graph.vertex_count() == 0 {
        return labels;
    }
    labels[source.0] = Some(Label {
        weight: 0.0,
        hops: 0,
        prev_edge: None,
    });

    let mut queue = BinaryHeap::new();
    queue.push(Reverse((OrderedFloat(0.0), 0usize, source.0)));

    while let Some(Reverse((weight, hops, vertex))) = queue.pop() {
        let Some(settled) = labels[vertex] else {
            continue;
        };
        if (OrderedFloat(settled.weight), settled.hops) < (weight, hops) {
            // Stale queue entry: a better label was settled since the push.
            continue;
        }

        for &edge_id in graph.edges_from(StopId(vertex)) {
            let edge = graph.edge(edge_id);
            let next_weight = weight.0 + edge.weight;
            let next_hops = hops + 1;

            let improves = labels[edge.to.0]
                .is_none_or(|best| (next_weight, next_hops) < (best.weight, best.hops));
            if improves {
                labels[edge.to.0] = Some(Label {
                    weight: next_weight,
                    hops: next_hops,
                    prev_edge: Some(edge_id),
                });
                queue.push(Reverse((OrderedFloat(next_weight), next_hops, edge.to.0)));
            }
        }
    }

    labels
}
