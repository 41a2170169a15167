//! Directed weighted graph over stop ids.
//!
//! Vertices are the catalogue's stop ids, which are dense and contiguous,
//! so the graph is array-backed: edges live in one arena and each vertex
//! keeps the ids of its outgoing edges.

use crate::domain::{BusId, StopId};

/// Index of an edge in the graph's arena, assigned in insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EdgeId(pub usize);

/// One "board, ride, alight" segment on a single bus.
#[derive(Debug, Clone, PartialEq)]
pub struct RideEdge {
    pub from: StopId,
    pub to: StopId,

    /// Number of stop-to-stop hops covered without changing bus.
    pub span_count: usize,

    /// The bus this segment rides.
    pub bus: BusId,

    /// Boarding wait plus accumulated travel time, in minutes.
    pub weight: f64,
}

/// A static directed weighted graph with a fixed vertex count.
#[derive(Debug)]
pub struct RouteGraph {
    edges: Vec<RideEdge>,
    outgoing: Vec<Vec<EdgeId>>,
}

impl RouteGraph {
    /// Create a graph with `vertex_count` vertices and no edges.
    pub fn new(vertex_count: usize) -> Self {
        Self {
            edges: Vec::new(),
            outgoing: vec![Vec::new(); vertex_count],
        }
    }

    /// Add an edge, returning its id.
    pub fn add_edge(&mut self, edge: RideEdge) -> EdgeId {
        let id = EdgeId(self.edges.len());
        self.outgoing[edge.from.0].push(id);
        self.edges.push(edge);
        id
    }

    pub fn edge(&self, id: EdgeId) -> &RideEdge {
        &self.edges[id.0]
    }

    /// Ids of the edges leaving `vertex`, in insertion order.
    pub fn edges_from(&self, vertex: StopId) -> &[EdgeId] {
        &self.outgoing[vertex.0]
    }

    pub fn vertex_count(&self) -> usize {
        self.outgoing.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// All edges in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = (EdgeId, &RideEdge)> {
        self.edges.iter().enumerate().map(|(i, e)| (EdgeId(i), e))
    }
}
