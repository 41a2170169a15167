//! Graph construction from a populated catalogue.

use tracing::debug;

use crate::catalogue::TransportCatalogue;
use crate::domain::{BusId, StopId};

use super::{RideEdge, RouteGraph, RoutingSettings};

/// Build the ride graph for every bus in the catalogue.
///
/// Each traversal leg of each bus contributes one edge per ordered pair of
/// distinct stops along it: board at the earlier stop, ride non-stop to
/// the later one. That is O(L²) edges per leg, which keeps queries simple:
/// "ride three stops on one bus" is a single edge, not a chain of
/// transfers. Round-trip routes are one leg (their expanded sequence
/// already returns to the origin); out-and-back routes get two independent
/// legs, so no edge rides through the turnaround.
///
/// The build never fails: a hop with no recorded distance contributes zero
/// travel time via the catalogue's documented default.
pub fn build_graph(catalogue: &TransportCatalogue, settings: &RoutingSettings) -> RouteGraph {
    let mut graph = RouteGraph::new(catalogue.stop_count());

    for (bus_id, bus) in catalogue.buses() {
        emit_leg_edges(&mut graph, catalogue, settings, bus_id, bus.forward_leg());
        if let Some(return_leg) = bus.return_leg() {
            emit_leg_edges(&mut graph, catalogue, settings, bus_id, return_leg);
        }
    }

    debug!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "route graph built"
    );
    graph
}

/// Emit every reachable-pair edge along one traversal leg.
///
/// Pairs whose endpoints are the same stop (a route revisiting it) emit no
/// edge, but their hops still accumulate into longer spans' weights.
fn emit_leg_edges(
    graph: &mut RouteGraph,
    catalogue: &TransportCatalogue,
    settings: &RoutingSettings,
    bus: BusId,
    leg: &[StopId],
) {
    for i in 0..leg.len() {
        let mut travel = 0.0;
        for j in (i + 1)..leg.len() {
            travel += settings.travel_minutes(catalogue.distance(leg[j - 1], leg[j]));
            if leg[i] != leg[j] {
                graph.add_edge(RideEdge {
                    from: leg[i],
                    to: leg[j],
                    span_count: j - i,
                    bus,
                    weight: settings.wait_minutes() + travel,
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::Coordinates;
    use approx::assert_relative_eq;

    fn abc_catalogue() -> TransportCatalogue {
        let mut catalogue = TransportCatalogue::new();
        catalogue.add_stop("A", Coordinates::new(0.0, 0.0));
        catalogue.add_stop("B", Coordinates::new(0.0, 1.0));
        catalogue.add_stop("C", Coordinates::new(0.0, 2.0));
        catalogue.set_distance("A", "B", 1000.0).unwrap();
        catalogue.set_distance("B", "C", 1000.0).unwrap();
        catalogue
    }

    fn settings() -> RoutingSettings {
        RoutingSettings::new(6, 40.0)
    }

    fn find_edge<'a>(graph: &'a RouteGraph, from: StopId, to: StopId) -> Option<&'a RideEdge> {
        graph
            .edges_from(from)
            .iter()
            .map(|&id| graph.edge(id))
            .find(|e| e.to == to)
    }

    #[test]
    fn roundtrip_bus_emits_all_distinct_pairs() {
        let mut catalogue = abc_catalogue();
        catalogue.add_bus("1", &["A", "B", "C", "A"], true).unwrap();

        let graph = build_graph(&catalogue, &settings());

        // Pairs over [A, B, C, A]: (A,B) (A,C) (B,C) (B,A) (C,A); the
        // (0,3) pair is A back to itself and emits nothing.
        assert_eq!(graph.edge_count(), 5);
        assert!(graph.edges().all(|(_, e)| e.from != e.to));
    }

    #[test]
    fn multi_hop_edge_weight_accumulates_travel_time() {
        let mut catalogue = abc_catalogue();
        catalogue.add_bus("1", &["A", "B", "C", "A"], true).unwrap();

        let graph = build_graph(&catalogue, &settings());
        let a = catalogue.find_stop("A").unwrap();
        let b = catalogue.find_stop("B").unwrap();
        let c = catalogue.find_stop("C").unwrap();

        // One hop: 6 min wait + 1000 m at 40 km/h = 1.5 min.
        let one_hop = find_edge(&graph, a, b).unwrap();
        assert_eq!(one_hop.span_count, 1);
        assert_relative_eq!(one_hop.weight, 7.5);

        // Two hops, one wait: 6 + 3 = 9 min.
        let two_hops = find_edge(&graph, a, c).unwrap();
        assert_eq!(two_hops.span_count, 2);
        assert_relative_eq!(two_hops.weight, 9.0);
    }

    #[test]
    fn out_and_back_bus_gets_independent_return_edges() {
        let mut catalogue = abc_catalogue();
        catalogue.add_bus("9", &["A", "B", "C"], false).unwrap();

        let graph = build_graph(&catalogue, &settings());
        let a = catalogue.find_stop("A").unwrap();
        let c = catalogue.find_stop("C").unwrap();

        // Forward leg [A,B,C]: 3 edges; return leg [C,B,A]: 3 edges.
        assert_eq!(graph.edge_count(), 6);

        // The return direction uses the symmetric distance fallback and
        // costs the same as the forward ride, with its own single wait.
        let forward = find_edge(&graph, a, c).unwrap();
        let back = find_edge(&graph, c, a).unwrap();
        assert_relative_eq!(forward.weight, 9.0);
        assert_relative_eq!(back.weight, 9.0);
        assert_eq!(back.span_count, 2);
    }

    #[test]
    fn no_edge_crosses_the_turnaround() {
        let mut catalogue = abc_catalogue();
        catalogue.add_bus("9", &["A", "B", "C"], false).unwrap();

        let graph = build_graph(&catalogue, &settings());
        let a = catalogue.find_stop("A").unwrap();

        // Riding A -> C -> A as one edge would be a span of 4; the longest
        // span on either leg of this route is 2.
        assert!(graph.edges().all(|(_, e)| e.span_count <= 2));
        assert!(find_edge(&graph, a, a).is_none());
    }

    #[test]
    fn missing_distance_contributes_zero_travel_time() {
        let mut catalogue = TransportCatalogue::new();
        catalogue.add_stop("X", Coordinates::new(0.0, 0.0));
        catalogue.add_stop("Y", Coordinates::new(0.0, 1.0));
        catalogue.add_bus("5", &["X", "Y"], false).unwrap();

        let graph = build_graph(&catalogue, &settings());
        let x = catalogue.find_stop("X").unwrap();
        let y = catalogue.find_stop("Y").unwrap();

        let edge = find_edge(&graph, x, y).unwrap();
        assert_relative_eq!(edge.weight, settings().wait_minutes());
    }

    #[test]
    fn revisited_stop_suppresses_degenerate_edges_but_keeps_spans() {
        let mut catalogue = abc_catalogue();
        catalogue.set_distance("B", "A", 1000.0).unwrap();
        // A figure-eight-ish loop that passes through B twice.
        catalogue
            .add_bus("8", &["A", "B", "C", "B", "A"], true)
            .unwrap();

        let graph = build_graph(&catalogue, &settings());
        let a = catalogue.find_stop("A").unwrap();
        let c = catalogue.find_stop("C").unwrap();

        assert!(graph.edges().all(|(_, e)| e.from != e.to));

        // C at index 2 back to A at index 4: span 2, two hops of 1000 m.
        let c_to_a = find_edge(&graph, c, a).unwrap();
        assert_eq!(c_to_a.span_count, 2);
        assert_relative_eq!(c_to_a.weight, 9.0);
    }

    #[test]
    fn single_stop_route_emits_no_edges() {
        let mut catalogue = abc_catalogue();
        catalogue.add_bus("0", &["A"], true).unwrap();
        catalogue.add_bus("00", &["A"], false).unwrap();

        let graph = build_graph(&catalogue, &settings());
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn build_is_deterministic() {
        let mut catalogue = abc_catalogue();
        catalogue.add_bus("1", &["A", "B", "C", "A"], true).unwrap();
        catalogue.add_bus("9", &["C", "B"], false).unwrap();

        let first = build_graph(&catalogue, &settings());
        let second = build_graph(&catalogue, &settings());

        assert_eq!(first.edge_count(), second.edge_count());
        for ((_, a), (_, b)) in first.edges().zip(second.edges()) {
            assert_eq!(a, b);
        }
    }
}
