//! View-model for an external map renderer.
//!
//! The renderer draws route polylines and end-of-line labels; for that it
//! needs each bus's stop names and coordinates, its round-trip flag, and
//! its designated final stop. Nothing here touches the graph or router.

use crate::catalogue::TransportCatalogue;
use crate::geo::Coordinates;

/// One labeled point on a route polyline.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapePoint {
    pub stop: String,
    pub coordinates: Coordinates,
}

/// Drawing data for one bus route.
#[derive(Debug, Clone, PartialEq)]
pub struct BusShape {
    pub name: String,

    /// Points in expanded-sequence order.
    pub points: Vec<ShapePoint>,

    pub is_roundtrip: bool,

    /// Last stop of the forward leg, for end-of-line label placement.
    pub final_stop: ShapePoint,
}

/// Extract drawing data for every bus, ordered by bus name so a renderer
/// produces deterministic output.
pub fn bus_shapes(catalogue: &TransportCatalogue) -> Vec<BusShape> {
    let point = |id| {
        let stop = catalogue.stop(id);
        ShapePoint {
            stop: stop.name.clone(),
            coordinates: stop.coordinates,
        }
    };

    let mut shapes: Vec<BusShape> = catalogue
        .buses()
        .map(|(_, bus)| BusShape {
            name: bus.name.clone(),
            points: bus.stops.iter().map(|&id| point(id)).collect(),
            is_roundtrip: bus.is_roundtrip,
            final_stop: point(bus.final_stop),
        })
        .collect();
    shapes.sort_by(|a, b| a.name.cmp(&b.name));
    shapes
}
