//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{BusInfo, StopInfo};
use crate::network::{RouteLeg, RoutePlan};
use crate::render::BusShape;

/// Response for a bus-info query.
#[derive(Debug, Serialize)]
pub struct BusInfoResponse {
    /// Ratio of measured road length to straight-line length
    pub curvature: f64,

    /// Measured road length in meters
    pub route_length: f64,

    /// Stops on the full round trip, repeats included
    pub stop_count: usize,

    /// Distinct stops on the route
    pub unique_stop_count: usize,
}

impl BusInfoResponse {
    pub fn from_info(info: &BusInfo) -> Self {
        Self {
            curvature: info.curvature,
            route_length: info.route_length,
            stop_count: info.stop_count,
            unique_stop_count: info.unique_stop_count,
        }
    }
}

/// Response for a stop-info query.
#[derive(Debug, Serialize)]
pub struct StopInfoResponse {
    /// Serving bus names, lexicographically ordered
    pub buses: Vec<String>,
}

impl StopInfoResponse {
    pub fn from_info(info: &StopInfo) -> Self {
        Self {
            buses: info.buses.iter().cloned().collect(),
        }
    }
}

/// Query parameters for a route request.
#[derive(Debug, Deserialize)]
pub struct RouteRequest {
    /// Origin stop name
    pub from: String,

    /// Destination stop name
    pub to: String,
}

/// Response for a successful route query.
#[derive(Debug, Serialize)]
pub struct RouteResponse {
    /// Total travel time in minutes
    pub total_time: f64,

    /// Wait and ride legs in travel order
    pub items: Vec<RouteItem>,
}

/// One leg of a planned route on the wire.
#[derive(Debug, Serialize)]
#[serde(tag = "type")]
pub enum RouteItem {
    /// Wait at a stop before boarding
    Wait { stop_name: String, time: f64 },

    /// Ride a bus for `span_count` hops
    Bus {
        bus: String,
        span_count: usize,
        time: f64,
    },
}

impl RouteResponse {
    pub fn from_plan(plan: &RoutePlan) -> Self {
        let items = plan
            .legs
            .iter()
            .map(|leg| match leg {
                RouteLeg::Wait { stop, time } => RouteItem::Wait {
                    stop_name: stop.clone(),
                    time: *time,
                },
                RouteLeg::Ride {
                    bus,
                    span_count,
                    time,
                } => RouteItem::Bus {
                    bus: bus.clone(),
                    span_count: *span_count,
                    time: *time,
                },
            })
            .collect();

        Self {
            total_time: plan.total_time,
            items,
        }
    }
}

/// The renderer view-model on the wire.
#[derive(Debug, Serialize)]
pub struct MapResponse {
    pub buses: Vec<BusShapeResult>,
}

/// Drawing data for one bus route.
#[derive(Debug, Serialize)]
pub struct BusShapeResult {
    pub name: String,
    pub is_roundtrip: bool,
    pub final_stop: ShapePointResult,
    pub points: Vec<ShapePointResult>,
}

/// A labeled polyline point.
#[derive(Debug, Serialize)]
pub struct ShapePointResult {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl BusShapeResult {
    pub fn from_shape(shape: &BusShape) -> Self {
        let point = |p: &crate::render::ShapePoint| ShapePointResult {
            name: p.stop.clone(),
            latitude: p.coordinates.lat,
            longitude: p.coordinates.lng,
        };

        Self {
            name: shape.name.clone(),
            is_roundtrip: shape.is_roundtrip,
            final_stop: point(&shape.final_stop),
            points: shape.points.iter().map(point).collect(),
        }
    }
}

/// Error body for absent resources and failed routes.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error_message: String,
}

impl ErrorResponse {
    pub fn not_found() -> Self {
        Self {
            error_message: "not found".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn route_items_tag_by_type() {
        let plan = RoutePlan {
            total_time: 9.0,
            legs: vec![
                RouteLeg::Wait {
                    stop: "A".to_string(),
                    time: 6.0,
                },
                RouteLeg::Ride {
                    bus: "1".to_string(),
                    span_count: 2,
                    time: 3.0,
                },
            ],
        };

        let json = serde_json::to_value(RouteResponse::from_plan(&plan)).unwrap();
        assert_eq!(json["total_time"], 9.0);
        assert_eq!(json["items"][0]["type"], "Wait");
        assert_eq!(json["items"][0]["stop_name"], "A");
        assert_eq!(json["items"][1]["type"], "Bus");
        assert_eq!(json["items"][1]["span_count"], 2);
        assert_eq!(json["items"][1]["time"], 3.0);
    }

    #[test]
    fn stop_info_response_preserves_order() {
        let mut info = StopInfo::default();
        info.buses.insert("9".to_string());
        info.buses.insert("10".to_string());
        info.buses.insert("2".to_string());

        let response = StopInfoResponse::from_info(&info);
        assert_eq!(response.buses, ["10", "2", "9"]);
    }

    #[test]
    fn error_response_shape() {
        let json = serde_json::to_value(ErrorResponse::not_found()).unwrap();
        assert_eq!(json["error_message"], "not found");
    }
}
