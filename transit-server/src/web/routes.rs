//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use tracing::debug;

use crate::network::QueryError;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/bus/:name", get(bus_info))
        .route("/stop/:name", get(stop_info))
        .route("/route", get(find_route))
        .route("/map", get(map_view))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Aggregate statistics for one bus route.
async fn bus_info(State(state): State<AppState>, Path(name): Path<String>) -> Response {
    match state.network.bus_info(&name) {
        Some(info) => Json(BusInfoResponse::from_info(&info)).into_response(),
        None => not_found(),
    }
}

/// The buses serving one stop.
async fn stop_info(State(state): State<AppState>, Path(name): Path<String>) -> Response {
    match state.network.stop_info(&name) {
        Some(info) => Json(StopInfoResponse::from_info(&info)).into_response(),
        None => not_found(),
    }
}

/// Fastest route between two stops.
///
/// An unknown stop name is a 404; a pair of valid stops with no
/// connecting path is a successful query whose answer is "not found".
async fn find_route(State(state): State<AppState>, Query(req): Query<RouteRequest>) -> Response {
    match state.network.find_route(&req.from, &req.to) {
        Ok(Some(plan)) => Json(RouteResponse::from_plan(&plan)).into_response(),
        Ok(None) => {
            debug!(from = %req.from, to = %req.to, "no route");
            Json(ErrorResponse::not_found()).into_response()
        }
        Err(QueryError::UnknownStop(name)) => {
            debug!(stop = %name, "route query for unknown stop");
            not_found()
        }
    }
}

/// Per-bus polylines for map rendering.
async fn map_view(State(state): State<AppState>) -> Json<MapResponse> {
    let buses = state
        .network
        .bus_shapes()
        .iter()
        .map(BusShapeResult::from_shape)
        .collect();
    Json(MapResponse { buses })
}

fn not_found() -> Response {
    (StatusCode::NOT_FOUND, Json(ErrorResponse::not_found())).into_response()
}
