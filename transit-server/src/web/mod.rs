//! Web layer for the transit catalogue.
//!
//! Provides HTTP endpoints for bus statistics, stop lookups, route
//! planning, and the renderer view-model over a frozen network.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::create_router;
pub use state::AppState;
