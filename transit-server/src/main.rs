use std::net::SocketAddr;

use tracing_subscriber::EnvFilter;

use transit_server::ingest::{NetworkDescription, build_network};
use transit_server::web::{AppState, create_router};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Network description path: first CLI argument, or TRANSIT_NETWORK.
    let path = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("TRANSIT_NETWORK").ok())
        .expect("usage: transit-server <network.json> (or set TRANSIT_NETWORK)");

    let description =
        NetworkDescription::from_json_file(&path).expect("failed to load network description");
    let network = build_network(&description).expect("failed to build network");

    let state = AppState::new(network);
    let app = create_router(state);

    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));
    println!("Transit catalogue listening on http://{addr}");
    println!();
    println!("API Endpoints:");
    println!("  GET /health           - Health check");
    println!("  GET /bus/:name        - Bus route statistics");
    println!("  GET /stop/:name       - Buses serving a stop");
    println!("  GET /route?from=&to=  - Fastest route between stops");
    println!("  GET /map              - Route shapes for rendering");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
