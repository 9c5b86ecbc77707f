use std::net::SocketAddr;

use axum::{
    http::{HeaderValue, Method},
    routing::post,
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, Level};

mod domain;
mod rest;

use domain::{BreakdownService, ScanService, SplitService};
use rest::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    info!("Setting up calculator services");
    let state = AppState::new(
        SplitService::new(),
        BreakdownService::new(),
        ScanService::new(),
    );

    // CORS setup to allow the web client to make requests
    let cors = CorsLayer::new()
        .allow_origin("http://localhost:8080".parse::<HeaderValue>()?)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any);

    // Set up our application routes
    let api_routes = Router::new()
        .route("/split/compute", post(rest::compute_split))
        .route("/split/breakdown", post(rest::generate_breakdown))
        .route("/scan", post(rest::scan_bill));

    // Define our main application router
    let app = Router::new()
        .nest("/api", api_routes)
        .layer(cors)
        .with_state(state);

    // Start the server
    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
