//! HTTP adapter for the oracle.
//!
//! # Responsibilities
//! - Create the Axum Router with the oracle and health handlers
//! - Wire up middleware (tracing, request timeout)
//! - Bind the server to the configured listener
//!
//! # Design Decisions
//! - The oracle endpoint always answers 200 with an envelope; error
//!   envelopes are payload, not transport failures
//! - Malformed request bodies are left to Axum's JSON rejection (4xx)

use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use tokio::net::TcpListener;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};
use uuid::Uuid;

use crate::config::OracleConfig;
use crate::oracle::{handle_request, FlightClient, OracleRequest, ResultEnvelope};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub client: Arc<FlightClient>,
}

/// Build the oracle router around a flight client.
pub fn build_router(client: Arc<FlightClient>) -> Router {
    Router::new()
        .route("/oracle", post(oracle))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(Duration::from_secs(30)))
        .with_state(AppState { client })
}

async fn oracle(
    State(state): State<AppState>,
    Json(request): Json<OracleRequest>,
) -> Json<ResultEnvelope> {
    let request_id = Uuid::new_v4();
    let envelope = handle_request(&state.client, &request).await;
    tracing::info!(
        %request_id,
        flight_id = request.data.first().map(String::as_str).unwrap_or(""),
        error = envelope.is_error(),
        "oracle request resolved"
    );
    Json(envelope)
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}

/// Run the oracle HTTP server until the process is stopped.
pub async fn serve(config: OracleConfig) -> Result<(), Box<dyn std::error::Error>> {
    let client = FlightClient::new(config.upstream.clone())?;
    let app = build_router(Arc::new(client));

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(
        address = %listener.local_addr()?,
        upstream = %config.upstream.endpoint,
        "listening for oracle requests"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
