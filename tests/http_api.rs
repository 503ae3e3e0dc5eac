//! HTTP adapter tests: oracle served over Axum against a mock upstream.

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use flight_oracle::config::UpstreamConfig;
use flight_oracle::http::build_router;
use flight_oracle::oracle::{FlightClient, ResultEnvelope};

mod common;

async fn start_oracle(addr: SocketAddr, upstream: SocketAddr) {
    let client = FlightClient::new(UpstreamConfig {
        endpoint: format!("http://{}/v1/flights", upstream),
        timeout_secs: 5,
        api_key: Some("test-key".into()),
    })
    .unwrap();

    let app = build_router(Arc::new(client));
    let listener = TcpListener::bind(addr).await.unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
}

#[tokio::test]
async fn test_post_oracle_returns_result_envelope() {
    let upstream: SocketAddr = "127.0.0.1:48281".parse().unwrap();
    let oracle: SocketAddr = "127.0.0.1:48282".parse().unwrap();
    common::start_mock_upstream(upstream, 200, common::FLIGHT_BODY).await;
    start_oracle(oracle, upstream).await;

    let response = reqwest::Client::new()
        .post(format!("http://{}/oracle", oracle))
        .json(&serde_json::json!({"data": ["AA100"]}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 200);
    let envelope: ResultEnvelope = response.json().await.unwrap();
    match envelope {
        ResultEnvelope::Result(summary) => {
            assert_eq!(summary.flight_number, "AA100");
            assert_eq!(summary.departure_city, "John F Kennedy International");
        }
        ResultEnvelope::Error(message) => panic!("unexpected error envelope: {}", message),
    }
}

#[tokio::test]
async fn test_post_oracle_wraps_upstream_failure() {
    let upstream: SocketAddr = "127.0.0.1:48283".parse().unwrap();
    let oracle: SocketAddr = "127.0.0.1:48284".parse().unwrap();
    common::start_mock_upstream(upstream, 404, "{}").await;
    start_oracle(oracle, upstream).await;

    let response = reqwest::Client::new()
        .post(format!("http://{}/oracle", oracle))
        .json(&serde_json::json!({"data": ["AA100"]}))
        .send()
        .await
        .unwrap();

    // Error envelopes are payload; the HTTP exchange itself succeeds.
    assert_eq!(response.status().as_u16(), 200);
    let envelope: ResultEnvelope = response.json().await.unwrap();
    assert_eq!(
        envelope,
        ResultEnvelope::Error("API request failed with status code 404".into())
    );
}

#[tokio::test]
async fn test_health_endpoint() {
    let upstream: SocketAddr = "127.0.0.1:48285".parse().unwrap();
    let oracle: SocketAddr = "127.0.0.1:48286".parse().unwrap();
    start_oracle(oracle, upstream).await;

    let response = reqwest::Client::new()
        .get(format!("http://{}/health", oracle))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body, serde_json::json!({"status": "ok"}));
}
