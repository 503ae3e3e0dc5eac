//! Shared utilities for oracle integration tests.

use std::net::SocketAddr;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// Start a mock aviation upstream that answers every request with a fixed
/// status and JSON body.
pub async fn start_mock_upstream(addr: SocketAddr, status: u16, body: &'static str) {
    let listener = TcpListener::bind(addr).await.unwrap();

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut socket, _)) => {
                    tokio::spawn(async move {
                        // Drain the request head before answering.
                        let mut buf = [0u8; 4096];
                        let _ = socket.read(&mut buf).await;

                        let status_text = match status {
                            200 => "200 OK",
                            401 => "401 Unauthorized",
                            404 => "404 Not Found",
                            429 => "429 Too Many Requests",
                            500 => "500 Internal Server Error",
                            _ => "200 OK",
                        };
                        let response = format!(
                            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                            status_text,
                            body.len(),
                            body
                        );
                        let _ = socket.write_all(response.as_bytes()).await;
                        let _ = socket.shutdown().await;
                    });
                }
                Err(_) => break,
            }
        }
    });
}

/// A well-formed single-flight payload in the upstream wire shape.
pub const FLIGHT_BODY: &str = r#"{
    "pagination": {"limit": 100, "offset": 0, "count": 1, "total": 1},
    "data": [{
        "flight_date": "2025-01-01",
        "flight_status": "active",
        "departure": {
            "airport": "John F Kennedy International",
            "iata": "JFK",
            "estimated": "2025-01-01T06:30:00+00:00"
        },
        "arrival": {
            "airport": "Heathrow",
            "iata": "LHR",
            "estimated": "2025-01-01T18:45:00+00:00"
        },
        "airline": {"name": "American Airlines", "iata": "AA"},
        "flight": {"number": "100", "iata": "AA100"},
        "aircraft": {"registration": "N778AN", "iata": "B77W"}
    }]
}"#;
