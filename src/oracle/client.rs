//! Flight lookup client for the aviationstack API.
//!
//! # Responsibilities
//! - Resolve the API key (config override, then environment)
//! - Build and perform the single GET request
//! - Map transport, status, shape and schema failures to `OracleError`
//!
//! # Design Decisions
//! - One request per lookup, no retries (first failure is final)
//! - The request timeout is a safety margin, not a contract
//! - The API key is resolved per lookup so a key added to the environment
//!   is picked up without restarting

use std::time::Duration;

use crate::config::schema::UpstreamConfig;
use crate::oracle::schema::FlightsPayload;
use crate::oracle::types::{FlightRecord, OracleError, OracleResult};

/// Environment variable consulted when no API key override is configured.
pub const API_KEY_ENV: &str = "AVIATION_STACK_API_KEY";

/// Client for the flights endpoint.
#[derive(Debug, Clone)]
pub struct FlightClient {
    client: reqwest::Client,
    config: UpstreamConfig,
}

impl FlightClient {
    /// Create a client for the configured upstream.
    pub fn new(config: UpstreamConfig) -> OracleResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(OracleError::Transport)?;

        Ok(Self { client, config })
    }

    fn api_key(&self) -> OracleResult<String> {
        if let Some(key) = self.config.api_key.as_deref() {
            if !key.is_empty() {
                return Ok(key.to_string());
            }
        }
        match std::env::var(API_KEY_ENV) {
            Ok(key) if !key.is_empty() => Ok(key),
            _ => Err(OracleError::MissingApiKey),
        }
    }

    /// Fetch the current status of one flight by IATA code.
    ///
    /// Only the first upstream match is consulted; no disambiguation is
    /// attempted when several flights share the code.
    pub async fn lookup(&self, flight_id: &str) -> OracleResult<FlightRecord> {
        let access_key = self.api_key()?;

        let response = self
            .client
            .get(&self.config.endpoint)
            .query(&[("access_key", access_key.as_str()), ("flight_iata", flight_id)])
            .send()
            .await
            .map_err(OracleError::Transport)?;

        let status = response.status().as_u16();
        if status != 200 {
            tracing::warn!(flight_id, status, "upstream rejected flight lookup");
            return Err(OracleError::UpstreamStatus(status));
        }

        let payload: FlightsPayload = response.json().await.map_err(OracleError::Decode)?;

        let Some(first) = payload.data.first() else {
            return Err(OracleError::FlightNotFound(flight_id.to_string()));
        };

        let record = first.project()?;
        tracing::debug!(
            flight_id,
            flight_status = %record.flight_status,
            airline = %record.airline_name,
            "flight lookup succeeded"
        );
        Ok(record)
    }
}
