//! Oracle types and error definitions.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur during a flight lookup.
///
/// Every variant is stringified into the error envelope at the handler
/// boundary; the display strings are part of the oracle's contract.
#[derive(Debug, Error)]
pub enum OracleError {
    /// No API key in the config override or the environment.
    #[error("API key is missing")]
    MissingApiKey,

    /// The upstream request could not be sent or timed out.
    #[error("failed to reach the aviation API: {0}")]
    Transport(#[source] reqwest::Error),

    /// The upstream answered with a non-200 status.
    #[error("API request failed with status code {0}")]
    UpstreamStatus(u16),

    /// The upstream body was not valid JSON of the expected shape.
    #[error("failed to decode the aviation API response: {0}")]
    Decode(#[source] reqwest::Error),

    /// The upstream `data` array was empty or absent.
    #[error("No flight data found for flight ID {0}")]
    FlightNotFound(String),

    /// A required nested key was missing or null in the upstream payload.
    #[error("upstream payload is missing required field `{0}`")]
    Schema(String),
}

/// Result type for oracle operations.
pub type OracleResult<T> = Result<T, OracleError>;

/// Flight status fields extracted from the first upstream match.
///
/// Built fresh per lookup and discarded once the envelope is produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlightRecord {
    pub flight_status: String,
    pub departure_estimated: String,
    pub arrival_estimated: String,
    /// IATA flight code, e.g. "AA100".
    pub flight_number: String,
    pub airline_name: String,
    /// IATA aircraft type code, e.g. "B77W".
    pub aircraft_type: String,
    pub departure_airport: String,
    pub arrival_airport: String,
}

impl FlightRecord {
    /// Map the record into the eight-field output mapping.
    ///
    /// The city fields deliberately carry the upstream airport names, and the
    /// time fields duplicate the estimated timestamps. Downstream consumers
    /// depend on this exact mapping.
    pub fn summary(&self) -> FlightSummary {
        FlightSummary {
            flight_status: self.flight_status.clone(),
            departure_city: self.departure_airport.clone(),
            arrival_city: self.arrival_airport.clone(),
            flight_number: self.flight_number.clone(),
            airline_name: self.airline_name.clone(),
            aircraft_type: self.aircraft_type.clone(),
            departure_time: self.departure_estimated.clone(),
            arrival_time: self.arrival_estimated.clone(),
        }
    }
}

/// The output mapping carried inside a successful envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlightSummary {
    pub flight_status: String,
    pub departure_city: String,
    pub arrival_city: String,
    pub flight_number: String,
    pub airline_name: String,
    pub aircraft_type: String,
    pub departure_time: String,
    pub arrival_time: String,
}

/// The uniform response wrapper: either a result payload or an error message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultEnvelope {
    Result(FlightSummary),
    Error(String),
}

impl ResultEnvelope {
    pub fn is_error(&self) -> bool {
        matches!(self, ResultEnvelope::Error(_))
    }
}
