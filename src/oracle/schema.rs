//! Upstream payload models and validated projection.
//!
//! # Responsibilities
//! - Deserialize the aviationstack `/v1/flights` response
//! - Tolerate missing/null fields at parse time (everything is optional)
//! - Convert any missing required key into a single `OracleError::Schema`
//!   naming the JSON path, before field projection
//!
//! # Design Decisions
//! - Validation is separated from deserialization so a malformed flight
//!   object yields a precise error instead of a serde parse failure

use serde::Deserialize;

use crate::oracle::types::{FlightRecord, OracleError, OracleResult};

/// Top-level response body of the flights endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FlightsPayload {
    /// Matching flights, most relevant first. Absent is treated as empty.
    #[serde(default)]
    pub data: Vec<UpstreamFlight>,
}

/// One element of the upstream `data` array.
///
/// All fields are optional; [`UpstreamFlight::project`] decides which are
/// required. Unknown upstream fields are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpstreamFlight {
    pub flight_status: Option<String>,
    pub departure: Option<FlightEndpoint>,
    pub arrival: Option<FlightEndpoint>,
    pub flight: Option<FlightCode>,
    pub airline: Option<Airline>,
    pub aircraft: Option<Aircraft>,
}

/// Departure or arrival leg of a flight.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FlightEndpoint {
    pub estimated: Option<String>,
    pub airport: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FlightCode {
    pub iata: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Airline {
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Aircraft {
    pub iata: Option<String>,
}

fn require<T: Clone>(field: &Option<T>, path: &str) -> OracleResult<T> {
    field
        .clone()
        .ok_or_else(|| OracleError::Schema(path.to_string()))
}

impl UpstreamFlight {
    /// Project the nested upstream fields into a [`FlightRecord`].
    ///
    /// Fails with `OracleError::Schema` naming the first missing path.
    pub fn project(&self) -> OracleResult<FlightRecord> {
        let departure = require(&self.departure, "departure")?;
        let arrival = require(&self.arrival, "arrival")?;
        let flight = require(&self.flight, "flight")?;
        let airline = require(&self.airline, "airline")?;
        let aircraft = require(&self.aircraft, "aircraft")?;

        Ok(FlightRecord {
            flight_status: require(&self.flight_status, "flight_status")?,
            departure_estimated: require(&departure.estimated, "departure.estimated")?,
            arrival_estimated: require(&arrival.estimated, "arrival.estimated")?,
            flight_number: require(&flight.iata, "flight.iata")?,
            airline_name: require(&airline.name, "airline.name")?,
            aircraft_type: require(&aircraft.iata, "aircraft.iata")?,
            departure_airport: require(&departure.airport, "departure.airport")?,
            arrival_airport: require(&arrival.airport, "arrival.airport")?,
        })
    }
}
