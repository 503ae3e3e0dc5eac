//! Oracle request handling and the envelope boundary.
//!
//! Every failure raised during a lookup is converted into an error envelope
//! here; nothing propagates to the caller as an error or a panic.

use serde::{Deserialize, Serialize};

use crate::oracle::client::FlightClient;
use crate::oracle::types::ResultEnvelope;

/// Inbound oracle request: an ordered list of flight identifiers.
///
/// Only the first identifier is consulted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OracleRequest {
    pub data: Vec<String>,
}

/// Resolve an oracle request into a result/error envelope.
pub async fn handle_request(client: &FlightClient, request: &OracleRequest) -> ResultEnvelope {
    let Some(flight_id) = request.data.first() else {
        return ResultEnvelope::Error("request contains no flight identifiers".to_string());
    };

    match client.lookup(flight_id).await {
        Ok(record) => ResultEnvelope::Result(record.summary()),
        Err(err) => {
            tracing::warn!(flight_id = %flight_id, error = %err, "flight lookup failed");
            ResultEnvelope::Error(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::UpstreamConfig;

    #[tokio::test]
    async fn test_empty_request_yields_error_envelope() {
        let client = FlightClient::new(UpstreamConfig::default()).unwrap();
        let request = OracleRequest { data: vec![] };
        let envelope = handle_request(&client, &request).await;
        assert_eq!(
            envelope,
            ResultEnvelope::Error("request contains no flight identifiers".to_string())
        );
    }

    #[test]
    fn test_request_deserializes_from_wire_shape() {
        let request: OracleRequest = serde_json::from_str(r#"{"data": ["AA100", "BA42"]}"#).unwrap();
        assert_eq!(request.data.first().map(String::as_str), Some("AA100"));
    }
}
