//! Server forwarding sink.
//!
//! Accepted records are meant to be handed to a backend endpoint. No
//! transport exists yet, so [`ServerForwarder`] serialises the record,
//! logs what would be sent, and returns the serialised payload as a
//! [`ForwardReceipt`] for callers that want to inspect it.

use crate::{CoreConfig, Record, RegistryError, RegistryResult};

/// What a forward call produced: the target endpoint and the JSON payload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ForwardReceipt {
    /// Endpoint the payload was destined for.
    pub endpoint: String,
    /// The record serialised as JSON.
    pub payload: String,
}

/// Placeholder forwarding sink for accepted records.
#[derive(Clone, Debug)]
pub struct ServerForwarder {
    endpoint: String,
}

impl ServerForwarder {
    /// Creates a forwarder targeting the configured endpoint.
    pub fn new(cfg: &CoreConfig) -> Self {
        Self {
            endpoint: cfg.forward_endpoint().to_string(),
        }
    }

    /// Serialises `record` and logs the send that would happen.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::Serialization` if the record cannot be
    /// serialised to JSON.
    pub fn forward(&self, record: &Record) -> RegistryResult<ForwardReceipt> {
        let payload = serde_json::to_string(record).map_err(RegistryError::Serialization)?;

        tracing::info!("Forwarding record {} to {}", record.id, self.endpoint);
        tracing::debug!("Payload: {}", payload);

        Ok(ForwardReceipt {
            endpoint: self.endpoint.clone(),
            payload,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{RegistrationInput, RegistryStore};

    fn accepted_record() -> Record {
        let mut store = RegistryStore::new();
        store.append(RegistrationInput {
            name: "Ana María".to_string(),
            first_surname: "López".to_string(),
            second_surname: None,
            phone: "5512345678".to_string(),
            national_id: "ABCD123456HDFXYZ01".to_string(),
            email: "ana@example.com".to_string(),
        })
    }

    #[test]
    fn test_forward_uses_configured_endpoint() {
        let cfg = CoreConfig::new("/custom/save".to_string()).expect("valid endpoint");
        let forwarder = ServerForwarder::new(&cfg);

        let receipt = forwarder
            .forward(&accepted_record())
            .expect("forward should succeed");
        assert_eq!(receipt.endpoint, "/custom/save");
    }

    #[test]
    fn test_forward_payload_is_the_record_as_json() {
        let cfg = CoreConfig::new("/custom/save".to_string()).expect("valid endpoint");
        let forwarder = ServerForwarder::new(&cfg);
        let record = accepted_record();

        let receipt = forwarder
            .forward(&record)
            .expect("forward should succeed");
        let value: serde_json::Value =
            serde_json::from_str(&receipt.payload).expect("payload should be valid JSON");

        assert_eq!(value["id"], 1);
        assert_eq!(value["full_name"], "Ana María López");
        assert_eq!(value["email"], "ana@example.com");
        assert_eq!(value["session_token"], record.session_token.as_str());
    }
}
