//! Core runtime configuration.
//!
//! This module defines configuration that should be resolved once at process startup and then
//! passed into core services. The intent is to avoid reading process-wide environment variables
//! during request handling, which can lead to inconsistent behaviour in multi-threaded runtimes
//! and test harnesses.

use crate::constants::DEFAULT_FORWARD_ENDPOINT;
use crate::{RegistryError, RegistryResult};

/// Core configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct CoreConfig {
    forward_endpoint: String,
}

impl CoreConfig {
    /// Create a new `CoreConfig`.
    pub fn new(forward_endpoint: String) -> RegistryResult<Self> {
        if forward_endpoint.trim().is_empty() {
            return Err(RegistryError::InvalidInput(
                "forward_endpoint cannot be empty".into(),
            ));
        }

        Ok(Self { forward_endpoint })
    }

    pub fn forward_endpoint(&self) -> &str {
        &self.forward_endpoint
    }
}

/// Resolve the forwarding endpoint from an optional string value.
///
/// If `value` is `None` or empty/whitespace, returns the default endpoint.
pub fn forward_endpoint_from_env_value(value: Option<String>) -> String {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| DEFAULT_FORWARD_ENDPOINT.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_empty_endpoint() {
        let err = CoreConfig::new("   ".to_string()).expect_err("should reject whitespace");
        assert!(matches!(err, RegistryError::InvalidInput(msg) if msg.contains("cannot be empty")));
    }

    #[test]
    fn test_new_accepts_endpoint() {
        let cfg = CoreConfig::new("/api/users/save".to_string()).expect("valid endpoint");
        assert_eq!(cfg.forward_endpoint(), "/api/users/save");
    }

    #[test]
    fn test_forward_endpoint_from_env_value_defaults_when_missing() {
        assert_eq!(
            forward_endpoint_from_env_value(None),
            DEFAULT_FORWARD_ENDPOINT
        );
        assert_eq!(
            forward_endpoint_from_env_value(Some("  ".to_string())),
            DEFAULT_FORWARD_ENDPOINT
        );
    }

    #[test]
    fn test_forward_endpoint_from_env_value_trims_value() {
        assert_eq!(
            forward_endpoint_from_env_value(Some(" /custom/save ".to_string())),
            "/custom/save"
        );
    }
}
