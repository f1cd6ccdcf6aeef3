//! Registration service and related operations.
//!
//! This module provides the main service for handling submissions,
//! wiring validation, the registry and the forwarding sink together.

use std::sync::Arc;

use crate::{
    validation::{validate, ValidationFailure},
    CoreConfig, Record, RegistrationInput, RegistryStore, ServerForwarder,
};

/// Pure registration operations - no API concerns
pub struct RegistrationService {
    store: RegistryStore,
    forwarder: ServerForwarder,
}

impl RegistrationService {
    /// Creates a new instance of RegistrationService.
    ///
    /// # Returns
    /// A new `RegistrationService` with an empty registry, ready to handle
    /// submissions.
    pub fn new(cfg: Arc<CoreConfig>) -> Self {
        Self {
            store: RegistryStore::new(),
            forwarder: ServerForwarder::new(&cfg),
        }
    }

    /// Handles one registration submission end to end.
    ///
    /// Validates the input, and on success appends it to the registry and
    /// hands the accepted record to the forwarding sink. A forwarding failure
    /// is logged and does not undo the acceptance; the record is already part
    /// of the registry at that point.
    ///
    /// # Arguments
    ///
    /// * `input` - The normalised registration fields.
    ///
    /// # Returns
    ///
    /// The accepted [`Record`] on success.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationFailure`] carrying every rule violation when the
    /// input does not pass validation. Nothing is stored in that case.
    pub fn submit(&mut self, input: RegistrationInput) -> Result<Record, ValidationFailure> {
        let errors = validate(&input);
        if !errors.is_empty() {
            tracing::warn!("Submission rejected with {} validation error(s)", errors.len());
            return Err(ValidationFailure { errors });
        }

        let record = self.store.append(input);
        tracing::info!("Accepted registration {}", record.id);

        if let Err(e) = self.forwarder.forward(&record) {
            tracing::warn!("Forwarding failed for record {}: {}", record.id, e);
        }

        Ok(record)
    }

    /// Read access to the underlying registry.
    pub fn registry(&self) -> &RegistryStore {
        &self.store
    }
}
