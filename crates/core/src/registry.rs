//! Append-only registration registry.
//!
//! This module holds accepted registrations in memory, in acceptance order.
//! The registry behaves like an audit log: records are never updated or
//! removed, and ids increase strictly from 1 with no gaps.

use crate::{Record, RegistrationInput};

/// In-memory store of accepted registrations.
#[derive(Debug, Default)]
pub struct RegistryStore {
    records: Vec<Record>,
    counter: u64,
}

impl RegistryStore {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Accepts a validated input, assigns it the next id, and stores it.
    ///
    /// The caller is responsible for running [`crate::validate`] first;
    /// appending an input that failed validation is a contract breach, not a
    /// recoverable error, and the registry does not re-check.
    ///
    /// # Arguments
    ///
    /// * `input` - The validated, normalised registration fields.
    ///
    /// # Returns
    ///
    /// A copy of the stored [`Record`], including its assigned id.
    pub fn append(&mut self, input: RegistrationInput) -> Record {
        self.counter += 1;
        let record = Record::accept(self.counter, input);
        self.records.push(record.clone());
        record
    }

    /// Number of records accepted so far.
    pub fn size(&self) -> usize {
        self.records.len()
    }

    /// All accepted records, in acceptance order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }
}
