//! # Enrol Core
//!
//! Core business logic for the enrol user registration system.
//!
//! This crate contains pure data operations and in-memory record keeping:
//! - Field validation with fixed per-field rules
//! - Record acceptance into an append-only registry with sequential ids
//! - A placeholder forwarding sink that serialises accepted records
//!
//! **No API concerns**: HTTP servers, CLI parsing, or rendering belong in
//! `api-rest` and `enrol-cli`.

pub mod config;
pub mod constants;
pub mod error;
pub mod forward;
pub mod input;
pub mod record;
pub mod registry;
pub mod service;
pub mod validation;

pub use config::CoreConfig;
pub use error::{RegistryError, RegistryResult};
pub use forward::{ForwardReceipt, ServerForwarder};
pub use input::RegistrationInput;
pub use record::Record;
pub use registry::RegistryStore;
pub use service::RegistrationService;
pub use validation::{validate, ValidationFailure};
