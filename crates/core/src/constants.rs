//! Constants used throughout the enrol core crate.
//!
//! This module contains shared defaults and fixed values to ensure
//! consistency across the codebase and make maintenance easier.

/// Default endpoint path for the server forwarding sink when no explicit endpoint is configured.
pub const DEFAULT_FORWARD_ENDPOINT: &str = "/api/users/save";

/// Prefix for generated session tokens.
pub const SESSION_TOKEN_PREFIX: &str = "TOKEN_";

/// Number of random characters appended after the session token prefix.
pub const SESSION_TOKEN_SUFFIX_LEN: usize = 8;

/// Alphabet for the random part of a session token.
pub const SESSION_TOKEN_CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Minimum number of characters for the name field.
pub const MIN_NAME_CHARS: usize = 3;
