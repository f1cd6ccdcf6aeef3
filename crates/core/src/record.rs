//! Accepted registration records.
//!
//! A [`Record`] is what the registry stores once a submission has passed
//! validation: the normalised fields plus the registry-assigned id, a
//! composed display name, the acceptance timestamp and a session token.

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::Serialize;

use crate::constants::{SESSION_TOKEN_CHARSET, SESSION_TOKEN_PREFIX, SESSION_TOKEN_SUFFIX_LEN};
use crate::RegistrationInput;

/// An accepted registration.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Record {
    /// Registry-assigned id, starting at 1.
    pub id: u64,
    /// Given name.
    pub name: String,
    /// First surname.
    pub first_surname: String,
    /// Second surname; empty string when none was supplied.
    pub second_surname: String,
    /// Display name composed from the name parts.
    pub full_name: String,
    /// Contact phone number.
    pub phone: String,
    /// National identity code.
    pub national_id: String,
    /// Contact email address.
    pub email: String,
    /// When the registry accepted the record.
    pub created_at: DateTime<Utc>,
    /// Opaque per-registration token.
    pub session_token: String,
}

/// Compose a display name from the name parts, skipping empty ones.
pub(crate) fn full_name(name: &str, first_surname: &str, second_surname: &str) -> String {
    [name, first_surname, second_surname]
        .iter()
        .filter(|part| !part.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Generate a fresh session token: the fixed prefix plus random lowercase
/// alphanumerics.
pub(crate) fn new_session_token() -> String {
    let mut rng = rand::thread_rng();
    let suffix: String = (0..SESSION_TOKEN_SUFFIX_LEN)
        .map(|_| SESSION_TOKEN_CHARSET[rng.gen_range(0..SESSION_TOKEN_CHARSET.len())] as char)
        .collect();

    format!("{}{}", SESSION_TOKEN_PREFIX, suffix)
}

impl Record {
    /// Build a record for an input the registry is accepting under `id`.
    pub(crate) fn accept(id: u64, input: RegistrationInput) -> Self {
        let second_surname = input.second_surname.unwrap_or_default();
        let full_name = full_name(&input.name, &input.first_surname, &second_surname);

        Self {
            id,
            name: input.name,
            first_surname: input.first_surname,
            second_surname,
            full_name,
            phone: input.phone,
            national_id: input.national_id,
            email: input.email,
            created_at: Utc::now(),
            session_token: new_session_token(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_name_joins_three_parts() {
        assert_eq!(full_name("Ana María", "López", "García"), "Ana María López García");
    }

    #[test]
    fn test_full_name_skips_empty_second_surname() {
        assert_eq!(full_name("Ana María", "López", ""), "Ana María López");
    }

    #[test]
    fn test_session_token_has_prefix_and_length() {
        let token = new_session_token();
        assert!(token.starts_with(SESSION_TOKEN_PREFIX));
        assert_eq!(
            token.len(),
            SESSION_TOKEN_PREFIX.len() + SESSION_TOKEN_SUFFIX_LEN
        );
    }

    #[test]
    fn test_session_token_uses_charset() {
        let token = new_session_token();
        let suffix = &token[SESSION_TOKEN_PREFIX.len()..];
        assert!(suffix.bytes().all(|b| SESSION_TOKEN_CHARSET.contains(&b)));
    }

    #[test]
    fn test_session_tokens_differ() {
        // 36^8 values; a collision here points at a broken generator.
        assert_ne!(new_session_token(), new_session_token());
    }
}
