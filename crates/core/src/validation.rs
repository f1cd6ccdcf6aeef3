//! Input validation rules.
//!
//! This module contains the fixed per-field rules applied to a registration
//! before it is accepted into the registry. [`validate`] is a pure function:
//! it inspects every field, collects one human-readable message per failed
//! rule, and returns the lot in field order. An empty list means the input is
//! acceptable.

use std::sync::LazyLock;

use regex::Regex;

use crate::constants::MIN_NAME_CHARS;
use crate::RegistrationInput;

// ============================================================================
// Field patterns
// ============================================================================

/// Letters (including Spanish accented vowels and ñ) and spaces, at least one character.
static NAME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-záéíóúñA-ZÁÉÍÓÚÑ\s]+$").expect("name pattern compiles")
});

/// Same character class as [`NAME_PATTERN`] but also matching the empty string,
/// for fields that are allowed to be absent.
static OPTIONAL_NAME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-záéíóúñA-ZÁÉÍÓÚÑ\s]*$").expect("optional name pattern compiles")
});

/// Exactly ten ASCII digits.
static PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{10}$").expect("phone pattern compiles"));

/// Exactly eighteen upper-case alphanumeric characters.
static NATIONAL_ID_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z0-9]{18}$").expect("national id pattern compiles"));

/// Minimal email shape: something, `@`, something, `.`, something, no whitespace.
static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

// ============================================================================
// Validation messages
// ============================================================================

/// Message when the name field is empty.
pub const NAME_REQUIRED: &str = "Name is required.";

/// Message when the name field contains characters outside the letters-and-spaces set.
pub const NAME_LETTERS_ONLY: &str = "Name may only contain letters and spaces.";

/// Message when the name field is shorter than [`MIN_NAME_CHARS`] characters.
pub const NAME_TOO_SHORT: &str = "Name must be at least 3 characters long.";

/// Message when the first surname field is empty.
pub const FIRST_SURNAME_REQUIRED: &str = "First surname is required.";

/// Message when the first surname contains characters outside the letters-and-spaces set.
pub const FIRST_SURNAME_LETTERS_ONLY: &str = "First surname may only contain letters and spaces.";

/// Message when a provided second surname contains characters outside the letters-and-spaces set.
pub const SECOND_SURNAME_LETTERS_ONLY: &str = "Second surname may only contain letters and spaces.";

/// Message when the phone field is not exactly ten digits.
pub const PHONE_FORMAT: &str = "Phone number must be exactly 10 digits.";

/// Message when the national id field is not eighteen upper-case alphanumerics.
pub const NATIONAL_ID_FORMAT: &str = "National ID must be 18 upper-case alphanumeric characters.";

/// Message when the email field does not have a minimal mailbox shape.
pub const EMAIL_INVALID: &str = "Email address is not valid.";

/// Validates a registration input against the fixed per-field rules.
///
/// Every field is checked; each failed rule contributes one message, so a
/// single call reports everything wrong with the submission at once. Within
/// the name and first-surname fields the rules are mutually exclusive: an
/// empty name reports only "required", not the pattern and length failures
/// that an empty string would also trip.
///
/// # Arguments
///
/// * `input` - The normalised registration fields to check.
///
/// # Returns
///
/// A `Vec` of human-readable messages in field order. Empty means valid.
pub fn validate(input: &RegistrationInput) -> Vec<String> {
    let mut errors = Vec::new();

    // Name: required, letters and spaces only, minimum length.
    let name = input.name.trim();
    if name.is_empty() {
        errors.push(NAME_REQUIRED.to_string());
    } else if !NAME_PATTERN.is_match(name) {
        errors.push(NAME_LETTERS_ONLY.to_string());
    } else if name.chars().count() < MIN_NAME_CHARS {
        errors.push(NAME_TOO_SHORT.to_string());
    }

    // First surname: required, letters and spaces only.
    let first_surname = input.first_surname.trim();
    if first_surname.is_empty() {
        errors.push(FIRST_SURNAME_REQUIRED.to_string());
    } else if !NAME_PATTERN.is_match(first_surname) {
        errors.push(FIRST_SURNAME_LETTERS_ONLY.to_string());
    }

    // Second surname: only checked when present and non-empty.
    if let Some(second_surname) = input.second_surname.as_deref() {
        if !second_surname.is_empty() && !OPTIONAL_NAME_PATTERN.is_match(second_surname.trim()) {
            errors.push(SECOND_SURNAME_LETTERS_ONLY.to_string());
        }
    }

    // Phone, national id and email are matched as-is, without trimming.
    if !PHONE_PATTERN.is_match(&input.phone) {
        errors.push(PHONE_FORMAT.to_string());
    }

    if !NATIONAL_ID_PATTERN.is_match(&input.national_id) {
        errors.push(NATIONAL_ID_FORMAT.to_string());
    }

    if !EMAIL_PATTERN.is_match(&input.email) {
        errors.push(EMAIL_INVALID.to_string());
    }

    errors
}

/// A rejected submission, carrying every message the validator produced.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("registration rejected with {} validation error(s)", .errors.len())]
pub struct ValidationFailure {
    /// Messages in the order [`validate`] produced them.
    pub errors: Vec<String>,
}
