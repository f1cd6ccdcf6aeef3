//! Registration input and field normalisation.
//!
//! Raw field values arrive from the REST API or CLI exactly as the user typed
//! them. [`RegistrationInput::from_raw`] applies the canonical normalisation
//! before validation: names and phone are trimmed, the national id is trimmed
//! and upper-cased, and the email is trimmed and lower-cased.

/// A set of registration fields after normalisation, ready for validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegistrationInput {
    /// Given name.
    pub name: String,
    /// First surname.
    pub first_surname: String,
    /// Second surname. Optional; absent and empty are treated the same.
    pub second_surname: Option<String>,
    /// Contact phone number.
    pub phone: String,
    /// National identity code.
    pub national_id: String,
    /// Contact email address.
    pub email: String,
}

impl RegistrationInput {
    /// Build a `RegistrationInput` from raw field values, applying normalisation.
    ///
    /// # Arguments
    ///
    /// * `name` - Given name, trimmed.
    /// * `first_surname` - First surname, trimmed.
    /// * `second_surname` - Optional second surname, trimmed when present.
    /// * `phone` - Phone number, trimmed.
    /// * `national_id` - National identity code, trimmed and upper-cased.
    /// * `email` - Email address, trimmed and lower-cased.
    pub fn from_raw(
        name: &str,
        first_surname: &str,
        second_surname: Option<&str>,
        phone: &str,
        national_id: &str,
        email: &str,
    ) -> Self {
        Self {
            name: name.trim().to_string(),
            first_surname: first_surname.trim().to_string(),
            second_surname: second_surname.map(|s| s.trim().to_string()),
            phone: phone.trim().to_string(),
            national_id: national_id.trim().to_uppercase(),
            email: email.trim().to_lowercase(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_raw_trims_fields() {
        let input = RegistrationInput::from_raw(
            "  Ana María  ",
            " López ",
            None,
            " 5512345678 ",
            "abcd123456hdfxyz01",
            "ana@example.com",
        );
        assert_eq!(input.name, "Ana María");
        assert_eq!(input.first_surname, "López");
        assert_eq!(input.phone, "5512345678");
    }

    #[test]
    fn test_from_raw_uppercases_national_id() {
        let input = RegistrationInput::from_raw(
            "Ana",
            "López",
            None,
            "5512345678",
            " abcd123456hdfxyz01 ",
            "ana@example.com",
        );
        assert_eq!(input.national_id, "ABCD123456HDFXYZ01");
    }

    #[test]
    fn test_from_raw_lowercases_email() {
        let input = RegistrationInput::from_raw(
            "Ana",
            "López",
            None,
            "5512345678",
            "ABCD123456HDFXYZ01",
            " Ana@Example.COM ",
        );
        assert_eq!(input.email, "ana@example.com");
    }

    #[test]
    fn test_from_raw_keeps_missing_second_surname() {
        let input = RegistrationInput::from_raw(
            "Ana",
            "López",
            None,
            "5512345678",
            "ABCD123456HDFXYZ01",
            "ana@example.com",
        );
        assert_eq!(input.second_surname, None);
    }

    #[test]
    fn test_from_raw_trims_second_surname() {
        let input = RegistrationInput::from_raw(
            "Ana",
            "López",
            Some(" García "),
            "5512345678",
            "ABCD123456HDFXYZ01",
            "ana@example.com",
        );
        assert_eq!(input.second_surname.as_deref(), Some("García"));
    }
}
