//! Registration field rules and normalization.
//!
//! A [`RegistrationDraft`] is the candidate field set for a registration,
//! either a fresh public submission or the merged result of an admin edit.
//! Call [`RegistrationDraft::into_valid`] to normalize and validate it before
//! anything is persisted; the store must never hold a row that fails these
//! rules.

use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;
use validator::Validate;

use crate::error::CoreError;

/// Exactly 10 ASCII digits.
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{10}$").expect("phone regex is valid"));

/// Exactly 6 ASCII digits.
static PINCODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{6}$").expect("pincode regex is valid"));

/// Candidate registration fields, as submitted over the wire (camelCase JSON).
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationDraft {
    #[validate(length(min = 1, message = "firstName must not be empty"))]
    pub first_name: String,
    #[validate(length(min = 1, message = "lastName must not be empty"))]
    pub last_name: String,
    #[validate(regex(path = *PHONE_RE, message = "phoneNumber must be exactly 10 digits"))]
    pub phone_number: String,
    #[validate(email(message = "email must be a valid email address"))]
    pub email: String,
    #[validate(length(min = 1, message = "address must not be empty"))]
    pub address: String,
    #[validate(length(min = 1, message = "state must not be empty"))]
    pub state: String,
    #[validate(regex(path = *PINCODE_RE, message = "pincode must be exactly 6 digits"))]
    pub pincode: String,
    #[validate(range(min = 0, max = 120, message = "age must be between 0 and 120"))]
    pub age: i32,
}

impl RegistrationDraft {
    /// Trim surrounding whitespace from the free-text fields and lowercase
    /// the email. Runs before validation so " " counts as empty.
    pub fn normalize(mut self) -> Self {
        self.first_name = self.first_name.trim().to_string();
        self.last_name = self.last_name.trim().to_string();
        self.phone_number = self.phone_number.trim().to_string();
        self.email = self.email.trim().to_lowercase();
        self.address = self.address.trim().to_string();
        self.state = self.state.trim().to_string();
        self.pincode = self.pincode.trim().to_string();
        self
    }

    /// Normalize and validate, returning the normalized draft or a
    /// [`CoreError::Validation`] naming every offending field.
    pub fn into_valid(self) -> Result<Self, CoreError> {
        let draft = self.normalize();
        draft
            .validate()
            .map_err(|errors| CoreError::Validation(flatten_errors(&errors)))?;
        Ok(draft)
    }
}

/// Collapse per-field validation errors into one message, sorted by field
/// name so output is deterministic.
fn flatten_errors(errors: &validator::ValidationErrors) -> String {
    let mut messages: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| match &e.message {
                Some(msg) => msg.to_string(),
                None => format!("{field} is invalid"),
            })
        })
        .collect();
    messages.sort();
    messages.join("; ")
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn valid_draft() -> RegistrationDraft {
        RegistrationDraft {
            first_name: "Asha".to_string(),
            last_name: "Verma".to_string(),
            phone_number: "9876543210".to_string(),
            email: "asha.verma@example.com".to_string(),
            address: "12 MG Road".to_string(),
            state: "Karnataka".to_string(),
            pincode: "560001".to_string(),
            age: 29,
        }
    }

    #[test]
    fn test_valid_draft_passes() {
        let draft = valid_draft().into_valid().expect("draft should be valid");
        assert_eq!(draft.first_name, "Asha");
        assert_eq!(draft.email, "asha.verma@example.com");
    }

    #[test]
    fn test_normalization_trims_and_lowercases() {
        let mut draft = valid_draft();
        draft.first_name = "  Asha  ".to_string();
        draft.email = "  Asha.Verma@Example.COM ".to_string();
        draft.state = " Karnataka ".to_string();

        let draft = draft.into_valid().expect("draft should be valid");
        assert_eq!(draft.first_name, "Asha");
        assert_eq!(draft.email, "asha.verma@example.com");
        assert_eq!(draft.state, "Karnataka");
    }

    #[test]
    fn test_whitespace_only_name_rejected() {
        let mut draft = valid_draft();
        draft.first_name = "   ".to_string();

        let err = draft.into_valid().unwrap_err();
        assert_matches!(err, CoreError::Validation(msg) => {
            assert!(msg.contains("firstName"), "message should name the field: {msg}");
        });
    }

    #[test]
    fn test_nine_digit_phone_rejected() {
        let mut draft = valid_draft();
        draft.phone_number = "987654321".to_string();

        let err = draft.into_valid().unwrap_err();
        assert_matches!(err, CoreError::Validation(msg) => {
            assert!(msg.contains("phoneNumber"), "message should name the field: {msg}");
        });
    }

    #[test]
    fn test_phone_with_letters_rejected() {
        let mut draft = valid_draft();
        draft.phone_number = "98765432ab".to_string();

        assert_matches!(draft.into_valid(), Err(CoreError::Validation(_)));
    }

    #[test]
    fn test_five_digit_pincode_rejected() {
        let mut draft = valid_draft();
        draft.pincode = "56001".to_string();

        let err = draft.into_valid().unwrap_err();
        assert_matches!(err, CoreError::Validation(msg) => {
            assert!(msg.contains("pincode"), "message should name the field: {msg}");
        });
    }

    #[test]
    fn test_age_out_of_range_rejected() {
        let mut draft = valid_draft();
        draft.age = 121;
        assert_matches!(draft.into_valid(), Err(CoreError::Validation(_)));

        let mut draft = valid_draft();
        draft.age = -1;
        assert_matches!(draft.into_valid(), Err(CoreError::Validation(_)));
    }

    #[test]
    fn test_age_boundaries_accepted() {
        let mut draft = valid_draft();
        draft.age = 0;
        assert!(draft.into_valid().is_ok());

        let mut draft = valid_draft();
        draft.age = 120;
        assert!(draft.into_valid().is_ok());
    }

    #[test]
    fn test_email_without_at_rejected() {
        let mut draft = valid_draft();
        draft.email = "not-an-email".to_string();

        assert_matches!(draft.into_valid(), Err(CoreError::Validation(_)));
    }

    #[test]
    fn test_multiple_failures_collected() {
        let mut draft = valid_draft();
        draft.first_name = String::new();
        draft.phone_number = "12".to_string();
        draft.pincode = "1".to_string();

        let err = draft.into_valid().unwrap_err();
        assert_matches!(err, CoreError::Validation(msg) => {
            assert!(msg.contains("firstName"));
            assert!(msg.contains("phoneNumber"));
            assert!(msg.contains("pincode"));
        });
    }
}
