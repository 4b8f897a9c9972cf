//! Request validation helpers
//!
//! Two concerns live here:
//!
//! - `parse_id`: the single typed positive-identifier check used by every
//!   route that takes an id path parameter.
//! - `validate`: runs a `validator`-derived schema and reduces the result to
//!   the first failing constraint's message, checked in the declared field
//!   order, so a response always carries exactly one validation message.

use validator::{Validate, ValidationErrors};

use crate::error::ApiError;

/// Parses a path segment as a positive integer identifier
///
/// Validation never reaches the database: a malformed or non-positive id is
/// rejected here with a 400.
pub fn parse_id(raw: &str) -> Result<i64, ApiError> {
    let id: i64 = raw
        .parse()
        .map_err(|_| ApiError::BadRequest("id must be a number".to_string()))?;

    if id <= 0 {
        return Err(ApiError::BadRequest(
            "id must be a positive number".to_string(),
        ));
    }

    Ok(id)
}

/// Validates a request payload, reporting only the first failure
///
/// `field_order` fixes which constraint wins when several fields are invalid
/// at once; `validator` itself collects errors into an unordered map.
pub fn validate<T: Validate>(payload: &T, field_order: &[&str]) -> Result<(), ApiError> {
    payload
        .validate()
        .map_err(|errors| ApiError::Validation(first_message(&errors, field_order)))
}

fn first_message(errors: &ValidationErrors, field_order: &[&str]) -> String {
    let field_errors = errors.field_errors();

    for &field in field_order {
        if let Some(list) = field_errors.get(field) {
            if let Some(error) = list.first() {
                return error
                    .message
                    .as_ref()
                    .map(|message| message.to_string())
                    .unwrap_or_else(|| format!("{field} is invalid"));
            }
        }
    }

    "invalid request".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, Validate)]
    struct Sample {
        #[validate(length(min = 1, message = "name is not allowed to be empty"))]
        name: String,

        #[validate(email(message = "email must be a valid email"))]
        email: String,
    }

    const SAMPLE_FIELDS: &[&str] = &["name", "email"];

    #[test]
    fn test_parse_id_accepts_positive() {
        assert_eq!(parse_id("42").unwrap(), 42);
    }

    #[test]
    fn test_parse_id_rejects_non_numeric() {
        let err = parse_id("abc").unwrap_err();
        assert!(matches!(err, ApiError::BadRequest(_)));
    }

    #[test]
    fn test_parse_id_rejects_zero_and_negative() {
        assert!(parse_id("0").is_err());
        assert!(parse_id("-5").is_err());
    }

    #[test]
    fn test_validate_passes_valid_payload() {
        let payload = Sample {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
        };
        assert!(validate(&payload, SAMPLE_FIELDS).is_ok());
    }

    #[test]
    fn test_first_failure_wins_in_declared_order() {
        // Both fields invalid: the name message must win.
        let payload = Sample {
            name: String::new(),
            email: "not-an-email".to_string(),
        };

        let err = validate(&payload, SAMPLE_FIELDS).unwrap_err();
        match err {
            ApiError::Validation(msg) => assert_eq!(msg, "name is not allowed to be empty"),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_later_field_reported_when_earlier_valid() {
        let payload = Sample {
            name: "Ada".to_string(),
            email: "not-an-email".to_string(),
        };

        let err = validate(&payload, SAMPLE_FIELDS).unwrap_err();
        match err {
            ApiError::Validation(msg) => assert_eq!(msg, "email must be a valid email"),
            other => panic!("expected validation error, got {other:?}"),
        }
    }
}
