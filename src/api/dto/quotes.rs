//! DTOs for quote endpoints.

use serde::Deserialize;
use serde_json::{Map, Value};
use validator::Validate;

use crate::domain::entities::{NewQuote, record_from_json};
use crate::error::AppError;

/// Request body for `POST /quotes`.
///
/// Fields other than `user_id` and `quote` are kept and stored with the quote.
#[derive(Debug, Deserialize, Validate)]
pub struct AddQuoteRequest {
    #[validate(required, length(min = 1))]
    pub user_id: Option<String>,

    #[validate(required, length(min = 1))]
    pub quote: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl AddQuoteRequest {
    /// Validates the request and converts it into a [`NewQuote`].
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `user_id` or `quote` is missing or
    /// empty, or if an extra field holds an array or object.
    pub fn into_new_quote(self) -> Result<NewQuote, AppError> {
        self.validate()?;

        let extra = record_from_json(self.extra)?;
        let (Some(user_id), Some(quote)) = (self.user_id, self.quote) else {
            return Err(AppError::bad_request("Champs requis manquants", Value::Null));
        };

        Ok(NewQuote {
            user_id,
            quote,
            extra,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(value: Value) -> AddQuoteRequest {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_valid_request_keeps_extra_fields() {
        let new_quote = parse(json!({
            "user_id": "1",
            "quote": "New test quote",
            "source": "Le Crabe aux pinces d'or"
        }))
        .into_new_quote()
        .unwrap();

        assert_eq!(new_quote.user_id, "1");
        assert_eq!(new_quote.quote, "New test quote");
        assert_eq!(
            new_quote.extra.get("source").map(String::as_str),
            Some("Le Crabe aux pinces d'or")
        );
    }

    #[test]
    fn test_missing_fields_are_rejected() {
        let err = parse(json!({ "user_id": "1" })).into_new_quote().unwrap_err();
        assert!(matches!(err, AppError::Validation { .. }));

        let err = parse(json!({ "quote": "orphan" })).into_new_quote().unwrap_err();
        assert!(matches!(err, AppError::Validation { .. }));
    }

    #[test]
    fn test_empty_fields_are_rejected() {
        let err = parse(json!({ "user_id": "", "quote": "text" }))
            .into_new_quote()
            .unwrap_err();

        assert!(matches!(err, AppError::Validation { .. }));
    }

    #[test]
    fn test_nested_extra_field_is_rejected() {
        let err = parse(json!({ "user_id": "1", "quote": "q", "tags": ["a"] }))
            .into_new_quote()
            .unwrap_err();

        assert!(matches!(err, AppError::Validation { .. }));
    }
}
