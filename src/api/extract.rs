//! Request extractors that report rejections as [`AppError`]s.

use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Query, Request, rejection::JsonRejection},
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use serde_json::{Value, json};

use crate::error::AppError;

/// JSON body extractor whose rejections become `400` responses in the
/// service's `{"error": ...}` shape instead of axum's plain-text `415`/`422`.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(AppError::bad_request(
                "Corps JSON invalide",
                json!({ "reason": rejection.body_text() }),
            )),
        }
    }
}

/// Query string extractor with the same `{"error": ...}` rejection shape.
///
/// The deserializer's message is only logged.
#[derive(Debug, Clone, Copy, Default)]
pub struct QueryParams<T>(pub T);

impl<S, T> FromRequestParts<S> for QueryParams<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        match Query::<T>::try_from_uri(&parts.uri) {
            Ok(Query(value)) => Ok(Self(value)),
            Err(rejection) => {
                tracing::debug!(reason = %rejection.body_text(), "rejected query string");
                Err(AppError::bad_request(
                    "Paramètres de requête invalides",
                    Value::Null,
                ))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::dto::search::SearchQuery;
    use axum::http::Request as HttpRequest;

    async fn extract(uri: &str) -> Result<QueryParams<SearchQuery>, AppError> {
        let (mut parts, _) = HttpRequest::builder().uri(uri).body(()).unwrap().into_parts();
        QueryParams::<SearchQuery>::from_request_parts(&mut parts, &()).await
    }

    #[tokio::test]
    async fn test_query_params_extracts_keyword() {
        let QueryParams(query) = extract("/search?keyword=brest").await.unwrap();

        assert_eq!(query.keyword, "brest");
    }

    #[tokio::test]
    async fn test_query_params_duplicate_field_is_bad_request() {
        let err = extract("/search?keyword=a&keyword=b").await.err().unwrap();

        assert!(matches!(err, AppError::Validation { .. }));
        assert_eq!(err.to_string(), "Paramètres de requête invalides");
    }
}
