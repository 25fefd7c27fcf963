use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::application::use_cases::customers::CustomerError;

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    pub error: String,
    pub code: &'static str,
}

/// Error returned by the HTTP handlers; rendered as `{"error", "code"}`.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Customer(#[from] CustomerError),
    #[error("{0}")]
    Validation(String),
    #[error(transparent)]
    Body(#[from] JsonRejection),
}

impl ApiError {
    fn parts(&self) -> (StatusCode, &'static str, String) {
        match self {
            ApiError::Customer(CustomerError::InvalidRequest(msg)) => {
                (StatusCode::BAD_REQUEST, "INVALID_REQUEST", msg.clone())
            }
            ApiError::Customer(err @ CustomerError::NotFound(_)) => {
                (StatusCode::NOT_FOUND, "NOT_FOUND", err.to_string())
            }
            ApiError::Customer(CustomerError::Store(source)) => {
                tracing::error!(error = ?source, "customer_store_failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }
            ApiError::Validation(msg) => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
            }
            // Keeps the extractor's status (400, 415 or 422)
            ApiError::Body(rejection) => (rejection.status(), "INVALID_BODY", rejection.body_text()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, error) = self.parts();
        (status, Json(ErrorBody { error, code })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_customer_errors_to_status_codes() {
        let cases = [
            (
                ApiError::from(CustomerError::InvalidRequest("missing customer id".into())),
                StatusCode::BAD_REQUEST,
            ),
            (
                ApiError::from(CustomerError::NotFound("abc".into())),
                StatusCode::NOT_FOUND,
            ),
            (
                ApiError::from(CustomerError::Store(anyhow::anyhow!("connection reset"))),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                ApiError::Validation("name is required".into()),
                StatusCode::BAD_REQUEST,
            ),
        ];
        for (err, expected) in cases {
            assert_eq!(err.into_response().status(), expected);
        }
    }

    #[test]
    fn store_failures_do_not_leak_details() {
        let err = ApiError::from(CustomerError::Store(anyhow::anyhow!("password=hunter2")));
        let (_, code, message) = err.parts();
        assert_eq!(code, "INTERNAL_ERROR");
        assert!(!message.contains("hunter2"));
    }
}
