use axum::{
    http::{header, HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::fmt;
use thiserror::Error;
use types::errors::OrderError;

use crate::cache::LookupError;
use crate::fields::FieldError;

/// Which submission path an engine error came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderKind {
    Limit,
    Market,
}

impl fmt::Display for OrderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderKind::Limit => f.write_str("limit"),
            OrderKind::Market => f.write_str("market"),
        }
    }
}

/// Central error type for the Gateway application
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Field(#[from] FieldError),

    #[error(transparent)]
    Lookup(#[from] LookupError),

    #[error("Invalid request method. {0} method is required")]
    MethodNotAllowed(Method),

    #[error("No route for {0}")]
    NotFound(String),

    #[error("Encountered error in placing {kind} order: {source}")]
    Engine { kind: OrderKind, source: OrderError },

    #[error("Failed to cancel order")]
    CancelRejected,

    /// The response body could not be built. `committed` is set when the
    /// request had already changed state, so the caller knows to re-query.
    #[error("failed to encode response: {source}")]
    Encoding {
        committed: bool,
        source: serde_json::Error,
    },
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            AppError::Field(_) | AppError::Lookup(_) => (StatusCode::BAD_REQUEST, "BAD_REQUEST"),
            AppError::MethodNotAllowed(_) => (StatusCode::METHOD_NOT_ALLOWED, "METHOD_NOT_ALLOWED"),
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            AppError::Engine { .. } => (StatusCode::INTERNAL_SERVER_ERROR, "ENGINE_ERROR"),
            AppError::CancelRejected => (StatusCode::INTERNAL_SERVER_ERROR, "CANCEL_REJECTED"),
            AppError::Encoding { .. } => (StatusCode::INTERNAL_SERVER_ERROR, "RESPONSE_ENCODING"),
        };

        let body = match &self {
            AppError::Encoding { committed: true, .. } => json!({
                "error": code,
                "message": "Order is placed. Internal server error in returning the details.",
                "committed": true,
            }),
            AppError::Encoding { committed: false, .. } => json!({
                "error": code,
                "message": "Internal server error",
            }),
            other => json!({
                "error": code,
                "message": other.to_string(),
            }),
        };

        let mut response = (status, Json(body)).into_response();
        if let AppError::MethodNotAllowed(allowed) = &self {
            if let Ok(value) = HeaderValue::from_str(allowed.as_str()) {
                response.headers_mut().insert(header::ALLOW, value);
            }
        }
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use serde_json::Value;

    async fn render(err: AppError) -> (StatusCode, Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[test]
    fn test_method_not_allowed_sets_allow_header() {
        let response = AppError::MethodNotAllowed(Method::GET).into_response();
        assert_eq!(response.headers()[header::ALLOW], "GET");

        let response = AppError::from(FieldError::InvalidSide).into_response();
        assert!(response.headers().get(header::ALLOW).is_none());
    }

    #[tokio::test]
    async fn test_unmatched_route_is_json_not_found() {
        let (status, body) = render(AppError::NotFound("/nope".to_string())).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "NOT_FOUND");
        assert_eq!(body["message"], "No route for /nope");
    }

    fn encoding_error() -> serde_json::Error {
        serde_json::from_str::<Value>("{").unwrap_err()
    }

    #[tokio::test]
    async fn test_validation_errors_are_bad_requests() {
        let (status, body) = render(FieldError::InvalidSide.into()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Side should be either 0 or 1");

        let (status, body) = render(LookupError::UnknownOrderBook.into()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "orderbook_id is invalid");
    }

    #[tokio::test]
    async fn test_method_not_allowed() {
        let (status, body) = render(AppError::MethodNotAllowed(Method::POST)).await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(body["message"], "Invalid request method. POST method is required");
    }

    #[tokio::test]
    async fn test_engine_error_names_order_kind() {
        let err = AppError::Engine {
            kind: OrderKind::Market,
            source: OrderError::InvalidQuantity("0".to_string()),
        };
        let (status, body) = render(err).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body["message"],
            "Encountered error in placing market order: Invalid order quantity: 0"
        );
    }

    #[tokio::test]
    async fn test_committed_encoding_error_says_it_took_effect() {
        let (status, body) = render(AppError::Encoding {
            committed: true,
            source: encoding_error(),
        })
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["committed"], true);

        let (_, body) = render(AppError::Encoding {
            committed: false,
            source: encoding_error(),
        })
        .await;
        assert!(body.get("committed").is_none());
    }
}
