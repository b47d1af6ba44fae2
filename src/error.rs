//! Service error types with HTTP status code mapping.
//!
//! [`PageError`] is the central error type. Startup failures (bad
//! configuration, unreadable or invalid data files) abort the binary;
//! request-time variants map to a status code and a structured JSON body.

use std::path::PathBuf;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use utoipa::ToSchema;

/// Structured JSON error response body.
///
/// All error responses follow this shape:
/// ```json
/// {
///   "error": {
///     "code": 2001,
///     "message": "route not found: /api/v1/nope",
///     "details": null
///   }
/// }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Structured error payload.
    pub error: ErrorBody,
}

/// Inner error body with numeric code and human-readable message.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    /// Numeric error code.
    pub code: u32,
    /// Human-readable error message.
    pub message: String,
    /// Optional additional details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Service error enum with HTTP status code mapping.
///
/// # Error Code Ranges
///
/// | Range     | Category              | HTTP Status               |
/// |-----------|-----------------------|---------------------------|
/// | 1000–1999 | Configuration / data  | 400 Bad Request           |
/// | 2000–2999 | Not Found             | 404 Not Found             |
/// | 3000–3999 | Data access / server  | 500 Internal Server Error |
#[derive(Debug, thiserror::Error)]
pub enum PageError {
    /// An environment setting could not be parsed.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A domain record failed validation.
    #[error("invalid domain {name:?}: {reason}")]
    InvalidDomain {
        /// Offending domain name.
        name: String,
        /// Why the record was rejected.
        reason: String,
    },

    /// Two domain records share the same name.
    #[error("duplicate domain name: {0}")]
    DuplicateDomain(String),

    /// No API route matches the request path.
    #[error("route not found: {0}")]
    RouteNotFound(String),

    /// No fun facts are configured.
    #[error("no fun facts configured")]
    NoFunFacts,

    /// A data file could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    DataRead {
        /// File that failed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A data file is not valid JSON of the expected shape.
    #[error("failed to parse {}: {source}", .path.display())]
    DataParse {
        /// File that failed.
        path: PathBuf,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// The 404 page could not be rendered.
    #[error("internal error: {0}")]
    Internal(String),
}

impl PageError {
    /// Returns the numeric error code for this variant.
    #[must_use]
    pub const fn error_code(&self) -> u32 {
        match self {
            Self::InvalidConfig(_) => 1001,
            Self::InvalidDomain { .. } => 1002,
            Self::DuplicateDomain(_) => 1003,
            Self::RouteNotFound(_) => 2001,
            Self::NoFunFacts => 2002,
            Self::Internal(_) => 3000,
            Self::DataRead { .. } => 3001,
            Self::DataParse { .. } => 3002,
        }
    }

    /// Returns the HTTP status code for this variant.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidConfig(_) | Self::InvalidDomain { .. } | Self::DuplicateDomain(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::RouteNotFound(_) | Self::NoFunFacts => StatusCode::NOT_FOUND,
            Self::DataRead { .. } | Self::DataParse { .. } | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        let body = ErrorResponse {
            error: ErrorBody {
                code: self.error_code(),
                message: self.to_string(),
                details: None,
            },
        };
        let mut response = axum::Json(body).into_response();
        *response.status_mut() = status;
        response
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn codes_and_statuses() {
        let err = PageError::RouteNotFound("/api/v1/x".to_string());
        assert_eq!(err.error_code(), 2001);
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);

        let err = PageError::DuplicateDomain("blog".to_string());
        assert_eq!(err.error_code(), 1003);
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);

        let err = PageError::Internal("boom".to_string());
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn display_includes_context() {
        let err = PageError::InvalidDomain {
            name: "x".to_string(),
            reason: "name must not be empty".to_string(),
        };
        assert_eq!(err.to_string(), "invalid domain \"x\": name must not be empty");

        let Err(source) = serde_json::from_str::<serde_json::Value>("{") else {
            panic!("malformed json must fail");
        };
        let err = PageError::DataParse {
            path: PathBuf::from("data/domains.json"),
            source,
        };
        assert!(err.to_string().starts_with("failed to parse data/domains.json"));
    }

    #[tokio::test]
    async fn internal_error_is_json_500() {
        let response =
            PageError::Internal("failed to serialize loading timeline".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let Ok(bytes) = axum::body::to_bytes(response.into_body(), usize::MAX).await else {
            panic!("body must be readable");
        };
        let Ok(json) = serde_json::from_slice::<serde_json::Value>(&bytes) else {
            panic!("body must be json");
        };
        assert_eq!(
            json.pointer("/error/code").and_then(serde_json::Value::as_u64),
            Some(3000)
        );
    }

    #[tokio::test]
    async fn into_response_sets_status_and_body() {
        let response = PageError::NoFunFacts.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let Ok(bytes) = axum::body::to_bytes(response.into_body(), usize::MAX).await else {
            panic!("body must be readable");
        };
        let Ok(json) = serde_json::from_slice::<serde_json::Value>(&bytes) else {
            panic!("body must be json");
        };
        assert_eq!(json.pointer("/error/code"), Some(&serde_json::json!(2002)));
        assert_eq!(
            json.pointer("/error/message"),
            Some(&serde_json::json!("no fun facts configured"))
        );
        assert!(json.pointer("/error/details").is_none());
    }
}
