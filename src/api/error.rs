//! Typed errors for API operations
//!
//! Provides structured error variants so callers can distinguish failure
//! modes (auth expired, rate limiting, server trouble) without string
//! matching. Every error the gateway returns is one of these; views and
//! command handlers never see a raw transport error.

use serde::Deserialize;
use thiserror::Error;

/// Classified API errors
///
/// - `Transport` - connection/timeout; retryable at the caller's discretion
/// - `Unauthorized` (401) - token expired/invalid; refresh then re-auth
/// - `Forbidden` (403) - fixed message, never retried
/// - `NotFound` (404), `BadRequest` (400), `Conflict` (409) - caller errors
/// - `RateLimited` (429) - retry later, never auto-retried
/// - `ServiceUnavailable` (502/503/504) - upstream trouble
/// - `ServerError` - any other 5xx
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    #[error("unsupported HTTP method: {0}")]
    UnsupportedMethod(String),

    #[error("network error: {0}")]
    Transport(String),

    #[error("unauthorized: {0}")]
    Unauthorized(String),

    #[error("you don't have permission to perform this action")]
    Forbidden,

    #[error("resource not found: {0}")]
    NotFound(String),

    #[error("invalid request: {0}")]
    BadRequest(String),

    #[error("conflict: {0}")]
    Conflict(String),

    #[error("rate limit exceeded. Please try again later")]
    RateLimited,

    #[error("QuickSpin API is experiencing issues. Please try again later")]
    ServiceUnavailable,

    #[error("server error: {0}")]
    ServerError(String),

    #[error("unexpected response (HTTP {status}): {message}")]
    Unexpected { status: u16, message: String },

    #[error("failed to decode response: {0}")]
    Decode(String),
}

/// Error body shape the API returns for 4xx/5xx responses.
#[derive(Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub detail: String,
    #[serde(default)]
    pub details: Option<serde_json::Value>,
}

impl ErrorBody {
    /// Best human-readable message, falling back through `message`, then
    /// `detail`, then the status line's canonical reason.
    pub fn best_message(&self, status: reqwest::StatusCode) -> String {
        if !self.message.is_empty() {
            self.message.clone()
        } else if !self.detail.is_empty() {
            self.detail.clone()
        } else {
            status
                .canonical_reason()
                .unwrap_or("unknown error")
                .to_string()
        }
    }
}

impl ApiError {
    /// Classify an HTTP error status plus its decoded body.
    pub fn from_status(status: reqwest::StatusCode, body: &ErrorBody) -> Self {
        let message = body.best_message(status);
        match status.as_u16() {
            401 => {
                if body.message.is_empty() && body.detail.is_empty() {
                    ApiError::Unauthorized(
                        "please run 'qspin auth login' to authenticate".to_string(),
                    )
                } else {
                    ApiError::Unauthorized(message)
                }
            }
            403 => ApiError::Forbidden,
            404 => ApiError::NotFound(message),
            400 => ApiError::BadRequest(message),
            409 => ApiError::Conflict(message),
            429 => ApiError::RateLimited,
            502 | 503 | 504 => ApiError::ServiceUnavailable,
            s if s >= 500 => ApiError::ServerError(message),
            s => ApiError::Unexpected { status: s, message },
        }
    }

    /// Convert connection-level reqwest errors.
    pub fn from_network_error(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            ApiError::Transport(format!("request timeout: {e}"))
        } else if e.is_connect() {
            ApiError::Transport(format!("connection failed: {e}"))
        } else if e.is_decode() {
            ApiError::Decode(e.to_string())
        } else {
            ApiError::Transport(e.to_string())
        }
    }

    /// Whether a caller may reasonably retry the operation.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            ApiError::Transport(_)
                | ApiError::RateLimited
                | ApiError::ServiceUnavailable
                | ApiError::ServerError(_)
        )
    }

    /// Whether this error means the session is no longer authenticated.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, ApiError::Unauthorized(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    fn body(message: &str, detail: &str) -> ErrorBody {
        ErrorBody {
            error: String::new(),
            message: message.to_string(),
            detail: detail.to_string(),
            details: None,
        }
    }

    #[test]
    fn message_takes_precedence_over_detail() {
        let b = body("broken", "ignored");
        assert_eq!(b.best_message(StatusCode::BAD_REQUEST), "broken");
    }

    #[test]
    fn detail_used_when_message_empty() {
        let b = body("", "field 'name' is required");
        assert_eq!(
            b.best_message(StatusCode::BAD_REQUEST),
            "field 'name' is required"
        );
    }

    #[test]
    fn canonical_reason_is_the_last_resort() {
        let b = body("", "");
        assert_eq!(b.best_message(StatusCode::NOT_FOUND), "Not Found");
    }

    #[test]
    fn taxonomy_mapping() {
        let b = body("nope", "");
        assert!(matches!(
            ApiError::from_status(StatusCode::BAD_REQUEST, &b),
            ApiError::BadRequest(_)
        ));
        assert!(matches!(
            ApiError::from_status(StatusCode::FORBIDDEN, &b),
            ApiError::Forbidden
        ));
        assert!(matches!(
            ApiError::from_status(StatusCode::NOT_FOUND, &b),
            ApiError::NotFound(_)
        ));
        assert!(matches!(
            ApiError::from_status(StatusCode::CONFLICT, &b),
            ApiError::Conflict(_)
        ));
        assert!(matches!(
            ApiError::from_status(StatusCode::TOO_MANY_REQUESTS, &b),
            ApiError::RateLimited
        ));
        for code in [502u16, 503, 504] {
            assert!(matches!(
                ApiError::from_status(StatusCode::from_u16(code).unwrap(), &b),
                ApiError::ServiceUnavailable
            ));
        }
        assert!(matches!(
            ApiError::from_status(StatusCode::INTERNAL_SERVER_ERROR, &b),
            ApiError::ServerError(_)
        ));
        assert!(matches!(
            ApiError::from_status(StatusCode::from_u16(507).unwrap(), &b),
            ApiError::ServerError(_)
        ));
        assert!(matches!(
            ApiError::from_status(StatusCode::from_u16(418).unwrap(), &b),
            ApiError::Unexpected { status: 418, .. }
        ));
    }

    #[test]
    fn unauthorized_without_body_prompts_reauth() {
        let err = ApiError::from_status(StatusCode::UNAUTHORIZED, &body("", ""));
        assert!(err.is_auth_error());
        assert!(err.to_string().contains("qspin auth login"));
    }

    #[test]
    fn retryable_classes() {
        assert!(ApiError::Transport("boom".into()).is_retryable());
        assert!(ApiError::ServiceUnavailable.is_retryable());
        assert!(ApiError::RateLimited.is_retryable());
        assert!(!ApiError::Forbidden.is_retryable());
        assert!(!ApiError::BadRequest("x".into()).is_retryable());
    }
}
