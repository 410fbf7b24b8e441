use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use thiserror::Error;
use tracing::error;

/// Returned to the tutor client when the completion call fails; the front end
/// renders it verbatim as the chat bubble.
pub const TUTOR_FALLBACK: &str =
    "I'm having trouble connecting right now. Please try again in a moment.";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    InvalidInput(String),
    #[error("User already exists")]
    Conflict,
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("{0}")]
    Unauthenticated(String),
    #[error("{}", TUTOR_FALLBACK)]
    UpstreamFailure,
    #[error("Server error")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            // Duplicate signups answer 400, not 409; clients treat all signup
            // rejections uniformly.
            ApiError::Conflict => StatusCode::BAD_REQUEST,
            ApiError::InvalidCredentials => StatusCode::BAD_REQUEST,
            ApiError::Unauthenticated(_) => StatusCode::UNAUTHORIZED,
            ApiError::UpstreamFailure => StatusCode::BAD_GATEWAY,
            ApiError::Internal(e) => {
                error!(error = %e, "internal error");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        let body = Json(serde_json::json!({ "message": self.to_string() }));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn internal_error_hides_detail() {
        let err = ApiError::Internal(anyhow::anyhow!("connection refused to 10.0.0.3"));
        assert_eq!(err.to_string(), "Server error");
    }

    #[test]
    fn credential_errors_are_indistinguishable() {
        // Same message regardless of cause; handlers construct the same variant
        // for unknown email and wrong password.
        assert_eq!(ApiError::InvalidCredentials.to_string(), "Invalid credentials");
    }

    #[test]
    fn upstream_failure_carries_the_fallback_text() {
        assert_eq!(ApiError::UpstreamFailure.to_string(), TUTOR_FALLBACK);
    }
}
