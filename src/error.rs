//! Error taxonomy for the simulated flows.
//!
//! Today only [`ValidationError`] can actually occur. [`BackendError`] is the
//! seam a real content service would report through; the mock backend never
//! produces it.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Rejected user input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A required field was empty or whitespace.
    #[error("{0} is required")]
    MissingField(&'static str),

    /// A numeric field fell outside its accepted range.
    #[error("{field} must be between {min} and {max} (got {value})")]
    OutOfRange {
        field: &'static str,
        min: u32,
        max: u32,
        value: u32,
    },

    /// A numeric field could not be read as a whole number.
    #[error("{0} must be a whole number")]
    NotANumber(&'static str),

    /// Sign-up password and confirmation differ.
    #[error("passwords do not match")]
    PasswordMismatch,
}

/// Failure reported by a content backend.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BackendError {
    /// Reserved for real integrations; never raised by the mock backend.
    #[error("simulated backend error: {0}")]
    Simulated(String),
}

/// Application-level error returned by handlers.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Backend(#[from] BackendError),

    #[error("sign in required")]
    Unauthenticated,

    /// The auth dialog was dismissed (or the session dropped) while the
    /// submission was waiting on the backend.
    #[error("sign-in was abandoned before it completed")]
    AuthAbandoned,

    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

impl AppError {
    /// HTTP status this error maps to.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Backend(_) => StatusCode::BAD_GATEWAY,
            Self::Unauthenticated => StatusCode::UNAUTHORIZED,
            Self::AuthAbandoned => StatusCode::CONFLICT,
            Self::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(name: "request.failed", error = %self, "Request failed");
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
