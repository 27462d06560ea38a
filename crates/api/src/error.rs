use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use roomescape_core::error::CoreError;
use roomescape_core::messages;
use serde::Serialize;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// [`IntoResponse`] is the single place where failures become status codes
/// and `{ "errorMessage": ... }` bodies.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `roomescape_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An internal error. The message is logged, never returned.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

/// The one error body shape the API returns.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub error_message: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error_message: message.into(),
        }
    }

    /// The sanitized 500 response used for every unanticipated failure.
    pub fn unexpected() -> (StatusCode, axum::Json<Self>) {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            axum::Json(Self::new(messages::UNEXPECTED_ERROR)),
        )
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { .. } => (StatusCode::NOT_FOUND, core.to_string()),
                CoreError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
                CoreError::MissingArgument => {
                    (StatusCode::BAD_REQUEST, messages::MISSING_ARGUMENT.to_string())
                }
                CoreError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg.clone()),
                CoreError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg.clone()),
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    return ErrorResponse::unexpected().into_response();
                }
            },

            // --- Database errors ---
            AppError::Database(err) => match classify_sqlx_error(err) {
                Some(classified) => classified,
                None => return ErrorResponse::unexpected().into_response(),
            },

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                return ErrorResponse::unexpected().into_response();
            }
        };

        (status, axum::Json(ErrorResponse::new(message))).into_response()
    }
}

/// Classify a sqlx error into a client-facing status and message.
///
/// - `RowNotFound` maps to 404.
/// - Unique violations on `uq_*` constraints map to 400; these surface only
///   when a concurrent writer slipped past a pre-check.
/// - Everything else is logged and returns `None` (sanitized 500).
fn classify_sqlx_error(err: &sqlx::Error) -> Option<(StatusCode, String)> {
    match err {
        sqlx::Error::RowNotFound => Some((
            StatusCode::NOT_FOUND,
            messages::RESOURCE_NOT_FOUND.to_string(),
        )),
        sqlx::Error::Database(db_err) => {
            // PostgreSQL unique constraint violation: error code 23505
            if db_err.code().as_deref() == Some("23505") {
                let constraint = db_err.constraint().unwrap_or("unknown");
                if constraint.starts_with("uq_") {
                    tracing::warn!(constraint, "Unique constraint violated");
                    return Some((StatusCode::BAD_REQUEST, messages::DUPLICATE_VALUE.to_string()));
                }
            }
            tracing::error!(error = %db_err, "Database error");
            None
        }
        other => {
            tracing::error!(error = %other, "Database error");
            None
        }
    }
}
