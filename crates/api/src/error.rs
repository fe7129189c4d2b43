use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use learndsa_core::error::CoreError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and raw store errors.
/// Implements [`IntoResponse`] to produce consistent JSON error responses
/// that never carry internal detail.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `learndsa_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A ledger write refused before it reached the store. Reported as a
    /// failed write (500) that still carries the domain code.
    #[error("Write rejected: {0}")]
    WriteRejected(CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!(reason = %rejection.body_text(), "Rejected request body");
        AppError::Core(CoreError::Validation("Invalid request body".into()))
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        tracing::debug!(reason = %rejection.body_text(), "Rejected query string");
        AppError::Core(CoreError::Validation("Invalid query parameters".into()))
    }
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Core(core) => classify_core_error(core),
            AppError::WriteRejected(core) => {
                let (_, code, message) = classify_core_error(core);
                (StatusCode::INTERNAL_SERVER_ERROR, code, message)
            }
            AppError::Database(err) => classify_sqlx_error(err),
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Classify a domain error into an HTTP status, error code, and message.
///
/// Conflicts and missing delete targets are failed operations (500); the
/// `code` tells them apart.
fn classify_core_error(core: &CoreError) -> (StatusCode, &'static str, String) {
    match core {
        CoreError::NotFound { entity, key } => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "NOT_FOUND",
            format!("{entity} for {key} not found"),
        ),
        CoreError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
        CoreError::Conflict(msg) => (StatusCode::INTERNAL_SERVER_ERROR, "CONFLICT", msg.clone()),
        CoreError::Unauthorized(msg) => {
            tracing::debug!(reason = %msg, "Rejected unauthenticated request");
            (
                StatusCode::UNAUTHORIZED,
                "UNAUTHORIZED",
                "Unauthorized".to_string(),
            )
        }
    }
}

fn internal() -> (StatusCode, &'static str, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
        "An internal error occurred".to_string(),
    )
}

/// Classify a sqlx error into an HTTP status, error code, and message.
///
/// - Unique constraint violations (constraint name starting with `uq_`) map to
///   500 with `CONFLICT`.
/// - Pool exhaustion, a closed pool and I/O failures mean the store is
///   unreachable: 500 with `STORE_UNAVAILABLE`.
/// - Everything else maps to 500 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    match err {
        sqlx::Error::Database(db_err) => {
            // PostgreSQL unique constraint violation: error code 23505
            if db_err.code().as_deref() == Some("23505") {
                let constraint = db_err.constraint().unwrap_or("unknown");
                if constraint.starts_with("uq_") {
                    return (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "CONFLICT",
                        "Resource already exists".to_string(),
                    );
                }
            }
            tracing::error!(error = %db_err, "Database error");
            internal()
        }
        sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
            tracing::error!(error = %err, "Store unavailable");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "STORE_UNAVAILABLE",
                "Storage is temporarily unavailable".to_string(),
            )
        }
        other => {
            tracing::error!(error = %other, "Database error");
            internal()
        }
    }
}
