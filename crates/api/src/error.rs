use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::{Method, StatusCode};
use axum::response::{IntoResponse, Response};
use camsvc_core::constraint::{self, DbFailure, Outcome, Verb};
use camsvc_core::error::CoreError;
use sqlx::postgres::PgDatabaseError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce plain-text error responses; every
/// conversion emits exactly one log record.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `camsvc_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error raised while serving a request with `method`.
    ///
    /// The method decides how foreign-key violations are reported.
    #[error("Database error during {method}: {source}")]
    Database {
        method: Method,
        #[source]
        source: sqlx::Error,
    },

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

/// Attach the request method to a repository result.
pub trait DbResultExt<T> {
    fn for_method(self, method: &Method) -> AppResult<T>;
}

impl<T> DbResultExt<T> for Result<T, sqlx::Error> {
    fn for_method(self, method: &Method) -> AppResult<T> {
        self.map_err(|source| AppError::Database {
            method: method.clone(),
            source,
        })
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(format!(
            "error decoding request body: {}",
            rejection.body_text()
        ))
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest(format!(
            "error decoding query string: {}",
            rejection.body_text()
        ))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => {
                    tracing::error!(entity, id, "Resource not found");
                    (StatusCode::NOT_FOUND, format!("{entity} not found"))
                }
                CoreError::Validation(msg) => {
                    tracing::error!(error = %msg, "Invalid request");
                    (StatusCode::BAD_REQUEST, msg.clone())
                }
            },

            // --- Database errors ---
            AppError::Database { method, source } => classify_sqlx_error(method, source),

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => {
                tracing::error!(error = %msg, "Bad request");
                (StatusCode::BAD_REQUEST, msg.clone())
            }
        };

        (status, message).into_response()
    }
}

/// The request verb a method stands for when translating constraint
/// violations.
pub fn verb_for(method: &Method) -> Verb {
    match *method {
        Method::POST => Verb::Create,
        Method::PATCH | Method::PUT => Verb::Update,
        Method::DELETE => Verb::Delete,
        _ => Verb::Read,
    }
}

/// Map an [`Outcome`] onto its HTTP status.
pub fn status_for(outcome: Outcome) -> StatusCode {
    match outcome {
        Outcome::BadRequest => StatusCode::BAD_REQUEST,
        Outcome::Conflict => StatusCode::CONFLICT,
        Outcome::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Classify a sqlx error into an HTTP status and message.
///
/// - `RowNotFound` maps to 404 (the row vanished after it was loaded).
/// - Database errors go through [`constraint::translate`] with the PostgreSQL
///   detail and hint attached.
/// - Everything else maps to 500.
fn classify_sqlx_error(method: &Method, err: &sqlx::Error) -> (StatusCode, String) {
    match err {
        sqlx::Error::RowNotFound => {
            tracing::warn!(%method, "Row disappeared before the statement ran");
            (StatusCode::NOT_FOUND, "resource not found".to_string())
        }
        sqlx::Error::Database(db_err) => {
            let pg_err = db_err.try_downcast_ref::<PgDatabaseError>();
            let code = db_err.code();
            let failure = DbFailure {
                code: code.as_deref(),
                message: db_err.message(),
                detail: pg_err.and_then(PgDatabaseError::detail),
                hint: pg_err.and_then(PgDatabaseError::hint),
            };
            let translation = constraint::translate(&failure, verb_for(method));

            match translation.kind {
                Some(kind) => tracing::error!(
                    %method,
                    code = ?failure.code,
                    error = %failure.message,
                    "{kind}",
                ),
                None => tracing::error!(
                    %method,
                    code = ?failure.code,
                    error = %failure.message,
                    "Database error",
                ),
            }

            (status_for(translation.outcome), translation.message)
        }
        other => {
            tracing::error!(%method, error = %other, "Database error");
            (StatusCode::INTERNAL_SERVER_ERROR, other.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbs_follow_methods() {
        assert_eq!(verb_for(&Method::POST), Verb::Create);
        assert_eq!(verb_for(&Method::PATCH), Verb::Update);
        assert_eq!(verb_for(&Method::DELETE), Verb::Delete);
        assert_eq!(verb_for(&Method::GET), Verb::Read);
    }

    #[test]
    fn outcomes_map_to_statuses() {
        assert_eq!(status_for(Outcome::BadRequest), StatusCode::BAD_REQUEST);
        assert_eq!(status_for(Outcome::Conflict), StatusCode::CONFLICT);
        assert_eq!(
            status_for(Outcome::Internal),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
