//! Liveness and schema readiness.

use axum::extract::State;
use axum::http::StatusCode;
use axum::{routing::get, Json, Router};
use camsvc_db::SchemaStatus;
use serde::Serialize;

use crate::state::AppState;

/// Body of `GET /health`.
#[derive(Serialize)]
pub struct HealthReport {
    /// `ok`, `migrations_pending` or `database_unavailable`.
    pub status: &'static str,
    pub version: &'static str,
    /// Absent when the migration table could not be read.
    pub schema: Option<SchemaStatus>,
}

/// GET /health
///
/// 200 only when the database answers and every embedded migration has been
/// applied; 503 otherwise.
async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthReport>) {
    let (code, status, schema) = match camsvc_db::schema_status(&state.pool).await {
        Ok(schema) if schema.is_current() => (StatusCode::OK, "ok", Some(schema)),
        Ok(schema) => {
            tracing::warn!(pending = ?schema.pending, "Database schema is behind the binary");
            (StatusCode::SERVICE_UNAVAILABLE, "migrations_pending", Some(schema))
        }
        Err(err) => {
            tracing::error!(error = %err, "Could not read migration status");
            (StatusCode::SERVICE_UNAVAILABLE, "database_unavailable", None)
        }
    };

    let report = HealthReport {
        status,
        version: env!("CARGO_PKG_VERSION"),
        schema,
    };
    (code, Json(report))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}
