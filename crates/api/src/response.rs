//! Shared response builders for API handlers.

use axum::http::header::LOCATION;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use camsvc_core::types::DbId;
use serde::Serialize;

/// `201 Created` with a `Location: /<collection>/<id>` header and the new
/// row as the JSON body.
///
/// # Example
///
/// ```ignore
/// Ok(created("/locations", location.id, location))
/// ```
pub fn created<T: Serialize>(collection: &str, id: DbId, body: T) -> Response {
    (
        StatusCode::CREATED,
        [(LOCATION, format!("{collection}/{id}"))],
        Json(body),
    )
        .into_response()
}
