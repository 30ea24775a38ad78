//! Handlers for the `/locations` resource.

use axum::extract::State;
use axum::http::{Method, StatusCode};
use axum::response::Response;
use axum::Json;
use camsvc_core::patch::ApplyPatch;
use camsvc_db::models::location::{CreateLocation, Location, UpdateLocation};
use camsvc_db::repositories::LocationRepo;

use crate::error::{AppResult, DbResultExt};
use crate::extract::JsonBody;
use crate::middleware::resource::{not_found, Loaded};
use crate::response::created;
use crate::state::AppState;

/// POST /locations
pub async fn create(
    State(state): State<AppState>,
    method: Method,
    JsonBody(input): JsonBody<CreateLocation>,
) -> AppResult<Response> {
    let location = LocationRepo::create(&state.pool, &input)
        .await
        .for_method(&method)?;
    tracing::info!(location_id = location.id, "Location created");
    Ok(created("/locations", location.id, location))
}

/// GET /locations
pub async fn list(State(state): State<AppState>, method: Method) -> AppResult<Json<Vec<Location>>> {
    let locations = LocationRepo::list(&state.pool).await.for_method(&method)?;
    Ok(Json(locations))
}

/// GET /locations/{id}
pub async fn get_by_id(Loaded(location): Loaded<Location>) -> Json<Location> {
    Json(location)
}

/// PATCH /locations/{id}
pub async fn update(
    State(state): State<AppState>,
    method: Method,
    Loaded(mut location): Loaded<Location>,
    JsonBody(input): JsonBody<UpdateLocation>,
) -> AppResult<Json<Location>> {
    input.apply_to(&mut location);
    let location = LocationRepo::update(&state.pool, &location)
        .await
        .for_method(&method)?;
    tracing::info!(location_id = location.id, "Location updated");
    Ok(Json(location))
}

/// DELETE /locations/{id}
pub async fn delete(
    State(state): State<AppState>,
    method: Method,
    Loaded(location): Loaded<Location>,
) -> AppResult<StatusCode> {
    let deleted = LocationRepo::delete(&state.pool, location.id)
        .await
        .for_method(&method)?;
    if !deleted {
        return Err(not_found::<Location>(location.id));
    }
    tracing::info!(location_id = location.id, "Location deleted");
    Ok(StatusCode::OK)
}
