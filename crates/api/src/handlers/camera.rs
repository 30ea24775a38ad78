//! Handlers for the `/cameras` resource.

use axum::extract::State;
use axum::http::{Method, StatusCode};
use axum::response::Response;
use axum::Json;
use camsvc_core::patch::ApplyPatch;
use camsvc_db::models::camera::{Camera, CreateCamera, UpdateCamera};
use camsvc_db::repositories::CameraRepo;

use crate::error::{AppResult, DbResultExt};
use crate::extract::JsonBody;
use crate::middleware::resource::{not_found, Loaded};
use crate::response::created;
use crate::state::AppState;

/// POST /cameras
pub async fn create(
    State(state): State<AppState>,
    method: Method,
    JsonBody(input): JsonBody<CreateCamera>,
) -> AppResult<Response> {
    let camera = CameraRepo::create(&state.pool, &input)
        .await
        .for_method(&method)?;
    tracing::info!(camera_id = camera.id, location_id = ?camera.location_id, "Camera created");
    Ok(created("/cameras", camera.id, camera))
}

/// GET /cameras
pub async fn list(State(state): State<AppState>, method: Method) -> AppResult<Json<Vec<Camera>>> {
    let cameras = CameraRepo::list(&state.pool).await.for_method(&method)?;
    Ok(Json(cameras))
}

/// GET /cameras/{id}
pub async fn get_by_id(Loaded(camera): Loaded<Camera>) -> Json<Camera> {
    Json(camera)
}

/// PATCH /cameras/{id}
pub async fn update(
    State(state): State<AppState>,
    method: Method,
    Loaded(mut camera): Loaded<Camera>,
    JsonBody(input): JsonBody<UpdateCamera>,
) -> AppResult<Json<Camera>> {
    input.apply_to(&mut camera);
    let camera = CameraRepo::update(&state.pool, &camera)
        .await
        .for_method(&method)?;
    tracing::info!(camera_id = camera.id, "Camera updated");
    Ok(Json(camera))
}

/// DELETE /cameras/{id}
///
/// Fails with 409 while detections still refer to the camera.
pub async fn delete(
    State(state): State<AppState>,
    method: Method,
    Loaded(camera): Loaded<Camera>,
) -> AppResult<StatusCode> {
    let deleted = CameraRepo::delete(&state.pool, camera.id)
        .await
        .for_method(&method)?;
    if !deleted {
        return Err(not_found::<Camera>(camera.id));
    }
    tracing::info!(camera_id = camera.id, "Camera deleted");
    Ok(StatusCode::OK)
}
