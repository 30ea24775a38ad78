//! Handlers for the `/cameraDetections` resource and the nested
//! `/cameras/{id}/cameraDetections` listing.

use axum::extract::State;
use axum::http::{Method, StatusCode};
use axum::response::Response;
use axum::Json;
use camsvc_core::patch::ApplyPatch;
use camsvc_db::models::camera::Camera;
use camsvc_db::models::camera_detection::{
    CameraDetection, CreateCameraDetection, UpdateCameraDetection,
};
use camsvc_db::repositories::CameraDetectionRepo;

use crate::error::{AppResult, DbResultExt};
use crate::extract::JsonBody;
use crate::middleware::resource::{not_found, Loaded};
use crate::response::created;
use crate::state::AppState;

/// POST /cameraDetections
pub async fn create(
    State(state): State<AppState>,
    method: Method,
    JsonBody(input): JsonBody<CreateCameraDetection>,
) -> AppResult<Response> {
    let detection = CameraDetectionRepo::create(&state.pool, &input)
        .await
        .for_method(&method)?;
    tracing::info!(
        camera_detection_id = detection.id,
        camera_id = ?detection.camera_id,
        "Camera detection recorded",
    );
    Ok(created("/cameraDetections", detection.id, detection))
}

/// GET /cameraDetections
pub async fn list(
    State(state): State<AppState>,
    method: Method,
) -> AppResult<Json<Vec<CameraDetection>>> {
    let detections = CameraDetectionRepo::list(&state.pool)
        .await
        .for_method(&method)?;
    Ok(Json(detections))
}

/// GET /cameras/{id}/cameraDetections
pub async fn list_for_camera(
    State(state): State<AppState>,
    method: Method,
    Loaded(camera): Loaded<Camera>,
) -> AppResult<Json<Vec<CameraDetection>>> {
    let detections = CameraDetectionRepo::list_by_camera(&state.pool, camera.id)
        .await
        .for_method(&method)?;
    Ok(Json(detections))
}

/// GET /cameraDetections/{id}
pub async fn get_by_id(Loaded(detection): Loaded<CameraDetection>) -> Json<CameraDetection> {
    Json(detection)
}

/// PATCH /cameraDetections/{id}
pub async fn update(
    State(state): State<AppState>,
    method: Method,
    Loaded(mut detection): Loaded<CameraDetection>,
    JsonBody(input): JsonBody<UpdateCameraDetection>,
) -> AppResult<Json<CameraDetection>> {
    input.apply_to(&mut detection);
    let detection = CameraDetectionRepo::update(&state.pool, &detection)
        .await
        .for_method(&method)?;
    tracing::info!(camera_detection_id = detection.id, "Camera detection updated");
    Ok(Json(detection))
}

/// DELETE /cameraDetections/{id}
pub async fn delete(
    State(state): State<AppState>,
    method: Method,
    Loaded(detection): Loaded<CameraDetection>,
) -> AppResult<StatusCode> {
    let deleted = CameraDetectionRepo::delete(&state.pool, detection.id)
        .await
        .for_method(&method)?;
    if !deleted {
        return Err(not_found::<CameraDetection>(detection.id));
    }
    tracing::info!(camera_detection_id = detection.id, "Camera detection deleted");
    Ok(StatusCode::OK)
}
