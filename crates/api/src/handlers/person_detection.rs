//! Handlers for the `/personDetections` resource and the nested
//! `/cameras/{id}/personDetections` routes.

use axum::extract::State;
use axum::http::{Method, StatusCode};
use axum::response::Response;
use axum::Json;
use camsvc_core::patch::ApplyPatch;
use camsvc_db::models::camera::Camera;
use camsvc_db::models::person_detection::{
    CreatePersonDetection, DailyCount, PersonDetection, UpdatePersonDetection,
};
use camsvc_db::repositories::PersonDetectionRepo;

use crate::error::{AppResult, DbResultExt};
use crate::extract::{JsonBody, QueryParams};
use crate::middleware::resource::{not_found, Loaded};
use crate::query::{LookBackParams, WindowParams};
use crate::response::created;
use crate::state::AppState;

/// POST /personDetections
pub async fn create(
    State(state): State<AppState>,
    method: Method,
    JsonBody(input): JsonBody<CreatePersonDetection>,
) -> AppResult<Response> {
    insert(&state, &method, input).await
}

/// POST /cameras/{id}/personDetections
///
/// The camera id comes from the path; a `camera_id` in the body is ignored.
pub async fn create_for_camera(
    State(state): State<AppState>,
    method: Method,
    Loaded(camera): Loaded<Camera>,
    JsonBody(mut input): JsonBody<CreatePersonDetection>,
) -> AppResult<Response> {
    input.camera_id = Some(camera.id);
    insert(&state, &method, input).await
}

async fn insert(
    state: &AppState,
    method: &Method,
    input: CreatePersonDetection,
) -> AppResult<Response> {
    let detection = PersonDetectionRepo::create(&state.pool, &input)
        .await
        .for_method(method)?;
    tracing::info!(
        person_detection_id = detection.id,
        camera_id = detection.camera_id,
        "Person detection recorded",
    );
    Ok(created("/personDetections", detection.id, detection))
}

/// GET /personDetections?offset=&count=
pub async fn list(
    State(state): State<AppState>,
    method: Method,
    QueryParams(params): QueryParams<WindowParams>,
) -> AppResult<Json<Vec<PersonDetection>>> {
    let window = params.window()?;
    let detections = PersonDetectionRepo::list(&state.pool, window)
        .await
        .for_method(&method)?;
    Ok(Json(detections))
}

/// GET /cameras/{id}/personDetections?offset=&count=
pub async fn list_for_camera(
    State(state): State<AppState>,
    method: Method,
    Loaded(camera): Loaded<Camera>,
    QueryParams(params): QueryParams<WindowParams>,
) -> AppResult<Json<Vec<PersonDetection>>> {
    let window = params.window()?;
    let detections = PersonDetectionRepo::list_by_camera(&state.pool, camera.id, window)
        .await
        .for_method(&method)?;
    Ok(Json(detections))
}

/// GET /cameras/{id}/personDetections/dailyCounts?days=&months=
pub async fn daily_counts(
    State(state): State<AppState>,
    method: Method,
    Loaded(camera): Loaded<Camera>,
    QueryParams(params): QueryParams<LookBackParams>,
) -> AppResult<Json<Vec<DailyCount>>> {
    let counts = PersonDetectionRepo::daily_counts(&state.pool, camera.id, params.look_back())
        .await
        .for_method(&method)?;
    Ok(Json(counts))
}

/// GET /personDetections/{id}
pub async fn get_by_id(Loaded(detection): Loaded<PersonDetection>) -> Json<PersonDetection> {
    Json(detection)
}

/// PATCH /personDetections/{id}
pub async fn update(
    State(state): State<AppState>,
    method: Method,
    Loaded(mut detection): Loaded<PersonDetection>,
    JsonBody(input): JsonBody<UpdatePersonDetection>,
) -> AppResult<Json<PersonDetection>> {
    input.apply_to(&mut detection);
    let detection = PersonDetectionRepo::update(&state.pool, &detection)
        .await
        .for_method(&method)?;
    tracing::info!(person_detection_id = detection.id, "Person detection updated");
    Ok(Json(detection))
}

/// DELETE /personDetections/{id}
pub async fn delete(
    State(state): State<AppState>,
    method: Method,
    Loaded(detection): Loaded<PersonDetection>,
) -> AppResult<StatusCode> {
    let deleted = PersonDetectionRepo::delete(&state.pool, detection.id)
        .await
        .for_method(&method)?;
    if !deleted {
        return Err(not_found::<PersonDetection>(detection.id));
    }
    tracing::info!(person_detection_id = detection.id, "Person detection deleted");
    Ok(StatusCode::OK)
}
