//! Route definitions for the `/cameras` resource and its nested detection
//! routes.

use axum::routing::get;
use axum::Router;

use crate::handlers::{camera, camera_detection, person_detection};
use crate::state::AppState;

/// Camera routes mounted at `/cameras`.
///
/// ```text
/// GET    /                                -> list
/// POST   /                                -> create
/// GET    /{id}                            -> get_by_id
/// PATCH  /{id}                            -> update
/// DELETE /{id}                            -> delete
/// GET    /{id}/cameraDetections           -> camera_detection::list_for_camera
/// GET    /{id}/personDetections           -> person_detection::list_for_camera
/// POST   /{id}/personDetections           -> person_detection::create_for_camera
/// GET    /{id}/personDetections/dailyCounts -> person_detection::daily_counts
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(camera::list).post(camera::create))
        .route(
            "/{id}",
            get(camera::get_by_id)
                .patch(camera::update)
                .delete(camera::delete),
        )
        .route(
            "/{id}/cameraDetections",
            get(camera_detection::list_for_camera),
        )
        .route(
            "/{id}/personDetections",
            get(person_detection::list_for_camera).post(person_detection::create_for_camera),
        )
        .route(
            "/{id}/personDetections/dailyCounts",
            get(person_detection::daily_counts),
        )
}
