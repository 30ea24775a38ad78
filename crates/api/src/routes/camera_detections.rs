//! Route definitions for the `/cameraDetections` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::camera_detection;
use crate::state::AppState;

/// Camera detection routes mounted at `/cameraDetections`.
///
/// ```text
/// GET    /       -> list
/// POST   /       -> create
/// GET    /{id}   -> get_by_id
/// PATCH  /{id}   -> update
/// DELETE /{id}   -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(camera_detection::list).post(camera_detection::create))
        .route(
            "/{id}",
            get(camera_detection::get_by_id)
                .patch(camera_detection::update)
                .delete(camera_detection::delete),
        )
}
