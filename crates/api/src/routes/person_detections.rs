//! Route definitions for the `/personDetections` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::person_detection;
use crate::state::AppState;

/// Person detection routes mounted at `/personDetections`.
///
/// ```text
/// GET    /       -> list (requires ?count=)
/// POST   /       -> create
/// GET    /{id}   -> get_by_id
/// PATCH  /{id}   -> update
/// DELETE /{id}   -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(person_detection::list).post(person_detection::create))
        .route(
            "/{id}",
            get(person_detection::get_by_id)
                .patch(person_detection::update)
                .delete(person_detection::delete),
        )
}
