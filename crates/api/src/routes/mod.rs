pub mod camera_detections;
pub mod cameras;
pub mod health;
pub mod locations;
pub mod person_detections;

use axum::Router;

use crate::state::AppState;

/// Build the resource route tree.
///
/// Route hierarchy:
///
/// ```text
/// /locations                                    list, create
/// /locations/{id}                               get, update, delete
///
/// /cameras                                      list, create
/// /cameras/{id}                                 get, update, delete
/// /cameras/{id}/cameraDetections                list by camera
/// /cameras/{id}/personDetections                list by camera, create for camera
/// /cameras/{id}/personDetections/dailyCounts    daily counts
///
/// /cameraDetections                             list, create
/// /cameraDetections/{id}                        get, update, delete
///
/// /personDetections                             list, create
/// /personDetections/{id}                        get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/locations", locations::router())
        .nest("/cameras", cameras::router())
        .nest("/cameraDetections", camera_detections::router())
        .nest("/personDetections", person_detections::router())
}
