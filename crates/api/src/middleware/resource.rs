//! Typed resource loading for `/{id}` routes.
//!
//! Handlers take a [`Loaded<T>`] argument instead of a raw path id. By the
//! time the handler runs, the id has been parsed and the row fetched; a bad
//! id, a missing row or a storage failure never reaches the handler.
//!
//! ```ignore
//! pub async fn get_by_id(Loaded(camera): Loaded<Camera>) -> Json<Camera> {
//!     Json(camera)
//! }
//! ```

use std::future::Future;

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;
use camsvc_core::error::CoreError;
use camsvc_core::types::DbId;
use camsvc_db::models::camera::Camera;
use camsvc_db::models::camera_detection::CameraDetection;
use camsvc_db::models::location::Location;
use camsvc_db::models::person_detection::PersonDetection;
use camsvc_db::repositories::{
    CameraDetectionRepo, CameraRepo, LocationRepo, PersonDetectionRepo,
};
use camsvc_db::DbPool;

use crate::error::{AppError, DbResultExt};
use crate::state::AppState;

/// A row type that can be loaded by primary key.
pub trait LoadResource: Sized + Send {
    /// Human-readable entity name used in error bodies.
    const ENTITY: &'static str;

    /// Fetch the row with `id`, or `None` when there is none.
    fn load(
        pool: &DbPool,
        id: DbId,
    ) -> impl Future<Output = Result<Option<Self>, sqlx::Error>> + Send;
}

impl LoadResource for Location {
    const ENTITY: &'static str = "location";

    async fn load(pool: &DbPool, id: DbId) -> Result<Option<Self>, sqlx::Error> {
        LocationRepo::find_by_id(pool, id).await
    }
}

impl LoadResource for Camera {
    const ENTITY: &'static str = "camera";

    async fn load(pool: &DbPool, id: DbId) -> Result<Option<Self>, sqlx::Error> {
        CameraRepo::find_by_id(pool, id).await
    }
}

impl LoadResource for CameraDetection {
    const ENTITY: &'static str = "camera detection";

    async fn load(pool: &DbPool, id: DbId) -> Result<Option<Self>, sqlx::Error> {
        CameraDetectionRepo::find_by_id(pool, id).await
    }
}

impl LoadResource for PersonDetection {
    const ENTITY: &'static str = "person detection";

    async fn load(pool: &DbPool, id: DbId) -> Result<Option<Self>, sqlx::Error> {
        PersonDetectionRepo::find_by_id(pool, id).await
    }
}

/// The row identified by the `{id}` path segment.
#[derive(Debug, Clone)]
pub struct Loaded<T>(pub T);

impl<T: LoadResource> FromRequestParts<AppState> for Loaded<T> {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<DbId>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                AppError::BadRequest(format!(
                    "error parsing {} id: {}",
                    T::ENTITY,
                    rejection.body_text()
                ))
            })?;

        T::load(&state.pool, id)
            .await
            .for_method(&parts.method)?
            .map(Loaded)
            .ok_or_else(|| not_found::<T>(id))
    }
}

/// The 404 error for a missing `T` row.
pub fn not_found<T: LoadResource>(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: T::ENTITY,
        id,
    })
}
