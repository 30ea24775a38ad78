//! Repository for the `cameras` table.

use camsvc_core::types::DbId;
use sqlx::PgPool;

use crate::models::camera::{Camera, CreateCamera};

/// Column list shared across queries.
const COLUMNS: &str = "id, name, connection_string, location_text, location_id, orientation";

/// Provides CRUD operations for cameras.
pub struct CameraRepo;

impl CameraRepo {
    /// Insert a new camera, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateCamera) -> Result<Camera, sqlx::Error> {
        let query = format!(
            "INSERT INTO cameras (name, connection_string, location_text, location_id, orientation) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Camera>(&query)
            .bind(&input.name)
            .bind(&input.connection_string)
            .bind(&input.location_text)
            .bind(input.location_id)
            .bind(input.orientation)
            .fetch_one(pool)
            .await
    }

    /// Find a camera by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Camera>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM cameras WHERE id = $1");
        sqlx::query_as::<_, Camera>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all cameras ordered by ID.
    pub async fn list(pool: &PgPool) -> Result<Vec<Camera>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM cameras ORDER BY id");
        sqlx::query_as::<_, Camera>(&query).fetch_all(pool).await
    }

    /// Overwrite every mutable column with the values in `camera`.
    pub async fn update(pool: &PgPool, camera: &Camera) -> Result<Camera, sqlx::Error> {
        let query = format!(
            "UPDATE cameras SET \
                 name = $2, \
                 connection_string = $3, \
                 location_text = $4, \
                 location_id = $5, \
                 orientation = $6 \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Camera>(&query)
            .bind(camera.id)
            .bind(&camera.name)
            .bind(&camera.connection_string)
            .bind(&camera.location_text)
            .bind(camera.location_id)
            .bind(camera.orientation)
            .fetch_one(pool)
            .await
    }

    /// Delete a camera by ID. Returns `true` if a row was removed.
    ///
    /// Fails with a foreign-key violation while detections still reference
    /// the camera.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM cameras WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
