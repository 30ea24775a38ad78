//! Repository for the `camera_detections` table.

use camsvc_core::types::DbId;
use sqlx::PgPool;

use crate::models::camera_detection::{CameraDetection, CreateCameraDetection};

/// Column list shared across queries.
const COLUMNS: &str = "\
    id, camera_id, in_direction, out_direction, counter, \
    social_distancing_v, detection_date";

/// Provides CRUD operations for camera detections.
pub struct CameraDetectionRepo;

impl CameraDetectionRepo {
    /// Insert a new camera detection, returning the created row.
    ///
    /// A missing `detection_date` is stamped with the database's `now()`.
    pub async fn create(
        pool: &PgPool,
        input: &CreateCameraDetection,
    ) -> Result<CameraDetection, sqlx::Error> {
        let query = format!(
            "INSERT INTO camera_detections \
                 (camera_id, in_direction, out_direction, counter, social_distancing_v, detection_date) \
             VALUES ($1, $2, $3, $4, $5, COALESCE($6, now())) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CameraDetection>(&query)
            .bind(input.camera_id)
            .bind(input.in_direction)
            .bind(input.out_direction)
            .bind(input.counter)
            .bind(input.social_distancing_v)
            .bind(input.detection_date)
            .fetch_one(pool)
            .await
    }

    /// Find a camera detection by its ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<CameraDetection>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM camera_detections WHERE id = $1");
        sqlx::query_as::<_, CameraDetection>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all camera detections ordered by ID.
    pub async fn list(pool: &PgPool) -> Result<Vec<CameraDetection>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM camera_detections ORDER BY id");
        sqlx::query_as::<_, CameraDetection>(&query)
            .fetch_all(pool)
            .await
    }

    /// List the detections recorded by one camera, ordered by ID.
    pub async fn list_by_camera(
        pool: &PgPool,
        camera_id: DbId,
    ) -> Result<Vec<CameraDetection>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM camera_detections WHERE camera_id = $1 ORDER BY id"
        );
        sqlx::query_as::<_, CameraDetection>(&query)
            .bind(camera_id)
            .fetch_all(pool)
            .await
    }

    /// Overwrite every mutable column with the values in `detection`.
    pub async fn update(
        pool: &PgPool,
        detection: &CameraDetection,
    ) -> Result<CameraDetection, sqlx::Error> {
        let query = format!(
            "UPDATE camera_detections SET \
                 camera_id = $2, \
                 in_direction = $3, \
                 out_direction = $4, \
                 counter = $5, \
                 social_distancing_v = $6, \
                 detection_date = $7 \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CameraDetection>(&query)
            .bind(detection.id)
            .bind(detection.camera_id)
            .bind(detection.in_direction)
            .bind(detection.out_direction)
            .bind(detection.counter)
            .bind(detection.social_distancing_v)
            .bind(detection.detection_date)
            .fetch_one(pool)
            .await
    }

    /// Delete a camera detection by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM camera_detections WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
