//! Repository for the `person_detections` table.

use camsvc_core::types::DbId;
use camsvc_core::window::{LookBack, Window};
use sqlx::PgPool;

use crate::models::person_detection::{CreatePersonDetection, DailyCount, PersonDetection};

/// Column list shared across queries.
const COLUMNS: &str = "id, camera_id, direction, detection_date";

/// Provides CRUD and aggregate operations for person detections.
pub struct PersonDetectionRepo;

impl PersonDetectionRepo {
    /// Insert a new person detection, returning the created row.
    ///
    /// A missing `detection_date` is stamped with the database's `now()`.
    pub async fn create(
        pool: &PgPool,
        input: &CreatePersonDetection,
    ) -> Result<PersonDetection, sqlx::Error> {
        let query = format!(
            "INSERT INTO person_detections (camera_id, direction, detection_date) \
             VALUES ($1, $2, COALESCE($3, now())) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PersonDetection>(&query)
            .bind(input.camera_id)
            .bind(input.direction)
            .bind(input.detection_date)
            .fetch_one(pool)
            .await
    }

    /// Find a person detection by its ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<PersonDetection>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM person_detections WHERE id = $1");
        sqlx::query_as::<_, PersonDetection>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a window of person detections ordered by ID.
    pub async fn list(pool: &PgPool, window: Window) -> Result<Vec<PersonDetection>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM person_detections ORDER BY id LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, PersonDetection>(&query)
            .bind(window.count)
            .bind(window.offset)
            .fetch_all(pool)
            .await
    }

    /// List a window of one camera's person detections ordered by ID.
    pub async fn list_by_camera(
        pool: &PgPool,
        camera_id: DbId,
        window: Window,
    ) -> Result<Vec<PersonDetection>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM person_detections \
             WHERE camera_id = $1 \
             ORDER BY id LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, PersonDetection>(&query)
            .bind(camera_id)
            .bind(window.count)
            .bind(window.offset)
            .fetch_all(pool)
            .await
    }

    /// Count one camera's person detections per UTC day over the look-back
    /// interval ending now, oldest day first.
    pub async fn daily_counts(
        pool: &PgPool,
        camera_id: DbId,
        look_back: LookBack,
    ) -> Result<Vec<DailyCount>, sqlx::Error> {
        sqlx::query_as::<_, DailyCount>(
            "SELECT (detection_date AT TIME ZONE 'UTC')::date AS day, COUNT(*) AS count \
             FROM person_detections \
             WHERE camera_id = $1 \
               AND detection_date >= now() - make_interval(months => $2, days => $3) \
             GROUP BY day \
             ORDER BY day",
        )
        .bind(camera_id)
        .bind(look_back.months)
        .bind(look_back.days)
        .fetch_all(pool)
        .await
    }

    /// Overwrite every mutable column with the values in `detection`.
    pub async fn update(
        pool: &PgPool,
        detection: &PersonDetection,
    ) -> Result<PersonDetection, sqlx::Error> {
        let query = format!(
            "UPDATE person_detections SET \
                 camera_id = $2, \
                 direction = $3, \
                 detection_date = $4 \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PersonDetection>(&query)
            .bind(detection.id)
            .bind(detection.camera_id)
            .bind(detection.direction)
            .bind(detection.detection_date)
            .fetch_one(pool)
            .await
    }

    /// Delete a person detection by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM person_detections WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
