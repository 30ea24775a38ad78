//! Single-person detection events and their daily aggregates.

use camsvc_core::impl_apply_patch;
use camsvc_core::types::{DbId, Timestamp};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Direction a detected person was moving in. Stored as the
/// `detection_direction` enum type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "detection_direction", rename_all = "snake_case")]
pub enum Direction {
    Left,
    Right,
    #[default]
    None,
}

/// A row from the `person_detections` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct PersonDetection {
    pub id: DbId,
    pub camera_id: DbId,
    pub direction: Direction,
    pub detection_date: Timestamp,
}

/// DTO for recording a person detection.
///
/// `camera_id` is required by the schema; leaving it out is reported by the
/// database as a not-null violation. Nested camera routes fill it in from
/// the path.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreatePersonDetection {
    #[serde(default)]
    pub camera_id: Option<DbId>,
    #[serde(default)]
    pub direction: Direction,
    #[serde(default)]
    pub detection_date: Option<Timestamp>,
}

/// DTO for partially updating a person detection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdatePersonDetection {
    pub camera_id: Option<DbId>,
    pub direction: Option<Direction>,
    pub detection_date: Option<Timestamp>,
}

impl_apply_patch!(UpdatePersonDetection => PersonDetection {
    camera_id,
    direction,
    detection_date,
});

/// Number of person detections seen by one camera on one UTC day.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct DailyCount {
    pub day: NaiveDate,
    pub count: i64,
}
