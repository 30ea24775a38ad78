//! Aggregate per-camera detection snapshots (people in/out, running
//! counter, social distancing violations).

use camsvc_core::impl_apply_patch;
use camsvc_core::patch::nullable;
use camsvc_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `camera_detections` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct CameraDetection {
    pub id: DbId,
    pub camera_id: Option<DbId>,
    pub in_direction: i32,
    pub out_direction: i32,
    pub counter: i32,
    pub social_distancing_v: i32,
    pub detection_date: Timestamp,
}

/// DTO for recording a camera detection.
///
/// `detection_date` defaults to the insertion time when omitted.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateCameraDetection {
    #[serde(default)]
    pub camera_id: Option<DbId>,
    #[serde(default)]
    pub in_direction: i32,
    #[serde(default)]
    pub out_direction: i32,
    #[serde(default)]
    pub counter: i32,
    #[serde(default)]
    pub social_distancing_v: i32,
    #[serde(default)]
    pub detection_date: Option<Timestamp>,
}

/// DTO for partially updating a camera detection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateCameraDetection {
    #[serde(default, deserialize_with = "nullable")]
    pub camera_id: Option<Option<DbId>>,
    pub in_direction: Option<i32>,
    pub out_direction: Option<i32>,
    pub counter: Option<i32>,
    pub social_distancing_v: Option<i32>,
    pub detection_date: Option<Timestamp>,
}

impl_apply_patch!(UpdateCameraDetection => CameraDetection {
    camera_id,
    in_direction,
    out_direction,
    counter,
    social_distancing_v,
    detection_date,
});
