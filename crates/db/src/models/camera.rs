//! Cameras and their mounting orientation.

use camsvc_core::impl_apply_patch;
use camsvc_core::patch::nullable;
use camsvc_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// How a camera is mounted. Stored as the `camera_orientation` enum type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "camera_orientation", rename_all = "snake_case")]
pub enum Orientation {
    Vertical,
    #[default]
    Horizontal,
    InvertedVertical,
    InvertedHorizontal,
}

/// A row from the `cameras` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Camera {
    pub id: DbId,
    pub name: String,
    /// Opaque device URI (RTSP URL, device path, ...).
    pub connection_string: String,
    /// Free-form placement label.
    pub location_text: String,
    pub location_id: Option<DbId>,
    pub orientation: Orientation,
}

/// DTO for creating a new camera.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCamera {
    pub name: String,
    pub connection_string: String,
    #[serde(default)]
    pub location_text: String,
    #[serde(default)]
    pub location_id: Option<DbId>,
    #[serde(default)]
    pub orientation: Orientation,
}

/// DTO for partially updating a camera.
///
/// `location_id: null` detaches the camera from its location.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateCamera {
    pub name: Option<String>,
    pub connection_string: Option<String>,
    pub location_text: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub location_id: Option<Option<DbId>>,
    pub orientation: Option<Orientation>,
}

impl_apply_patch!(UpdateCamera => Camera {
    name,
    connection_string,
    location_text,
    location_id,
    orientation,
});
