//! Locations: named places cameras are installed at.

use camsvc_core::impl_apply_patch;
use camsvc_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `locations` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Location {
    pub id: DbId,
    pub name: String,
    pub description: String,
}

/// DTO for creating a new location.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateLocation {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// DTO for partially updating a location.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateLocation {
    pub name: Option<String>,
    pub description: Option<String>,
}

impl_apply_patch!(UpdateLocation => Location { name, description });
