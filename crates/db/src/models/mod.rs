//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) merged onto the loaded
//!   row with [`camsvc_core::patch::ApplyPatch`]

pub mod camera;
pub mod camera_detection;
pub mod location;
pub mod person_detection;
