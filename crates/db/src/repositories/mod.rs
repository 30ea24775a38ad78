//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Every method issues exactly
//! one SQL statement.

pub mod camera_detection_repo;
pub mod camera_repo;
pub mod location_repo;
pub mod person_detection_repo;

pub use camera_detection_repo::CameraDetectionRepo;
pub use camera_repo::CameraRepo;
pub use location_repo::LocationRepo;
pub use person_detection_repo::PersonDetectionRepo;
