pub mod camera;
pub mod camera_detection;
pub mod location;
pub mod person_detection;
