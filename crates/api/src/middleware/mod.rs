//! Request extractors that run before handlers.
//!
//! - [`resource`]: loads the row named by the `{id}` path segment

pub mod resource;
