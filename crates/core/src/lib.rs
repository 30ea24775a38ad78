//! Domain building blocks shared by the storage and HTTP layers.
//!
//! Nothing in this crate touches the database or the network; it holds the
//! identifier types, the domain error, the constraint-violation translator,
//! the partial-update helper and the offset/count window parser.

pub mod constraint;
pub mod error;
pub mod patch;
pub mod types;
pub mod window;
