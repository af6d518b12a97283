//! Domain logic for welding-gun maintenance tracking.
//!
//! Pure functions and value types only; no storage, no logging, no I/O.
//! The store and CLI crates build on top of this one.

pub mod checkpoint;
pub mod error;
pub mod fleet;
pub mod gun;
pub mod ids;
pub mod maintenance;
pub mod part_replacement;
pub mod spot_count;
pub mod submission;
pub mod types;
pub mod validation;
