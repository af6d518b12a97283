//! In-memory record store for the welding-gun fleet.
//!
//! Records are append-only and grouped per gun. Each gun's log assigns a
//! monotonic sequence number to every appended record, giving a total order
//! per gun across all record kinds.

pub mod error;
pub mod repositories;
pub mod seed;
pub mod store;

pub use error::StoreError;
pub use store::{RecordStore, Stored};
