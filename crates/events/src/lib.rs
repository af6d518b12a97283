//! In-process notifications for appended records.
//!
//! - [`EventBus`]: publish/subscribe hub backed by
//!   `tokio::sync::broadcast`.
//! - [`RecordEvent`]: announcement that a record was stored, carrying the
//!   confirmation text shown to the person who submitted it.

pub mod bus;

pub use bus::{EventBus, RecordEvent};
