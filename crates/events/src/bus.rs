//! In-process event bus backed by a `tokio::sync::broadcast` channel.
//!
//! [`EventBus`] fans out a [`RecordEvent`] for every record appended to the
//! store. The shell owns one bus and hands out receivers through
//! [`EventBus::subscribe`].

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;
use weldtrack_core::gun::WeldingGun;
use weldtrack_core::ids::RecordKind;
use weldtrack_core::maintenance::MaintenanceRecord;
use weldtrack_core::part_replacement::PartReplacement;
use weldtrack_core::spot_count::SpotCountRecord;
use weldtrack_core::types::Timestamp;

// ---------------------------------------------------------------------------
// RecordEvent
// ---------------------------------------------------------------------------

/// A record was appended to a gun's history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordEvent {
    pub kind: RecordKind,
    pub gun_id: String,
    pub record_id: String,
    /// Per-gun sequence number assigned by the store.
    pub sequence: u64,
    /// Short confirmation line, e.g. `"Recorded 580 spots for Weld Gun A1"`.
    pub summary: String,
    /// Free-form JSON payload carrying kind-specific data.
    pub payload: serde_json::Value,
    /// When the event was created (UTC).
    pub timestamp: Timestamp,
}

impl RecordEvent {
    fn new(kind: RecordKind, gun_id: &str, record_id: &str, sequence: u64, summary: String) -> Self {
        Self {
            kind,
            gun_id: gun_id.to_string(),
            record_id: record_id.to_string(),
            sequence,
            summary,
            payload: serde_json::Value::Object(Default::default()),
            timestamp: Utc::now(),
        }
    }

    /// Event for a stored maintenance visit.
    pub fn maintenance(gun: &WeldingGun, record: &MaintenanceRecord, sequence: u64) -> Self {
        let summary = record.summary();
        Self::new(
            RecordKind::Maintenance,
            &gun.id,
            &record.id,
            sequence,
            format!("Maintenance log for {} has been saved", gun.name),
        )
        .with_payload(serde_json::json!({
            "date": record.date,
            "performed_by": record.performed_by,
            "ok": summary.ok,
            "ng": summary.ng,
            "nv": summary.nv,
        }))
    }

    /// Event for a stored spot-count entry.
    pub fn spot_count(gun: &WeldingGun, record: &SpotCountRecord, sequence: u64) -> Self {
        Self::new(
            RecordKind::SpotCount,
            &gun.id,
            &record.id,
            sequence,
            format!("Recorded {} spots for {}", record.count, gun.name),
        )
        .with_payload(serde_json::json!({
            "count": record.count,
            "total_spot_count": gun.total_spot_count,
        }))
    }

    /// Event for a stored part replacement.
    pub fn part_replacement(gun: &WeldingGun, record: &PartReplacement, sequence: u64) -> Self {
        Self::new(
            RecordKind::PartReplacement,
            &gun.id,
            &record.id,
            sequence,
            format!("{} replacement for {} has been saved", record.part_name, gun.name),
        )
        .with_payload(serde_json::json!({
            "part_number": record.part_number,
            "previous_lifetime": record.previous_lifetime,
        }))
    }

    /// Set the JSON payload for the event.
    pub fn with_payload(mut self, payload: serde_json::Value) -> Self {
        self.payload = payload;
        self
    }
}

// ---------------------------------------------------------------------------
// EventBus
// ---------------------------------------------------------------------------

/// Default buffer capacity for the broadcast channel.
const DEFAULT_CAPACITY: usize = 256;

/// In-process fan-out event bus.
///
/// # Usage
///
/// ```rust
/// use weldtrack_events::EventBus;
///
/// let bus = EventBus::default();
/// let mut rx = bus.subscribe();
/// assert!(rx.try_recv().is_err());
/// ```
pub struct EventBus {
    sender: broadcast::Sender<RecordEvent>,
}

impl EventBus {
    /// Create a bus with a specific channel capacity.
    ///
    /// When the buffer is full, the oldest un-consumed messages are dropped
    /// and slow receivers will observe a `RecvError::Lagged`.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Publish an event to all current subscribers.
    ///
    /// If there are no active subscribers the event is dropped.
    pub fn publish(&self, event: RecordEvent) {
        tracing::debug!(
            kind = event.kind.as_str(),
            gun_id = %event.gun_id,
            record_id = %event.record_id,
            "Publishing record event",
        );
        // A SendError only means there are zero receivers.
        let _ = self.sender.send(event);
    }

    /// Subscribe to all events published on this bus.
    pub fn subscribe(&self) -> broadcast::Receiver<RecordEvent> {
        self.sender.subscribe()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
