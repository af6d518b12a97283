//! Record identifier generation.
//!
//! Ids are `<prefix>-<uuid v7>`. UUIDv7 embeds a millisecond timestamp plus a
//! per-process counter and random tail, so two submissions inside the same
//! millisecond still get distinct ids.

use serde::{Deserialize, Serialize};

/// Record kinds that carry generated ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    Maintenance,
    SpotCount,
    PartReplacement,
}

impl RecordKind {
    /// Id prefix used for this kind of record.
    pub fn prefix(&self) -> &'static str {
        match self {
            Self::Maintenance => "maint",
            Self::SpotCount => "spot",
            Self::PartReplacement => "part",
        }
    }

    /// Return the string representation used in logs and events.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Maintenance => "maintenance",
            Self::SpotCount => "spot_count",
            Self::PartReplacement => "part_replacement",
        }
    }
}

/// Generate a fresh record id for the given kind.
pub fn new_record_id(kind: RecordKind) -> String {
    format!("{}-{}", kind.prefix(), uuid::Uuid::now_v7())
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn id_carries_kind_prefix() {
        assert!(new_record_id(RecordKind::Maintenance).starts_with("maint-"));
        assert!(new_record_id(RecordKind::SpotCount).starts_with("spot-"));
        assert!(new_record_id(RecordKind::PartReplacement).starts_with("part-"));
    }

    #[test]
    fn rapid_generation_never_collides() {
        let ids: HashSet<String> = (0..10_000)
            .map(|_| new_record_id(RecordKind::Maintenance))
            .collect();
        assert_eq!(ids.len(), 10_000);
    }
}
