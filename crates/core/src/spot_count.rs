//! Daily spot-weld count entries.

use serde::{Deserialize, Serialize};

use crate::ids::{new_record_id, RecordKind};
use crate::types::{Day, EntityId};

/// Spots welded by one gun on one job during one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpotCountRecord {
    pub id: String,
    pub gun_id: EntityId,
    pub date: Day,
    pub job_name: String,
    pub count: u64,
    pub operator: String,
}

/// Build a spot-count record from already validated fields.
pub fn build_spot_count(
    gun_id: &str,
    date: Day,
    job_name: &str,
    count: u64,
    operator: &str,
) -> SpotCountRecord {
    SpotCountRecord {
        id: new_record_id(RecordKind::SpotCount),
        gun_id: gun_id.to_string(),
        date,
        job_name: job_name.to_string(),
        count,
        operator: operator.to_string(),
    }
}

/// Total spots welded on `day` across the given records.
pub fn total_on(records: &[SpotCountRecord], day: Day) -> u64 {
    records
        .iter()
        .filter(|r| r.date == day)
        .map(|r| r.count)
        .sum()
}
