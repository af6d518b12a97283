//! Repository for daily spot-count entries.

use weldtrack_core::spot_count::SpotCountRecord;

use crate::error::StoreError;
use crate::store::{GunLog, RecordStore, Stored};

pub(crate) fn records_mut(log: &mut GunLog) -> &mut Vec<Stored<SpotCountRecord>> {
    &mut log.spot_counts
}

fn records(log: &GunLog) -> &Vec<Stored<SpotCountRecord>> {
    &log.spot_counts
}

/// Provides append and read operations for spot-count entries.
pub struct SpotCountRepo;

impl SpotCountRepo {
    /// Append an entry and add its count to the gun's running total.
    pub fn append(store: &mut RecordStore, record: SpotCountRecord) -> Result<u64, StoreError> {
        let gun_index = store.gun_index(&record.gun_id)?;
        let gun_id = record.gun_id.clone();
        let record_id = record.id.clone();
        let count = record.count;

        let sequence = store.push(&gun_id, &record_id, records_mut, record)?;

        let gun = &mut store.guns[gun_index];
        gun.total_spot_count = gun.total_spot_count.saturating_add(count);

        tracing::info!(
            gun_id = %gun_id,
            record_id = %record_id,
            sequence,
            count,
            total_spot_count = gun.total_spot_count,
            "Spot count appended",
        );
        Ok(sequence)
    }

    /// Spot-count history of one gun, newest append first.
    pub fn list_by_gun<'a>(
        store: &'a RecordStore,
        gun_id: &str,
    ) -> Result<Vec<&'a Stored<SpotCountRecord>>, StoreError> {
        store.by_gun(gun_id, records)
    }

    /// Every entry across the fleet.
    pub fn list_all(store: &RecordStore) -> Vec<SpotCountRecord> {
        store.all(records)
    }
}
