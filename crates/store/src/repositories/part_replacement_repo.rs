//! Repository for part replacement records.

use weldtrack_core::fleet::most_recent;
use weldtrack_core::part_replacement::PartReplacement;

use crate::error::StoreError;
use crate::store::{GunLog, RecordStore, Stored};

pub(crate) fn records_mut(log: &mut GunLog) -> &mut Vec<Stored<PartReplacement>> {
    &mut log.part_replacements
}

fn records(log: &GunLog) -> &Vec<Stored<PartReplacement>> {
    &log.part_replacements
}

/// Provides append and read operations for part replacements.
pub struct PartReplacementRepo;

impl PartReplacementRepo {
    /// Append a replacement to its gun's history.
    pub fn append(store: &mut RecordStore, record: PartReplacement) -> Result<u64, StoreError> {
        let gun_id = record.gun_id.clone();
        let record_id = record.id.clone();
        let part_number = record.part_number.clone();

        let sequence = store.push(&gun_id, &record_id, records_mut, record)?;

        tracing::info!(
            gun_id = %gun_id,
            record_id = %record_id,
            part_number = %part_number,
            sequence,
            "Part replacement appended",
        );
        Ok(sequence)
    }

    /// Replacement history of one gun, newest append first.
    pub fn list_by_gun<'a>(
        store: &'a RecordStore,
        gun_id: &str,
    ) -> Result<Vec<&'a Stored<PartReplacement>>, StoreError> {
        store.by_gun(gun_id, records)
    }

    /// The `limit` most recent replacements across the fleet, newest first.
    pub fn list_recent(store: &RecordStore, limit: usize) -> Vec<PartReplacement> {
        most_recent(&store.all(records), limit)
    }
}
