//! Repository for maintenance records.

use weldtrack_core::fleet::most_recent;
use weldtrack_core::maintenance::MaintenanceRecord;

use crate::error::StoreError;
use crate::store::{GunLog, RecordStore, Stored};

pub(crate) fn records_mut(log: &mut GunLog) -> &mut Vec<Stored<MaintenanceRecord>> {
    &mut log.maintenance
}

fn records(log: &GunLog) -> &Vec<Stored<MaintenanceRecord>> {
    &log.maintenance
}

/// Provides append and read operations for maintenance records.
pub struct MaintenanceRepo;

impl MaintenanceRepo {
    /// Append a built record to its gun's history, returning the per-gun
    /// sequence number.
    ///
    /// The gun's last maintenance date moves forward to the record date; a
    /// back-dated visit does not move it backwards.
    pub fn append(store: &mut RecordStore, record: MaintenanceRecord) -> Result<u64, StoreError> {
        let gun_index = store.gun_index(&record.gun_id)?;
        let gun_id = record.gun_id.clone();
        let record_id = record.id.clone();
        let date = record.date;

        let sequence = store.push(&gun_id, &record_id, records_mut, record)?;

        let gun = &mut store.guns[gun_index];
        if date > gun.last_maintenance {
            gun.last_maintenance = date;
        }

        tracing::info!(
            gun_id = %gun_id,
            record_id = %record_id,
            sequence,
            date = %date,
            "Maintenance record appended",
        );
        Ok(sequence)
    }

    /// Maintenance history of one gun, newest append first.
    pub fn list_by_gun<'a>(
        store: &'a RecordStore,
        gun_id: &str,
    ) -> Result<Vec<&'a Stored<MaintenanceRecord>>, StoreError> {
        store.by_gun(gun_id, records)
    }

    /// The `limit` most recent visits across the fleet, newest date first.
    pub fn list_recent(store: &RecordStore, limit: usize) -> Vec<MaintenanceRecord> {
        most_recent(&store.all(records), limit)
    }
}
