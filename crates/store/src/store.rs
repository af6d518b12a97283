//! The backing collections shared by all repositories.

use std::collections::{HashMap, HashSet};

use serde::Serialize;
use weldtrack_core::gun::WeldingGun;
use weldtrack_core::maintenance::MaintenanceRecord;
use weldtrack_core::part_replacement::PartReplacement;
use weldtrack_core::spot_count::SpotCountRecord;
use weldtrack_core::types::EntityId;

use crate::error::StoreError;

/// A record together with its position in its gun's log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Stored<T> {
    /// Per-gun sequence number, starting at 1.
    pub sequence: u64,
    pub record: T,
}

/// Append-only history of one gun.
#[derive(Debug, Default)]
pub(crate) struct GunLog {
    last_sequence: u64,
    pub(crate) maintenance: Vec<Stored<MaintenanceRecord>>,
    pub(crate) spot_counts: Vec<Stored<SpotCountRecord>>,
    pub(crate) part_replacements: Vec<Stored<PartReplacement>>,
}

impl GunLog {
    fn next_sequence(&mut self) -> u64 {
        self.last_sequence += 1;
        self.last_sequence
    }
}

/// In-memory store owning every gun and record.
///
/// Single-threaded: appends take `&mut self`, so one submission is fully
/// applied before the next is accepted.
#[derive(Debug, Default)]
pub struct RecordStore {
    pub(crate) guns: Vec<WeldingGun>,
    pub(crate) logs: HashMap<EntityId, GunLog>,
    record_ids: HashSet<String>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn gun_index(&self, gun_id: &str) -> Result<usize, StoreError> {
        self.guns
            .iter()
            .position(|g| g.id == gun_id)
            .ok_or_else(|| StoreError::GunNotFound(gun_id.to_string()))
    }

    pub(crate) fn insert_gun(&mut self, gun: WeldingGun) -> Result<(), StoreError> {
        if self.guns.iter().any(|g| g.id == gun.id) {
            return Err(StoreError::DuplicateGun(gun.id));
        }
        self.logs.insert(gun.id.clone(), GunLog::default());
        self.guns.push(gun);
        Ok(())
    }

    /// Append `record` to the selected collection of `gun_id`'s log.
    ///
    /// Fails without side effects when the gun is unknown or the record id
    /// was stored before.
    pub(crate) fn push<T>(
        &mut self,
        gun_id: &str,
        record_id: &str,
        select: fn(&mut GunLog) -> &mut Vec<Stored<T>>,
        record: T,
    ) -> Result<u64, StoreError> {
        if self.record_ids.contains(record_id) {
            return Err(StoreError::DuplicateId(record_id.to_string()));
        }
        let log = self
            .logs
            .get_mut(gun_id)
            .ok_or_else(|| StoreError::GunNotFound(gun_id.to_string()))?;

        let sequence = log.next_sequence();
        select(log).push(Stored { sequence, record });
        self.record_ids.insert(record_id.to_string());
        Ok(sequence)
    }

    /// Records of one gun, newest append first.
    pub(crate) fn by_gun<T>(
        &self,
        gun_id: &str,
        select: fn(&GunLog) -> &Vec<Stored<T>>,
    ) -> Result<Vec<&Stored<T>>, StoreError> {
        let log = self
            .logs
            .get(gun_id)
            .ok_or_else(|| StoreError::GunNotFound(gun_id.to_string()))?;
        Ok(select(log).iter().rev().collect())
    }

    /// Records of every gun, in registry order then append order.
    pub(crate) fn all<T: Clone>(&self, select: fn(&GunLog) -> &Vec<Stored<T>>) -> Vec<T> {
        self.guns
            .iter()
            .filter_map(|g| self.logs.get(&g.id))
            .flat_map(|log| select(log).iter().map(|s| s.record.clone()))
            .collect()
    }

    /// Total number of records across all guns and kinds.
    pub fn record_count(&self) -> usize {
        self.record_ids.len()
    }
}
