//! Repository for the welding gun registry.

use weldtrack_core::fleet::{filter_guns, GunFilter};
use weldtrack_core::gun::WeldingGun;

use crate::error::StoreError;
use crate::store::RecordStore;

/// Provides registry operations for welding guns.
pub struct GunRepo;

impl GunRepo {
    /// Register a gun. Ids must be unique.
    pub fn register(store: &mut RecordStore, gun: WeldingGun) -> Result<(), StoreError> {
        let gun_id = gun.id.clone();
        store.insert_gun(gun)?;
        tracing::debug!(gun_id = %gun_id, "Welding gun registered");
        Ok(())
    }

    /// All guns in registration order.
    pub fn list(store: &RecordStore) -> &[WeldingGun] {
        &store.guns
    }

    /// Guns matching `filter`, in registration order.
    pub fn search<'a>(store: &'a RecordStore, filter: &GunFilter) -> Vec<&'a WeldingGun> {
        filter_guns(&store.guns, filter)
    }

    /// Find a gun by its id.
    pub fn find_by_id<'a>(store: &'a RecordStore, gun_id: &str) -> Option<&'a WeldingGun> {
        store.guns.iter().find(|g| g.id == gun_id)
    }
}
