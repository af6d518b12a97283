//! Submission pipeline and read views over the record store.
//!
//! Every submission runs validate → build → append → publish. Nothing is
//! stored when validation fails, and a record is only announced once the
//! store has accepted it.

use serde::Serialize;
use weldtrack_core::checkpoint::{list_definitions, CheckpointSummary};
use weldtrack_core::error::CoreError;
use weldtrack_core::fleet::{fleet_stats, FleetStats, GunFilter};
use weldtrack_core::gun::WeldingGun;
use weldtrack_core::maintenance::MaintenanceRecord;
use weldtrack_core::part_replacement::PartReplacement;
use weldtrack_core::spot_count::SpotCountRecord;
use weldtrack_core::submission::{
    MaintenanceSubmission, PartReplacementSubmission, SpotCountSubmission,
};
use weldtrack_events::{EventBus, RecordEvent};
use weldtrack_store::repositories::{GunRepo, MaintenanceRepo, PartReplacementRepo, SpotCountRepo};
use weldtrack_store::seed::mock_store;
use weldtrack_store::{RecordStore, StoreError};

use crate::config::CliConfig;

/// Application-level error type for the shell.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `weldtrack_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The store refused an append or lookup.
    #[error(transparent)]
    Store(#[from] StoreError),
}

pub type AppResult<T> = Result<T, AppError>;

// ---------------------------------------------------------------------------
// Views
// ---------------------------------------------------------------------------

/// Fleet overview: headline figures, gun list, recent activity.
#[derive(Debug, Serialize)]
pub struct Overview {
    pub stats: FleetStats,
    pub guns: Vec<WeldingGun>,
    pub recent_maintenance: Vec<MaintenanceRecord>,
    pub recent_part_replacements: Vec<PartReplacement>,
}

/// A maintenance visit as shown in a gun's history.
#[derive(Debug, Serialize)]
pub struct MaintenanceEntry {
    pub sequence: u64,
    pub summary: CheckpointSummary,
    pub record: MaintenanceRecord,
}

/// Everything shown on a gun's detail page, newest entries first.
#[derive(Debug, Serialize)]
pub struct GunDetail {
    pub gun: WeldingGun,
    pub spot_counts: Vec<SpotCountRecord>,
    pub maintenance: Vec<MaintenanceEntry>,
    pub part_replacements: Vec<PartReplacement>,
}

// ---------------------------------------------------------------------------
// Tracker
// ---------------------------------------------------------------------------

/// The store, its event bus, and the shell configuration.
pub struct Tracker {
    config: CliConfig,
    store: RecordStore,
    bus: EventBus,
}

impl Tracker {
    /// Build a tracker, seeding the mock fleet when configured to.
    pub fn new(config: CliConfig) -> AppResult<Self> {
        let store = if config.seed {
            mock_store()?
        } else {
            RecordStore::new()
        };
        Ok(Self::with_store(config, store))
    }

    pub fn with_store(config: CliConfig, store: RecordStore) -> Self {
        Self {
            config,
            store,
            bus: EventBus::default(),
        }
    }

    pub fn config(&self) -> &CliConfig {
        &self.config
    }

    pub fn bus(&self) -> &EventBus {
        &self.bus
    }

    fn gun(&self, gun_id: &str) -> AppResult<&WeldingGun> {
        GunRepo::find_by_id(&self.store, gun_id).ok_or_else(|| {
            CoreError::NotFound {
                entity: "welding gun",
                id: gun_id.to_string(),
            }
            .into()
        })
    }

    // -- reads ---------------------------------------------------------------

    pub fn overview(&self) -> Overview {
        let guns = GunRepo::list(&self.store);
        let spot_counts = SpotCountRepo::list_all(&self.store);
        Overview {
            stats: fleet_stats(guns, &spot_counts, self.config.today),
            guns: guns.to_vec(),
            recent_maintenance: MaintenanceRepo::list_recent(&self.store, self.config.recent_limit),
            recent_part_replacements: PartReplacementRepo::list_recent(
                &self.store,
                self.config.recent_limit,
            ),
        }
    }

    pub fn guns(&self, filter: &GunFilter) -> Vec<WeldingGun> {
        GunRepo::search(&self.store, filter).into_iter().cloned().collect()
    }

    pub fn gun_detail(&self, gun_id: &str) -> AppResult<GunDetail> {
        let gun = self.gun(gun_id)?.clone();
        let spot_counts = SpotCountRepo::list_by_gun(&self.store, gun_id)?
            .into_iter()
            .map(|s| s.record.clone())
            .collect();
        let maintenance = MaintenanceRepo::list_by_gun(&self.store, gun_id)?
            .into_iter()
            .map(|s| MaintenanceEntry {
                sequence: s.sequence,
                summary: s.record.summary(),
                record: s.record.clone(),
            })
            .collect();
        let part_replacements = PartReplacementRepo::list_by_gun(&self.store, gun_id)?
            .into_iter()
            .map(|s| s.record.clone())
            .collect();

        Ok(GunDetail {
            gun,
            spot_counts,
            maintenance,
            part_replacements,
        })
    }

    // -- submissions ---------------------------------------------------------

    pub fn log_maintenance(&mut self, submission: &MaintenanceSubmission) -> AppResult<MaintenanceRecord> {
        let record = submission.into_record(list_definitions())?;
        self.gun(&record.gun_id)?;
        let sequence = MaintenanceRepo::append(&mut self.store, record.clone())?;

        let gun = self.gun(&record.gun_id)?;
        self.bus.publish(RecordEvent::maintenance(gun, &record, sequence));
        Ok(record)
    }

    pub fn log_spot_count(&mut self, submission: &SpotCountSubmission) -> AppResult<SpotCountRecord> {
        let record = submission.into_record()?;
        self.gun(&record.gun_id)?;
        let sequence = SpotCountRepo::append(&mut self.store, record.clone())?;

        let gun = self.gun(&record.gun_id)?;
        self.bus.publish(RecordEvent::spot_count(gun, &record, sequence));
        Ok(record)
    }

    pub fn log_part_replacement(
        &mut self,
        submission: &PartReplacementSubmission,
    ) -> AppResult<PartReplacement> {
        let record = submission.into_record()?;
        self.gun(&record.gun_id)?;
        let sequence = PartReplacementRepo::append(&mut self.store, record.clone())?;

        let gun = self.gun(&record.gun_id)?;
        self.bus.publish(RecordEvent::part_replacement(gun, &record, sequence));
        Ok(record)
    }
}
