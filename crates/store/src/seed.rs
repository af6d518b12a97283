//! Mock fleet used to seed a fresh store.
//!
//! Seed records are loaded as historical data: gun totals and last
//! maintenance dates already account for them, so loading does not run the
//! repository side effects.

use weldtrack_core::checkpoint::{CheckpointEvaluation, CheckpointStatus};
use weldtrack_core::gun::{GunStatus, WeldingGun};
use weldtrack_core::maintenance::MaintenanceRecord;
use weldtrack_core::part_replacement::PartReplacement;
use weldtrack_core::spot_count::SpotCountRecord;
use weldtrack_core::types::{parse_day, Day};

use crate::error::StoreError;
use crate::repositories::{maintenance_repo, part_replacement_repo, spot_count_repo, GunRepo};
use crate::store::RecordStore;

fn day(raw: &str) -> Day {
    parse_day(raw).expect("seed dates are valid YYYY-MM-DD literals")
}

#[allow(clippy::too_many_arguments)]
fn gun(
    id: &str,
    name: &str,
    model: &str,
    serial_number: &str,
    location: &str,
    total_spot_count: u64,
    last_maintenance: &str,
    status: GunStatus,
) -> WeldingGun {
    WeldingGun {
        id: id.into(),
        name: name.into(),
        model: model.into(),
        serial_number: serial_number.into(),
        location: location.into(),
        total_spot_count,
        last_maintenance: day(last_maintenance),
        status,
    }
}

/// The five guns of the demo fleet.
pub fn mock_guns() -> Vec<WeldingGun> {
    vec![
        gun("gun-001", "Weld Gun A1", "ARO XP20", "ARO-2023-1234", "Assembly Line 1", 24_560, "2023-08-15", GunStatus::Active),
        gun("gun-002", "Weld Gun B2", "OBARA MCG-900", "OB-2022-5678", "Assembly Line 2", 18_750, "2023-09-05", GunStatus::Active),
        gun("gun-003", "Weld Gun C3", "ARO XP25", "ARO-2023-2468", "Assembly Line 1", 32_150, "2023-07-22", GunStatus::Maintenance),
        gun("gun-004", "Weld Gun D4", "OBARA MCG-1200", "OB-2022-9012", "Assembly Line 3", 8_920, "2023-09-18", GunStatus::Active),
        gun("gun-005", "Weld Gun E5", "ARO XP30", "ARO-2022-3690", "Assembly Line 2", 45_780, "2023-06-30", GunStatus::Inactive),
    ]
}

fn spots(id: &str, gun_id: &str, date: &str, job_name: &str, count: u64, operator: &str) -> SpotCountRecord {
    SpotCountRecord {
        id: id.into(),
        gun_id: gun_id.into(),
        date: day(date),
        job_name: job_name.into(),
        count,
        operator: operator.into(),
    }
}

pub fn mock_spot_counts() -> Vec<SpotCountRecord> {
    vec![
        spots("spot-001", "gun-001", "2023-09-20", "Door Panel Assembly", 580, "John Smith"),
        spots("spot-002", "gun-001", "2023-09-21", "Door Panel Assembly", 620, "John Smith"),
        spots("spot-003", "gun-002", "2023-09-20", "Roof Panel Welding", 430, "Maria Rodriguez"),
        spots("spot-004", "gun-004", "2023-09-21", "Side Panel Assembly", 310, "David Johnson"),
        spots("spot-005", "gun-001", "2023-09-22", "Door Panel Assembly", 590, "Sarah Lee"),
    ]
}

/// Five-point checklist used before the catalog gained the controller and
/// arm alignment checks. `issues` lists the non-OK points as
/// `(catalog index, status, note)`.
fn legacy_checklist(issues: &[(usize, CheckpointStatus, &str)]) -> Vec<CheckpointEvaluation> {
    weldtrack_core::checkpoint::list_definitions()
        .iter()
        .take(5)
        .enumerate()
        .map(|(index, def)| {
            let issue = issues.iter().find(|(i, _, _)| *i == index);
            CheckpointEvaluation {
                id: def.id.to_string(),
                name: def.name.to_string(),
                status: issue.map_or(CheckpointStatus::Ok, |(_, status, _)| *status),
                note: issue.map(|(_, _, note)| note.to_string()),
            }
        })
        .collect()
}

pub fn mock_maintenance() -> Vec<MaintenanceRecord> {
    vec![
        MaintenanceRecord {
            id: "maint-001".into(),
            gun_id: "gun-001".into(),
            date: day("2023-08-15"),
            performed_by: "Mike Chen".into(),
            notes: "Regular preventive maintenance".into(),
            checkpoints: legacy_checklist(&[(3, CheckpointStatus::Ng, "Pressure lower than normal")]),
        },
        MaintenanceRecord {
            id: "maint-002".into(),
            gun_id: "gun-002".into(),
            date: day("2023-09-05"),
            performed_by: "Jessica Brown".into(),
            notes: "Scheduled maintenance after 15,000 spot welds".into(),
            checkpoints: legacy_checklist(&[
                (0, CheckpointStatus::Ng, "Electrodes worn, replaced"),
                (4, CheckpointStatus::Nv, "Access panel jammed"),
            ]),
        },
        MaintenanceRecord {
            id: "maint-003".into(),
            gun_id: "gun-003".into(),
            date: day("2023-07-22"),
            performed_by: "Mike Chen".into(),
            notes: "Preventive maintenance before model change".into(),
            checkpoints: legacy_checklist(&[(2, CheckpointStatus::Ng, "Cable insulation damaged, replaced")]),
        },
    ]
}

#[allow(clippy::too_many_arguments)]
fn part(
    id: &str,
    gun_id: &str,
    part_name: &str,
    part_number: &str,
    replacement_date: &str,
    previous_lifetime: u64,
    performed_by: &str,
    notes: &str,
) -> PartReplacement {
    PartReplacement {
        id: id.into(),
        gun_id: gun_id.into(),
        part_name: part_name.into(),
        part_number: part_number.into(),
        replacement_date: day(replacement_date),
        previous_lifetime,
        performed_by: performed_by.into(),
        notes: Some(notes.into()),
    }
}

pub fn mock_part_replacements() -> Vec<PartReplacement> {
    vec![
        part("part-001", "gun-001", "Electrode Caps", "EC-ARO-20", "2023-08-15", 12_000, "Mike Chen", "Replaced due to wear"),
        part("part-002", "gun-002", "Electrode Arms", "EA-OBA-15", "2023-09-05", 15_000, "Jessica Brown", "Scheduled replacement"),
        part("part-003", "gun-003", "Power Cable", "PC-ARO-30", "2023-07-22", 30_000, "Mike Chen", "Insulation damage observed"),
        part("part-004", "gun-001", "Water Cooling Hose", "WCH-A20", "2023-06-10", 22_000, "Jessica Brown", "Preventive replacement"),
    ]
}

/// Build a store holding the full mock fleet and its history.
pub fn mock_store() -> Result<RecordStore, StoreError> {
    let mut store = RecordStore::new();
    for gun in mock_guns() {
        GunRepo::register(&mut store, gun)?;
    }
    for record in mock_spot_counts() {
        let (gun_id, id) = (record.gun_id.clone(), record.id.clone());
        store.push(&gun_id, &id, spot_count_repo::records_mut, record)?;
    }
    for record in mock_maintenance() {
        let (gun_id, id) = (record.gun_id.clone(), record.id.clone());
        store.push(&gun_id, &id, maintenance_repo::records_mut, record)?;
    }
    for record in mock_part_replacements() {
        let (gun_id, id) = (record.gun_id.clone(), record.id.clone());
        store.push(&gun_id, &id, part_replacement_repo::records_mut, record)?;
    }

    tracing::info!(
        guns = store.guns.len(),
        records = store.record_count(),
        "Record store seeded with mock fleet",
    );
    Ok(store)
}
