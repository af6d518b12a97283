//! Fleet overview figures and the simple list filters of the dashboard.

use serde::{Deserialize, Serialize};

use crate::gun::{GunStatus, WeldingGun};
use crate::maintenance::MaintenanceRecord;
use crate::part_replacement::PartReplacement;
use crate::spot_count::{total_on, SpotCountRecord};
use crate::types::Day;

/// Number of entries shown in the dashboard's "recent" lists.
pub const DEFAULT_RECENT_LIMIT: usize = 5;

/// Headline figures of the fleet overview.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FleetStats {
    pub total_guns: usize,
    pub active_guns: usize,
    /// Spots welded across the fleet on the reference day.
    pub spots_on_day: u64,
    /// Guns currently pulled for maintenance.
    pub pending_maintenance: usize,
}

/// Compute the overview figures for `day`.
pub fn fleet_stats(guns: &[WeldingGun], spot_counts: &[SpotCountRecord], day: Day) -> FleetStats {
    let count_status = |status: GunStatus| guns.iter().filter(|g| g.status == status).count();
    FleetStats {
        total_guns: guns.len(),
        active_guns: count_status(GunStatus::Active),
        spots_on_day: total_on(spot_counts, day),
        pending_maintenance: count_status(GunStatus::Maintenance),
    }
}

/// Gun list filter. Empty fields match everything.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GunFilter {
    pub search: Option<String>,
    pub status: Option<GunStatus>,
}

/// Apply `filter` to `guns`, keeping registry order.
pub fn filter_guns<'a>(guns: &'a [WeldingGun], filter: &GunFilter) -> Vec<&'a WeldingGun> {
    guns.iter()
        .filter(|g| filter.status.map_or(true, |s| g.status == s))
        .filter(|g| {
            filter
                .search
                .as_deref()
                .map_or(true, |needle| g.matches_search(needle))
        })
        .collect()
}

/// Records that belong to a calendar day.
pub trait Dated {
    fn day(&self) -> Day;
}

impl Dated for MaintenanceRecord {
    fn day(&self) -> Day {
        self.date
    }
}

impl Dated for SpotCountRecord {
    fn day(&self) -> Day {
        self.date
    }
}

impl Dated for PartReplacement {
    fn day(&self) -> Day {
        self.replacement_date
    }
}

/// Up to `limit` records, newest day first. Records on the same day keep
/// their input order.
pub fn most_recent<T: Dated + Clone>(records: &[T], limit: usize) -> Vec<T> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| b.day().cmp(&a.day()));
    sorted.truncate(limit);
    sorted
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::spot_count::build_spot_count;

    fn day(m: u32, d: u32) -> Day {
        NaiveDate::from_ymd_opt(2023, m, d).unwrap()
    }

    fn gun(id: &str, name: &str, location: &str, status: GunStatus) -> WeldingGun {
        WeldingGun {
            id: id.into(),
            name: name.into(),
            model: "ARO XP20".into(),
            serial_number: format!("ARO-{id}"),
            location: location.into(),
            total_spot_count: 0,
            last_maintenance: day(8, 15),
            status,
        }
    }

    fn fleet() -> Vec<WeldingGun> {
        vec![
            gun("gun-001", "Weld Gun A1", "Assembly Line 1", GunStatus::Active),
            gun("gun-002", "Weld Gun B2", "Assembly Line 2", GunStatus::Active),
            gun("gun-003", "Weld Gun C3", "Assembly Line 1", GunStatus::Maintenance),
            gun("gun-005", "Weld Gun E5", "Assembly Line 2", GunStatus::Inactive),
        ]
    }

    #[test]
    fn stats_count_statuses_and_spots() {
        let spots = vec![
            build_spot_count("gun-001", day(9, 22), "Door Panel Assembly", 590, "Sarah Lee"),
            build_spot_count("gun-002", day(9, 21), "Roof Panel Welding", 430, "Maria Rodriguez"),
        ];
        let stats = fleet_stats(&fleet(), &spots, day(9, 22));
        assert_eq!(
            stats,
            FleetStats {
                total_guns: 4,
                active_guns: 2,
                spots_on_day: 590,
                pending_maintenance: 1,
            }
        );
    }

    #[test]
    fn empty_filter_keeps_all_in_order() {
        let guns = fleet();
        let ids: Vec<&str> = filter_guns(&guns, &GunFilter::default())
            .iter()
            .map(|g| g.id.as_str())
            .collect();
        assert_eq!(ids, ["gun-001", "gun-002", "gun-003", "gun-005"]);
    }

    #[test]
    fn search_and_status_combine() {
        let guns = fleet();
        let filter = GunFilter {
            search: Some("line 1".into()),
            status: Some(GunStatus::Active),
        };
        let hits = filter_guns(&guns, &filter);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "gun-001");
    }

    #[test]
    fn most_recent_sorts_newest_first_and_truncates() {
        let spots = vec![
            build_spot_count("gun-001", day(9, 20), "a", 1, "x"),
            build_spot_count("gun-001", day(9, 22), "b", 1, "x"),
            build_spot_count("gun-001", day(9, 21), "c", 1, "x"),
            build_spot_count("gun-001", day(9, 22), "d", 1, "x"),
        ];
        let recent = most_recent(&spots, 3);
        let jobs: Vec<&str> = recent.iter().map(|r| r.job_name.as_str()).collect();
        assert_eq!(jobs, ["b", "d", "c"]);
    }
}
