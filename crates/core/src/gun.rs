//! Welding gun registry entries and operational status.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::{Day, EntityId};

// ---------------------------------------------------------------------------
// Status
// ---------------------------------------------------------------------------

/// Gun is welding in production.
pub const GUN_STATUS_ACTIVE: &str = "active";
/// Gun is pulled for service.
pub const GUN_STATUS_MAINTENANCE: &str = "maintenance";
/// Gun is out of service.
pub const GUN_STATUS_INACTIVE: &str = "inactive";

/// All valid gun statuses.
pub const VALID_GUN_STATUSES: &[&str] = &[
    GUN_STATUS_ACTIVE,
    GUN_STATUS_MAINTENANCE,
    GUN_STATUS_INACTIVE,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GunStatus {
    Active,
    Maintenance,
    Inactive,
}

impl GunStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => GUN_STATUS_ACTIVE,
            Self::Maintenance => GUN_STATUS_MAINTENANCE,
            Self::Inactive => GUN_STATUS_INACTIVE,
        }
    }

    /// Parse from a string, returning an error for unknown statuses.
    pub fn from_str(s: &str) -> Result<Self, CoreError> {
        match s {
            GUN_STATUS_ACTIVE => Ok(Self::Active),
            GUN_STATUS_MAINTENANCE => Ok(Self::Maintenance),
            GUN_STATUS_INACTIVE => Ok(Self::Inactive),
            other => Err(CoreError::Validation(format!(
                "Unknown gun status: '{other}'. Valid statuses: {}",
                VALID_GUN_STATUSES.join(", ")
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// Gun
// ---------------------------------------------------------------------------

/// A registered welding gun.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeldingGun {
    pub id: EntityId,
    pub name: String,
    pub model: String,
    pub serial_number: String,
    pub location: String,
    pub total_spot_count: u64,
    pub last_maintenance: Day,
    pub status: GunStatus,
}

impl WeldingGun {
    /// Case-insensitive match of `needle` against name, model, serial number,
    /// and location.
    pub fn matches_search(&self, needle: &str) -> bool {
        let needle = needle.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        [&self.name, &self.model, &self.serial_number, &self.location]
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use chrono::NaiveDate;

    use super::*;

    fn gun() -> WeldingGun {
        WeldingGun {
            id: "gun-002".into(),
            name: "Weld Gun B2".into(),
            model: "OBARA MCG-900".into(),
            serial_number: "OB-2022-5678".into(),
            location: "Assembly Line 2".into(),
            total_spot_count: 18_750,
            last_maintenance: NaiveDate::from_ymd_opt(2023, 9, 5).unwrap(),
            status: GunStatus::Active,
        }
    }

    #[test]
    fn status_round_trips_through_strings() {
        for s in VALID_GUN_STATUSES {
            assert_eq!(GunStatus::from_str(s).unwrap().as_str(), *s);
        }
    }

    #[test]
    fn unknown_status_rejected() {
        assert_matches!(GunStatus::from_str("retired"), Err(CoreError::Validation(_)));
    }

    #[test]
    fn search_is_case_insensitive_across_fields() {
        let g = gun();
        assert!(g.matches_search("obara"));
        assert!(g.matches_search("b2"));
        assert!(g.matches_search("ob-2022"));
        assert!(g.matches_search("LINE 2"));
        assert!(!g.matches_search("line 3"));
    }

    #[test]
    fn blank_search_matches_everything() {
        assert!(gun().matches_search(""));
        assert!(gun().matches_search("   "));
    }
}
