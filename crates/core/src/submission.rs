//! Inbound form submissions and their validation.
//!
//! Each submission carries the raw form values. `into_record` validates the
//! fields, then hands the cleaned values to the matching record builder, so
//! builders never see unvalidated input. `next_draft` returns the form state
//! that follows a successful submission.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::checkpoint::{reconcile_all, CheckpointDefinition, CheckpointNotes, CheckpointStatus};
use crate::error::CoreError;
use crate::maintenance::{build_maintenance_record, ensure_matches_catalog, MaintenanceRecord};
use crate::part_replacement::{build_part_replacement, NewPartReplacement, PartReplacement};
use crate::spot_count::{build_spot_count, SpotCountRecord};
use crate::types::{parse_day, Day, DAY_FORMAT};

fn format_day(day: Day) -> String {
    day.format(DAY_FORMAT).to_string()
}

fn to_unsigned(value: i64, message: &str) -> Result<u64, CoreError> {
    u64::try_from(value).map_err(|_| CoreError::Validation(message.to_string()))
}

// ---------------------------------------------------------------------------
// Maintenance
// ---------------------------------------------------------------------------

/// A submitted maintenance checklist.
///
/// `statuses` holds the radio selection per checkpoint id (missing ids stay
/// `OK`); `notes` is the independently edited note text per checkpoint id.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct MaintenanceSubmission {
    #[validate(length(min = 1, message = "Gun is required"))]
    pub gun_id: String,
    #[validate(length(min = 1, message = "Date is required"))]
    pub date: String,
    #[validate(length(min = 1, message = "Technician name is required"))]
    pub performed_by: String,
    #[serde(default)]
    pub general_notes: Option<String>,
    #[serde(default)]
    pub statuses: HashMap<String, CheckpointStatus>,
    #[serde(default)]
    pub notes: CheckpointNotes,
}

impl MaintenanceSubmission {
    /// Empty checklist for a gun, dated `today`.
    pub fn blank(gun_id: impl Into<String>, today: Day) -> Self {
        Self {
            gun_id: gun_id.into(),
            date: format_day(today),
            ..Self::default()
        }
    }

    /// Validate and build the maintenance record.
    pub fn into_record(&self, catalog: &[CheckpointDefinition]) -> Result<MaintenanceRecord, CoreError> {
        self.validate()?;
        let date = parse_day(&self.date).map_err(CoreError::Validation)?;

        let mut unknown: Vec<&str> = self
            .statuses
            .keys()
            .map(String::as_str)
            .filter(|id| !catalog.iter().any(|def| def.id == *id))
            .collect();
        if !unknown.is_empty() {
            unknown.sort_unstable();
            return Err(CoreError::Validation(format!(
                "Unknown checkpoint(s): {}",
                unknown.join(", ")
            )));
        }

        let evaluations = reconcile_all(catalog, &self.statuses, &self.notes);
        ensure_matches_catalog(&evaluations, catalog)?;

        Ok(build_maintenance_record(
            &self.gun_id,
            date,
            &self.performed_by,
            self.general_notes.as_deref(),
            &evaluations,
        ))
    }

    /// Form state after submitting: date and technician carried over.
    pub fn next_draft(&self) -> Self {
        Self {
            gun_id: self.gun_id.clone(),
            date: self.date.clone(),
            performed_by: self.performed_by.clone(),
            ..Self::default()
        }
    }
}

// ---------------------------------------------------------------------------
// Spot count
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct SpotCountSubmission {
    #[validate(length(min = 1, message = "Gun is required"))]
    pub gun_id: String,
    #[validate(length(min = 1, message = "Date is required"))]
    pub date: String,
    #[validate(length(min = 1, message = "Job name is required"))]
    pub job_name: String,
    #[validate(range(min = 1, message = "Spot count must be a positive number"))]
    pub count: i64,
    #[validate(length(min = 1, message = "Operator name is required"))]
    pub operator: String,
}

impl SpotCountSubmission {
    pub fn blank(gun_id: impl Into<String>, today: Day) -> Self {
        Self {
            gun_id: gun_id.into(),
            date: format_day(today),
            ..Self::default()
        }
    }

    /// Validate and build the spot-count record.
    pub fn into_record(&self) -> Result<SpotCountRecord, CoreError> {
        self.validate()?;
        let date = parse_day(&self.date).map_err(CoreError::Validation)?;
        let count = to_unsigned(self.count, "Spot count must be a positive number")?;
        Ok(build_spot_count(&self.gun_id, date, &self.job_name, count, &self.operator))
    }

    /// Form state after submitting: operator carried over, date reset to
    /// `today`.
    pub fn next_draft(&self, today: Day) -> Self {
        Self {
            operator: self.operator.clone(),
            ..Self::blank(self.gun_id.clone(), today)
        }
    }
}

// ---------------------------------------------------------------------------
// Part replacement
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct PartReplacementSubmission {
    #[validate(length(min = 1, message = "Gun is required"))]
    pub gun_id: String,
    #[validate(length(min = 1, message = "Part name is required"))]
    pub part_name: String,
    #[validate(length(min = 1, message = "Part number is required"))]
    pub part_number: String,
    #[validate(length(min = 1, message = "Replacement date is required"))]
    pub replacement_date: String,
    #[validate(range(min = 0, message = "Previous lifetime must be a non-negative number"))]
    pub previous_lifetime: i64,
    #[validate(length(min = 1, message = "Technician name is required"))]
    pub performed_by: String,
    #[serde(default)]
    pub notes: Option<String>,
}

impl PartReplacementSubmission {
    pub fn blank(gun_id: impl Into<String>, today: Day) -> Self {
        Self {
            gun_id: gun_id.into(),
            replacement_date: format_day(today),
            ..Self::default()
        }
    }

    /// Validate and build the part replacement record.
    pub fn into_record(&self) -> Result<PartReplacement, CoreError> {
        self.validate()?;
        let replacement_date = parse_day(&self.replacement_date).map_err(CoreError::Validation)?;
        let previous_lifetime = to_unsigned(
            self.previous_lifetime,
            "Previous lifetime must be a non-negative number",
        )?;
        Ok(build_part_replacement(NewPartReplacement {
            gun_id: &self.gun_id,
            part_name: &self.part_name,
            part_number: &self.part_number,
            replacement_date,
            previous_lifetime,
            performed_by: &self.performed_by,
            notes: self.notes.as_deref(),
        }))
    }

    /// Form state after submitting: replacement date and technician carried
    /// over.
    pub fn next_draft(&self) -> Self {
        Self {
            gun_id: self.gun_id.clone(),
            replacement_date: self.replacement_date.clone(),
            performed_by: self.performed_by.clone(),
            ..Self::default()
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use chrono::NaiveDate;

    use super::*;
    use crate::checkpoint::list_definitions;

    fn day(m: u32, d: u32) -> Day {
        NaiveDate::from_ymd_opt(2023, m, d).unwrap()
    }

    fn maintenance() -> MaintenanceSubmission {
        let mut sub = MaintenanceSubmission::blank("gun-001", day(8, 15));
        sub.performed_by = "Mike Chen".into();
        sub
    }

    // -- maintenance ---------------------------------------------------------

    #[test]
    fn blank_submission_is_dated_today() {
        let sub = MaintenanceSubmission::blank("gun-001", day(9, 22));
        assert_eq!(sub.date, "2023-09-22");
        assert!(sub.statuses.is_empty());
    }

    #[test]
    fn maintenance_requires_technician() {
        let sub = MaintenanceSubmission::blank("gun-001", day(8, 15));
        assert_matches!(
            sub.into_record(list_definitions()),
            Err(CoreError::Validation(msg)) if msg.contains("Technician name is required")
        );
    }

    #[test]
    fn maintenance_requires_date() {
        let mut sub = maintenance();
        sub.date.clear();
        assert_matches!(
            sub.into_record(list_definitions()),
            Err(CoreError::Validation(msg)) if msg.contains("Date is required")
        );
    }

    #[test]
    fn maintenance_rejects_malformed_date() {
        let mut sub = maintenance();
        sub.date = "08/15/2023".into();
        assert_matches!(
            sub.into_record(list_definitions()),
            Err(CoreError::Validation(msg)) if msg.contains("Invalid date")
        );
    }

    #[test]
    fn maintenance_rejects_unknown_checkpoint_status() {
        let mut sub = maintenance();
        sub.statuses.insert("cp-42".into(), CheckpointStatus::Ng);
        assert_matches!(
            sub.into_record(list_definitions()),
            Err(CoreError::Validation(msg)) if msg.contains("cp-42")
        );
    }

    #[test]
    fn maintenance_record_reconciles_notes() {
        let mut sub = maintenance();
        sub.statuses.insert("cp-1".into(), CheckpointStatus::Ng);
        sub.statuses.insert("cp-2".into(), CheckpointStatus::Ok);
        sub.notes.set("cp-1", "worn pads");
        sub.notes.set("cp-2", "stale text");
        sub.notes.set("cp-99", "ignored");

        let record = sub.into_record(list_definitions()).unwrap();

        assert_eq!(record.gun_id, "gun-001");
        assert_eq!(record.notes, "");
        assert_eq!(record.checkpoints.len(), list_definitions().len());
        assert_eq!(record.checkpoints[0].note.as_deref(), Some("worn pads"));
        assert_eq!(record.checkpoints[1].note, None);
    }

    #[test]
    fn maintenance_next_draft_keeps_date_and_technician() {
        let mut sub = maintenance();
        sub.general_notes = Some("Regular preventive maintenance".into());
        sub.statuses.insert("cp-4".into(), CheckpointStatus::Ng);
        sub.notes.set("cp-4", "Pressure lower than normal");

        let next = sub.next_draft();

        assert_eq!(next.gun_id, "gun-001");
        assert_eq!(next.date, "2023-08-15");
        assert_eq!(next.performed_by, "Mike Chen");
        assert_eq!(next.general_notes, None);
        assert!(next.statuses.is_empty());
        assert!(next.notes.is_empty());
    }

    #[test]
    fn maintenance_submission_deserializes_form_payload() {
        let sub: MaintenanceSubmission = serde_json::from_value(serde_json::json!({
            "gun_id": "gun-001",
            "date": "2023-08-15",
            "performed_by": "Mike Chen",
            "statuses": { "cp-1": "NG" },
            "notes": { "cp-1": "worn pads" }
        }))
        .unwrap();

        let record = sub.into_record(list_definitions()).unwrap();
        assert_eq!(record.checkpoints[0].status, CheckpointStatus::Ng);
        assert_eq!(record.checkpoints[0].note.as_deref(), Some("worn pads"));
    }

    // -- spot count ----------------------------------------------------------

    fn spots() -> SpotCountSubmission {
        SpotCountSubmission {
            gun_id: "gun-001".into(),
            date: "2023-09-20".into(),
            job_name: "Door Panel Assembly".into(),
            count: 580,
            operator: "John Smith".into(),
        }
    }

    #[test]
    fn spot_count_builds_record() {
        let record = spots().into_record().unwrap();
        assert_eq!(record.count, 580);
        assert_eq!(record.date, day(9, 20));
    }

    #[test]
    fn spot_count_must_be_positive() {
        for count in [0, -5] {
            let sub = SpotCountSubmission { count, ..spots() };
            assert_matches!(
                sub.into_record(),
                Err(CoreError::Validation(msg)) if msg.contains("positive number")
            );
        }
    }

    #[test]
    fn spot_count_reports_every_missing_field() {
        let sub = SpotCountSubmission::blank("gun-001", day(9, 22));
        let err = sub.into_record().unwrap_err().to_string();
        assert!(err.contains("Job name is required"));
        assert!(err.contains("Operator name is required"));
        assert!(err.contains("Spot count must be a positive number"));
    }

    #[test]
    fn spot_count_next_draft_keeps_operator() {
        let next = spots().next_draft(day(9, 23));
        assert_eq!(next.operator, "John Smith");
        assert_eq!(next.date, "2023-09-23");
        assert_eq!(next.job_name, "");
        assert_eq!(next.count, 0);
    }

    // -- part replacement ----------------------------------------------------

    fn part() -> PartReplacementSubmission {
        PartReplacementSubmission {
            gun_id: "gun-001".into(),
            part_name: "Water Cooling Hose".into(),
            part_number: "WCH-A20".into(),
            replacement_date: "2023-06-10".into(),
            previous_lifetime: 22_000,
            performed_by: "Jessica Brown".into(),
            notes: Some(String::new()),
        }
    }

    #[test]
    fn part_replacement_builds_record() {
        let record = part().into_record().unwrap();
        assert_eq!(record.previous_lifetime, 22_000);
        assert_eq!(record.replacement_date, day(6, 10));
        assert_eq!(record.notes, None);
    }

    #[test]
    fn part_lifetime_may_be_zero_but_not_negative() {
        assert!(PartReplacementSubmission { previous_lifetime: 0, ..part() }
            .into_record()
            .is_ok());
        assert_matches!(
            PartReplacementSubmission { previous_lifetime: -1, ..part() }.into_record(),
            Err(CoreError::Validation(msg)) if msg.contains("non-negative")
        );
    }

    #[test]
    fn part_requires_number() {
        let sub = PartReplacementSubmission { part_number: String::new(), ..part() };
        assert_matches!(
            sub.into_record(),
            Err(CoreError::Validation(msg)) if msg.contains("Part number is required")
        );
    }

    #[test]
    fn part_next_draft_keeps_date_and_technician() {
        let next = part().next_draft();
        assert_eq!(next.replacement_date, "2023-06-10");
        assert_eq!(next.performed_by, "Jessica Brown");
        assert_eq!(next.part_name, "");
        assert_eq!(next.previous_lifetime, 0);
        assert_eq!(next.notes, None);
    }
}
