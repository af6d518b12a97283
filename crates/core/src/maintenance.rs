//! Maintenance visit drafts and the maintenance record builder.
//!
//! A [`MaintenanceVisit`] is the mutable checklist being filled in. Submitting
//! it reconciles every checkpoint against the side-channel notes and builds an
//! immutable [`MaintenanceRecord`] that owns its own copy of the evaluations.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::checkpoint::{
    reconcile, summarize, CheckpointDefinition, CheckpointEvaluation, CheckpointNotes,
    CheckpointStatus, CheckpointSummary,
};
use crate::error::CoreError;
use crate::ids::{new_record_id, RecordKind};
use crate::types::{Day, EntityId};

// ---------------------------------------------------------------------------
// Record
// ---------------------------------------------------------------------------

/// A completed maintenance visit. Never mutated after it is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaintenanceRecord {
    pub id: String,
    pub gun_id: EntityId,
    pub date: Day,
    pub performed_by: String,
    /// General visit notes; the empty string when none were given.
    pub notes: String,
    pub checkpoints: Vec<CheckpointEvaluation>,
}

impl MaintenanceRecord {
    /// Status tally of this visit's checkpoints.
    pub fn summary(&self) -> CheckpointSummary {
        summarize(&self.checkpoints)
    }
}

/// Build a maintenance record from finalized evaluations.
///
/// Callers guarantee that `date` and `performed_by` are validated and that
/// `evaluations` covers the catalog exactly once, in catalog order (see
/// [`ensure_matches_catalog`]). The evaluations are copied so the record
/// shares nothing with the draft that produced them.
pub fn build_maintenance_record(
    gun_id: &str,
    date: Day,
    performed_by: &str,
    general_notes: Option<&str>,
    evaluations: &[CheckpointEvaluation],
) -> MaintenanceRecord {
    MaintenanceRecord {
        id: new_record_id(RecordKind::Maintenance),
        gun_id: gun_id.to_string(),
        date,
        performed_by: performed_by.to_string(),
        notes: general_notes.unwrap_or_default().to_string(),
        checkpoints: evaluations.to_vec(),
    }
}

/// Verify that `evaluations` covers `catalog` one-to-one, in catalog order.
///
/// A mismatch is reported as [`CoreError::Internal`].
pub fn ensure_matches_catalog(
    evaluations: &[CheckpointEvaluation],
    catalog: &[CheckpointDefinition],
) -> Result<(), CoreError> {
    if evaluations.len() != catalog.len() {
        return Err(CoreError::Internal(format!(
            "Checkpoint count mismatch: got {}, catalog has {}",
            evaluations.len(),
            catalog.len()
        )));
    }

    let mut seen = HashSet::with_capacity(evaluations.len());
    for (index, (eval, def)) in evaluations.iter().zip(catalog).enumerate() {
        if !seen.insert(eval.id.as_str()) {
            return Err(CoreError::Internal(format!(
                "Duplicate checkpoint '{}' at position {index}",
                eval.id
            )));
        }
        if eval.id != def.id {
            return Err(CoreError::Internal(format!(
                "Checkpoint at position {index} is '{}', expected '{}'",
                eval.id, def.id
            )));
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Draft
// ---------------------------------------------------------------------------

/// One checklist row while the visit is being filled in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DraftCheckpoint {
    pub definition: CheckpointDefinition,
    pub status: CheckpointStatus,
}

/// In-progress maintenance visit.
#[derive(Debug, Clone, Serialize)]
pub struct MaintenanceVisit {
    pub date: Day,
    pub performed_by: String,
    pub general_notes: String,
    checkpoints: Vec<DraftCheckpoint>,
    notes: CheckpointNotes,
}

impl MaintenanceVisit {
    /// Start a blank visit: every checkpoint `OK`, no notes, no technician.
    pub fn new(catalog: &[CheckpointDefinition], date: Day) -> Self {
        Self {
            date,
            performed_by: String::new(),
            general_notes: String::new(),
            checkpoints: catalog
                .iter()
                .map(|def| DraftCheckpoint {
                    definition: *def,
                    status: CheckpointStatus::Ok,
                })
                .collect(),
            notes: CheckpointNotes::new(),
        }
    }

    /// Start a blank visit that keeps the technician of the previous one.
    pub fn with_technician(mut self, performed_by: impl Into<String>) -> Self {
        self.performed_by = performed_by.into();
        self
    }

    /// Current checklist rows in catalog order.
    pub fn checkpoints(&self) -> &[DraftCheckpoint] {
        &self.checkpoints
    }

    /// Raw side-channel notes as typed so far.
    pub fn notes(&self) -> &CheckpointNotes {
        &self.notes
    }

    /// Change a checkpoint's status. The note text is left untouched.
    pub fn set_status(&mut self, checkpoint_id: &str, status: CheckpointStatus) -> Result<(), CoreError> {
        let row = self
            .checkpoints
            .iter_mut()
            .find(|row| row.definition.id == checkpoint_id)
            .ok_or_else(|| CoreError::NotFound {
                entity: "checkpoint",
                id: checkpoint_id.to_string(),
            })?;
        row.status = status;
        Ok(())
    }

    /// Record the note field's text for a checkpoint.
    pub fn set_note(&mut self, checkpoint_id: &str, note: impl Into<String>) -> Result<(), CoreError> {
        if !self.checkpoints.iter().any(|row| row.definition.id == checkpoint_id) {
            return Err(CoreError::NotFound {
                entity: "checkpoint",
                id: checkpoint_id.to_string(),
            });
        }
        self.notes.set(checkpoint_id, note);
        Ok(())
    }

    /// Finalize every row against the note map, in catalog order.
    pub fn evaluations(&self) -> Vec<CheckpointEvaluation> {
        self.checkpoints
            .iter()
            .map(|row| reconcile(&row.definition, row.status, &self.notes))
            .collect()
    }

    /// Build the record for this visit. The draft remains usable afterwards.
    pub fn submit(&self, gun_id: &str) -> MaintenanceRecord {
        let notes = (!self.general_notes.is_empty()).then_some(self.general_notes.as_str());
        build_maintenance_record(gun_id, self.date, &self.performed_by, notes, &self.evaluations())
    }

    /// The draft that follows a submission: same date and technician, general
    /// notes and per-checkpoint notes cleared, every status back to `OK`.
    pub fn next_draft(&self) -> Self {
        let catalog: Vec<CheckpointDefinition> =
            self.checkpoints.iter().map(|row| row.definition).collect();
        Self::new(&catalog, self.date).with_technician(self.performed_by.clone())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
