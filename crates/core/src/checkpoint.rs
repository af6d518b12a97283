//! Maintenance checkpoint catalog, statuses, and note reconciliation.
//!
//! A maintenance visit evaluates every entry of the fixed catalog. The
//! per-checkpoint note is typed through a side channel ([`CheckpointNotes`])
//! that is keyed by checkpoint id and only merged into the evaluation when
//! the visit is finalized, via [`reconcile`].

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

/// A named inspection point evaluated on every maintenance visit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CheckpointDefinition {
    pub id: &'static str,
    pub name: &'static str,
}

/// The fixed inspection catalog, in the order the checklist presents it.
pub const DEFAULT_CHECKPOINTS: &[CheckpointDefinition] = &[
    CheckpointDefinition { id: "cp-1", name: "Electrode Condition" },
    CheckpointDefinition { id: "cp-2", name: "Water Flow" },
    CheckpointDefinition { id: "cp-3", name: "Cable Condition" },
    CheckpointDefinition { id: "cp-4", name: "Pneumatic System" },
    CheckpointDefinition { id: "cp-5", name: "Cooling System" },
    CheckpointDefinition { id: "cp-6", name: "Controller Function" },
    CheckpointDefinition { id: "cp-7", name: "Arm Alignment" },
];

/// Return the ordered checkpoint catalog.
pub fn list_definitions() -> &'static [CheckpointDefinition] {
    DEFAULT_CHECKPOINTS
}

/// Look up a catalog entry by id.
pub fn find_definition(id: &str) -> Option<&'static CheckpointDefinition> {
    DEFAULT_CHECKPOINTS.iter().find(|def| def.id == id)
}

// ---------------------------------------------------------------------------
// Status
// ---------------------------------------------------------------------------

pub const STATUS_OK: &str = "OK";
pub const STATUS_NG: &str = "NG";
pub const STATUS_NV: &str = "NV";

/// All valid checkpoint status codes.
pub const VALID_STATUSES: &[&str] = &[STATUS_OK, STATUS_NG, STATUS_NV];

/// Outcome of inspecting one checkpoint: pass, fail, or not verified.
///
/// Categorical only; there is deliberately no ordering between variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CheckpointStatus {
    #[default]
    Ok,
    Ng,
    Nv,
}

impl CheckpointStatus {
    /// Return the status code shown on the checklist.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ok => STATUS_OK,
            Self::Ng => STATUS_NG,
            Self::Nv => STATUS_NV,
        }
    }

    /// Parse from a status code, returning an error for unknown codes.
    pub fn from_str(s: &str) -> Result<Self, CoreError> {
        match s {
            STATUS_OK => Ok(Self::Ok),
            STATUS_NG => Ok(Self::Ng),
            STATUS_NV => Ok(Self::Nv),
            other => Err(CoreError::Validation(format!(
                "Unknown checkpoint status: '{other}'. Valid statuses: {}",
                VALID_STATUSES.join(", ")
            ))),
        }
    }

    /// Whether a note may accompany this status.
    pub fn accepts_note(&self) -> bool {
        !matches!(self, Self::Ok)
    }
}

impl std::fmt::Display for CheckpointStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Evaluation
// ---------------------------------------------------------------------------

/// Finalized result of one checkpoint on one visit.
///
/// `note` is only ever `Some` when `status` is not [`CheckpointStatus::Ok`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckpointEvaluation {
    pub id: String,
    pub name: String,
    pub status: CheckpointStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Side-channel note text keyed by checkpoint id.
///
/// The note field is edited independently of the status selection, so it may
/// hold text for a checkpoint whose status has since gone back to OK.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CheckpointNotes(HashMap<String, String>);

impl CheckpointNotes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the current text of a checkpoint's note field.
    pub fn set(&mut self, checkpoint_id: impl Into<String>, note: impl Into<String>) {
        self.0.insert(checkpoint_id.into(), note.into());
    }

    /// Raw text for a checkpoint, including empty strings.
    pub fn get(&self, checkpoint_id: &str) -> Option<&str> {
        self.0.get(checkpoint_id).map(String::as_str)
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<HashMap<String, String>> for CheckpointNotes {
    fn from(map: HashMap<String, String>) -> Self {
        Self(map)
    }
}

/// Merge a checkpoint's status with its side-channel note.
///
/// - `OK` never carries a note, whatever the note map holds.
/// - `NG` / `NV` carry the mapped note when it is non-empty; an empty or
///   missing note yields `None`, never `Some("")`.
pub fn reconcile(
    definition: &CheckpointDefinition,
    status: CheckpointStatus,
    notes: &CheckpointNotes,
) -> CheckpointEvaluation {
    let note = if status.accepts_note() {
        notes
            .get(definition.id)
            .filter(|text| !text.is_empty())
            .map(str::to_string)
    } else {
        None
    };

    CheckpointEvaluation {
        id: definition.id.to_string(),
        name: definition.name.to_string(),
        status,
        note,
    }
}

/// Reconcile a whole visit in catalog order.
///
/// Checkpoints without an explicit status keep the checklist default, `OK`.
pub fn reconcile_all(
    catalog: &[CheckpointDefinition],
    statuses: &HashMap<String, CheckpointStatus>,
    notes: &CheckpointNotes,
) -> Vec<CheckpointEvaluation> {
    catalog
        .iter()
        .map(|def| {
            let status = statuses.get(def.id).copied().unwrap_or_default();
            reconcile(def, status, notes)
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Summary
// ---------------------------------------------------------------------------

/// Per-status tally of a visit's checkpoints.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CheckpointSummary {
    pub ok: usize,
    pub ng: usize,
    pub nv: usize,
}

impl CheckpointSummary {
    /// True when any checkpoint failed or could not be verified.
    pub fn needs_attention(&self) -> bool {
        self.ng > 0 || self.nv > 0
    }
}

/// Count evaluations per status.
pub fn summarize(checkpoints: &[CheckpointEvaluation]) -> CheckpointSummary {
    checkpoints
        .iter()
        .fold(CheckpointSummary::default(), |mut acc, cp| {
            match cp.status {
                CheckpointStatus::Ok => acc.ok += 1,
                CheckpointStatus::Ng => acc.ng += 1,
                CheckpointStatus::Nv => acc.nv += 1,
            }
            acc
        })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    const ELECTRODE: CheckpointDefinition = CheckpointDefinition {
        id: "cp-1",
        name: "Electrode Condition",
    };

    fn notes_with(id: &str, text: &str) -> CheckpointNotes {
        let mut notes = CheckpointNotes::new();
        notes.set(id, text);
        notes
    }

    // -- catalog -------------------------------------------------------------

    #[test]
    fn catalog_is_stable_across_calls() {
        assert_eq!(list_definitions(), list_definitions());
        assert_eq!(list_definitions().len(), 7);
        assert_eq!(list_definitions()[0].name, "Electrode Condition");
        assert_eq!(list_definitions()[6].name, "Arm Alignment");
    }

    #[test]
    fn catalog_ids_are_unique() {
        let mut ids: Vec<&str> = list_definitions().iter().map(|d| d.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), list_definitions().len());
    }

    #[test]
    fn find_definition_by_id() {
        assert_eq!(find_definition("cp-2").map(|d| d.name), Some("Water Flow"));
        assert!(find_definition("cp-99").is_none());
    }

    // -- status --------------------------------------------------------------

    #[test]
    fn status_codes_parse() {
        assert_eq!(CheckpointStatus::from_str("OK").unwrap(), CheckpointStatus::Ok);
        assert_eq!(CheckpointStatus::from_str("NG").unwrap(), CheckpointStatus::Ng);
        assert_eq!(CheckpointStatus::from_str("NV").unwrap(), CheckpointStatus::Nv);
    }

    #[test]
    fn unknown_status_code_rejected() {
        assert_matches!(
            CheckpointStatus::from_str("ok"),
            Err(CoreError::Validation(msg)) if msg.contains("Unknown checkpoint status")
        );
    }

    #[test]
    fn status_serializes_as_code() {
        let json = serde_json::to_string(&CheckpointStatus::Nv).unwrap();
        assert_eq!(json, "\"NV\"");
        let parsed: CheckpointStatus = serde_json::from_str("\"NG\"").unwrap();
        assert_eq!(parsed, CheckpointStatus::Ng);
    }

    // -- reconcile -----------------------------------------------------------

    #[test]
    fn ng_keeps_note() {
        let eval = reconcile(&ELECTRODE, CheckpointStatus::Ng, &notes_with("cp-1", "worn pads"));
        assert_eq!(
            eval,
            CheckpointEvaluation {
                id: "cp-1".into(),
                name: "Electrode Condition".into(),
                status: CheckpointStatus::Ng,
                note: Some("worn pads".into()),
            }
        );
    }

    #[test]
    fn ok_discards_stale_note() {
        let eval = reconcile(&ELECTRODE, CheckpointStatus::Ok, &notes_with("cp-1", "worn pads"));
        assert_eq!(eval.status, CheckpointStatus::Ok);
        assert_eq!(eval.note, None);
    }

    #[test]
    fn nv_keeps_note_unchanged() {
        let text = "  Access panel jammed\n";
        let eval = reconcile(&ELECTRODE, CheckpointStatus::Nv, &notes_with("cp-1", text));
        assert_eq!(eval.note.as_deref(), Some(text));
    }

    #[test]
    fn empty_note_is_absent() {
        for status in [CheckpointStatus::Ng, CheckpointStatus::Nv] {
            let eval = reconcile(&ELECTRODE, status, &notes_with("cp-1", ""));
            assert_eq!(eval.note, None, "empty note must not survive for {status}");
        }
    }

    #[test]
    fn missing_note_is_absent() {
        let eval = reconcile(&ELECTRODE, CheckpointStatus::Ng, &CheckpointNotes::new());
        assert_eq!(eval.note, None);
    }

    #[test]
    fn note_for_other_checkpoint_not_used() {
        let eval = reconcile(&ELECTRODE, CheckpointStatus::Ng, &notes_with("cp-2", "low flow"));
        assert_eq!(eval.note, None);
    }

    #[test]
    fn reconcile_all_defaults_to_ok_in_catalog_order() {
        let mut statuses = HashMap::new();
        statuses.insert("cp-4".to_string(), CheckpointStatus::Ng);
        let mut notes = notes_with("cp-4", "Pressure lower than normal");
        notes.set("cp-1", "left over");

        let evals = reconcile_all(list_definitions(), &statuses, &notes);

        assert_eq!(evals.len(), list_definitions().len());
        for (eval, def) in evals.iter().zip(list_definitions()) {
            assert_eq!(eval.id, def.id);
        }
        assert_eq!(evals[0].status, CheckpointStatus::Ok);
        assert_eq!(evals[0].note, None);
        assert_eq!(evals[3].status, CheckpointStatus::Ng);
        assert_eq!(evals[3].note.as_deref(), Some("Pressure lower than normal"));
    }

    #[test]
    fn evaluation_without_note_omits_field() {
        let eval = reconcile(&ELECTRODE, CheckpointStatus::Ok, &CheckpointNotes::new());
        let json = serde_json::to_value(&eval).unwrap();
        assert!(json.get("note").is_none());
        assert_eq!(json["status"], "OK");
    }

    // -- summary -------------------------------------------------------------

    #[test]
    fn summary_counts_statuses() {
        let mut statuses = HashMap::new();
        statuses.insert("cp-1".to_string(), CheckpointStatus::Ng);
        statuses.insert("cp-5".to_string(), CheckpointStatus::Nv);
        let evals = reconcile_all(list_definitions(), &statuses, &CheckpointNotes::new());

        let summary = summarize(&evals);
        assert_eq!(summary, CheckpointSummary { ok: 5, ng: 1, nv: 1 });
        assert!(summary.needs_attention());
    }

    #[test]
    fn all_ok_needs_no_attention() {
        let evals = reconcile_all(list_definitions(), &HashMap::new(), &CheckpointNotes::new());
        assert!(!summarize(&evals).needs_attention());
    }
}
