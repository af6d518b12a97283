//! Part replacement entries.

use serde::{Deserialize, Serialize};

use crate::ids::{new_record_id, RecordKind};
use crate::types::{Day, EntityId};

/// A part swapped out on a gun, with the spot count the old part reached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartReplacement {
    pub id: String,
    pub gun_id: EntityId,
    pub part_name: String,
    pub part_number: String,
    pub replacement_date: Day,
    /// Service life of the removed part, in spots.
    pub previous_lifetime: u64,
    pub performed_by: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Fields of a part replacement other than its generated id.
#[derive(Debug, Clone)]
pub struct NewPartReplacement<'a> {
    pub gun_id: &'a str,
    pub part_name: &'a str,
    pub part_number: &'a str,
    pub replacement_date: Day,
    pub previous_lifetime: u64,
    pub performed_by: &'a str,
    pub notes: Option<&'a str>,
}

/// Build a part replacement record from already validated fields.
///
/// An empty notes string is stored as `None`.
pub fn build_part_replacement(input: NewPartReplacement<'_>) -> PartReplacement {
    PartReplacement {
        id: new_record_id(RecordKind::PartReplacement),
        gun_id: input.gun_id.to_string(),
        part_name: input.part_name.to_string(),
        part_number: input.part_number.to_string(),
        replacement_date: input.replacement_date,
        previous_lifetime: input.previous_lifetime,
        performed_by: input.performed_by.to_string(),
        notes: input.notes.filter(|n| !n.is_empty()).map(str::to_string),
    }
}
