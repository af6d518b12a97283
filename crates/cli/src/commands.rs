//! Command dispatch: turns parsed arguments into submissions and views.

use serde_json::{json, Value};
use weldtrack_core::checkpoint::{list_definitions, CheckpointNotes};
use weldtrack_core::fleet::GunFilter;
use weldtrack_core::submission::{
    MaintenanceSubmission, PartReplacementSubmission, SpotCountSubmission,
};
use weldtrack_core::types::DAY_FORMAT;

use crate::app::{AppResult, Tracker};
use crate::cli::{Command, MaintenanceArgs, PartArgs, SpotArgs};

/// Run one command against the tracker and return its JSON output.
pub fn run(tracker: &mut Tracker, command: Command) -> AppResult<Value> {
    let output = match command {
        Command::Overview => json!(tracker.overview()),
        Command::Guns { search, status } => json!(tracker.guns(&GunFilter { search, status })),
        Command::Gun { gun_id } => json!(tracker.gun_detail(&gun_id)?),
        Command::Checkpoints => json!(list_definitions()),
        Command::LogMaintenance(args) => {
            let submission = maintenance_submission(tracker, args);
            json!(tracker.log_maintenance(&submission)?)
        }
        Command::LogSpots(args) => {
            let submission = spot_submission(tracker, args);
            json!(tracker.log_spot_count(&submission)?)
        }
        Command::LogPart(args) => {
            let submission = part_submission(tracker, args);
            json!(tracker.log_part_replacement(&submission)?)
        }
    };
    Ok(output)
}

fn today(tracker: &Tracker) -> String {
    tracker.config().today.format(DAY_FORMAT).to_string()
}

pub fn maintenance_submission(tracker: &Tracker, args: MaintenanceArgs) -> MaintenanceSubmission {
    let mut notes = CheckpointNotes::new();
    for (id, text) in args.notes_by_checkpoint {
        notes.set(id, text);
    }
    MaintenanceSubmission {
        gun_id: args.gun_id,
        date: args.date.unwrap_or_else(|| today(tracker)),
        performed_by: args.performed_by,
        general_notes: args.notes,
        statuses: args.statuses.into_iter().collect(),
        notes,
    }
}

pub fn spot_submission(tracker: &Tracker, args: SpotArgs) -> SpotCountSubmission {
    SpotCountSubmission {
        gun_id: args.gun_id,
        date: args.date.unwrap_or_else(|| today(tracker)),
        job_name: args.job_name,
        count: args.count,
        operator: args.operator,
    }
}

pub fn part_submission(tracker: &Tracker, args: PartArgs) -> PartReplacementSubmission {
    PartReplacementSubmission {
        gun_id: args.gun_id,
        part_name: args.part_name,
        part_number: args.part_number,
        replacement_date: args.date.unwrap_or_else(|| today(tracker)),
        previous_lifetime: args.previous_lifetime,
        performed_by: args.performed_by,
        notes: args.notes,
    }
}
