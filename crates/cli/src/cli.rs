//! Command-line surface.

use clap::{Args, Parser, Subcommand};
use weldtrack_core::checkpoint::CheckpointStatus;
use weldtrack_core::gun::GunStatus;

#[derive(Debug, Parser)]
#[command(name = "weldtrack", version, about = "Welding gun maintenance tracker")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fleet figures, gun list, and recent activity.
    Overview,
    /// List guns, optionally filtered.
    Guns {
        /// Case-insensitive match on name, model, serial number, or location.
        #[arg(long)]
        search: Option<String>,
        /// Only guns with this status (active, maintenance, inactive).
        #[arg(long, value_parser = parse_gun_status)]
        status: Option<GunStatus>,
    },
    /// Detail view of one gun with its full history.
    Gun { gun_id: String },
    /// The maintenance checklist.
    Checkpoints,
    /// Record a maintenance visit.
    LogMaintenance(MaintenanceArgs),
    /// Record a daily spot count.
    LogSpots(SpotArgs),
    /// Record a part replacement.
    LogPart(PartArgs),
}

#[derive(Debug, Args)]
pub struct MaintenanceArgs {
    #[arg(long = "gun")]
    pub gun_id: String,
    /// Visit date (YYYY-MM-DD); defaults to today.
    #[arg(long)]
    pub date: Option<String>,
    /// Technician name.
    #[arg(long = "by")]
    pub performed_by: String,
    /// General visit notes.
    #[arg(long)]
    pub notes: Option<String>,
    /// Checkpoint status as `ID=STATUS`, e.g. `cp-1=NG`. Repeatable.
    #[arg(long = "status", value_parser = parse_status_pair)]
    pub statuses: Vec<(String, CheckpointStatus)>,
    /// Checkpoint note as `ID=TEXT`. Repeatable.
    #[arg(long = "note", value_parser = parse_note_pair)]
    pub notes_by_checkpoint: Vec<(String, String)>,
}

#[derive(Debug, Args)]
pub struct SpotArgs {
    #[arg(long = "gun")]
    pub gun_id: String,
    /// Day of the count (YYYY-MM-DD); defaults to today.
    #[arg(long)]
    pub date: Option<String>,
    #[arg(long = "job")]
    pub job_name: String,
    #[arg(long, allow_hyphen_values = true)]
    pub count: i64,
    #[arg(long)]
    pub operator: String,
}

#[derive(Debug, Args)]
pub struct PartArgs {
    #[arg(long = "gun")]
    pub gun_id: String,
    #[arg(long = "name")]
    pub part_name: String,
    #[arg(long = "number")]
    pub part_number: String,
    /// Replacement date (YYYY-MM-DD); defaults to today.
    #[arg(long)]
    pub date: Option<String>,
    /// Spots the removed part reached.
    #[arg(long = "lifetime", allow_hyphen_values = true)]
    pub previous_lifetime: i64,
    #[arg(long = "by")]
    pub performed_by: String,
    #[arg(long)]
    pub notes: Option<String>,
}

fn split_pair(raw: &str) -> Result<(&str, &str), String> {
    raw.split_once('=')
        .map(|(k, v)| (k.trim(), v))
        .filter(|(k, _)| !k.is_empty())
        .ok_or_else(|| format!("expected ID=VALUE, got '{raw}'"))
}

fn parse_status_pair(raw: &str) -> Result<(String, CheckpointStatus), String> {
    let (id, status) = split_pair(raw)?;
    let status = CheckpointStatus::from_str(status.trim().to_ascii_uppercase().as_str())
        .map_err(|e| e.to_string())?;
    Ok((id.to_string(), status))
}

fn parse_note_pair(raw: &str) -> Result<(String, String), String> {
    let (id, note) = split_pair(raw)?;
    Ok((id.to_string(), note.to_string()))
}

fn parse_gun_status(raw: &str) -> Result<GunStatus, String> {
    GunStatus::from_str(raw).map_err(|e| e.to_string())
}
