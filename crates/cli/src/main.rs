//! `weldtrack` -- welding gun maintenance tracker.
//!
//! Seeds an in-memory store, runs one command, and prints the result as
//! JSON on stdout. Confirmations for stored records go to the log.
//!
//! # Environment variables
//!
//! | Variable                 | Required | Default | Description                          |
//! |--------------------------|----------|---------|--------------------------------------|
//! | `WELDTRACK_TODAY`        | no       | today   | Reference day, `YYYY-MM-DD`          |
//! | `WELDTRACK_RECENT_LIMIT` | no       | `5`     | Length of recent-activity lists      |
//! | `WELDTRACK_SEED`         | no       | `true`  | Load the mock fleet at startup       |
//! | `RUST_LOG`               | no       | --      | Log filter                           |

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use weldtrack_cli::app::Tracker;
use weldtrack_cli::cli::Cli;
use weldtrack_cli::commands;
use weldtrack_cli::config::CliConfig;

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "weldtrack_cli=info,weldtrack_store=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = CliConfig::from_env()?;

    tracing::debug!(
        today = %config.today,
        recent_limit = config.recent_limit,
        seed = config.seed,
        "Configuration loaded",
    );

    let mut tracker = Tracker::new(config)?;
    let mut events = tracker.bus().subscribe();

    let output = commands::run(&mut tracker, cli.command)?;

    while let Ok(event) = events.try_recv() {
        tracing::info!(
            kind = event.kind.as_str(),
            record_id = %event.record_id,
            sequence = event.sequence,
            "{}",
            event.summary,
        );
    }

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
