use anyhow::Context;
use weldtrack_core::fleet::DEFAULT_RECENT_LIMIT;
use weldtrack_core::types::{parse_day, Day};

/// Shell configuration loaded from environment variables.
///
/// All fields have defaults suitable for a local demo session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// Reference day for "today" figures and new form drafts.
    pub today: Day,
    /// Length of the dashboard's recent-activity lists.
    pub recent_limit: usize,
    /// Whether to load the mock fleet into the store at startup.
    pub seed: bool,
}

impl CliConfig {
    /// Load configuration from the process environment.
    ///
    /// | Env Var                  | Default          |
    /// |--------------------------|------------------|
    /// | `WELDTRACK_TODAY`        | current UTC date |
    /// | `WELDTRACK_RECENT_LIMIT` | `5`              |
    /// | `WELDTRACK_SEED`         | `true`           |
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let today = match lookup("WELDTRACK_TODAY") {
            Some(raw) => parse_day(&raw)
                .map_err(anyhow::Error::msg)
                .context("WELDTRACK_TODAY must be a YYYY-MM-DD date")?,
            None => chrono::Utc::now().date_naive(),
        };

        let recent_limit = match lookup("WELDTRACK_RECENT_LIMIT") {
            Some(raw) => raw
                .trim()
                .parse()
                .context("WELDTRACK_RECENT_LIMIT must be a valid usize")?,
            None => DEFAULT_RECENT_LIMIT,
        };

        let seed = match lookup("WELDTRACK_SEED") {
            Some(raw) => parse_flag(&raw).context("WELDTRACK_SEED must be true or false")?,
            None => true,
        };

        Ok(Self {
            today,
            recent_limit,
            seed,
        })
    }
}

fn parse_flag(raw: &str) -> anyhow::Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => anyhow::bail!("unrecognised flag value '{other}'"),
    }
}
