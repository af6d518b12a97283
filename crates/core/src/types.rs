/// Welding guns and records are keyed by opaque string ids (e.g. `gun-001`).
pub type EntityId = String;

/// Calendar day a record applies to. Serialized as `YYYY-MM-DD`.
pub type Day = chrono::NaiveDate;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Wire format for [`Day`] values entered through the forms.
pub const DAY_FORMAT: &str = "%Y-%m-%d";

/// Parse a form date string into a [`Day`].
pub fn parse_day(raw: &str) -> Result<Day, String> {
    chrono::NaiveDate::parse_from_str(raw.trim(), DAY_FORMAT)
        .map_err(|_| format!("Invalid date '{raw}'. Expected YYYY-MM-DD"))
}
