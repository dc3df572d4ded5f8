use chrono::NaiveDateTime;

use crate::validation::ValidationError;

/// Calendar-date format used by the close-approach data (`2020-Jan-01 00:00`).
pub const CD_FORMAT: &str = "%Y-%b-%d %H:%M";

/// Display format for approach times (`2020-01-01 00:00`).
pub const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Parses a close-approach calendar date into a naive (UTC) datetime.
pub fn cd_to_datetime(cd: &str) -> Result<NaiveDateTime, ValidationError> {
    NaiveDateTime::parse_from_str(cd.trim(), CD_FORMAT).map_err(|_| ValidationError::Timestamp {
        value: cd.to_string(),
        format: CD_FORMAT,
    })
}

/// Formats a datetime for display and output, at minute resolution.
pub fn datetime_to_str(dt: &NaiveDateTime) -> String {
    dt.format(DISPLAY_FORMAT).to_string()
}
