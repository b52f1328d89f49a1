use chrono::NaiveDateTime;

use crate::errors::ScheduleError;

/// The one timestamp format accepted and produced at the text boundary:
/// `YYYY-MM-DD HH:MM:SS`, 24-hour, zero-padded, no timezone offset.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Parse a timestamp in the fixed [`TIMESTAMP_FORMAT`].
pub fn parse_timestamp(text: &str) -> Result<NaiveDateTime, ScheduleError> {
    NaiveDateTime::parse_from_str(text, TIMESTAMP_FORMAT).map_err(|source| {
        ScheduleError::TimestampParse {
            value: text.to_string(),
            source,
        }
    })
}

/// Render a timestamp in the fixed [`TIMESTAMP_FORMAT`]. Formatting then
/// re-parsing a second-aligned timestamp yields the same instant back.
pub fn format_timestamp(timestamp: NaiveDateTime) -> String {
    timestamp.format(TIMESTAMP_FORMAT).to_string()
}
