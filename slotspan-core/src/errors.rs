use chrono::NaiveDateTime;
use thiserror::Error;

use crate::utils::TIMESTAMP_FORMAT;

#[derive(Error, Debug)]
pub enum ScheduleError {
    #[error("invalid timestamp {value:?}: expected {}", TIMESTAMP_FORMAT)]
    TimestampParse {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("end time ({end}) must be after start time ({start})")]
    EndNotAfterStart {
        start: NaiveDateTime,
        end: NaiveDateTime,
    },

    #[error("slot count must be between 1 and {max}, got {0}", max = i32::MAX)]
    InvalidSlotCount(u32),
}
