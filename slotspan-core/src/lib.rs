//! Core library for slotspan: the shared time slot model, the fixed timestamp
//! boundary format, and the error taxonomy used by the scheduling crates.

pub mod errors;
pub mod models;
pub mod utils;

// re-export for cleaner imports
pub use self::errors::ScheduleError;
pub use self::models::TimeSlot;
