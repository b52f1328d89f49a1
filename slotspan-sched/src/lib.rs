//! Time window splitting and pairwise overlap computation for slotspan.
//!
//! This crate holds the two scheduling algorithms: dividing a time span into a
//! sequence of equal-length, gap-separated slots, and computing the pairwise
//! overlap between two such slot sequences. It is part of the slotspan project,
//! a small utility for finding where two parties' available time windows
//! coincide.
//!
//! All scheduling computation logic should live here. The CLI wraps this
//! functionality but should not reimplement splitting or overlap arithmetic.
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::TimeDelta;
//! use slotspan_core::utils::parse_timestamp;
//! use slotspan_sched::{pairwise_overlap, split_range};
//!
//! // one party is free all morning
//! let free = split_range(
//!     parse_timestamp("2010-01-12 10:00:00").unwrap(),
//!     parse_timestamp("2010-01-12 12:00:00").unwrap(),
//!     1,
//!     TimeDelta::zero(),
//! ).unwrap();
//!
//! // the other has two short slots with a one-minute break between them
//! let busy = split_range(
//!     parse_timestamp("2010-01-12 10:30:00").unwrap(),
//!     parse_timestamp("2010-01-12 10:45:00").unwrap(),
//!     2,
//!     TimeDelta::seconds(60),
//! ).unwrap();
//!
//! let meetings = pairwise_overlap(&free, &busy);
//! assert_eq!(meetings.len(), 2);
//! assert_eq!(meetings[0].to_string(), "2010-01-12 10:30:00\t2010-01-12 10:37:00");
//! ```
//!
//! ## Overlap semantics
//!
//! [`pairwise_overlap`] is a pure geometric intersection primitive: it emits one
//! result per input pair, even when the pair does not actually overlap (the
//! result then has `end < start`, or `end == start` for a boundary touch).
//! Callers that want only genuine meetings apply [`filter_genuine`] as an
//! explicit second step.

/// Window splitting with gap accounting.
///
/// See [`split_range`] for details.
pub mod split;

/// Pairwise overlap of slot sequences.
///
/// See [`pairwise_overlap`] for details.
pub mod overlap;

// re-exports
pub use self::overlap::{filter_genuine, pairwise_overlap};
pub use self::split::split_range;

/// Constants used throughout the crate.
pub mod consts {
    /// The command name for the split operation.
    pub const SPLIT_CMD: &str = "split";
    /// The command name for the overlap operation.
    pub const OVERLAP_CMD: &str = "overlap";

    pub const DEFAULT_SLOT_COUNT: u32 = 1;
    pub const DEFAULT_GAP_SECONDS: i64 = 0;
}
