pub mod slot;

// re-export for cleaner imports
pub use self::slot::TimeSlot;
