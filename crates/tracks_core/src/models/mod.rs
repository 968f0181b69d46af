//! # Data Model
//!
//! Input tracking rows and the derived metric records.
//!
//! - `tracking` - Per-frame, per-player observations as ingested
//! - `records` - Output rows produced by the metrics engine

pub mod records;
pub mod tracking;

pub use records::{PlayerDistance, PlayerSpeedStats, SeparationRecord};
pub use tracking::{Side, TrackingRow};
