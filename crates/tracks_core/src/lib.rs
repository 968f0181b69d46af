//! # tracks_core - NFL Player-Tracking Play Metrics
//!
//! This library computes quantitative play-level metrics from NFL
//! player-tracking data: nearest-defender separation, per-player speed
//! statistics, and total distance traveled.
//!
//! ## Features
//! - Deterministic results (same rows = same tables, no internal state)
//! - Typed CSV ingestion with configurable identifier columns
//! - Fail-fast errors for missing columns and malformed numerics
//!
//! ## Usage
//! ```no_run
//! use tracks_core::{ColumnConfig, Play};
//!
//! fn main() -> tracks_core::Result<()> {
//!     let config = ColumnConfig::default();
//!     let rows = tracks_core::read_tracking_csv("tracking_week_1.csv", &config)?;
//!
//!     let play = Play::from_rows(&rows, 2022091200, 64)?;
//!     let separation = play.separation()?;
//!     let speed = play.speed_stats()?;
//!     let distance = play.distance_traveled()?;
//!
//!     println!(
//!         "{} separation records, {} players",
//!         separation.len(),
//!         speed.len().max(distance.len())
//!     );
//!     Ok(())
//! }
//! ```

pub mod analysis;
pub mod config;
pub mod data;
pub mod error;
pub mod models;

// Re-export the metrics engine surface
pub use analysis::metrics::{calculate_separation, play_speed_stats, total_distance_traveled};
pub use config::ColumnConfig;
pub use data::loader::{parse_tracking, read_tracking_csv};
pub use data::play::Play;
pub use error::{Result, TrackingError};
pub use models::{PlayerDistance, PlayerSpeedStats, SeparationRecord, Side, TrackingRow};
