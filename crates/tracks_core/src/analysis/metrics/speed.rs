//! # Speed Statistics Metric
//!
//! Maximum and mean instantaneous speed per player across a play.

use std::collections::BTreeMap;

use crate::analysis::metrics::{display_names, ensure_finite};
use crate::error::Result;
use crate::models::{PlayerSpeedStats, TrackingRow};

/// Running reduction over one player's speed samples.
#[derive(Debug, Clone, Copy)]
struct SpeedAccumulator {
    max: f64,
    sum: f64,
    count: u32,
}

impl SpeedAccumulator {
    fn new(sample: f64) -> Self {
        Self {
            max: sample,
            sum: sample,
            count: 1,
        }
    }

    fn add(&mut self, sample: f64) {
        if sample > self.max {
            self.max = sample;
        }
        self.sum += sample;
        self.count += 1;
    }

    fn mean(&self) -> f64 {
        self.sum / f64::from(self.count)
    }
}

/// Maximum and mean speed for each player, joined with display name.
///
/// Ball rows carry no player id and are excluded. Exactly one record is
/// emitted per distinct player id, sorted ascending; a player id seen with
/// conflicting display names keeps the first name (a warning is logged).
/// An empty input produces an empty output.
///
/// # Examples
/// ```
/// use tracks_core::analysis::metrics::play_speed_stats;
/// use tracks_core::models::{Side, TrackingRow};
///
/// let rows: Vec<TrackingRow> = [2.0, 4.0, 6.0]
///     .iter()
///     .enumerate()
///     .map(|(frame, &s)| TrackingRow {
///         game_id: 1,
///         play_id: 1,
///         frame_id: frame as u32 + 1,
///         nfl_id: Some(10),
///         side: Some(Side::Offense),
///         x: 0.0,
///         y: 0.0,
///         s,
///         player_name: None,
///     })
///     .collect();
///
/// let stats = play_speed_stats(&rows).unwrap();
/// assert_eq!(stats[0].max_speed, 6.0);
/// assert_eq!(stats[0].avg_speed, 4.0);
/// ```
pub fn play_speed_stats(rows: &[TrackingRow]) -> Result<Vec<PlayerSpeedStats>> {
    let mut samples: BTreeMap<u32, SpeedAccumulator> = BTreeMap::new();
    for row in rows {
        let Some(nfl_id) = row.nfl_id else { continue };
        ensure_finite(row.s, "speed", row)?;
        samples
            .entry(nfl_id)
            .and_modify(|acc| acc.add(row.s))
            .or_insert_with(|| SpeedAccumulator::new(row.s));
    }

    let names = display_names(rows);
    let stats = samples
        .into_iter()
        .map(|(nfl_id, acc)| PlayerSpeedStats {
            nfl_id,
            player_name: names.get(&nfl_id).cloned().flatten(),
            max_speed: acc.max,
            avg_speed: acc.mean(),
        })
        .collect();

    Ok(stats)
}
