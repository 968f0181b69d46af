//! # Separation Metric
//!
//! Distance from each offensive player to their nearest defender, frame by
//! frame. A key measure for evaluating receiver route running and defensive
//! coverage.
//!
//! ## Algorithm
//! 1. Partition rows by `(game_id, play_id, frame_id)`, visited ascending
//! 2. Split each frame into offense and defense by side-of-ball
//! 3. Frames missing either side are skipped, not errored (early and late
//!    frames of a play routinely lack two-sided presence)
//! 4. Per offensive player, take the minimum pairwise Euclidean distance to
//!    the defender set

use std::collections::BTreeMap;

use crate::analysis::metrics::ensure_finite;
use crate::error::Result;
use crate::models::{SeparationRecord, Side, TrackingRow};

/// Nearest-defender separation for every offensive player in every frame.
///
/// Rows may span multiple plays: grouping is by `(game_id, play_id,
/// frame_id)` and every record carries the ids of its own group, so the
/// caller is not required to pre-filter to a single play. Ball rows and rows
/// on neither side are ignored. Frames with an empty offense or defense
/// subset produce no records. An empty input produces an empty output.
///
/// Ties in minimum distance need no special handling: only the distance is
/// recorded, not which defender achieves it.
///
/// # Returns
/// Records ordered by `(game_id, play_id, frame_id)`, then by offensive-row
/// input order within the frame.
pub fn calculate_separation(rows: &[TrackingRow]) -> Result<Vec<SeparationRecord>> {
    let mut frames: BTreeMap<(u64, u64, u32), Vec<&TrackingRow>> = BTreeMap::new();
    for row in rows {
        frames
            .entry((row.game_id, row.play_id, row.frame_id))
            .or_default()
            .push(row);
    }

    let mut records = Vec::new();
    for ((game_id, play_id, frame_id), frame_rows) in frames {
        let offense: Vec<(u32, &TrackingRow)> = frame_rows
            .iter()
            .filter(|row| row.side == Some(Side::Offense))
            .filter_map(|row| row.nfl_id.map(|nfl_id| (nfl_id, *row)))
            .collect();
        let defense: Vec<&TrackingRow> = frame_rows
            .iter()
            .filter(|row| row.side == Some(Side::Defense))
            .copied()
            .collect();

        if offense.is_empty() || defense.is_empty() {
            continue;
        }

        for row in offense.iter().map(|(_, row)| *row).chain(defense.iter().copied()) {
            ensure_finite(row.x, "x", row)?;
            ensure_finite(row.y, "y", row)?;
        }

        for (nfl_id, off) in &offense {
            let mut min_distance = f64::INFINITY;
            for def in &defense {
                let distance = (off.x - def.x).hypot(off.y - def.y);
                if distance < min_distance {
                    min_distance = distance;
                }
            }

            records.push(SeparationRecord {
                game_id,
                play_id,
                frame_id,
                nfl_id: *nfl_id,
                separation: min_distance,
            });
        }
    }

    Ok(records)
}
