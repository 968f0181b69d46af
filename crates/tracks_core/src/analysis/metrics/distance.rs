//! # Distance Traveled Metric
//!
//! Total path length covered by each player during a play: the sum of
//! straight-line displacements between consecutive frames, ordered by frame
//! id. Summation is a left-to-right fold so results are reproducible across
//! calls.

use std::collections::BTreeMap;

use crate::analysis::metrics::{display_names, ensure_finite};
use crate::error::Result;
use crate::models::{PlayerDistance, TrackingRow};

/// Total path length per player, joined with display name.
///
/// A player observed in N frames contributes N−1 displacement terms; a
/// player observed in a single frame has distance `0.0` (an empty sum, not
/// an error). Rows may arrive in any order; each player's path is sorted by
/// frame id before differencing. Ball rows are excluded, one record per
/// distinct player id, sorted ascending. An empty input produces an empty
/// output.
pub fn total_distance_traveled(rows: &[TrackingRow]) -> Result<Vec<PlayerDistance>> {
    let mut paths: BTreeMap<u32, Vec<(u32, f64, f64)>> = BTreeMap::new();
    for row in rows {
        let Some(nfl_id) = row.nfl_id else { continue };
        ensure_finite(row.x, "x", row)?;
        ensure_finite(row.y, "y", row)?;
        paths.entry(nfl_id).or_default().push((row.frame_id, row.x, row.y));
    }

    let names = display_names(rows);
    let mut records = Vec::with_capacity(paths.len());
    for (nfl_id, mut path) in paths {
        path.sort_by_key(|&(frame_id, _, _)| frame_id);

        let mut total_distance = 0.0;
        for pair in path.windows(2) {
            let (_, x0, y0) = pair[0];
            let (_, x1, y1) = pair[1];
            total_distance += (x1 - x0).hypot(y1 - y0);
        }

        records.push(PlayerDistance {
            nfl_id,
            player_name: names.get(&nfl_id).cloned().flatten(),
            total_distance,
        });
    }

    Ok(records)
}
