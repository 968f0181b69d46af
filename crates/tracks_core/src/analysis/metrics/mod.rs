//! # Metrics Module
//!
//! Play-level kinematic metrics computed from tracking rows.
//!
//! - `separation` - Nearest-defender distance per offensive player per frame
//! - `speed` - Maximum and mean speed per player
//! - `distance` - Total path length per player
//!
//! Every operation is a pure function of its input slice: results are freshly
//! allocated, nothing is cached, and identical input produces identical
//! output. Ball rows (no player id) never contribute to per-player metrics.

pub mod distance;
pub mod separation;
pub mod speed;

pub use distance::*;
pub use separation::*;
pub use speed::*;

use rustc_hash::{FxHashMap, FxHashSet};

use crate::error::{Result, TrackingError};
use crate::models::TrackingRow;

/// Guard a coordinate or speed value used in metric arithmetic.
pub(crate) fn ensure_finite(value: f64, field: &'static str, row: &TrackingRow) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(TrackingError::NonFinite {
            field,
            frame_id: row.frame_id,
            nfl_id: row.nfl_id,
        })
    }
}

/// Build the player-id → display-name index used by the summary metrics.
///
/// Keeps the first name seen in input order. A missing name upgrades to a
/// later non-missing one; a later conflicting name is dropped with a single
/// warning per player.
pub(crate) fn display_names(rows: &[TrackingRow]) -> FxHashMap<u32, Option<String>> {
    let mut names: FxHashMap<u32, Option<String>> = FxHashMap::default();
    let mut warned: FxHashSet<u32> = FxHashSet::default();

    for row in rows {
        let Some(nfl_id) = row.nfl_id else { continue };
        let slot = names.entry(nfl_id).or_insert(None);
        let Some(seen) = row.player_name.as_deref() else {
            continue;
        };
        match slot {
            Some(kept) => {
                if kept.as_str() != seen && warned.insert(nfl_id) {
                    log::warn!(
                        "player {} carries conflicting display names ('{}' vs '{}'); keeping the first",
                        nfl_id,
                        kept,
                        seen
                    );
                }
            }
            None => *slot = Some(seen.to_string()),
        }
    }

    names
}
