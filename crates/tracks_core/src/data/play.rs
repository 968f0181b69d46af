//! # Play Scoping
//!
//! A [`Play`] is a single play's worth of tracking rows, scoped by
//! `(game_id, play_id)`. The metrics engine operates on plain row slices;
//! `Play` is the validated entry point that carves one play out of a larger
//! dataset and exposes the metric operations as methods.

use crate::analysis::metrics::{
    calculate_separation, play_speed_stats, total_distance_traveled,
};
use crate::error::{Result, TrackingError};
use crate::models::{PlayerDistance, PlayerSpeedStats, SeparationRecord, TrackingRow};

/// One play's tracking rows.
#[derive(Debug, Clone)]
pub struct Play {
    game_id: u64,
    play_id: u64,
    rows: Vec<TrackingRow>,
}

impl Play {
    /// Scope a dataset down to one play.
    ///
    /// Filters `rows` to the given `(game_id, play_id)` pair, cloning the
    /// matches. Returns [`TrackingError::EmptyPlay`] when nothing matches.
    pub fn from_rows(rows: &[TrackingRow], game_id: u64, play_id: u64) -> Result<Self> {
        let scoped: Vec<TrackingRow> = rows
            .iter()
            .filter(|row| row.game_id == game_id && row.play_id == play_id)
            .cloned()
            .collect();

        if scoped.is_empty() {
            return Err(TrackingError::EmptyPlay { game_id, play_id });
        }

        Ok(Self {
            game_id,
            play_id,
            rows: scoped,
        })
    }

    /// Wrap rows that are already scoped to one play.
    ///
    /// Verifies the set is non-empty and that every row carries the stated
    /// ids; a stray row from another play is rejected with
    /// [`TrackingError::PlayMismatch`].
    pub fn from_parts(game_id: u64, play_id: u64, rows: Vec<TrackingRow>) -> Result<Self> {
        if rows.is_empty() {
            return Err(TrackingError::EmptyPlay { game_id, play_id });
        }

        if let Some(stray) = rows
            .iter()
            .find(|row| row.game_id != game_id || row.play_id != play_id)
        {
            return Err(TrackingError::PlayMismatch {
                expected_game_id: game_id,
                expected_play_id: play_id,
                game_id: stray.game_id,
                play_id: stray.play_id,
            });
        }

        Ok(Self {
            game_id,
            play_id,
            rows,
        })
    }

    pub fn game_id(&self) -> u64 {
        self.game_id
    }

    pub fn play_id(&self) -> u64 {
        self.play_id
    }

    /// All rows of the play, players and ball alike, in dataset order.
    pub fn rows(&self) -> &[TrackingRow] {
        &self.rows
    }

    /// Player rows (rows carrying a player id).
    pub fn players(&self) -> impl Iterator<Item = &TrackingRow> + '_ {
        self.rows.iter().filter(|row| !row.is_ball())
    }

    /// Ball rows (rows without a player id).
    pub fn ball(&self) -> impl Iterator<Item = &TrackingRow> + '_ {
        self.rows.iter().filter(|row| row.is_ball())
    }

    /// Frame ids present in the play, sorted ascending and deduplicated.
    pub fn frame_ids(&self) -> Vec<u32> {
        let mut ids: Vec<u32> = self.rows.iter().map(|row| row.frame_id).collect();
        ids.sort_unstable();
        ids.dedup();
        ids
    }

    /// Nearest-defender separation for every offensive player in every frame.
    pub fn separation(&self) -> Result<Vec<SeparationRecord>> {
        calculate_separation(&self.rows)
    }

    /// Maximum and mean speed per player.
    pub fn speed_stats(&self) -> Result<Vec<PlayerSpeedStats>> {
        play_speed_stats(&self.rows)
    }

    /// Total path length per player.
    pub fn distance_traveled(&self) -> Result<Vec<PlayerDistance>> {
        total_distance_traveled(&self.rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Side;

    fn row(game_id: u64, play_id: u64, frame_id: u32, nfl_id: Option<u32>) -> TrackingRow {
        TrackingRow {
            game_id,
            play_id,
            frame_id,
            nfl_id,
            side: nfl_id.map(|_| Side::Offense),
            x: 0.0,
            y: 0.0,
            s: 0.0,
            player_name: None,
        }
    }

    #[test]
    fn scopes_to_one_play() {
        let dataset = vec![
            row(1, 10, 1, Some(100)),
            row(1, 10, 1, None),
            row(1, 11, 1, Some(100)),
            row(2, 10, 1, Some(100)),
        ];

        let play = Play::from_rows(&dataset, 1, 10).unwrap();
        assert_eq!(play.rows().len(), 2);
        assert_eq!(play.players().count(), 1);
        assert_eq!(play.ball().count(), 1);
    }

    #[test]
    fn empty_filter_result_is_an_error() {
        let dataset = vec![row(1, 10, 1, Some(100))];
        let err = Play::from_rows(&dataset, 1, 99).unwrap_err();
        assert!(matches!(
            err,
            TrackingError::EmptyPlay {
                game_id: 1,
                play_id: 99
            }
        ));
    }

    #[test]
    fn from_parts_rejects_stray_rows() {
        let rows = vec![row(1, 10, 1, Some(100)), row(1, 11, 1, Some(100))];
        let err = Play::from_parts(1, 10, rows).unwrap_err();
        assert!(matches!(err, TrackingError::PlayMismatch { play_id: 11, .. }));
    }

    #[test]
    fn frame_ids_are_sorted_and_deduplicated() {
        let play = Play::from_parts(
            1,
            10,
            vec![
                row(1, 10, 5, Some(100)),
                row(1, 10, 1, Some(100)),
                row(1, 10, 5, Some(200)),
            ],
        )
        .unwrap();
        assert_eq!(play.frame_ids(), vec![1, 5]);
    }
}
