//! # Column Configuration
//!
//! Tracking datasets from different seasons label their identifier columns
//! differently. `ColumnConfig` maps the five logical roles the engine needs
//! (game, play, frame, player id, player side) onto the concrete labels of a
//! particular CSV. Defaults follow the NFL Big Data Bowl 2026 dataset.

use crate::error::{Result, TrackingError};

/// Default label for the game identifier column.
pub const DEFAULT_GAME_COL: &str = "game_id";
/// Default label for the play identifier column.
pub const DEFAULT_PLAY_COL: &str = "play_id";
/// Default label for the frame identifier column.
pub const DEFAULT_FRAME_COL: &str = "frame_id";
/// Default label for the player identifier column.
pub const DEFAULT_PLAYER_ID_COL: &str = "nfl_id";
/// Default label for the side-of-ball column.
pub const DEFAULT_PLAYER_SIDE_COL: &str = "player_side";

/// Immutable mapping from logical column roles to dataset column labels.
///
/// Validation runs once at construction: labels must be non-empty and
/// pairwise distinct. A constructed config is immutable.
///
/// # Examples
/// ```
/// use tracks_core::config::ColumnConfig;
///
/// let config = ColumnConfig::default();
/// assert_eq!(config.game_col(), "game_id");
///
/// let custom = ColumnConfig::new("gameId", "playId", "frameId", "nflId", "club").unwrap();
/// assert_eq!(custom.player_side_col(), "club");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnConfig {
    game_col: String,
    play_col: String,
    frame_col: String,
    player_id_col: String,
    player_side_col: String,
}

impl ColumnConfig {
    /// Build a configuration from explicit column labels.
    ///
    /// Returns [`TrackingError::InvalidConfig`] when a label is empty (after
    /// trimming) or when two roles map to the same label.
    pub fn new(
        game_col: &str,
        play_col: &str,
        frame_col: &str,
        player_id_col: &str,
        player_side_col: &str,
    ) -> Result<Self> {
        let config = Self {
            game_col: game_col.trim().to_string(),
            play_col: play_col.trim().to_string(),
            frame_col: frame_col.trim().to_string(),
            player_id_col: player_id_col.trim().to_string(),
            player_side_col: player_side_col.trim().to_string(),
        };
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        let labeled = [
            ("game", &self.game_col),
            ("play", &self.play_col),
            ("frame", &self.frame_col),
            ("player id", &self.player_id_col),
            ("player side", &self.player_side_col),
        ];

        for (role, label) in &labeled {
            if label.is_empty() {
                return Err(TrackingError::InvalidConfig {
                    reason: format!("{} column label is empty", role),
                });
            }
        }

        for i in 0..labeled.len() {
            for j in (i + 1)..labeled.len() {
                if labeled[i].1 == labeled[j].1 {
                    return Err(TrackingError::InvalidConfig {
                        reason: format!(
                            "{} and {} columns share the label '{}'",
                            labeled[i].0, labeled[j].0, labeled[i].1
                        ),
                    });
                }
            }
        }

        Ok(())
    }

    /// Label of the game identifier column.
    pub fn game_col(&self) -> &str {
        &self.game_col
    }

    /// Label of the play identifier column.
    pub fn play_col(&self) -> &str {
        &self.play_col
    }

    /// Label of the frame identifier column.
    pub fn frame_col(&self) -> &str {
        &self.frame_col
    }

    /// Label of the player identifier column.
    pub fn player_id_col(&self) -> &str {
        &self.player_id_col
    }

    /// Label of the side-of-ball column.
    pub fn player_side_col(&self) -> &str {
        &self.player_side_col
    }
}

impl Default for ColumnConfig {
    fn default() -> Self {
        Self {
            game_col: DEFAULT_GAME_COL.to_string(),
            play_col: DEFAULT_PLAY_COL.to_string(),
            frame_col: DEFAULT_FRAME_COL.to_string(),
            player_id_col: DEFAULT_PLAYER_ID_COL.to_string(),
            player_side_col: DEFAULT_PLAYER_SIDE_COL.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_big_data_bowl_labels() {
        let config = ColumnConfig::default();
        assert_eq!(config.game_col(), "game_id");
        assert_eq!(config.play_col(), "play_id");
        assert_eq!(config.frame_col(), "frame_id");
        assert_eq!(config.player_id_col(), "nfl_id");
        assert_eq!(config.player_side_col(), "player_side");
    }

    #[test]
    fn rejects_empty_label() {
        let err = ColumnConfig::new("game_id", "  ", "frame_id", "nfl_id", "player_side")
            .unwrap_err();
        assert!(matches!(err, TrackingError::InvalidConfig { .. }));
    }

    #[test]
    fn rejects_duplicate_labels() {
        let err = ColumnConfig::new("id", "id", "frame_id", "nfl_id", "player_side")
            .unwrap_err();
        match err {
            TrackingError::InvalidConfig { reason } => {
                assert!(reason.contains("share the label 'id'"), "got: {}", reason)
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn trims_labels_before_validation() {
        let config =
            ColumnConfig::new(" gameId ", "playId", "frameId", "nflId", "club").unwrap();
        assert_eq!(config.game_col(), "gameId");
    }
}
