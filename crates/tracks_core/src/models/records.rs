//! Output records produced by the metrics engine.
//!
//! Every record is freshly constructed on each call and owned by the caller;
//! nothing aliases the input rows. All types serialize cleanly so result
//! tables can be handed to plotting or reporting collaborators as JSON.

use serde::{Deserialize, Serialize};

/// Distance from one offensive player to the nearest defender in one frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeparationRecord {
    pub game_id: u64,
    pub play_id: u64,
    pub frame_id: u32,
    pub nfl_id: u32,
    /// Euclidean distance to the nearest defender, in yards.
    pub separation: f64,
}

/// Speed summary for one player across a play.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerSpeedStats {
    pub nfl_id: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub player_name: Option<String>,
    /// Maximum instantaneous speed, in yards per second.
    pub max_speed: f64,
    /// Mean instantaneous speed, in yards per second.
    pub avg_speed: f64,
}

/// Total path length covered by one player across a play.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerDistance {
    pub nfl_id: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub player_name: Option<String>,
    /// Summed straight-line displacement between consecutive frames, in yards.
    pub total_distance: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn separation_record_serializes_to_flat_json() {
        let record = SeparationRecord {
            game_id: 2022091200,
            play_id: 64,
            frame_id: 12,
            nfl_id: 44930,
            separation: 3.25,
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["game_id"], 2022091200u64);
        assert_eq!(json["separation"], 3.25);
    }

    #[test]
    fn missing_player_name_is_omitted_from_json() {
        let stats = PlayerSpeedStats {
            nfl_id: 1,
            player_name: None,
            max_speed: 6.0,
            avg_speed: 4.0,
        };
        let json = serde_json::to_value(&stats).unwrap();
        assert!(json.get("player_name").is_none());

        let round_trip: PlayerSpeedStats = serde_json::from_value(json).unwrap();
        assert_eq!(round_trip, stats);
    }
}
