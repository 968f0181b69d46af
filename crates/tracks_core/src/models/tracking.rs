use serde::{Deserialize, Serialize};

/// Which unit a tracked player belongs to for the current play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Offense,
    Defense,
}

impl Side {
    /// Parse a dataset side label.
    ///
    /// Only the exact labels `"Offense"` and `"Defense"` map to a side;
    /// everything else (the ball row's empty cell included) is `None`.
    ///
    /// # Examples
    /// ```
    /// use tracks_core::models::Side;
    ///
    /// assert_eq!(Side::from_label("Offense"), Some(Side::Offense));
    /// assert_eq!(Side::from_label(""), None);
    /// ```
    pub fn from_label(label: &str) -> Option<Side> {
        match label.trim() {
            "Offense" => Some(Side::Offense),
            "Defense" => Some(Side::Defense),
            _ => None,
        }
    }

    /// Dataset label for this side.
    pub fn label(&self) -> &'static str {
        match self {
            Side::Offense => "Offense",
            Side::Defense => "Defense",
        }
    }
}

/// One observation of one tracked entity in one frame of one play.
///
/// `(game_id, play_id, frame_id, nfl_id)` is unique within a dataset. Frame
/// ids are strictly increasing in time within a play but are not required to
/// be contiguous.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackingRow {
    pub game_id: u64,
    pub play_id: u64,
    pub frame_id: u32,
    /// `None` for ball rows.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nfl_id: Option<u32>,
    /// `None` when the entity belongs to neither unit (the ball).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub side: Option<Side>,
    /// Field position along the sideline axis, in yards.
    pub x: f64,
    /// Field position along the end-line axis, in yards.
    pub y: f64,
    /// Instantaneous speed, in yards per second.
    pub s: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub player_name: Option<String>,
}

impl TrackingRow {
    /// Whether this row tracks the ball rather than a player.
    pub fn is_ball(&self) -> bool {
        self.nfl_id.is_none()
    }

    /// Field position as an `(x, y)` pair in yards.
    pub fn position(&self) -> (f64, f64) {
        (self.x, self.y)
    }
}
