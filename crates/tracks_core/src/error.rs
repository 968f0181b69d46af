use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrackingError {
    #[error("invalid column configuration: {reason}")]
    InvalidConfig { reason: String },

    #[error("column '{column}' not found in tracking data header")]
    MissingColumn { column: String },

    #[error("malformed numeric value '{value}' in column '{column}' at line {line}")]
    MalformedNumeric {
        column: String,
        line: u64,
        value: String,
    },

    #[error("non-finite {field} value at frame {frame_id} (player {nfl_id:?})")]
    NonFinite {
        field: &'static str,
        frame_id: u32,
        nfl_id: Option<u32>,
    },

    #[error("no tracking rows for game {game_id}, play {play_id}")]
    EmptyPlay { game_id: u64, play_id: u64 },

    #[error(
        "row from game {game_id}, play {play_id} handed to play {expected_game_id}/{expected_play_id}"
    )]
    PlayMismatch {
        expected_game_id: u64,
        expected_play_id: u64,
        game_id: u64,
        play_id: u64,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, TrackingError>;
