//! # Tracking CSV Loader
//!
//! Parses a tracking dataset CSV into typed [`TrackingRow`]s.
//!
//! The five identifier columns are resolved through [`ColumnConfig`]; the
//! physical columns (`x`, `y`, `s`, `player_name`) carry fixed labels. All
//! labels are resolved against the header before any row is read, so a
//! misconfigured column surfaces as [`TrackingError::MissingColumn`] with no
//! partial output. Numeric cells that fail to parse, or parse to a
//! non-finite value, fail fast as [`TrackingError::MalformedNumeric`].

use std::io::Read;
use std::path::Path;

use csv::StringRecord;

use crate::config::ColumnConfig;
use crate::error::{Result, TrackingError};
use crate::models::{Side, TrackingRow};

/// Fixed label of the x-position column, in yards.
pub const X_COL: &str = "x";
/// Fixed label of the y-position column, in yards.
pub const Y_COL: &str = "y";
/// Fixed label of the instantaneous speed column, in yards per second.
pub const SPEED_COL: &str = "s";
/// Fixed label of the player display name column.
pub const PLAYER_NAME_COL: &str = "player_name";

/// Header indices for the nine columns the loader consumes.
#[derive(Debug, Clone, Copy)]
struct ColumnIndex {
    game: usize,
    play: usize,
    frame: usize,
    nfl_id: usize,
    side: usize,
    x: usize,
    y: usize,
    s: usize,
    name: usize,
}

impl ColumnIndex {
    fn resolve(headers: &StringRecord, config: &ColumnConfig) -> Result<Self> {
        Ok(Self {
            game: position_of(headers, config.game_col())?,
            play: position_of(headers, config.play_col())?,
            frame: position_of(headers, config.frame_col())?,
            nfl_id: position_of(headers, config.player_id_col())?,
            side: position_of(headers, config.player_side_col())?,
            x: position_of(headers, X_COL)?,
            y: position_of(headers, Y_COL)?,
            s: position_of(headers, SPEED_COL)?,
            name: position_of(headers, PLAYER_NAME_COL)?,
        })
    }
}

fn position_of(headers: &StringRecord, label: &str) -> Result<usize> {
    headers
        .iter()
        .position(|header| header.trim() == label)
        .ok_or_else(|| TrackingError::MissingColumn {
            column: label.to_string(),
        })
}

/// Read a tracking dataset CSV from disk.
pub fn read_tracking_csv<P: AsRef<Path>>(
    path: P,
    config: &ColumnConfig,
) -> Result<Vec<TrackingRow>> {
    let file = std::fs::File::open(path)?;
    parse_tracking(file, config)
}

/// Parse tracking CSV data from any reader.
///
/// Returns `Ok(vec![])` for a CSV that contains a valid header and zero data
/// rows.
pub fn parse_tracking<R: Read>(reader: R, config: &ColumnConfig) -> Result<Vec<TrackingRow>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    let columns = ColumnIndex::resolve(&headers, config)?;

    let mut rows = Vec::new();
    for (index, record) in csv_reader.records().enumerate() {
        let record = record?;
        // Header occupies line 1; fall back to a computed line for readers
        // that do not track positions.
        let line = record
            .position()
            .map(|p| p.line())
            .unwrap_or(index as u64 + 2);
        rows.push(parse_row(&record, &columns, config, line)?);
    }

    log::debug!("loaded {} tracking rows", rows.len());
    Ok(rows)
}

fn parse_row(
    record: &StringRecord,
    columns: &ColumnIndex,
    config: &ColumnConfig,
    line: u64,
) -> Result<TrackingRow> {
    let name_cell = cell(record, columns.name);

    Ok(TrackingRow {
        game_id: parse_integer(record, columns.game, config.game_col(), line)?,
        play_id: parse_integer(record, columns.play, config.play_col(), line)?,
        frame_id: parse_integer::<u32>(record, columns.frame, config.frame_col(), line)?,
        nfl_id: parse_optional_integer(record, columns.nfl_id, config.player_id_col(), line)?,
        side: Side::from_label(cell(record, columns.side)),
        x: parse_float(record, columns.x, X_COL, line)?,
        y: parse_float(record, columns.y, Y_COL, line)?,
        s: parse_float(record, columns.s, SPEED_COL, line)?,
        player_name: if name_cell.is_empty() {
            None
        } else {
            Some(name_cell.to_string())
        },
    })
}

fn cell<'r>(record: &'r StringRecord, index: usize) -> &'r str {
    record.get(index).unwrap_or("")
}

fn parse_integer<T: std::str::FromStr>(
    record: &StringRecord,
    index: usize,
    column: &str,
    line: u64,
) -> Result<T> {
    let raw = cell(record, index);
    raw.parse::<T>().map_err(|_| TrackingError::MalformedNumeric {
        column: column.to_string(),
        line,
        value: raw.to_string(),
    })
}

fn parse_optional_integer(
    record: &StringRecord,
    index: usize,
    column: &str,
    line: u64,
) -> Result<Option<u32>> {
    let raw = cell(record, index);
    if raw.is_empty() {
        return Ok(None);
    }
    parse_integer::<u32>(record, index, column, line).map(Some)
}

fn parse_float(record: &StringRecord, index: usize, column: &str, line: u64) -> Result<f64> {
    let raw = cell(record, index);
    let value = raw
        .parse::<f64>()
        .map_err(|_| TrackingError::MalformedNumeric {
            column: column.to_string(),
            line,
            value: raw.to_string(),
        })?;
    // "NaN" and "inf" parse successfully; the arithmetic downstream is
    // undefined for them, so they are malformed here.
    if !value.is_finite() {
        return Err(TrackingError::MalformedNumeric {
            column: column.to_string(),
            line,
            value: raw.to_string(),
        });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const HEADER: &str = "game_id,play_id,frame_id,nfl_id,player_side,x,y,s,player_name";

    fn parse(csv_text: &str) -> Result<Vec<TrackingRow>> {
        parse_tracking(csv_text.as_bytes(), &ColumnConfig::default())
    }

    #[test]
    fn parses_player_and_ball_rows() {
        let rows = parse(&format!(
            "{HEADER}\n\
             2022091200,64,1,44930,Offense,10.0,20.0,3.5,Justin Jefferson\n\
             2022091200,64,1,,,11.2,21.0,7.1,\n"
        ))
        .unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].nfl_id, Some(44930));
        assert_eq!(rows[0].side, Some(Side::Offense));
        assert_eq!(rows[0].player_name.as_deref(), Some("Justin Jefferson"));
        assert!(rows[1].is_ball());
        assert_eq!(rows[1].side, None);
        assert_eq!(rows[1].player_name, None);
    }

    #[test]
    fn missing_configured_column_fails_before_any_row() {
        let err = parse(
            "game_id,play_id,frame_id,nfl_id,x,y,s,player_name\n\
             2022091200,64,1,44930,10.0,20.0,3.5,Justin Jefferson\n",
        )
        .unwrap_err();

        match err {
            TrackingError::MissingColumn { column } => assert_eq!(column, "player_side"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn custom_config_resolves_renamed_columns() {
        let config = ColumnConfig::new("gameId", "playId", "frameId", "nflId", "club").unwrap();
        let rows = parse_tracking(
            "gameId,playId,frameId,nflId,club,x,y,s,player_name\n\
             1,2,3,4,Defense,1.0,2.0,3.0,A Player\n"
                .as_bytes(),
            &config,
        )
        .unwrap();
        assert_eq!(rows[0].side, Some(Side::Defense));
    }

    #[test]
    fn malformed_float_reports_column_and_line() {
        let err = parse(&format!(
            "{HEADER}\n\
             2022091200,64,1,44930,Offense,10.0,20.0,3.5,A\n\
             2022091200,64,2,44930,Offense,oops,20.0,3.5,A\n"
        ))
        .unwrap_err();

        match err {
            TrackingError::MalformedNumeric {
                column,
                line,
                value,
            } => {
                assert_eq!(column, "x");
                assert_eq!(line, 3);
                assert_eq!(value, "oops");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn nan_speed_is_malformed() {
        let err = parse(&format!(
            "{HEADER}\n\
             2022091200,64,1,44930,Offense,10.0,20.0,NaN,A\n"
        ))
        .unwrap_err();
        assert!(matches!(
            err,
            TrackingError::MalformedNumeric { ref column, .. } if column == "s"
        ));
    }

    #[test]
    fn header_only_input_yields_empty_row_set() {
        let rows = parse(&format!("{HEADER}\n")).unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn reads_from_a_file_on_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "{HEADER}").unwrap();
        writeln!(file, "1,1,1,10,Offense,0.0,0.0,1.0,A Player").unwrap();

        let rows = read_tracking_csv(file.path(), &ColumnConfig::default()).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].nfl_id, Some(10));
    }

    #[test]
    fn missing_file_surfaces_io_error() {
        let err =
            read_tracking_csv("/nonexistent/tracking.csv", &ColumnConfig::default()).unwrap_err();
        assert!(matches!(err, TrackingError::Io(_)));
    }
}
