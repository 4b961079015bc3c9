// Input table loading.
//
// Reads the four source CSV files (games, game details, teams, rankings)
// into the typed row records of the aggregation core. Column access is by
// header name; unknown columns are ignored.

use courtside_core::model::{BoxScoreRow, GameRow, StandingsRow, TeamRow};
use serde::de::DeserializeOwned;
use std::io::Read;
use std::path::Path;
use tracing::{info, warn};

pub const GAMES_FILE: &str = "games.csv";
pub const GAME_DETAILS_FILE: &str = "games_details.csv";
pub const TEAMS_FILE: &str = "teams.csv";
pub const RANKINGS_FILE: &str = "ranking.csv";

// ---------------------------------------------------------------------------
// Public types
// ---------------------------------------------------------------------------

/// All four source tables, fully loaded.
#[derive(Debug, Clone, Default)]
pub struct InputTables {
    pub games: Vec<GameRow>,
    pub box_scores: Vec<BoxScoreRow>,
    pub teams: Vec<TeamRow>,
    pub standings: Vec<StandingsRow>,
}

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("CSV error in {path}: {source}")]
    Csv { path: String, source: csv::Error },

    #[error("{path} is missing required column `{column}`")]
    MissingColumn { path: String, column: String },
}

// ---------------------------------------------------------------------------
// Reader-based loaders (enable testing without temp files)
// ---------------------------------------------------------------------------

/// Deserialize every row of a CSV stream. The header must contain all of
/// `required`; rows that fail to deserialize are skipped with a warning.
///
/// Records are read as raw bytes, so only the cells mapped onto `T` need to
/// be UTF-8. Short rows are padded with empty cells, which map to absent
/// values.
fn rows_from_reader<T, R>(rdr: R, source: &str, required: &[&str]) -> Result<Vec<T>, LoadError>
where
    T: DeserializeOwned,
    R: Read,
{
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(rdr);
    let headers = reader
        .byte_headers()
        .map_err(|e| LoadError::Csv {
            path: source.to_string(),
            source: e,
        })?
        .clone();
    for column in required {
        if !headers.iter().any(|h| h == column.as_bytes()) {
            return Err(LoadError::MissingColumn {
                path: source.to_string(),
                column: column.to_string(),
            });
        }
    }

    let mut rows = Vec::new();
    let mut skipped = 0usize;
    for result in reader.byte_records() {
        let mut record = match result {
            Ok(record) => record,
            Err(e) => {
                skipped += 1;
                warn!("skipping unreadable row in {}: {}", source, e);
                continue;
            }
        };
        while record.len() < headers.len() {
            record.push_field(b"");
        }
        match record.deserialize::<T>(Some(&headers)) {
            Ok(row) => rows.push(row),
            Err(e) => {
                skipped += 1;
                warn!("skipping malformed row in {}: {}", source, e);
            }
        }
    }
    if skipped > 0 {
        warn!("{}: {} malformed rows skipped", source, skipped);
    }
    Ok(rows)
}

pub fn games_from_reader<R: Read>(rdr: R, source: &str) -> Result<Vec<GameRow>, LoadError> {
    rows_from_reader(rdr, source, &["GAME_ID", "SEASON"])
}

pub fn box_scores_from_reader<R: Read>(rdr: R, source: &str) -> Result<Vec<BoxScoreRow>, LoadError> {
    rows_from_reader(rdr, source, &["GAME_ID", "TEAM_ID"])
}

pub fn teams_from_reader<R: Read>(rdr: R, source: &str) -> Result<Vec<TeamRow>, LoadError> {
    rows_from_reader(rdr, source, &["TEAM_ID"])
}

pub fn standings_from_reader<R: Read>(rdr: R, source: &str) -> Result<Vec<StandingsRow>, LoadError> {
    rows_from_reader(rdr, source, &["TEAM_ID"])
}

// ---------------------------------------------------------------------------
// Public path-based loaders
// ---------------------------------------------------------------------------

fn open(path: &Path) -> Result<std::fs::File, LoadError> {
    std::fs::File::open(path).map_err(|e| LoadError::Io {
        path: path.display().to_string(),
        source: e,
    })
}

pub fn load_games(path: &Path) -> Result<Vec<GameRow>, LoadError> {
    games_from_reader(open(path)?, &path.display().to_string())
}

pub fn load_box_scores(path: &Path) -> Result<Vec<BoxScoreRow>, LoadError> {
    box_scores_from_reader(open(path)?, &path.display().to_string())
}

pub fn load_teams(path: &Path) -> Result<Vec<TeamRow>, LoadError> {
    teams_from_reader(open(path)?, &path.display().to_string())
}

pub fn load_standings(path: &Path) -> Result<Vec<StandingsRow>, LoadError> {
    standings_from_reader(open(path)?, &path.display().to_string())
}

/// Load all four tables from `data_dir`. Any missing file aborts the load.
pub fn load_all(data_dir: &Path) -> Result<InputTables, LoadError> {
    let games = load_games(&data_dir.join(GAMES_FILE))?;
    let box_scores = load_box_scores(&data_dir.join(GAME_DETAILS_FILE))?;
    let teams = load_teams(&data_dir.join(TEAMS_FILE))?;
    let standings = load_standings(&data_dir.join(RANKINGS_FILE))?;

    info!(
        "Loaded {} games, {} box-score rows, {} teams, {} standings snapshots",
        games.len(),
        box_scores.len(),
        teams.len(),
        standings.len()
    );

    Ok(InputTables {
        games,
        box_scores,
        teams,
        standings,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
