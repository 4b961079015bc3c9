// Lookup tables joined onto the team-season aggregates: static team metadata
// keyed by team identifier, and end-of-season standings keyed by
// (season, team identifier).

use std::collections::HashMap;

use chrono::NaiveDate;
use tracing::debug;

use crate::model::{parse_or_zero, season_from_id, trimmed, StandingsRow, TeamRow};

/// Date format of the STANDINGSDATE column.
const STANDINGS_DATE_FORMAT: &str = "%Y-%m-%d";

// ---------------------------------------------------------------------------
// Team metadata
// ---------------------------------------------------------------------------

/// Display fields for a franchise. Missing source cells are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeamMetadata {
    pub nickname: String,
    pub city: String,
    pub abbreviation: String,
}

/// Team identifier -> metadata.
#[derive(Debug, Clone, Default)]
pub struct TeamMetadataIndex {
    teams: HashMap<String, TeamMetadata>,
}

impl TeamMetadataIndex {
    /// Build the index; on duplicate team identifiers the last row wins.
    pub fn build<'a, I>(rows: I) -> Self
    where
        I: IntoIterator<Item = &'a TeamRow>,
    {
        let teams = rows
            .into_iter()
            .map(|row| {
                (
                    row.team_id.clone(),
                    TeamMetadata {
                        nickname: trimmed(row.nickname.as_deref()),
                        city: trimmed(row.city.as_deref()),
                        abbreviation: trimmed(row.abbreviation.as_deref()),
                    },
                )
            })
            .collect();
        Self { teams }
    }

    pub fn get(&self, team_id: &str) -> Option<&TeamMetadata> {
        self.teams.get(team_id)
    }

    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Standings
// ---------------------------------------------------------------------------

/// Latest standings snapshot for one team in one season.
#[derive(Debug, Clone, PartialEq)]
pub struct StandingsRecord {
    pub conference: String,
    pub team_name: String,
    pub wins: f64,
    pub losses: f64,
    /// `None` when the team has no recorded decisions.
    pub win_pct: Option<f64>,
}

impl StandingsRecord {
    fn from_row(row: &StandingsRow) -> Self {
        let wins = parse_or_zero(row.wins.as_deref());
        let losses = parse_or_zero(row.losses.as_deref());
        let decisions = wins + losses;
        Self {
            conference: trimmed(row.conference.as_deref()),
            team_name: trimmed(row.team.as_deref()),
            wins,
            losses,
            win_pct: (decisions != 0.0).then(|| wins / decisions),
        }
    }
}

/// (season, team identifier) -> latest standings snapshot.
#[derive(Debug, Clone, Default)]
pub struct StandingsIndex {
    records: HashMap<(i32, String), StandingsRecord>,
}

impl StandingsIndex {
    /// Reduce dated snapshots to the latest one per (season, team).
    ///
    /// Rows without a season identifier, with a season before `min_season`,
    /// or with an unparsable date are skipped. Among rows sharing the latest
    /// date, the one that comes last in input order is kept.
    pub fn build<'a, I>(rows: I, min_season: i32) -> Self
    where
        I: IntoIterator<Item = &'a StandingsRow>,
    {
        let mut latest: HashMap<(i32, String), (NaiveDate, &'a StandingsRow)> = HashMap::new();
        let mut skipped = 0usize;

        for row in rows {
            let Some(season) = row.season_id.as_deref().and_then(season_from_id) else {
                skipped += 1;
                continue;
            };
            if season < min_season {
                continue;
            }
            let Some(date) = row
                .standings_date
                .as_deref()
                .and_then(|raw| NaiveDate::parse_from_str(raw, STANDINGS_DATE_FORMAT).ok())
            else {
                skipped += 1;
                continue;
            };

            let key = (season, row.team_id.clone());
            let newer = latest
                .get(&key)
                .map_or(true, |(current, _)| date >= *current);
            if newer {
                latest.insert(key, (date, row));
            }
        }

        let records: HashMap<_, _> = latest
            .into_iter()
            .map(|(key, (_, row))| (key, StandingsRecord::from_row(row)))
            .collect();
        debug!(
            "standings index holds {} team-seasons ({} rows skipped)",
            records.len(),
            skipped
        );
        Self { records }
    }

    pub fn get(&self, season: i32, team_id: &str) -> Option<&StandingsRecord> {
        self.records.get(&(season, team_id.to_string()))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Display name for a team-season: metadata nickname, then the standings
/// team name, then empty.
pub fn display_name(meta: Option<&TeamMetadata>, standings: Option<&StandingsRecord>) -> String {
    meta.map(|m| m.nickname.as_str())
        .filter(|name| !name.is_empty())
        .or_else(|| {
            standings
                .map(|s| s.team_name.as_str())
                .filter(|name| !name.is_empty())
        })
        .unwrap_or_default()
        .to_string()
}
