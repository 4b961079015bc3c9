// Game-team aggregation and the season reducer.
//
// Stage one folds per-player box-score rows into one totals record per
// (game, team). Stage two folds those records into league-wide per-season
// sums and per-(season, team) sums, splitting scoring into its two-point,
// three-point and free-throw components along the way.

use std::collections::BTreeMap;

use tracing::debug;

use crate::model::{parse_or_zero, BoxScoreRow};
use crate::season_index::GameSeasonIndex;

// ---------------------------------------------------------------------------
// Per-(game, team) totals
// ---------------------------------------------------------------------------

/// Key of a [`TeamGameTotals`] record: (game identifier, team identifier).
pub type GameTeamKey = (String, String);

/// Box-score totals for one team in one game.
#[derive(Debug, Clone, PartialEq)]
pub struct TeamGameTotals {
    pub season: i32,
    pub team_id: String,
    pub fgm: f64,
    pub fga: f64,
    pub fg3m: f64,
    pub fg3a: f64,
    pub ftm: f64,
    pub fta: f64,
    pub pts: f64,
    /// Always 1 once aggregation finishes: a record is exactly one game.
    pub games: u32,
}

impl TeamGameTotals {
    pub fn new(season: i32, team_id: impl Into<String>) -> Self {
        Self {
            season,
            team_id: team_id.into(),
            fgm: 0.0,
            fga: 0.0,
            fg3m: 0.0,
            fg3a: 0.0,
            ftm: 0.0,
            fta: 0.0,
            pts: 0.0,
            games: 0,
        }
    }

    /// Accumulate one player's box-score line. Bad numeric cells count as 0.
    pub fn add_row(&mut self, row: &BoxScoreRow) {
        self.fgm += parse_or_zero(row.fgm.as_deref());
        self.fga += parse_or_zero(row.fga.as_deref());
        self.fg3m += parse_or_zero(row.fg3m.as_deref());
        self.fg3a += parse_or_zero(row.fg3a.as_deref());
        self.ftm += parse_or_zero(row.ftm.as_deref());
        self.fta += parse_or_zero(row.fta.as_deref());
        self.pts += parse_or_zero(row.pts.as_deref());
    }
}

/// Fold box-score rows into per-(game, team) totals.
///
/// Rows whose game has no known season, or whose season is earlier than
/// `min_season`, are discarded entirely.
pub fn aggregate_team_games<'a, I>(
    rows: I,
    index: &GameSeasonIndex,
    min_season: i32,
) -> BTreeMap<GameTeamKey, TeamGameTotals>
where
    I: IntoIterator<Item = &'a BoxScoreRow>,
{
    let mut totals: BTreeMap<GameTeamKey, TeamGameTotals> = BTreeMap::new();
    let mut discarded = 0usize;

    for row in rows {
        let season = match index.season_of(&row.game_id) {
            Some(season) if season >= min_season => season,
            _ => {
                discarded += 1;
                continue;
            }
        };
        totals
            .entry((row.game_id.clone(), row.team_id.clone()))
            .or_insert_with(|| TeamGameTotals::new(season, row.team_id.clone()))
            .add_row(row);
    }

    for record in totals.values_mut() {
        record.games = 1;
    }

    debug!(
        "aggregated {} team-game records ({} rows discarded)",
        totals.len(),
        discarded
    );
    totals
}

// ---------------------------------------------------------------------------
// Season reducer
// ---------------------------------------------------------------------------

/// Fixed-schema accumulator shared by the season and team-season levels.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StatLine {
    pub fgm: f64,
    pub fga: f64,
    pub fg3m: f64,
    pub fg3a: f64,
    pub ftm: f64,
    pub fta: f64,
    pub pts: f64,
    pub two_points: f64,
    pub three_points: f64,
    pub ft_points: f64,
    /// Team-games folded in (one per team per game).
    pub games: u32,
}

impl StatLine {
    /// Build the contribution of one team-game, including the derived
    /// scoring components.
    pub fn from_team_game(totals: &TeamGameTotals) -> Self {
        Self {
            fgm: totals.fgm,
            fga: totals.fga,
            fg3m: totals.fg3m,
            fg3a: totals.fg3a,
            ftm: totals.ftm,
            fta: totals.fta,
            pts: totals.pts,
            two_points: (totals.fgm - totals.fg3m).max(0.0) * 2.0,
            three_points: totals.fg3m * 3.0,
            ft_points: totals.ftm,
            games: totals.games,
        }
    }

    pub fn absorb(&mut self, other: &StatLine) {
        self.fgm += other.fgm;
        self.fga += other.fga;
        self.fg3m += other.fg3m;
        self.fg3a += other.fg3a;
        self.ftm += other.ftm;
        self.fta += other.fta;
        self.pts += other.pts;
        self.two_points += other.two_points;
        self.three_points += other.three_points;
        self.ft_points += other.ft_points;
        self.games += other.games;
    }

    /// Points rebuilt from the three scoring components.
    pub fn reconstructed_points(&self) -> f64 {
        self.two_points + self.three_points + self.ft_points
    }

    /// Games as a divisor; an empty line counts as one game.
    pub fn games_divisor(&self) -> f64 {
        if self.games == 0 {
            1.0
        } else {
            f64::from(self.games)
        }
    }
}

/// Key of a team-season accumulator: (season, team identifier).
pub type TeamSeasonKey = (i32, String);

/// Output of the season reducer.
#[derive(Debug, Clone, Default)]
pub struct SeasonAggregates {
    /// League-wide sums per season.
    pub seasons: BTreeMap<i32, StatLine>,
    /// Sums per (season, team).
    pub team_seasons: BTreeMap<TeamSeasonKey, StatLine>,
}

impl SeasonAggregates {
    /// Latest season present in the league-wide sums.
    pub fn latest_season(&self) -> Option<i32> {
        self.seasons.keys().next_back().copied()
    }
}

/// Fold per-(game, team) totals into both aggregate levels in one pass.
pub fn reduce_seasons<'a, I>(team_games: I) -> SeasonAggregates
where
    I: IntoIterator<Item = &'a TeamGameTotals>,
{
    let mut aggregates = SeasonAggregates::default();
    for totals in team_games {
        let line = StatLine::from_team_game(totals);
        aggregates
            .seasons
            .entry(totals.season)
            .or_default()
            .absorb(&line);
        aggregates
            .team_seasons
            .entry((totals.season, totals.team_id.clone()))
            .or_default()
            .absorb(&line);
    }
    debug!(
        "reduced into {} seasons and {} team-seasons",
        aggregates.seasons.len(),
        aggregates.team_seasons.len()
    );
    aggregates
}
