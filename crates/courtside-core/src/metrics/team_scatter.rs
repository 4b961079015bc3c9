// Per team-season three-point volume and efficiency against winning.

use serde::Serialize;

use super::{AVERAGE_PLACES, RATE_PLACES};
use crate::aggregate::SeasonAggregates;
use crate::lookup::{display_name, StandingsIndex, TeamMetadataIndex};
use crate::model::{ratio_or_zero, round_to};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamScatterRow {
    pub season: i32,
    pub team_id: String,
    pub team: String,
    pub city: String,
    pub abbr: String,
    pub conference: String,
    pub avg_three_attempts: f64,
    pub three_pct: f64,
    pub three_rate: f64,
    pub win_pct: Option<f64>,
    pub wins: Option<f64>,
    pub losses: Option<f64>,
    pub games_played: u32,
}

/// Team-seasons from `min_season` on, ordered by (season, display name).
pub fn build_team_scatter(
    aggregates: &SeasonAggregates,
    metadata: &TeamMetadataIndex,
    standings: &StandingsIndex,
    min_season: i32,
) -> Vec<TeamScatterRow> {
    let mut rows: Vec<TeamScatterRow> = aggregates
        .team_seasons
        .iter()
        .filter(|((season, _), _)| *season >= min_season)
        .map(|((season, team_id), totals)| {
            let meta = metadata.get(team_id);
            let ranking = standings.get(*season, team_id);
            TeamScatterRow {
                season: *season,
                team_id: team_id.clone(),
                team: display_name(meta, ranking),
                city: meta.map(|m| m.city.clone()).unwrap_or_default(),
                abbr: meta.map(|m| m.abbreviation.clone()).unwrap_or_default(),
                conference: ranking.map(|r| r.conference.clone()).unwrap_or_default(),
                avg_three_attempts: round_to(
                    totals.fg3a / totals.games_divisor(),
                    AVERAGE_PLACES,
                ),
                three_pct: round_to(ratio_or_zero(totals.fg3m, totals.fg3a), RATE_PLACES),
                three_rate: round_to(ratio_or_zero(totals.fg3a, totals.fga), RATE_PLACES),
                win_pct: ranking
                    .and_then(|r| r.win_pct)
                    .map(|pct| round_to(pct, RATE_PLACES)),
                wins: ranking.map(|r| r.wins),
                losses: ranking.map(|r| r.losses),
                games_played: totals.games.max(1),
            }
        })
        .collect();

    rows.sort_by(|a, b| a.season.cmp(&b.season).then_with(|| a.team.cmp(&b.team)));
    rows
}
