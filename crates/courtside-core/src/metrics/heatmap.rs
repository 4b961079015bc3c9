// Team-season three-point rate and accuracy grid for the heatmap view.

use serde::Serialize;

use super::{AVERAGE_PLACES, RATE_PLACES};
use crate::aggregate::SeasonAggregates;
use crate::lookup::{display_name, StandingsIndex, TeamMetadataIndex};
use crate::model::{ratio_or_zero, round_to};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeatmapRow {
    pub season: i32,
    pub team_id: String,
    pub team: String,
    pub abbr: String,
    pub three_rate: f64,
    pub three_pct: f64,
    pub attempts_per_game: f64,
    pub points_per_game: f64,
}

/// Team-seasons from `min_season` on, ordered by (season, display name).
pub fn build_three_heatmap(
    aggregates: &SeasonAggregates,
    metadata: &TeamMetadataIndex,
    standings: &StandingsIndex,
    min_season: i32,
) -> Vec<HeatmapRow> {
    let mut rows: Vec<HeatmapRow> = aggregates
        .team_seasons
        .iter()
        .filter(|((season, _), _)| *season >= min_season)
        .map(|((season, team_id), totals)| {
            let meta = metadata.get(team_id);
            let games = totals.games_divisor();
            HeatmapRow {
                season: *season,
                team_id: team_id.clone(),
                team: display_name(meta, standings.get(*season, team_id)),
                abbr: meta.map(|m| m.abbreviation.clone()).unwrap_or_default(),
                three_rate: round_to(ratio_or_zero(totals.fg3a, totals.fga), RATE_PLACES),
                three_pct: round_to(ratio_or_zero(totals.fg3m, totals.fg3a), RATE_PLACES),
                attempts_per_game: round_to(totals.fg3a / games, AVERAGE_PLACES),
                points_per_game: round_to(totals.pts / games, AVERAGE_PLACES),
            }
        })
        .collect();

    rows.sort_by(|a, b| a.season.cmp(&b.season).then_with(|| a.team.cmp(&b.team)));
    rows
}
