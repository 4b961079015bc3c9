// League-wide scoring and three-point trends per season.

use std::collections::BTreeMap;

use serde::Serialize;

use super::{AVERAGE_PLACES, RATE_PLACES};
use crate::aggregate::StatLine;
use crate::model::{ratio_or_zero, round_to};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeagueTrend {
    pub season: i32,
    pub avg_three_attempts: f64,
    pub avg_three_rate: f64,
    pub avg_points: f64,
    pub avg_three_pct: f64,
    pub team_games: u32,
}

/// One trend record per season, ascending by season.
pub fn build_league_trends(seasons: &BTreeMap<i32, StatLine>) -> Vec<LeagueTrend> {
    seasons
        .iter()
        .map(|(&season, totals)| {
            let team_games = totals.games_divisor();
            LeagueTrend {
                season,
                avg_three_attempts: round_to(totals.fg3a / team_games, AVERAGE_PLACES),
                avg_three_rate: round_to(ratio_or_zero(totals.fg3a, totals.fga), RATE_PLACES),
                avg_points: round_to(totals.pts / team_games, AVERAGE_PLACES),
                avg_three_pct: round_to(ratio_or_zero(totals.fg3m, totals.fg3a), RATE_PLACES),
                team_games: totals.games.max(1),
            }
        })
        .collect()
}
