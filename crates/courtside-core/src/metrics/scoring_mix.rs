// Share of reconstructed points by source (two, three, free throw) per season.

use std::collections::BTreeMap;

use serde::Serialize;

use super::RATE_PLACES;
use crate::aggregate::StatLine;
use crate::model::round_to;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoringMix {
    pub season: i32,
    pub two_pct: f64,
    pub three_pct: f64,
    pub ft_pct: f64,
}

/// Ascending by season. Seasons with no reconstructed points are left out.
pub fn build_scoring_mix(seasons: &BTreeMap<i32, StatLine>) -> Vec<ScoringMix> {
    seasons
        .iter()
        .filter_map(|(&season, totals)| {
            let total = totals.reconstructed_points();
            if total == 0.0 {
                return None;
            }
            Some(ScoringMix {
                season,
                two_pct: round_to(totals.two_points / total, RATE_PLACES),
                three_pct: round_to(totals.three_points / total, RATE_PLACES),
                ft_pct: round_to(totals.ft_points / total, RATE_PLACES),
            })
        })
        .collect()
}
