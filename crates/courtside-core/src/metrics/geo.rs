// Latest-season snapshot of every franchise placed on a map.

use serde::Serialize;
use tracing::debug;

use super::{AVERAGE_PLACES, RATE_PLACES};
use crate::aggregate::SeasonAggregates;
use crate::lookup::{display_name, StandingsIndex, TeamMetadataIndex};
use crate::model::{ratio_or_zero, round_to};

/// Home arena coordinates (latitude, longitude) by team abbreviation.
const TEAM_COORDINATES: [(&str, f64, f64); 30] = [
    ("ATL", 33.7573, -84.3963),
    ("BOS", 42.3662, -71.0621),
    ("BKN", 40.6826, -73.9754),
    ("CHA", 35.2251, -80.8392),
    ("CHI", 41.8807, -87.6742),
    ("CLE", 41.4965, -81.6882),
    ("DAL", 32.7905, -96.8103),
    ("DEN", 39.7487, -105.0077),
    ("DET", 42.3410, -83.0550),
    ("GSW", 37.7680, -122.3877),
    ("HOU", 29.7508, -95.3621),
    ("IND", 39.7640, -86.1555),
    ("LAC", 34.0430, -118.2673),
    ("LAL", 34.0430, -118.2673),
    ("MEM", 35.1382, -90.0506),
    ("MIA", 25.7814, -80.1870),
    ("MIL", 43.0451, -87.9172),
    ("MIN", 44.9795, -93.2760),
    ("NOP", 29.9490, -90.0821),
    ("NYK", 40.7505, -73.9934),
    ("OKC", 35.4634, -97.5151),
    ("ORL", 28.5392, -81.3839),
    ("PHI", 39.9012, -75.1720),
    ("PHX", 33.4457, -112.0712),
    ("POR", 45.5316, -122.6668),
    ("SAC", 38.5802, -121.4997),
    ("SAS", 29.4270, -98.4375),
    ("TOR", 43.6435, -79.3791),
    ("UTA", 40.7683, -111.9011),
    ("WAS", 38.8981, -77.0209),
];

fn coordinates(abbr: &str) -> Option<(f64, f64)> {
    TEAM_COORDINATES
        .iter()
        .find(|(code, _, _)| *code == abbr)
        .map(|&(_, lat, lon)| (lat, lon))
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeoSnapshotRow {
    pub season: i32,
    pub team_id: String,
    pub team: String,
    pub city: String,
    pub abbr: String,
    pub conference: String,
    pub off_rtg: f64,
    pub three_rate: f64,
    pub three_pct: f64,
    pub wins: Option<f64>,
    pub losses: Option<f64>,
    pub lat: f64,
    pub lon: f64,
}

/// Snapshot of the latest season in the league-wide sums, one row per team
/// with known coordinates, ordered by display name. Teams whose abbreviation
/// is not in the coordinate table are left out.
pub fn build_team_map(
    aggregates: &SeasonAggregates,
    metadata: &TeamMetadataIndex,
    standings: &StandingsIndex,
) -> Vec<GeoSnapshotRow> {
    let Some(target) = aggregates.latest_season() else {
        return Vec::new();
    };

    let mut unplaced = 0usize;
    let mut rows: Vec<GeoSnapshotRow> = aggregates
        .team_seasons
        .iter()
        .filter(|((season, _), _)| *season == target)
        .filter_map(|((season, team_id), totals)| {
            let meta = metadata.get(team_id);
            let abbr = meta.map(|m| m.abbreviation.as_str()).unwrap_or_default();
            let Some((lat, lon)) = coordinates(abbr) else {
                unplaced += 1;
                return None;
            };
            let ranking = standings.get(*season, team_id);
            Some(GeoSnapshotRow {
                season: *season,
                team_id: team_id.clone(),
                team: display_name(meta, ranking),
                city: meta.map(|m| m.city.clone()).unwrap_or_default(),
                abbr: abbr.to_string(),
                conference: ranking.map(|r| r.conference.clone()).unwrap_or_default(),
                off_rtg: round_to(totals.pts / totals.games_divisor(), AVERAGE_PLACES),
                three_rate: round_to(ratio_or_zero(totals.fg3a, totals.fga), RATE_PLACES),
                three_pct: round_to(ratio_or_zero(totals.fg3m, totals.fg3a), RATE_PLACES),
                wins: ranking.map(|r| r.wins),
                losses: ranking.map(|r| r.losses),
                lat,
                lon,
            })
        })
        .collect();

    if unplaced > 0 {
        debug!("{} teams in season {} have no map coordinates", unplaced, target);
    }
    rows.sort_by(|a, b| a.team.cmp(&b.team));
    rows
}
