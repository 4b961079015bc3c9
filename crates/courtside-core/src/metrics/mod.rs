// Metric builders: pure transforms from the season aggregates and lookup
// indexes into the serialized visualization datasets.
//
// Every builder is independent of the others except `momentum`, which reads
// the already-built league trends.

pub mod geo;
pub mod heatmap;
pub mod momentum;
pub mod scoring_mix;
pub mod team_scatter;
pub mod trends;

pub use geo::{build_team_map, GeoSnapshotRow};
pub use heatmap::{build_three_heatmap, HeatmapRow};
pub use momentum::{build_momentum_series, MomentumPoint};
pub use scoring_mix::{build_scoring_mix, ScoringMix};
pub use team_scatter::{build_team_scatter, TeamScatterRow};
pub use trends::{build_league_trends, LeagueTrend};

/// Decimal places for rates and percentages.
pub(crate) const RATE_PLACES: i32 = 4;
/// Decimal places for per-game averages.
pub(crate) const AVERAGE_PLACES: i32 = 3;
