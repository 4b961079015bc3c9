// Tunable thresholds consumed by the aggregation stages and metric builders.

use serde::Deserialize;

/// Season cut-offs. A row or team-season is kept when its season is
/// greater than or equal to the threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct SeasonThresholds {
    /// Earliest season that contributes to any aggregate.
    pub min_season: i32,
    /// Earliest season emitted by the team scatter dataset.
    pub scatter_min_season: i32,
    /// Earliest season emitted by the three-point heatmap dataset.
    pub heatmap_min_season: i32,
}

impl Default for SeasonThresholds {
    fn default() -> Self {
        Self {
            min_season: 2000,
            scatter_min_season: 2010,
            heatmap_min_season: 2003,
        }
    }
}

/// Weights of the momentum index. They are expected to sum to 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct MomentumWeights {
    #[serde(rename = "rate_weight")]
    pub rate: f64,
    #[serde(rename = "pct_weight")]
    pub pct: f64,
    #[serde(rename = "points_weight")]
    pub points: f64,
}

impl Default for MomentumWeights {
    fn default() -> Self {
        Self {
            rate: 0.55,
            pct: 0.30,
            points: 0.15,
        }
    }
}

impl MomentumWeights {
    pub fn total(&self) -> f64 {
        self.rate + self.pct + self.points
    }
}
