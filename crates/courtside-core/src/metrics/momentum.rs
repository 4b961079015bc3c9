// Momentum index: a weighted blend of min-max normalized league trends.

use serde::Serialize;

use super::trends::LeagueTrend;
use crate::model::round_to;
use crate::settings::MomentumWeights;

/// Decimal places of the momentum value.
const MOMENTUM_PLACES: i32 = 4;

/// Spans at or below this are treated as a constant metric.
const SPAN_EPSILON: f64 = 1e-12;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MomentumPoint {
    pub season: i32,
    pub avg_three_rate: f64,
    pub avg_three_pct: f64,
    pub avg_points: f64,
    pub momentum: f64,
}

/// Observed range of one metric across all seasons.
#[derive(Debug, Clone, Copy)]
struct Range {
    min: f64,
    max: f64,
}

impl Range {
    fn of(values: impl Iterator<Item = f64>) -> Self {
        values.fold(
            Range {
                min: f64::INFINITY,
                max: f64::NEG_INFINITY,
            },
            |acc, v| Range {
                min: acc.min.min(v),
                max: acc.max.max(v),
            },
        )
    }

    /// Position of `value` within the range in [0, 1]; 0 for a constant metric.
    fn normalize(&self, value: f64) -> f64 {
        let span = self.max - self.min;
        if span <= SPAN_EPSILON {
            return 0.0;
        }
        (value - self.min) / span
    }
}

/// One momentum point per league trend record, in the same order.
pub fn build_momentum_series(trends: &[LeagueTrend], weights: &MomentumWeights) -> Vec<MomentumPoint> {
    if trends.is_empty() {
        return Vec::new();
    }

    let rate = Range::of(trends.iter().map(|t| t.avg_three_rate));
    let pct = Range::of(trends.iter().map(|t| t.avg_three_pct));
    let points = Range::of(trends.iter().map(|t| t.avg_points));

    trends
        .iter()
        .map(|t| {
            let index = weights.rate * rate.normalize(t.avg_three_rate)
                + weights.pct * pct.normalize(t.avg_three_pct)
                + weights.points * points.normalize(t.avg_points);
            MomentumPoint {
                season: t.season,
                avg_three_rate: t.avg_three_rate,
                avg_three_pct: t.avg_three_pct,
                avg_points: t.avg_points,
                momentum: round_to(index, MOMENTUM_PLACES),
            }
        })
        .collect()
}
