//! Summary statistics over the filtered subset.

use crate::types::{PlotPoint, Statistics};

/// Sentiment strictly above this is positive; strictly below its negation is
/// negative. The closed band in between is neutral.
pub const NEUTRAL_BAND: f64 = 0.1;

/// Mean sentiment and bucket counts. All zero for an empty slice.
#[must_use]
pub fn aggregate(points: &[PlotPoint]) -> Statistics {
    if points.is_empty() {
        return Statistics::default();
    }

    let mut stats = Statistics::default();
    let mut sum = 0.0_f64;
    for point in points {
        sum += point.sentiment;
        if point.sentiment > NEUTRAL_BAND {
            stats.positive += 1;
        } else if point.sentiment < -NEUTRAL_BAND {
            stats.negative += 1;
        } else {
            stats.neutral += 1;
        }
    }

    #[allow(clippy::cast_precision_loss)]
    let denom = points.len() as f64;
    stats.avg = sum / denom;
    stats
}
