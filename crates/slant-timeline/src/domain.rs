//! Time-axis range for chart scaling and trend evaluation.

use chrono::{DateTime, Utc};

use crate::types::{PlotPoint, TimeDomain};

const PAD_FRACTION: f64 = 0.05;
const FALLBACK_PAD_MILLIS: f64 = 60.0 * 60.0 * 1000.0;
const EMPTY_WINDOW_MILLIS: f64 = 24.0 * 60.0 * 60.0 * 1000.0;

/// Padded range over `time_millis`, using the wall clock for an empty set.
///
/// Callers should pass the unfiltered point set so the axis stays put while
/// the user changes filters.
#[must_use]
pub fn domain(points: &[PlotPoint]) -> TimeDomain {
    domain_at(points, Utc::now())
}

/// Same as [`domain`] with an explicit "now" for the empty-set fallback.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn domain_at(points: &[PlotPoint], now: DateTime<Utc>) -> TimeDomain {
    let bounds = points.iter().map(|p| p.time_millis).fold(None, |acc, t| {
        Some(match acc {
            None => (t, t),
            Some((lo, hi)) => (t.min(lo), t.max(hi)),
        })
    });

    let Some((lo, hi)) = bounds else {
        let now = now.timestamp_millis() as f64;
        return TimeDomain {
            min: now - EMPTY_WINDOW_MILLIS,
            max: now,
        };
    };

    let pad = if hi == lo {
        FALLBACK_PAD_MILLIS
    } else {
        (hi - lo) as f64 * PAD_FRACTION
    };

    TimeDomain {
        min: lo as f64 - pad,
        max: hi as f64 + pad,
    }
}

#[cfg(test)]
mod tests {
    use slant_core::{Bias, Category};

    use super::*;
    use crate::test_support::point;

    fn at(time_millis: i64) -> PlotPoint {
        point(time_millis, 0.0, Category::Left, Bias::Left)
    }

    #[test]
    fn pads_five_percent_of_range() {
        let d = domain_at(&[at(1_000), at(21_000)], Utc::now());
        assert!((d.min - 0.0).abs() < 1e-9, "min was {}", d.min);
        assert!((d.max - 22_000.0).abs() < 1e-9, "max was {}", d.max);
    }

    #[test]
    fn ignores_input_order() {
        let d = domain_at(&[at(21_000), at(5_000), at(1_000)], Utc::now());
        assert!((d.min - 0.0).abs() < 1e-9);
        assert!((d.max - 22_000.0).abs() < 1e-9);
    }

    #[test]
    fn single_instant_uses_one_hour_pad() {
        let d = domain_at(&[at(10_000_000), at(10_000_000)], Utc::now());
        assert!((d.min - 6_400_000.0).abs() < 1e-9);
        assert!((d.max - 13_600_000.0).abs() < 1e-9);
    }

    #[test]
    fn empty_set_is_last_24_hours() {
        let now = DateTime::from_timestamp(1_700_000_000, 0).unwrap();
        let d = domain_at(&[], now);
        assert!((d.max - 1_700_000_000_000.0).abs() < 1e-3);
        assert!((d.max - d.min - 86_400_000.0).abs() < 1e-3);
    }

    #[test]
    fn empty_set_ends_at_wall_clock() {
        let before = Utc::now().timestamp_millis();
        let d = domain(&[]);
        let after = Utc::now().timestamp_millis();
        #[allow(clippy::cast_precision_loss)]
        let (before, after) = (before as f64, after as f64);
        assert!(d.max >= before && d.max <= after);
        assert!((d.max - d.min - 86_400_000.0).abs() < 1e-3);
    }
}
