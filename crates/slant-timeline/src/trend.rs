//! Per-cohort ordinary least-squares trend lines.

use serde::Serialize;
use slant_core::{Bias, Category};

use crate::types::{PlotPoint, TimeDomain, TrendEndpoint, TrendLine};

/// `y = slope * x + intercept`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LinearFit {
    pub slope: f64,
    pub intercept: f64,
}

impl LinearFit {
    #[must_use]
    pub fn at(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

/// Fit a line through `(x, y)` samples.
///
/// Returns `None` for fewer than two samples or when every sample shares the
/// same `x`.
#[must_use]
pub fn fit_trend(samples: &[(f64, f64)]) -> Option<LinearFit> {
    least_squares(samples.iter().copied())
}

/// Closed-form two-variable OLS in a single pass.
///
/// `x` is measured from the first sample while summing; epoch milliseconds
/// squared would otherwise swamp the variance term. The denominator
/// `n·Σx² − (Σx)²` is translation invariant, so the degenerate case is
/// unchanged.
fn least_squares<I>(samples: I) -> Option<LinearFit>
where
    I: IntoIterator<Item = (f64, f64)>,
{
    let mut samples = samples.into_iter().peekable();
    let origin = samples.peek()?.0;

    let mut n = 0.0_f64;
    let (mut sum_x, mut sum_y, mut sum_xx, mut sum_xy) = (0.0_f64, 0.0_f64, 0.0_f64, 0.0_f64);
    for (x, y) in samples {
        let dx = x - origin;
        n += 1.0;
        sum_x += dx;
        sum_y += y;
        sum_xx += dx * dx;
        sum_xy += dx * y;
    }

    if n < 2.0 {
        return None;
    }

    let denom = n * sum_xx - sum_x * sum_x;
    if denom == 0.0 {
        return None;
    }

    let slope = (n * sum_xy - sum_x * sum_y) / denom;
    let shifted_intercept = (sum_y - slope * sum_x) / n;

    Some(LinearFit {
        slope,
        intercept: shifted_intercept - slope * origin,
    })
}

/// Which side a trend line summarizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cohort {
    Left,
    Right,
}

impl Cohort {
    /// Category members always count; with bias coloring, social posts
    /// carrying the matching bias label count too.
    #[must_use]
    pub fn contains(self, point: &PlotPoint, color_by_bias: bool) -> bool {
        let (category, bias) = match self {
            Cohort::Left => (Category::Left, Bias::Left),
            Cohort::Right => (Category::Right, Bias::Right),
        };
        point.category == category || (color_by_bias && point.is_social && point.bias == bias)
    }
}

impl std::fmt::Display for Cohort {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Cohort::Left => write!(f, "left"),
            Cohort::Right => write!(f, "right"),
        }
    }
}

/// Fit the cohort's `(time_millis, sentiment)` samples without collecting them.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn fit_cohort(points: &[PlotPoint], cohort: Cohort, color_by_bias: bool) -> Option<LinearFit> {
    least_squares(
        points
            .iter()
            .filter(|p| cohort.contains(p, color_by_bias))
            .map(|p| (p.time_millis as f64, p.sentiment)),
    )
}

/// Evaluate a fit at the domain edges, clipped to the sentiment range.
#[must_use]
pub fn trend_line(fit: Option<LinearFit>, domain: TimeDomain) -> TrendLine {
    let Some(fit) = fit else {
        return TrendLine::default();
    };
    let endpoint = |x: f64| TrendEndpoint {
        x,
        y: fit.at(x).clamp(-1.0, 1.0),
    };
    TrendLine {
        endpoints: vec![endpoint(domain.min), endpoint(domain.max)],
    }
}

/// Fit and render one cohort's trend line.
#[must_use]
pub fn cohort_trend(
    points: &[PlotPoint],
    cohort: Cohort,
    color_by_bias: bool,
    domain: TimeDomain,
) -> TrendLine {
    let fit = fit_cohort(points, cohort, color_by_bias);
    if fit.is_none() {
        tracing::debug!(%cohort, color_by_bias, "no trend: fewer than two points or no time spread");
    }
    trend_line(fit, domain)
}
