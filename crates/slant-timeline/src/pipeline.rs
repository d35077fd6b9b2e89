//! Timeline recomputation.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};

use crate::classify::Classifier;
use crate::domain::domain_at;
use crate::filter::filter;
use crate::stats::aggregate;
use crate::transform::{sort_by_time, to_plot_point};
use crate::trend::{cohort_trend, Cohort};
use crate::types::{PlotPoint, RawResult, TimelineView, ViewState};

/// Classify and transform the selected results into a time-sorted point set.
///
/// Duplicate indices collapse and out-of-range indices are ignored. Results
/// without a usable date or sentiment score are dropped.
#[must_use]
pub fn plot_points(
    results: &[RawResult],
    selected: &[usize],
    classifier: &Classifier,
) -> Vec<PlotPoint> {
    let indices: BTreeSet<usize> = selected.iter().copied().collect();
    let mut points = Vec::with_capacity(indices.len());

    for index in indices {
        let Some(result) = results.get(index) else {
            tracing::debug!(index, total = results.len(), "selected index out of range, ignoring");
            continue;
        };
        let classification = classifier.classify(result);
        match to_plot_point(result, classification) {
            Some(point) => points.push(point),
            None => {
                tracing::debug!(
                    index,
                    source = %result.source,
                    "result has no usable date or sentiment score, dropping"
                );
            }
        }
    }

    sort_by_time(&mut points);
    points
}

/// Run one full recomputation for the current selection and view state.
///
/// 1. Classify and transform the selection (sorted by time).
/// 2. Apply the active filter and aggregate statistics over that subset.
/// 3. Compute the padded domain over the *unfiltered* points.
/// 4. Fit the left and right cohort trends, also over the unfiltered points.
///
/// Nothing is cached between calls.
#[must_use]
pub fn build_timeline(
    results: &[RawResult],
    selected: &[usize],
    state: ViewState,
    classifier: &Classifier,
) -> TimelineView {
    build_timeline_at(results, selected, state, classifier, Utc::now())
}

/// Same as [`build_timeline`] with an explicit clock for the empty-set domain,
/// which makes the output a pure function of its arguments.
#[must_use]
pub fn build_timeline_at(
    results: &[RawResult],
    selected: &[usize],
    state: ViewState,
    classifier: &Classifier,
    now: DateTime<Utc>,
) -> TimelineView {
    let points = plot_points(results, selected, classifier);

    let filtered = filter(&points, state.active_filter);
    let stats = aggregate(&filtered);

    let domain = domain_at(&points, now);
    let left_trend = cohort_trend(&points, Cohort::Left, state.color_by_bias, domain);
    let right_trend = cohort_trend(&points, Cohort::Right, state.color_by_bias, domain);

    tracing::info!(
        selected = selected.len(),
        points = points.len(),
        filtered = filtered.len(),
        filter = %state.active_filter,
        color_by_bias = state.color_by_bias,
        left_trend = left_trend.is_drawable(),
        right_trend = right_trend.is_drawable(),
        "timeline recomputed"
    );

    TimelineView {
        points,
        filtered,
        stats,
        domain,
        left_trend,
        right_trend,
    }
}
