//! Sentiment-timeline analytics for the media dashboard.
//!
//! Classifies selected search results by source, maps them to time-sorted
//! plot points, and derives the filtered subset, summary statistics, padded
//! time domain and per-cohort trend lines the chart renders. Every output is
//! recomputed from scratch on each call.

pub mod classify;
pub mod domain;
pub mod filter;
pub mod pipeline;
pub mod stats;
pub mod transform;
pub mod trend;
pub mod types;

#[cfg(test)]
mod test_support;

pub use classify::{Classifier, InstitutionalOutlets, SocialPlatforms, SourceKind, SourceStrategy};
pub use domain::{domain, domain_at};
pub use filter::filter;
pub use pipeline::{build_timeline, build_timeline_at, plot_points};
pub use stats::aggregate;
pub use transform::to_plot_point;
pub use trend::{fit_trend, Cohort, LinearFit};
pub use types::{
    Classification, PlotPoint, RawResult, Statistics, TimeDomain, TimelineView, Tone,
    TrendEndpoint, TrendLine, ViewState,
};
