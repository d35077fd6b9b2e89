//! Raw result → plot point mapping.

use chrono::DateTime;

use crate::types::{Classification, PlotPoint, RawResult, Tone};

const TITLE_FALLBACK_CHARS: usize = 60;
const UNTITLED: &str = "Untitled";

/// Compound-score cutoff for the display tone label.
const TONE_THRESHOLD: f64 = 0.05;

/// Map a result and its classification to a plot point.
///
/// Returns `None` when the result has no usable publication date (absent,
/// zero, or outside the calendar range) or no sentiment score.
#[must_use]
pub fn to_plot_point(result: &RawResult, classification: Classification) -> Option<PlotPoint> {
    let secs = result.date.filter(|&d| d != 0)?;
    let sentiment = result.sentiment_score?;
    let date = DateTime::from_timestamp(secs, 0)?;

    Some(PlotPoint {
        time_millis: secs.saturating_mul(1000),
        sentiment,
        magnitude: sentiment.abs() * 100.0 + 50.0,
        category: classification.category,
        bias: classification.bias,
        is_social: classification.is_social,
        tone: tone(sentiment),
        source: result.source.clone(),
        title: display_title(result),
        url: result.url.clone(),
        date,
    })
}

/// Title, else a contents excerpt, else a placeholder.
fn display_title(result: &RawResult) -> String {
    if !result.title.is_empty() {
        return result.title.clone();
    }
    if !result.contents.is_empty() {
        let excerpt: String = result.contents.chars().take(TITLE_FALLBACK_CHARS).collect();
        return format!("{excerpt}...");
    }
    UNTITLED.to_string()
}

fn tone(sentiment: f64) -> Tone {
    if sentiment >= TONE_THRESHOLD {
        Tone::Positive
    } else if sentiment <= -TONE_THRESHOLD {
        Tone::Negative
    } else {
        Tone::Neutral
    }
}

/// Stable sort by timestamp; equal timestamps keep input order.
pub fn sort_by_time(points: &mut [PlotPoint]) {
    points.sort_by_key(|p| p.time_millis);
}
