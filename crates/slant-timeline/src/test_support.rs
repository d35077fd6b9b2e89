use chrono::DateTime;
use slant_core::{Bias, Category};

use crate::types::{PlotPoint, Tone};

/// A plot point with only the analytic fields set.
pub(crate) fn point(time_millis: i64, sentiment: f64, category: Category, bias: Bias) -> PlotPoint {
    PlotPoint {
        time_millis,
        sentiment,
        magnitude: sentiment.abs() * 100.0 + 50.0,
        category,
        bias,
        is_social: category == Category::Social,
        tone: Tone::Neutral,
        source: String::new(),
        title: "Untitled".to_string(),
        url: String::new(),
        date: DateTime::from_timestamp_millis(time_millis).unwrap(),
    }
}
