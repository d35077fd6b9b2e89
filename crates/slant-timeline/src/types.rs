use chrono::{DateTime, Utc};
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};
use slant_core::{Bias, Category, FilterType};

/// A search result as delivered by the search collaborator.
///
/// Unknown, source-specific fields are ignored on deserialization. A field of
/// the wrong shape degrades to its default instead of rejecting the record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawResult {
    #[serde(default, deserialize_with = "lenient_string")]
    pub source: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub contents: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub url: String,
    /// Publication time in Unix seconds.
    #[serde(default, deserialize_with = "unix_seconds")]
    pub date: Option<i64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub sentiment_score: Option<f64>,
    /// Explicit political lean, usually `"left"` or `"right"` when present.
    #[serde(default, deserialize_with = "lenient_text")]
    pub bias: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Text {
    Text(String),
    Other(IgnoredAny),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Number {
    Number(f64),
    Other(IgnoredAny),
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Text>::deserialize(deserializer)? {
        Some(Text::Text(text)) => Some(text),
        Some(Text::Other(_)) | None => None,
    })
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_text(deserializer)?.unwrap_or_default())
}

fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Number>::deserialize(deserializer)? {
        Some(Number::Number(value)) => Some(value),
        Some(Number::Other(_)) | None => None,
    })
}

/// Accepts integer or fractional seconds; fractions are truncated.
#[allow(clippy::cast_possible_truncation)]
fn unix_seconds<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Seconds {
        Whole(i64),
        Fractional(f64),
        Other(IgnoredAny),
    }

    Ok(match Option::<Seconds>::deserialize(deserializer)? {
        Some(Seconds::Whole(secs)) => Some(secs),
        Some(Seconds::Fractional(secs)) => Some(secs.trunc() as i64),
        Some(Seconds::Other(_)) | None => None,
    })
}

/// Derived per-record classification. Rebuilt on every recomputation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Classification {
    pub category: Category,
    pub bias: Bias,
    pub is_social: bool,
}

/// Coarse sentiment label shown next to a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Positive,
    Neutral,
    Negative,
}

/// A normalized, render-ready point on the sentiment timeline.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlotPoint {
    pub time_millis: i64,
    pub sentiment: f64,
    /// Marker size. Never used for filtering or statistics.
    pub magnitude: f64,
    pub category: Category,
    pub bias: Bias,
    pub is_social: bool,
    pub tone: Tone,
    pub source: String,
    pub title: String,
    pub url: String,
    pub date: DateTime<Utc>,
}

/// Summary numbers over the filtered subset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Statistics {
    pub avg: f64,
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
}

/// Padded time-axis range in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TimeDomain {
    pub min: f64,
    pub max: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrendEndpoint {
    pub x: f64,
    pub y: f64,
}

/// A rendered trend line: two endpoints, or none when no fit exists.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TrendLine {
    pub endpoints: Vec<TrendEndpoint>,
}

impl TrendLine {
    #[must_use]
    pub fn is_drawable(&self) -> bool {
        self.endpoints.len() >= 2
    }
}

/// Host UI toggles that drive recomputation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewState {
    pub active_filter: FilterType,
    pub color_by_bias: bool,
}

/// Everything the rendering surface needs for one pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineView {
    pub points: Vec<PlotPoint>,
    pub filtered: Vec<PlotPoint>,
    pub stats: Statistics,
    pub domain: TimeDomain,
    pub left_trend: TrendLine,
    pub right_trend: TrendLine,
}
