//! Timeline and classification command handlers.

use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use slant_core::{AppConfig, Bias, Category, FilterType, KeywordsFile};
use slant_timeline::{build_timeline_at, Classifier, RawResult, ViewState};

#[derive(Debug, Clone)]
pub(crate) struct TimelineArgs {
    pub results: PathBuf,
    pub select: Option<Vec<usize>>,
    pub filter: Option<FilterType>,
    pub color_by_bias: Option<bool>,
    pub now_millis: Option<i64>,
    pub pretty: bool,
}

/// Search responses arrive either as a bare array or wrapped in `results`.
#[derive(Deserialize)]
#[serde(untagged)]
enum ResultsFile {
    Bare(Vec<RawResult>),
    Wrapped { results: Vec<RawResult> },
}

pub(crate) fn load_results(path: &Path) -> anyhow::Result<Vec<RawResult>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read results file {}", path.display()))?;
    let file: ResultsFile = serde_json::from_str(&content)
        .with_context(|| format!("failed to parse results file {}", path.display()))?;
    Ok(match file {
        ResultsFile::Bare(results) | ResultsFile::Wrapped { results } => results,
    })
}

/// Classifier from the configured keyword file, or the built-in keyword sets.
pub(crate) fn build_classifier(config: &AppConfig) -> anyhow::Result<Classifier> {
    let keywords = match &config.keywords_path {
        Some(path) => {
            let keywords = slant_core::load_keywords(path)?;
            tracing::info!(path = %path.display(), "loaded keyword sets");
            keywords
        }
        None => KeywordsFile::default(),
    };
    Ok(Classifier::from_keywords(&keywords))
}

/// Run the pipeline and return the rendered JSON.
pub(crate) fn run_timeline(config: &AppConfig, args: &TimelineArgs) -> anyhow::Result<String> {
    let results = load_results(&args.results)?;
    let classifier = build_classifier(config)?;

    let selected: Vec<usize> = match &args.select {
        Some(indices) => indices.clone(),
        None => (0..results.len()).collect(),
    };
    let state = ViewState {
        active_filter: args.filter.unwrap_or(config.default_filter),
        color_by_bias: args.color_by_bias.unwrap_or(config.color_by_bias),
    };
    let now = match args.now_millis {
        Some(ms) => DateTime::from_timestamp_millis(ms)
            .ok_or_else(|| anyhow::anyhow!("--now-millis {ms} is out of range"))?,
        None => Utc::now(),
    };

    let view = build_timeline_at(&results, &selected, state, &classifier, now);
    let json = if args.pretty {
        serde_json::to_string_pretty(&view)?
    } else {
        serde_json::to_string(&view)?
    };
    Ok(json)
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ClassifiedRow<'a> {
    index: usize,
    source: &'a str,
    category: Category,
    bias: Bias,
    is_social: bool,
}

/// Classify every result, including ones the timeline would drop.
pub(crate) fn run_classify(config: &AppConfig, path: &Path) -> anyhow::Result<String> {
    let results = load_results(path)?;
    let classifier = build_classifier(config)?;

    let rows: Vec<ClassifiedRow<'_>> = results
        .iter()
        .enumerate()
        .map(|(index, result)| {
            let c = classifier.classify(result);
            ClassifiedRow {
                index,
                source: &result.source,
                category: c.category,
                bias: c.bias,
                is_social: c.is_social,
            }
        })
        .collect();

    Ok(serde_json::to_string_pretty(&rows)?)
}
