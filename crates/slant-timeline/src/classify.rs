//! Source classification: category, bias label and social detection.
//!
//! Keyword matching is delegated to pluggable [`SourceStrategy`] values so new
//! platforms or outlets can be added without touching [`Classifier::classify`].

use slant_core::{Bias, Category, KeywordsFile, Lean};

use crate::types::{Classification, RawResult};

/// What a strategy recognized in a source name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Social,
    Partisan(Lean),
}

/// A keyword-driven rule that recognizes sources.
///
/// `source` is always lowercased before it reaches a strategy.
pub trait SourceStrategy: std::fmt::Debug + Send + Sync {
    fn identify(&self, source: &str) -> Option<SourceKind>;
}

/// Social platforms, matched by substring, by whole name or by prefix.
#[derive(Debug, Clone)]
pub struct SocialPlatforms {
    contains: Vec<String>,
    exact: Vec<String>,
    prefix: Vec<String>,
}

impl SocialPlatforms {
    #[must_use]
    pub fn new(contains: Vec<String>, exact: Vec<String>, prefix: Vec<String>) -> Self {
        Self {
            contains,
            exact,
            prefix,
        }
    }
}

impl SourceStrategy for SocialPlatforms {
    fn identify(&self, source: &str) -> Option<SourceKind> {
        let hit = self.exact.iter().any(|name| name.as_str() == source)
            || self.prefix.iter().any(|p| source.starts_with(p.as_str()))
            || contains_any(source, &self.contains);
        hit.then_some(SourceKind::Social)
    }
}

/// Institutional outlets with a known lean. Left keywords are tried first.
#[derive(Debug, Clone)]
pub struct InstitutionalOutlets {
    left: Vec<String>,
    right: Vec<String>,
}

impl InstitutionalOutlets {
    #[must_use]
    pub fn new(left: Vec<String>, right: Vec<String>) -> Self {
        Self { left, right }
    }
}

impl SourceStrategy for InstitutionalOutlets {
    fn identify(&self, source: &str) -> Option<SourceKind> {
        if contains_any(source, &self.left) {
            Some(SourceKind::Partisan(Lean::Left))
        } else if contains_any(source, &self.right) {
            Some(SourceKind::Partisan(Lean::Right))
        } else {
            None
        }
    }
}

fn contains_any(source: &str, keywords: &[String]) -> bool {
    keywords.iter().any(|kw| source.contains(kw.as_str()))
}

#[derive(Debug)]
pub struct Classifier {
    strategies: Vec<Box<dyn SourceStrategy>>,
}

impl Default for Classifier {
    fn default() -> Self {
        Self::from_keywords(&KeywordsFile::default())
    }
}

impl Classifier {
    #[must_use]
    pub fn new(strategies: Vec<Box<dyn SourceStrategy>>) -> Self {
        Self { strategies }
    }

    /// Build the standard social + institutional strategies from keyword sets.
    #[must_use]
    pub fn from_keywords(keywords: &KeywordsFile) -> Self {
        Self::new(vec![
            Box::new(SocialPlatforms::new(
                keywords.social.contains.clone(),
                keywords.social.exact.clone(),
                keywords.social.prefix.clone(),
            )),
            Box::new(InstitutionalOutlets::new(
                keywords.left.clone(),
                keywords.right.clone(),
            )),
        ])
    }

    /// Append a strategy. Earlier strategies win when several report a lean.
    #[must_use]
    pub fn with_strategy(mut self, strategy: Box<dyn SourceStrategy>) -> Self {
        self.strategies.push(strategy);
        self
    }

    fn is_social(&self, source: &str) -> bool {
        self.strategies
            .iter()
            .any(|s| s.identify(source) == Some(SourceKind::Social))
    }

    fn keyword_lean(&self, source: &str) -> Option<Lean> {
        self.strategies.iter().find_map(|s| match s.identify(source) {
            Some(SourceKind::Partisan(lean)) => Some(lean),
            _ => None,
        })
    }

    /// Classify one result.
    ///
    /// Explicit `bias` metadata beats keyword heuristics for both the bias
    /// label and the category, and social detection beats both for the
    /// category. A non-social source nothing recognizes lands in
    /// [`Category::Social`].
    #[must_use]
    pub fn classify(&self, result: &RawResult) -> Classification {
        let source = result.source.to_lowercase();
        let is_social = self.is_social(&source);
        let explicit = Lean::from_metadata(result.bias.as_deref());
        let lean = explicit.or_else(|| self.keyword_lean(&source));

        let bias = lean.map_or(Bias::Neutral, Bias::from);
        let category = if is_social {
            Category::Social
        } else {
            lean.map_or(Category::Social, Category::from)
        };

        Classification {
            category,
            bias,
            is_social,
        }
    }
}
