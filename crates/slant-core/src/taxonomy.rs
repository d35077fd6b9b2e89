//! Editorial buckets and political-lean labels shared by every crate.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::CoreError;

/// A political lean detected for an outlet or stated on a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lean {
    Left,
    Right,
}

impl Lean {
    /// Parse the explicit `bias` metadata on a result.
    ///
    /// Only the literal strings `"left"` and `"right"` are recognized.
    #[must_use]
    pub fn from_metadata(raw: Option<&str>) -> Option<Self> {
        match raw {
            Some("left") => Some(Lean::Left),
            Some("right") => Some(Lean::Right),
            _ => None,
        }
    }
}

/// The three-way editorial bucket used for coloring and filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Left,
    Right,
    Social,
}

impl From<Lean> for Category {
    fn from(lean: Lean) -> Self {
        match lean {
            Lean::Left => Category::Left,
            Lean::Right => Category::Right,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Left => write!(f, "left"),
            Category::Right => write!(f, "right"),
            Category::Social => write!(f, "social"),
        }
    }
}

/// Political-lean label, independent of [`Category`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Bias {
    Left,
    Right,
    #[default]
    Neutral,
}

impl From<Lean> for Bias {
    fn from(lean: Lean) -> Self {
        match lean {
            Lean::Left => Bias::Left,
            Lean::Right => Bias::Right,
        }
    }
}

impl std::fmt::Display for Bias {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Bias::Left => write!(f, "left"),
            Bias::Right => write!(f, "right"),
            Bias::Neutral => write!(f, "neutral"),
        }
    }
}

/// The active category filter selected in the host UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterType {
    #[default]
    All,
    Left,
    Right,
    Social,
}

impl FilterType {
    /// The category this filter keeps, or `None` for [`FilterType::All`].
    #[must_use]
    pub fn category(self) -> Option<Category> {
        match self {
            FilterType::All => None,
            FilterType::Left => Some(Category::Left),
            FilterType::Right => Some(Category::Right),
            FilterType::Social => Some(Category::Social),
        }
    }
}

impl std::fmt::Display for FilterType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FilterType::All => write!(f, "all"),
            FilterType::Left => write!(f, "left"),
            FilterType::Right => write!(f, "right"),
            FilterType::Social => write!(f, "social"),
        }
    }
}

impl FromStr for FilterType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(FilterType::All),
            "left" => Ok(FilterType::Left),
            "right" => Ok(FilterType::Right),
            "social" => Ok(FilterType::Social),
            _ => Err(CoreError::InvalidFilter(s.to_string())),
        }
    }
}
