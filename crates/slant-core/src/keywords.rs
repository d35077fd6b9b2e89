//! Keyword sets used to recognize social platforms and partisan outlets.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Substrings that mark a source name as a social platform.
pub const DEFAULT_SOCIAL_CONTAINS: &[&str] = &[
    "reddit",
    "twitter",
    "x.com",
    "tweet",
    "facebook",
    "instagram",
    "tiktok",
    "youtube",
    "threads",
    "bluesky",
    "bsky",
    "mastodon",
];

/// Source-name prefixes, such as subreddit paths.
pub const DEFAULT_SOCIAL_PREFIX: &[&str] = &["r/"];

/// Platform names too short to match as substrings.
pub const DEFAULT_SOCIAL_EXACT: &[&str] = &["x", "fb", "ig", "yt"];

pub const DEFAULT_LEFT_OUTLETS: &[&str] = &[
    "cnn",
    "msnbc",
    "new york times",
    "nytimes",
    "washington post",
    "guardian",
    "huffpost",
    "huffington",
    "vox",
    "npr",
    "slate",
    "the atlantic",
    "mother jones",
    "daily beast",
    "new yorker",
];

pub const DEFAULT_RIGHT_OUTLETS: &[&str] = &[
    "fox",
    "breitbart",
    "daily wire",
    "newsmax",
    "national review",
    "washington examiner",
    "new york post",
    "daily caller",
    "the blaze",
    "oann",
    "washington times",
    "federalist",
    "daily mail",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialKeywords {
    #[serde(default)]
    pub contains: Vec<String>,
    #[serde(default)]
    pub exact: Vec<String>,
    #[serde(default)]
    pub prefix: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordsFile {
    pub social: SocialKeywords,
    #[serde(default)]
    pub left: Vec<String>,
    #[serde(default)]
    pub right: Vec<String>,
}

impl Default for KeywordsFile {
    fn default() -> Self {
        let owned =
            |list: &[&str]| -> Vec<String> { list.iter().map(|s| (*s).to_string()).collect() };
        Self {
            social: SocialKeywords {
                contains: owned(DEFAULT_SOCIAL_CONTAINS),
                exact: owned(DEFAULT_SOCIAL_EXACT),
                prefix: owned(DEFAULT_SOCIAL_PREFIX),
            },
            left: owned(DEFAULT_LEFT_OUTLETS),
            right: owned(DEFAULT_RIGHT_OUTLETS),
        }
    }
}

impl KeywordsFile {
    /// Lowercase and trim every keyword so matching can assume normalized input.
    fn normalize(&mut self) {
        for list in [
            &mut self.social.contains,
            &mut self.social.exact,
            &mut self.social.prefix,
            &mut self.left,
            &mut self.right,
        ] {
            for keyword in list.iter_mut() {
                *keyword = keyword.trim().to_lowercase();
            }
        }
    }
}

/// Load, normalize, and validate keyword sets from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_keywords(path: &Path) -> Result<KeywordsFile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::KeywordsFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    parse_keywords(&content)
}

/// Parse keyword sets from YAML text.
///
/// # Errors
///
/// Returns `ConfigError` if the YAML is malformed or fails validation.
pub fn parse_keywords(content: &str) -> Result<KeywordsFile, ConfigError> {
    let mut keywords: KeywordsFile = serde_yaml::from_str(content)?;
    keywords.normalize();
    validate_keywords(&keywords)?;
    Ok(keywords)
}

fn validate_keywords(keywords: &KeywordsFile) -> Result<(), ConfigError> {
    let mut all = keywords
        .social
        .contains
        .iter()
        .chain(&keywords.social.exact)
        .chain(&keywords.social.prefix)
        .chain(&keywords.left)
        .chain(&keywords.right);
    if all.any(String::is_empty) {
        return Err(ConfigError::Validation(
            "keywords must be non-empty".to_string(),
        ));
    }

    let social = &keywords.social;
    if social.contains.is_empty() && social.exact.is_empty() && social.prefix.is_empty() {
        return Err(ConfigError::Validation(
            "at least one social keyword is required".to_string(),
        ));
    }

    let left: HashSet<&str> = keywords.left.iter().map(String::as_str).collect();
    if let Some(shared) = keywords.right.iter().find(|k| left.contains(k.as_str())) {
        return Err(ConfigError::Validation(format!(
            "keyword '{shared}' is listed as both left and right"
        )));
    }

    Ok(())
}

#[cfg(test)]
#[path = "keywords_test.rs"]
mod tests;
