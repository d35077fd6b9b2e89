use std::path::Path;

use super::*;

#[test]
fn defaults_pass_validation() {
    let keywords = KeywordsFile::default();
    validate_keywords(&keywords).expect("built-in keywords should validate");
    assert!(keywords.social.exact.iter().any(|k| k == "x"));
    assert!(keywords.right.iter().any(|k| k == "fox"));
}

#[test]
fn parse_normalizes_case_and_whitespace() {
    let yaml = r"
social:
  contains: [' Reddit ', TikTok]
left: [CNN]
right: [Fox]
";
    let keywords = parse_keywords(yaml).expect("parse");
    assert_eq!(keywords.social.contains, vec!["reddit", "tiktok"]);
    assert!(keywords.social.exact.is_empty());
    assert_eq!(keywords.left, vec!["cnn"]);
    assert_eq!(keywords.right, vec!["fox"]);
}

#[test]
fn parse_rejects_blank_keyword() {
    let yaml = r"
social:
  contains: [reddit, '   ']
";
    let err = parse_keywords(yaml).unwrap_err();
    assert!(
        matches!(err, ConfigError::Validation(ref msg) if msg.contains("non-empty")),
        "expected Validation error, got: {err:?}"
    );
}

#[test]
fn parse_rejects_missing_social_keywords() {
    let yaml = r"
social: {}
left: [cnn]
";
    let err = parse_keywords(yaml).unwrap_err();
    assert!(err.to_string().contains("at least one social keyword"));
}

#[test]
fn parse_accepts_prefix_only_social_keywords() {
    let yaml = r"
social:
  prefix: ['R/']
";
    let keywords = parse_keywords(yaml).expect("parse");
    assert_eq!(keywords.social.prefix, vec!["r/"]);
    assert!(keywords.social.contains.is_empty());
}

#[test]
fn subreddit_marker_is_a_prefix_not_a_substring() {
    let keywords = KeywordsFile::default();
    assert!(keywords.social.prefix.iter().any(|k| k == "r/"));
    assert!(!keywords.social.contains.iter().any(|k| k == "r/"));
}

#[test]
fn parse_rejects_keyword_on_both_sides() {
    let yaml = r"
social:
  exact: [x]
left: [cnn, Daily]
right: [daily, fox]
";
    let err = parse_keywords(yaml).unwrap_err();
    assert!(
        err.to_string().contains("'daily' is listed as both"),
        "unexpected error: {err}"
    );
}

#[test]
fn parse_rejects_malformed_yaml() {
    let err = parse_keywords("social: [unterminated").unwrap_err();
    assert!(matches!(err, ConfigError::KeywordsFileParse(_)));
}

#[test]
fn load_reports_missing_file() {
    let err = load_keywords(Path::new("/nonexistent/keywords.yaml")).unwrap_err();
    assert!(
        matches!(err, ConfigError::KeywordsFileIo { ref path, .. } if path.contains("keywords.yaml"))
    );
}

#[test]
fn load_keywords_from_real_file() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("config")
        .join("keywords.yaml");
    assert!(
        path.exists(),
        "keywords.yaml missing at {path:?}, required for this test"
    );
    let keywords = load_keywords(&path).expect("failed to load keywords.yaml");
    assert_eq!(
        keywords,
        KeywordsFile::default(),
        "config/keywords.yaml should mirror the built-in keyword sets"
    );
}
