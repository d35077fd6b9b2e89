use std::collections::HashMap;
use std::env::VarError;
use std::path::PathBuf;

use super::*;

fn lookup_from_map<'a>(
    map: &'a HashMap<&'a str, &'a str>,
) -> impl Fn(&str) -> Result<String, VarError> + 'a {
    move |key| {
        map.get(key)
            .map(|v| (*v).to_string())
            .ok_or(VarError::NotPresent)
    }
}

#[test]
fn parse_environment_development() {
    assert_eq!(parse_environment("development"), Environment::Development);
}

#[test]
fn parse_environment_test() {
    assert_eq!(parse_environment("test"), Environment::Test);
}

#[test]
fn parse_environment_production() {
    assert_eq!(parse_environment("production"), Environment::Production);
}

#[test]
fn parse_environment_unknown_defaults_to_development() {
    assert_eq!(parse_environment("staging"), Environment::Development);
}

#[test]
fn build_app_config_succeeds_with_empty_env() {
    let map: HashMap<&str, &str> = HashMap::new();
    let result = build_app_config(lookup_from_map(&map));
    assert!(result.is_ok(), "expected Ok, got: {result:?}");
    let cfg = result.unwrap();
    assert_eq!(cfg.env, Environment::Development);
    assert_eq!(cfg.log_level, "info");
    assert!(cfg.keywords_path.is_none());
    assert_eq!(cfg.default_filter, FilterType::All);
    assert!(!cfg.color_by_bias);
}

#[test]
fn build_app_config_reads_overrides() {
    let mut map = HashMap::new();
    map.insert("SLANT_ENV", "production");
    map.insert("SLANT_LOG_LEVEL", "debug");
    map.insert("SLANT_KEYWORDS_PATH", "./config/keywords.yaml");
    map.insert("SLANT_DEFAULT_FILTER", "social");
    map.insert("SLANT_COLOR_BY_BIAS", "1");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.env, Environment::Production);
    assert_eq!(cfg.log_level, "debug");
    assert_eq!(
        cfg.keywords_path,
        Some(PathBuf::from("./config/keywords.yaml"))
    );
    assert_eq!(cfg.default_filter, FilterType::Social);
    assert!(cfg.color_by_bias);
}

#[test]
fn build_app_config_ignores_blank_keywords_path() {
    let mut map = HashMap::new();
    map.insert("SLANT_KEYWORDS_PATH", "  ");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert!(cfg.keywords_path.is_none());
}

#[test]
fn build_app_config_fails_with_invalid_filter() {
    let mut map = HashMap::new();
    map.insert("SLANT_DEFAULT_FILTER", "center");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "SLANT_DEFAULT_FILTER"),
        "expected InvalidEnvVar(SLANT_DEFAULT_FILTER), got: {result:?}"
    );
}

#[test]
fn build_app_config_accepts_false_spellings() {
    for raw in ["false", "0", "FALSE"] {
        let mut map = HashMap::new();
        map.insert("SLANT_COLOR_BY_BIAS", raw);
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert!(!cfg.color_by_bias, "expected false for {raw}");
    }
}

#[test]
fn build_app_config_fails_with_invalid_bool() {
    let mut map = HashMap::new();
    map.insert("SLANT_COLOR_BY_BIAS", "maybe");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "SLANT_COLOR_BY_BIAS"),
        "expected InvalidEnvVar(SLANT_COLOR_BY_BIAS), got: {result:?}"
    );
}
