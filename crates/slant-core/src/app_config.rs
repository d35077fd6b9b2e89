use std::path::PathBuf;

use crate::taxonomy::FilterType;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    /// Optional YAML file overriding the built-in keyword sets.
    pub keywords_path: Option<PathBuf>,
    /// Filter applied when the host does not pick one explicitly.
    pub default_filter: FilterType,
    /// Whether social posts are folded into their bias cohort by default.
    pub color_by_bias: bool,
}
