//! Shared taxonomy and configuration for the slant workspace.

pub mod app_config;
pub mod config;
pub mod keywords;
pub mod taxonomy;

use thiserror::Error;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use keywords::{load_keywords, KeywordsFile, SocialKeywords};
pub use taxonomy::{Bias, Category, FilterType, Lean};

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid filter: {0} (expected all, left, right or social)")]
    InvalidFilter(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read keywords file {path}: {source}")]
    KeywordsFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse keywords file: {0}")]
    KeywordsFileParse(#[from] serde_yaml::Error),

    #[error("keywords validation failed: {0}")]
    Validation(String),
}
