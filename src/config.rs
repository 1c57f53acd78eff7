//! Configuration System
//!
//! Layered configuration: built-in defaults, the global config file, an explicit
//! `--config` file, then `MERKLE_COMMIT__*` environment variables.

use crate::error::ApiError;
use crate::logging::LoggingConfig;
use config::Environment;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

mod merge;
mod sources;

pub use sources::environment::ENV_PREFIX;
pub use sources::global_file::global_config_path;

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CommitConfig {
    /// Tree construction settings
    #[serde(default)]
    pub tree: TreeConfig,

    /// How text input becomes items
    #[serde(default)]
    pub input: InputConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Tree construction settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeConfig {
    /// Reject inputs with more items than this (None = unlimited)
    #[serde(default)]
    pub max_items: Option<usize>,
}

/// Input settings for the CLI
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputConfig {
    #[serde(default)]
    pub split: SplitMode,
}

/// How a block of text is split into items
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SplitMode {
    /// Whitespace-separated words
    #[default]
    Words,
    /// One item per non-empty line
    Lines,
}

impl SplitMode {
    /// Split `text` into items, preserving order
    pub fn split<'a>(&self, text: &'a str) -> Vec<&'a str> {
        match self {
            SplitMode::Words => text.split_whitespace().collect(),
            SplitMode::Lines => text.lines().filter(|l| !l.trim().is_empty()).collect(),
        }
    }
}

impl CommitConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.tree.max_items == Some(0) {
            return Err(ApiError::ConfigError(
                "tree.max_items must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Effective configuration as TOML
    pub fn to_toml(&self) -> Result<String, ApiError> {
        toml::to_string_pretty(self)
            .map_err(|e| ApiError::ConfigError(format!("Failed to render config: {}", e)))
    }
}

/// Loads `CommitConfig` from all sources
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from defaults, the global file, an optional explicit file and
    /// the process environment.
    pub fn load(explicit: Option<&Path>) -> Result<CommitConfig, ApiError> {
        Self::load_with_env(explicit, sources::environment::source())
    }

    /// Load configuration with a caller-supplied environment source
    pub fn load_with_env(
        explicit: Option<&Path>,
        environment: Environment,
    ) -> Result<CommitConfig, ApiError> {
        let mut builder = merge::merge_policy::builder_with_defaults()?;
        builder = sources::global_file::add_to_builder(builder)?;
        if let Some(path) = explicit {
            builder = sources::explicit_file::add_to_builder(builder, path)?;
        }
        builder = builder.add_source(environment);

        let config: CommitConfig = builder.build()?.try_deserialize()?;
        config.validate()?;
        debug!(?config, "Configuration loaded");
        Ok(config)
    }
}
