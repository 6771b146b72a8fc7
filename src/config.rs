//! Rendering configuration with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Config file passed by the caller (TOML)
//! 3. Environment variables: `TAGGED_BST_*` prefix

use std::path::Path;

use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};

use crate::errors::{TreeError, TreeResult};

/// Marker printed for an empty position.
pub const DEFAULT_EMPTY_MARK: &str = "∅";
/// Prefix added once per depth level by the indented rendering.
pub const DEFAULT_INDENT: &str = "|  ";
pub const ENV_PREFIX: &str = "TAGGED_BST";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RenderConfig {
    pub empty_mark: String,
    pub indent: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            empty_mark: DEFAULT_EMPTY_MARK.into(),
            indent: DEFAULT_INDENT.into(),
        }
    }
}

impl RenderConfig {
    /// Load settings from defaults, an optional TOML file and the process
    /// environment.
    ///
    /// # Errors
    /// `TreeError::Config` if the file is missing or malformed.
    pub fn load(path: Option<&Path>) -> TreeResult<Self> {
        Self::build(path, None)
    }

    /// Like [`RenderConfig::load`], but reads `TAGGED_BST_*` overrides from
    /// `vars` instead of the process environment.
    pub fn load_with_env(
        path: Option<&Path>,
        vars: config::Map<String, String>,
    ) -> TreeResult<Self> {
        Self::build(path, Some(vars))
    }

    fn build(path: Option<&Path>, vars: Option<config::Map<String, String>>) -> TreeResult<Self> {
        let defaults = Self::default();
        let mut builder = Config::builder()
            .set_default("empty_mark", defaults.empty_mark)
            .map_err(config_err)?
            .set_default("indent", defaults.indent)
            .map_err(config_err)?;

        if let Some(path) = path {
            builder = builder.add_source(File::from(path).required(true));
        }

        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .source(vars),
        );

        let config = builder.build().map_err(config_err)?;
        config.try_deserialize().map_err(config_err)
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> TreeResult<String> {
        toml::to_string_pretty(self)
            .map_err(|e| TreeError::Config(format!("serialize config: {e}")))
    }
}

fn config_err(e: ConfigError) -> TreeError {
    TreeError::Config(e.to_string())
}
