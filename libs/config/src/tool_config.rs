//! Tool Configuration Module
//!
//! Provides configuration loading for tools embedding the EMV QR codec.
//! Settings come from an optional TOML file, then `EMVQR_`-prefixed
//! environment variables override individual keys.

use std::path::{Path, PathBuf};

use anyhow::{ensure, Context, Result};
use codec::DecoderConfig;
use config_crate::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::defaults::{
    DEFAULT_CONFIG_PATH, DEFAULT_LOG_LEVEL, DEFAULT_PRETTY_OUTPUT, ENV_PREFIX, ENV_SEPARATOR,
};

/// Main tool configuration structure
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ToolConfig {
    /// Log filter used when `RUST_LOG` is unset
    pub log_level: String,

    /// Output formatting
    pub output: OutputSettings,

    /// Decoder limits and switches
    pub decoder: DecoderConfig,
}

/// Output formatting settings
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct OutputSettings {
    pub pretty: bool,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            output: OutputSettings::default(),
            decoder: DecoderConfig::default(),
        }
    }
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            pretty: DEFAULT_PRETTY_OUTPUT,
        }
    }
}

impl ToolConfig {
    /// Load configuration with environment overrides
    ///
    /// An explicit `path` must exist. Without one the default path is read
    /// if present.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder();

        match path {
            Some(path) => {
                info!("Loading config: {:?}", path);
                builder = builder.add_source(
                    File::from(path)
                        .format(FileFormat::Toml)
                        .required(true),
                );
            }
            None => {
                let default_path = default_config_path();
                debug!("Checking default config: {:?}", default_path);
                builder = builder.add_source(
                    File::from(default_path.as_path())
                        .format(FileFormat::Toml)
                        .required(false),
                );
            }
        }

        // Override with environment variables (EMVQR_ prefix)
        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator(ENV_SEPARATOR)
                .try_parsing(true),
        );

        let config = builder.build().context("Failed to build configuration")?;

        let config: Self = config
            .try_deserialize()
            .context("Failed to deserialize configuration")?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a TOML document without consulting the environment
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).context("Failed to parse TOML configuration")?;
        config.validate()?;
        Ok(config)
    }

    /// Render as a TOML document
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize configuration")
    }

    /// Reject settings the decoder cannot work with
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.decoder.max_nesting_depth >= 2,
            "decoder.max_nesting_depth must be at least 2 to read templates, got {}",
            self.decoder.max_nesting_depth
        );
        ensure!(!self.log_level.trim().is_empty(), "log_level must not be empty");
        Ok(())
    }
}

/// Default config file location with `~` expanded
pub fn default_config_path() -> PathBuf {
    PathBuf::from(shellexpand::tilde(DEFAULT_CONFIG_PATH).into_owned())
}

/// Expand `~` and `$VARS` in a user-supplied path
pub fn expand_path(raw: &str) -> Result<PathBuf> {
    let expanded =
        shellexpand::full(raw).with_context(|| format!("Failed to expand path {:?}", raw))?;
    Ok(PathBuf::from(expanded.into_owned()))
}

/// Convenience function to load configuration from an optional raw path
pub fn load_config(raw_path: Option<&str>) -> Result<ToolConfig> {
    match raw_path {
        Some(raw) => ToolConfig::load(Some(&expand_path(raw)?)),
        None => ToolConfig::load(None),
    }
}
