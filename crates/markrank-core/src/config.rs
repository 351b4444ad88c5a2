//! Configuration for markrank
//!
//! Looked up in order: an explicit `--config` path, `$MARKRANK_CONFIG_DIR/config.toml`,
//! then `<config dir>/markrank/config.toml`. A missing implicit file yields defaults.

pub mod types;

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{MarkrankError, Result};
use crate::format::OutputFormat;

pub use types::{ParsePolicy, RankConfig, DEFAULT_PRECISION};

const CONFIG_DIR: &str = "markrank";
const CONFIG_FILE: &str = "config.toml";
pub const CONFIG_DIR_ENV_VAR: &str = "MARKRANK_CONFIG_DIR";

/// Flag values that take precedence over the config file
#[derive(Debug, Clone, Copy, Default)]
pub struct ConfigOverrides {
    pub strict: bool,
    pub precision: Option<usize>,
    pub format: Option<OutputFormat>,
}

impl RankConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|e| MarkrankError::invalid_config(path, e))?;
        toml::from_str(&content).map_err(|e| MarkrankError::invalid_config(path, e))
    }

    /// Resolve the configuration, preferring `explicit` over the implicit locations
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            tracing::debug!(path = %path.display(), "load_explicit_config");
            return Self::load(path);
        }

        match Self::implicit_path() {
            Some(path) if path.exists() => {
                tracing::debug!(path = %path.display(), "load_implicit_config");
                Self::load(&path)
            }
            _ => Ok(Self::default()),
        }
    }

    fn implicit_path() -> Option<PathBuf> {
        if let Ok(env_dir) = std::env::var(CONFIG_DIR_ENV_VAR) {
            return Some(PathBuf::from(env_dir).join(CONFIG_FILE));
        }
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
    }

    /// Apply command-line overrides on top of the loaded values
    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Self {
        if overrides.strict {
            self.strict = true;
        }
        if let Some(precision) = overrides.precision {
            self.precision = precision;
        }
        if let Some(format) = overrides.format {
            self.format = format;
        }
        self
    }

    /// Row policy handed to the unit and record parsers
    pub fn parse_policy(&self) -> ParsePolicy {
        if self.strict {
            ParsePolicy::Strict
        } else {
            ParsePolicy::Lenient
        }
    }
}
