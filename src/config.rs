use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::ConfigError;
use crate::logging::{Verbosity, LOG_ENV};

/// Path of a JSON or YAML config file.
pub const CONFIG_ENV: &str = "ASSAY_CONFIG";
/// Overrides [`Config::diff_style`] (`paths` or `lines`).
pub const DIFF_STYLE_ENV: &str = "ASSAY_DIFF_STYLE";
/// Overrides [`Config::max_diff_lines`].
pub const MAX_DIFF_LINES_ENV: &str = "ASSAY_MAX_DIFF_LINES";

const DEFAULT_MAX_DIFF_LINES: usize = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiffStyle {
    /// One line per differing path: `[2].name: "a" != "b"`.
    #[default]
    Paths,
    /// Line diff of the pretty-printed values.
    Lines,
}

impl DiffStyle {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "paths" | "path" => Some(Self::Paths),
            "lines" | "line" => Some(Self::Lines),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Paths => "paths",
            Self::Lines => "lines",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub diff_style: DiffStyle,

    /// Diff lines logged per failure; 0 logs all of them.
    pub max_diff_lines: usize,

    /// Level of assay's own tracing events, see [`crate::logging::init`].
    pub verbosity: Verbosity,

    /// Prefix log lines with a timestamp.
    pub log_timestamps: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            diff_style: DiffStyle::default(),
            max_diff_lines: DEFAULT_MAX_DIFF_LINES,
            verbosity: Verbosity::default(),
            log_timestamps: false,
        }
    }
}

impl Config {
    /// Reads a JSON (`.json`) or YAML (`.yaml`, `.yml`) config file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading config file");

        let content = fs::read_to_string(path)
            .map_err(|e| ConfigError::file_read_error(path, e.to_string()))?;

        let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");

        match extension {
            "json" => serde_json::from_str(&content)
                .map_err(|e| ConfigError::parse_error(path, e.to_string())),
            "yaml" | "yml" => serde_yaml::from_str(&content)
                .map_err(|e| ConfigError::parse_error(path, e.to_string())),
            _ => Err(ConfigError::unsupported_format(extension)),
        }
    }

    /// Builds the effective config: the file named by `ASSAY_CONFIG` (or
    /// defaults), then `ASSAY_DIFF_STYLE`, `ASSAY_MAX_DIFF_LINES` and
    /// `ASSAY_LOG`.
    pub fn load() -> Result<Self, ConfigError> {
        let base = match env::var_os(CONFIG_ENV) {
            Some(path) => Self::from_file(PathBuf::from(path))?,
            None => Self::default(),
        };
        base.with_overrides(|var| env::var(var).ok())
    }

    /// Applies overrides looked up by environment variable name.
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup(DIFF_STYLE_ENV) {
            self.diff_style = DiffStyle::parse(&raw).ok_or_else(|| {
                ConfigError::invalid_env(DIFF_STYLE_ENV, &raw, "expected paths or lines")
            })?;
            trace!(diff_style = self.diff_style.as_str(), "diff style overridden");
        }

        if let Some(raw) = lookup(MAX_DIFF_LINES_ENV) {
            self.max_diff_lines = raw.trim().parse().map_err(|_| {
                ConfigError::invalid_env(MAX_DIFF_LINES_ENV, &raw, "expected an integer")
            })?;
            trace!(max_diff_lines = self.max_diff_lines, "diff line limit overridden");
        }

        if let Some(raw) = lookup(LOG_ENV) {
            self.verbosity = Verbosity::parse(&raw).ok_or_else(|| {
                ConfigError::invalid_env(
                    LOG_ENV,
                    &raw,
                    "expected quiet, normal, verbose, debug or trace",
                )
            })?;
            trace!(verbosity = ?self.verbosity, "log verbosity overridden");
        }

        Ok(self)
    }
}
