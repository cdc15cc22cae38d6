use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {message}")]
    FileReadError { path: PathBuf, message: String },

    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("unsupported config format: {format} (expected json or yaml)")]
    UnsupportedFormat { format: String },

    #[error("invalid value for {var}: '{value}' ({message})")]
    InvalidEnv {
        var: String,
        value: String,
        message: String,
    },
}

impl ConfigError {
    pub fn file_read_error(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::FileReadError {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn parse_error(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::ParseError {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn unsupported_format(format: impl Into<String>) -> Self {
        Self::UnsupportedFormat {
            format: format.into(),
        }
    }

    pub fn invalid_env(
        var: impl Into<String>,
        value: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::InvalidEnv {
            var: var.into(),
            value: value.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_read_error_display() {
        let err = ConfigError::file_read_error("/path/to/assay.json", "file not found");
        assert_eq!(
            err.to_string(),
            "failed to read config file '/path/to/assay.json': file not found"
        );
    }

    #[test]
    fn test_unsupported_format_display() {
        let err = ConfigError::unsupported_format("toml");
        assert_eq!(
            err.to_string(),
            "unsupported config format: toml (expected json or yaml)"
        );
    }

    #[test]
    fn test_invalid_env_display() {
        let err = ConfigError::invalid_env("ASSAY_MAX_DIFF_LINES", "lots", "expected an integer");
        assert_eq!(
            err.to_string(),
            "invalid value for ASSAY_MAX_DIFF_LINES: 'lots' (expected an integer)"
        );
    }
}
