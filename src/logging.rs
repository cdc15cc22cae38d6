//! Subscriber setup for assay's own `tracing` events.
//!
//! Failures are logged at `debug`, passes at `trace` and config fallbacks
//! at `warn`. Output goes through libtest's capture, so it only shows for
//! failing tests or with `--nocapture`.
use serde::{Deserialize, Serialize};
use tracing::warn;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::Config;

/// Names the [`Verbosity`] override read by [`Config::load`].
pub const LOG_ENV: &str = "ASSAY_LOG";

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
    Debug,
    Trace,
}

impl Verbosity {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "quiet" | "off" => Some(Self::Quiet),
            "normal" | "warn" => Some(Self::Normal),
            "verbose" | "info" => Some(Self::Verbose),
            "debug" => Some(Self::Debug),
            "trace" => Some(Self::Trace),
            _ => None,
        }
    }

    /// `EnvFilter` directive scoped to this crate.
    fn directive(self) -> String {
        let level = match self {
            Self::Quiet => "off",
            Self::Normal => "warn",
            Self::Verbose => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        };
        format!("assay={level}")
    }
}

/// Installs a global subscriber shaped by `config`.
///
/// `RUST_LOG` takes precedence over `config.verbosity`. Source locations
/// are added from `Debug` up. Returns false when a global subscriber is
/// already set, so every test may call it.
pub fn init(config: &Config) -> bool {
    let verbosity = config.verbosity;
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity.directive()));

    let builder = fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_test_writer()
        .with_target(false)
        .with_file(verbosity >= Verbosity::Debug)
        .with_line_number(verbosity >= Verbosity::Debug)
        .compact();

    let installed = if config.log_timestamps {
        builder.try_init()
    } else {
        builder.without_time().try_init()
    };
    installed.is_ok()
}

/// [`init`] with [`Config::load`], falling back to defaults.
pub fn init_from_env() -> bool {
    match Config::load() {
        Ok(config) => init(&config),
        Err(e) => {
            let installed = init(&Config::default());
            warn!(error = %e, "invalid assay config, logging with defaults");
            installed
        }
    }
}
