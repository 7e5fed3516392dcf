use std::str::FromStr;

use thiserror::Error;

/// Env var holding the tracing filter directives.
pub const FILTER_ENV: &str = "RUST_LOG";
/// Env var selecting the output format (`json` or `pretty`).
pub const FORMAT_ENV: &str = "SHOP_LOG_FORMAT";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown log format {0:?} (expected \"json\" or \"pretty\")")]
    UnknownLogFormat(String),
}

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// One JSON object per line.
    #[default]
    Json,
    /// Human-readable multi-line output for local runs.
    Pretty,
}

impl FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(LogFormat::Json),
            "pretty" => Ok(LogFormat::Pretty),
            other => Err(ConfigError::UnknownLogFormat(other.to_string())),
        }
    }
}

/// Process-wide logging settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservabilityConfig {
    /// `EnvFilter` directives, e.g. `info` or `shop_events=debug,info`.
    pub filter: String,
    pub format: LogFormat,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl ObservabilityConfig {
    /// Read `RUST_LOG` and `SHOP_LOG_FORMAT`; unset or empty values keep the defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an injectable variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let present = |key: &str| lookup(key).filter(|v: &String| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(filter) = present(FILTER_ENV) {
            config.filter = filter;
        }
        if let Some(format) = present(FORMAT_ENV) {
            config.format = format.parse()?;
        }
        Ok(config)
    }
}
