//! Build-time and runtime configuration
//!
//! The build ceiling is chosen with the `max_level_*` cargo features. When
//! several are enabled the most restrictive one wins; with none enabled the
//! ceiling is [`LogLevel::Info`]. Every per-level macro branches on one of the
//! `*_ENABLED` constants below, so levels above the ceiling compile to nothing.

use super::log_level::LogLevel;
use serde::{Deserialize, Serialize};

/// Most verbose level compiled into this build.
pub const BUILD_CEILING: LogLevel = if cfg!(feature = "max_level_off") {
    LogLevel::Off
} else if cfg!(feature = "max_level_critical") {
    LogLevel::Critical
} else if cfg!(feature = "max_level_error") {
    LogLevel::Error
} else if cfg!(feature = "max_level_warning") {
    LogLevel::Warning
} else if cfg!(feature = "max_level_info") {
    LogLevel::Info
} else if cfg!(feature = "max_level_debug") {
    LogLevel::Debug
} else {
    LogLevel::Info
};

pub const CRITICAL_ENABLED: bool = LogLevel::Critical.at_most(BUILD_CEILING);
pub const ERROR_ENABLED: bool = LogLevel::Error.at_most(BUILD_CEILING);
pub const WARNING_ENABLED: bool = LogLevel::Warning.at_most(BUILD_CEILING);
pub const INFO_ENABLED: bool = LogLevel::Info.at_most(BUILD_CEILING);
pub const DEBUG_ENABLED: bool = LogLevel::Debug.at_most(BUILD_CEILING);

/// Default capacity of the per-call message buffer, in bytes.
pub const DEFAULT_MESSAGE_CAPACITY: usize = 256;

/// Display names used in the `[name] ` prefix, indexed by level value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelNames(pub [&'static str; 6]);

impl LevelNames {
    #[inline]
    pub const fn name(&self, level: LogLevel) -> &'static str {
        self.0[level as usize]
    }
}

impl Default for LevelNames {
    fn default() -> Self {
        DEFAULT_LEVEL_NAMES
    }
}

pub const DEFAULT_LEVEL_NAMES: LevelNames =
    LevelNames(["off", "critical", "error", "warning", "info", "debug"]);

/// Environment variable read by [`LoggerConfig::from_env`].
#[cfg(feature = "std")]
pub const LOG_LEVEL_ENV: &str = "LOG_LEVEL";

/// Runtime configuration applied to a logger at initialization.
///
/// The threshold is still clamped to [`BUILD_CEILING`] when applied.
///
/// # Example
///
/// ```
/// use micro_logger::{LogLevel, LoggerConfig};
///
/// let config: LoggerConfig = serde_json::from_str(r#"{ "threshold": "error" }"#).unwrap();
/// assert_eq!(config.threshold, Some(LogLevel::Error));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggerConfig {
    #[serde(default)]
    pub threshold: Option<LogLevel>,
}

impl LoggerConfig {
    pub const fn new() -> Self {
        Self { threshold: None }
    }

    #[must_use]
    pub const fn with_threshold(self, level: LogLevel) -> Self {
        Self {
            threshold: Some(level),
        }
    }

    /// Read the threshold from the `LOG_LEVEL` environment variable.
    ///
    /// An unset variable yields an empty configuration; an unparsable one is
    /// an error.
    #[cfg(feature = "std")]
    pub fn from_env() -> super::error::Result<Self> {
        match std::env::var(LOG_LEVEL_ENV) {
            Ok(value) => Self::from_env_value(&value),
            Err(std::env::VarError::NotPresent) => Ok(Self::new()),
            Err(std::env::VarError::NotUnicode(_)) => Err(super::error::LoggerError::config(
                LOG_LEVEL_ENV,
                "value is not valid unicode",
            )),
        }
    }

    #[cfg(feature = "std")]
    fn from_env_value(value: &str) -> super::error::Result<Self> {
        let level = value
            .parse::<LogLevel>()
            .map_err(|_| super::error::LoggerError::config(LOG_LEVEL_ENV, "unknown level name"))?;
        Ok(Self::new().with_threshold(level))
    }
}
