//! Log level definitions

use super::error::LoggerError;
use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

/// Severity of a log message.
///
/// Higher values are more verbose. `Off` is only meaningful as a threshold;
/// no message is ever emitted at level `Off`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum LogLevel {
    Off = 0,
    Critical = 1,
    Error = 2,
    Warning = 3,
    Info = 4,
    Debug = 5,
}

impl LogLevel {
    /// Every level, ordered from least to most verbose.
    pub const ALL: [LogLevel; 6] = [
        LogLevel::Off,
        LogLevel::Critical,
        LogLevel::Error,
        LogLevel::Warning,
        LogLevel::Info,
        LogLevel::Debug,
    ];

    /// The most verbose level.
    pub const MAX: LogLevel = LogLevel::Debug;

    pub const fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Off => "off",
            LogLevel::Critical => "critical",
            LogLevel::Error => "error",
            LogLevel::Warning => "warning",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
        }
    }

    /// Convert a raw value, saturating anything above `Debug` to `Debug`.
    pub const fn from_u8_saturating(value: u8) -> Self {
        match value {
            0 => LogLevel::Off,
            1 => LogLevel::Critical,
            2 => LogLevel::Error,
            3 => LogLevel::Warning,
            4 => LogLevel::Info,
            _ => LogLevel::Debug,
        }
    }

    /// `const` ordering helper, usable where `Ord` is not.
    #[inline]
    pub const fn at_most(self, other: LogLevel) -> bool {
        self as u8 <= other as u8
    }

    #[inline]
    pub const fn min(self, other: LogLevel) -> LogLevel {
        if self.at_most(other) {
            self
        } else {
            other
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, LoggerError> {
        let s = s.trim();
        LogLevel::ALL
            .iter()
            .copied()
            .find(|level| level.as_str().eq_ignore_ascii_case(s))
            .or_else(|| s.eq_ignore_ascii_case("warn").then_some(LogLevel::Warning))
            .ok_or(LoggerError::InvalidLevelName)
    }
}

impl TryFrom<u8> for LogLevel {
    type Error = LoggerError;

    fn try_from(value: u8) -> Result<Self, LoggerError> {
        if value > LogLevel::MAX as u8 {
            return Err(LoggerError::InvalidLevelValue(value));
        }
        Ok(LogLevel::from_u8_saturating(value))
    }
}

impl From<LogLevel> for u8 {
    fn from(level: LogLevel) -> Self {
        level as u8
    }
}
