//! Error types for the logger system
//!
//! The logging path itself never fails. These errors belong to the
//! configuration surfaces (level parsing, environment configuration) and to
//! the `std` sinks, which record transport failures instead of reporting them
//! to the caller of `emit`.

pub type Result<T> = core::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// A level name that matches none of the known levels
    #[error("Invalid log level name")]
    InvalidLevelName,

    /// A raw level value above the most verbose level
    #[error("Invalid log level value: {0} (maximum is 5)")]
    InvalidLevelValue(u8),

    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration {
        component: &'static str,
        message: &'static str,
    },

    /// Transport error recorded by a sink
    #[cfg(feature = "std")]
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl LoggerError {
    /// Create an invalid configuration error
    pub fn config(component: &'static str, message: &'static str) -> Self {
        LoggerError::InvalidConfiguration { component, message }
    }
}
