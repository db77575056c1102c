//! Logging macros with printf-style format strings.
//!
//! Each argument is converted into an [`Arg`](crate::Arg) at the call site.
//! The per-level macros branch on a compile-time constant, so a level above
//! the build ceiling expands to code the compiler removes entirely: no
//! formatting, no runtime check, no arguments evaluated.
//!
//! # Examples
//!
//! ```
//! use micro_logger::prelude::*;
//! use micro_logger::{error, info};
//!
//! let sink = MemorySink::new();
//! let mut logger = Logger::new();
//! logger.set_sink(&sink);
//! logger.set_threshold(LogLevel::Info);
//!
//! info!(logger, "Hello %s %d", "world", 123);
//! error!(logger, "Error code: %u", 500u32);
//!
//! if micro_logger::core::config::INFO_ENABLED {
//!     assert_eq!(sink.contents(), "[info] Hello world 123\n[error] Error code: 500\n");
//! }
//! ```

/// Log at an explicit level, subject only to the runtime threshold.
///
/// # Examples
///
/// ```
/// # use micro_logger::prelude::*;
/// # let sink = MemorySink::new();
/// # let logger = Logger::builder().sink(&sink).threshold(LogLevel::Error).build();
/// use micro_logger::log;
/// log!(logger, LogLevel::Error, "Simple message");
/// log!(logger, LogLevel::Error, "Error code: %d", 500);
/// # assert_eq!(sink.count(), 2);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $fmt:expr $(, $arg:expr)* $(,)?) => {
        $logger.emit($level, $fmt, &[$($crate::Arg::from($arg)),*])
    };
}

/// Log a critical-level message.
///
/// # Examples
///
/// ```
/// # use micro_logger::prelude::*;
/// # let logger = Logger::new();
/// use micro_logger::critical;
/// critical!(logger, "Watchdog expired");
/// critical!(logger, "Stack overflow in task %s", "idle");
/// ```
#[macro_export]
macro_rules! critical {
    ($logger:expr, $($arg:tt)+) => {
        if $crate::core::config::CRITICAL_ENABLED {
            $crate::log!($logger, $crate::LogLevel::Critical, $($arg)+)
        }
    };
}

/// Log an error-level message.
///
/// # Examples
///
/// ```
/// # use micro_logger::prelude::*;
/// # let logger = Logger::new();
/// use micro_logger::error;
/// error!(logger, "Failed to mount filesystem");
/// error!(logger, "I2C NACK from 0x%X", 0x50u8);
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        if $crate::core::config::ERROR_ENABLED {
            $crate::log!($logger, $crate::LogLevel::Error, $($arg)+)
        }
    };
}

/// Log a warning-level message.
///
/// # Examples
///
/// ```
/// # use micro_logger::prelude::*;
/// # let logger = Logger::new();
/// use micro_logger::warning;
/// warning!(logger, "Low battery");
/// warning!(logger, "Retry attempt %d of %d", 3, 5);
/// ```
#[macro_export]
macro_rules! warning {
    ($logger:expr, $($arg:tt)+) => {
        if $crate::core::config::WARNING_ENABLED {
            $crate::log!($logger, $crate::LogLevel::Warning, $($arg)+)
        }
    };
}

/// Log an info-level message.
///
/// # Examples
///
/// ```
/// # use micro_logger::prelude::*;
/// # let logger = Logger::new();
/// use micro_logger::info;
/// info!(logger, "Application started");
/// info!(logger, "Processing %u items", 100u32);
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        if $crate::core::config::INFO_ENABLED {
            $crate::log!($logger, $crate::LogLevel::Info, $($arg)+)
        }
    };
}

/// Log a debug-level message.
///
/// # Examples
///
/// ```
/// # use micro_logger::prelude::*;
/// # let logger = Logger::new();
/// use micro_logger::debug;
/// debug!(logger, "Debug information");
/// debug!(logger, "Register value: 0x%x", 0x1Fu32);
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        if $crate::core::config::DEBUG_ENABLED {
            $crate::log!($logger, $crate::LogLevel::Debug, $($arg)+)
        }
    };
}
