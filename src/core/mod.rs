//! Core logger types and traits

pub mod buffer;
pub mod config;
pub mod error;
pub mod format;
pub mod gate;
pub mod log_level;
pub mod logger;
pub mod numeric;
pub mod sink;

pub use buffer::{MessageBuffer, SliceWriter};
pub use config::{
    LevelNames, LoggerConfig, BUILD_CEILING, DEFAULT_LEVEL_NAMES, DEFAULT_MESSAGE_CAPACITY,
};
pub use error::{LoggerError, Result};
pub use format::{format, Arg, Directive, Directives};
pub use gate::LevelGate;
pub use log_level::LogLevel;
pub use logger::{Logger, LoggerBuilder};
pub use sink::{ByteSink, FnSink, Sink};
