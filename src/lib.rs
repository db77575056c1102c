//! # Micro Logger
//!
//! A zero-allocation logging facility for resource-constrained targets:
//! bare metal, early boot, interrupt handlers.
//!
//! ## Features
//!
//! - **Bounded**: every message is formatted into a fixed stack buffer and
//!   silently truncated, never allocated
//! - **Two-tier filtering**: a build ceiling chosen with `max_level_*` cargo
//!   features removes disabled call sites entirely; a runtime threshold
//!   filters the rest before any formatting
//! - **printf-style**: `%d %i %u %x %X %s %c %%` over typed [`Arg`] values
//! - **One handoff**: each call hands its [`Sink`] one complete
//!   `"[level] text\n"` message
//! - **`no_std`**: disable the default `std` feature for bare-metal builds

#![cfg_attr(not(feature = "std"), no_std)]

pub mod core;
pub mod macros;
#[cfg(feature = "std")]
pub mod sinks;

pub mod prelude {
    pub use crate::core::{
        Arg, ByteSink, FnSink, LevelGate, LevelNames, LogLevel, Logger, LoggerBuilder,
        LoggerConfig, LoggerError, Result, Sink, BUILD_CEILING, DEFAULT_MESSAGE_CAPACITY,
    };
    #[cfg(feature = "std")]
    pub use crate::sinks::{ConsoleSink, MemorySink, WriterSink};
}

pub use crate::core::{
    Arg, ByteSink, Directive, Directives, FnSink, LevelGate, LevelNames, LogLevel, Logger,
    LoggerBuilder, LoggerConfig, LoggerError, MessageBuffer, Result, Sink, SliceWriter,
    BUILD_CEILING, DEFAULT_LEVEL_NAMES, DEFAULT_MESSAGE_CAPACITY,
};
#[cfg(feature = "std")]
pub use sinks::{ConsoleSink, MemorySink, WriterSink};
