//! Main logger implementation

use super::{
    buffer::MessageBuffer,
    config::{
        LevelNames, LoggerConfig, CRITICAL_ENABLED, DEBUG_ENABLED, DEFAULT_LEVEL_NAMES,
        DEFAULT_MESSAGE_CAPACITY, ERROR_ENABLED, INFO_ENABLED, WARNING_ENABLED,
    },
    format::{self, Arg},
    gate::LevelGate,
    log_level::LogLevel,
    sink::Sink,
};

/// Logging handle: runtime threshold, active sink and level names.
///
/// `N` is the capacity of the stack buffer each call formats into.
///
/// Configuration methods take `&mut self`, so the threshold and sink can only
/// change while nobody else holds the logger. `emit` takes `&self` and may be
/// called concurrently from several threads when the sink allows it; each call
/// hands the sink exactly one complete message.
pub struct Logger<'s, const N: usize = DEFAULT_MESSAGE_CAPACITY> {
    gate: LevelGate,
    sink: Option<&'s dyn Sink>,
    level_names: LevelNames,
}

impl<'s> Logger<'s> {
    /// A logger with the default buffer capacity, no sink, and its threshold
    /// at the build ceiling.
    #[must_use]
    pub const fn new() -> Self {
        Self::with_capacity()
    }

    /// Create a builder for Logger
    ///
    /// # Example
    /// ```
    /// use micro_logger::prelude::*;
    ///
    /// let sink = MemorySink::new();
    /// let logger = Logger::builder()
    ///     .threshold(LogLevel::Error)
    ///     .sink(&sink)
    ///     .build();
    /// assert_eq!(logger.threshold(), LogLevel::Error.min(BUILD_CEILING));
    /// ```
    #[must_use]
    pub const fn builder() -> LoggerBuilder<'s> {
        LoggerBuilder::new()
    }
}

impl<'s, const N: usize> Logger<'s, N> {
    /// A logger whose buffer capacity is `N` bytes.
    #[must_use]
    pub const fn with_capacity() -> Self {
        Self {
            gate: LevelGate::new(),
            sink: None,
            level_names: DEFAULT_LEVEL_NAMES,
        }
    }

    /// Install the sink that receives finished messages.
    pub fn set_sink(&mut self, sink: &'s dyn Sink) {
        self.sink = Some(sink);
    }

    /// Remove the sink; later calls are silent no-ops. The threshold is kept.
    pub fn clear_sink(&mut self) {
        self.sink = None;
    }

    /// Replace the sink, `None` disabling output.
    pub fn replace_sink(&mut self, sink: Option<&'s dyn Sink>) -> Option<&'s dyn Sink> {
        core::mem::replace(&mut self.sink, sink)
    }

    #[inline]
    pub fn is_sink_configured(&self) -> bool {
        self.sink.is_some()
    }

    /// Set the runtime threshold; values above the build ceiling are clamped.
    pub fn set_threshold(&mut self, level: LogLevel) {
        self.gate.set_threshold(level);
    }

    #[inline]
    pub fn threshold(&self) -> LogLevel {
        self.gate.threshold()
    }

    #[inline]
    pub fn ceiling(&self) -> LogLevel {
        self.gate.ceiling()
    }

    #[inline]
    pub fn should_emit(&self, level: LogLevel) -> bool {
        self.gate.should_emit(level)
    }

    pub fn set_level_names(&mut self, names: LevelNames) {
        self.level_names = names;
    }

    #[inline]
    pub fn level_names(&self) -> &LevelNames {
        &self.level_names
    }

    /// Apply runtime configuration. Fields left unset keep their value.
    pub fn apply_config(&mut self, config: &LoggerConfig) {
        if let Some(level) = config.threshold {
            self.set_threshold(level);
        }
    }

    #[inline]
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Format and deliver one message.
    ///
    /// Does nothing when no sink is set, when `format` is `None`, or when
    /// `level` does not pass the runtime threshold; filtering happens before
    /// any formatting. Otherwise the sink receives
    /// `"[<name>] <formatted text>\n"` in a single `write`, at most `N - 1`
    /// bytes long. A truncated message still ends with the newline.
    pub fn emit<'f>(&self, level: LogLevel, format: impl Into<Option<&'f str>>, args: &[Arg<'_>]) {
        let Some(sink) = self.sink else {
            return;
        };
        let Some(format) = format.into() else {
            return;
        };
        if !self.gate.should_emit(level) {
            return;
        }

        let mut buffer = MessageBuffer::<N>::new();
        buffer.write_with(|w| {
            w.push(b"[");
            w.push(self.level_names.name(level).as_bytes());
            w.push(b"] ");
            format::format_into(w, format, args);
        });
        buffer.terminate();

        sink.write(buffer.as_bytes());
    }

    #[inline(always)]
    pub fn critical(&self, format: &str, args: &[Arg<'_>]) {
        if CRITICAL_ENABLED {
            self.emit(LogLevel::Critical, format, args);
        }
    }

    #[inline(always)]
    pub fn error(&self, format: &str, args: &[Arg<'_>]) {
        if ERROR_ENABLED {
            self.emit(LogLevel::Error, format, args);
        }
    }

    #[inline(always)]
    pub fn warning(&self, format: &str, args: &[Arg<'_>]) {
        if WARNING_ENABLED {
            self.emit(LogLevel::Warning, format, args);
        }
    }

    #[inline(always)]
    pub fn info(&self, format: &str, args: &[Arg<'_>]) {
        if INFO_ENABLED {
            self.emit(LogLevel::Info, format, args);
        }
    }

    #[inline(always)]
    pub fn debug(&self, format: &str, args: &[Arg<'_>]) {
        if DEBUG_ENABLED {
            self.emit(LogLevel::Debug, format, args);
        }
    }
}

impl Default for Logger<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> core::fmt::Debug for Logger<'_, N> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Logger")
            .field("threshold", &self.threshold())
            .field("ceiling", &self.ceiling())
            .field("sink_configured", &self.is_sink_configured())
            .field("capacity", &N)
            .finish()
    }
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```
/// use micro_logger::prelude::*;
///
/// let sink = MemorySink::new();
/// let logger = Logger::builder()
///     .capacity::<64>()
///     .config(&LoggerConfig::new().with_threshold(LogLevel::Warning))
///     .sink(&sink)
///     .build();
///
/// logger.warning("fan %u rpm", &[900u32.into()]);
/// if micro_logger::core::config::WARNING_ENABLED {
///     assert_eq!(sink.last().unwrap(), b"[warning] fan 900 rpm\n");
/// }
/// assert_eq!(logger.capacity(), 64);
/// ```
pub struct LoggerBuilder<'s, const N: usize = DEFAULT_MESSAGE_CAPACITY> {
    threshold: Option<LogLevel>,
    sink: Option<&'s dyn Sink>,
    level_names: LevelNames,
}

impl<'s> LoggerBuilder<'s> {
    /// Create a new builder with default values
    pub const fn new() -> Self {
        Self {
            threshold: None,
            sink: None,
            level_names: DEFAULT_LEVEL_NAMES,
        }
    }
}

impl<'s, const N: usize> LoggerBuilder<'s, N> {
    /// Set the runtime threshold (clamped on build)
    #[must_use = "builder methods return a new value"]
    pub fn threshold(mut self, level: LogLevel) -> Self {
        self.threshold = Some(level);
        self
    }

    /// Set the output sink
    #[must_use = "builder methods return a new value"]
    pub fn sink(mut self, sink: &'s dyn Sink) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Override the `[name]` prefix table
    #[must_use = "builder methods return a new value"]
    pub fn level_names(mut self, names: LevelNames) -> Self {
        self.level_names = names;
        self
    }

    /// Take the threshold from a runtime configuration, if it sets one
    #[must_use = "builder methods return a new value"]
    pub fn config(mut self, config: &LoggerConfig) -> Self {
        if let Some(level) = config.threshold {
            self.threshold = Some(level);
        }
        self
    }

    /// Change the message buffer capacity
    #[must_use = "builder methods return a new value"]
    pub fn capacity<const M: usize>(self) -> LoggerBuilder<'s, M> {
        LoggerBuilder {
            threshold: self.threshold,
            sink: self.sink,
            level_names: self.level_names,
        }
    }

    /// Build the Logger
    pub fn build(self) -> Logger<'s, N> {
        let mut logger = Logger::with_capacity();
        if let Some(level) = self.threshold {
            logger.set_threshold(level);
        }
        logger.sink = self.sink;
        logger.level_names = self.level_names;
        logger
    }
}

impl Default for LoggerBuilder<'_> {
    fn default() -> Self {
        Self::new()
    }
}
