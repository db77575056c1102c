//! Sink trait for log output destinations

/// Destination for finished log messages.
///
/// `write` receives one complete message per logging call: the `[level] `
/// prefix, the formatted text and the trailing newline, contiguous. The slice
/// is only valid for the duration of the call. Any transport failure is the
/// sink's own business; the logger never sees it.
pub trait Sink: Sync {
    fn write(&self, message: &[u8]);
}

impl<S: Sink + ?Sized> Sink for &S {
    #[inline]
    fn write(&self, message: &[u8]) {
        (**self).write(message)
    }
}

/// Sink backed by a callback receiving the whole message.
///
/// # Example
///
/// ```
/// use micro_logger::{FnSink, Logger, LogLevel};
///
/// let uart = FnSink::new(|message: &[u8]| {
///     // hand the bytes to a transmit FIFO
///     let _ = message;
/// });
/// let mut logger = Logger::new();
/// logger.set_sink(&uart);
/// logger.error("boot failed: %d", &[(-5).into()]);
/// ```
pub struct FnSink<F>(F);

impl<F> FnSink<F>
where
    F: Fn(&[u8]) + Sync,
{
    pub const fn new(f: F) -> Self {
        Self(f)
    }
}

impl<F> Sink for FnSink<F>
where
    F: Fn(&[u8]) + Sync,
{
    #[inline]
    fn write(&self, message: &[u8]) {
        (self.0)(message)
    }
}

/// Sink that feeds a message to a single-byte output routine, one byte at a
/// time (a `putchar`-style UART register write, for example).
pub struct ByteSink<F>(F);

impl<F> ByteSink<F>
where
    F: Fn(u8) + Sync,
{
    pub const fn new(f: F) -> Self {
        Self(f)
    }
}

impl<F> Sink for ByteSink<F>
where
    F: Fn(u8) + Sync,
{
    fn write(&self, message: &[u8]) {
        for &byte in message {
            (self.0)(byte);
        }
    }
}
