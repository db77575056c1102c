//! Mutex-guarded sink over any `io::Write` transport

use crate::core::{LoggerError, Result, Sink};
use parking_lot::Mutex;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};

/// Serializes messages onto a writer (serial port, socket, file).
///
/// Each message goes out in one `write_all` under the lock. Write failures are
/// kept, not reported to the logger: the most recent one can be collected with
/// [`WriterSink::take_error`].
pub struct WriterSink<W: Write + Send> {
    writer: Mutex<W>,
    last_error: Mutex<Option<std::io::Error>>,
    failed_writes: AtomicU64,
}

impl<W: Write + Send> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
            last_error: Mutex::new(None),
            failed_writes: AtomicU64::new(0),
        }
    }

    /// Most recent write error, if any; clears it.
    pub fn take_error(&self) -> Option<LoggerError> {
        self.last_error.lock().take().map(LoggerError::from)
    }

    /// Number of messages whose write failed.
    pub fn failed_writes(&self) -> u64 {
        self.failed_writes.load(Ordering::Relaxed)
    }

    pub fn flush(&self) -> Result<()> {
        self.writer.lock().flush()?;
        Ok(())
    }

    /// Run `f` with exclusive access to the writer.
    pub fn with_writer<R>(&self, f: impl FnOnce(&mut W) -> R) -> R {
        f(&mut self.writer.lock())
    }
}

impl WriterSink<BufWriter<File>> {
    /// Open `path` for appending, creating it if needed.
    pub fn append_to_file(path: impl AsRef<Path>) -> Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path.as_ref())?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write + Send> Sink for WriterSink<W> {
    fn write(&self, message: &[u8]) {
        let result = self.writer.lock().write_all(message);
        if let Err(e) = result {
            self.failed_writes.fetch_add(1, Ordering::Relaxed);
            *self.last_error.lock() = Some(e);
        }
    }
}

impl<W: Write + Send> Drop for WriterSink<W> {
    fn drop(&mut self) {
        // Ensure all buffered data reaches the transport
        let _ = self.writer.get_mut().flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "uart detached"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_writes_whole_messages() {
        let sink = WriterSink::new(Vec::new());
        sink.write(b"[info] a\n");
        sink.write(b"[info] b\n");
        assert_eq!(sink.with_writer(|w| w.clone()), b"[info] a\n[info] b\n");
        assert!(sink.take_error().is_none());
    }

    #[test]
    fn test_errors_are_recorded_not_raised() {
        let sink = WriterSink::new(BrokenPipe);
        sink.write(b"[error] lost\n");
        sink.write(b"[error] lost again\n");

        assert_eq!(sink.failed_writes(), 2);
        let err = sink.take_error().unwrap();
        assert!(matches!(err, LoggerError::IoError(_)));
        assert!(sink.take_error().is_none());
    }
}
