//! Console sink implementation

use crate::core::Sink;
use std::io::Write;

/// Which standard stream a [`ConsoleSink`] writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConsoleStream {
    #[default]
    Stdout,
    Stderr,
}

/// Writes each message to stdout or stderr with a single locked `write_all`,
/// so concurrent messages never interleave.
#[derive(Debug, Default)]
pub struct ConsoleSink {
    stream: ConsoleStream,
}

impl ConsoleSink {
    pub const fn new() -> Self {
        Self {
            stream: ConsoleStream::Stdout,
        }
    }

    pub const fn stderr() -> Self {
        Self {
            stream: ConsoleStream::Stderr,
        }
    }

    pub fn stream(&self) -> ConsoleStream {
        self.stream
    }
}

impl Sink for ConsoleSink {
    fn write(&self, message: &[u8]) {
        // Console failures have nowhere to be reported.
        let _ = match self.stream {
            ConsoleStream::Stdout => std::io::stdout().lock().write_all(message),
            ConsoleStream::Stderr => std::io::stderr().lock().write_all(message),
        };
    }
}
