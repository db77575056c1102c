//! In-memory sink that keeps every message it receives

use crate::core::Sink;
use parking_lot::Mutex;

/// Captures messages for later inspection.
///
/// # Example
///
/// ```
/// use micro_logger::prelude::*;
///
/// let sink = MemorySink::new();
/// let mut logger = Logger::new();
/// logger.set_sink(&sink);
/// logger.set_threshold(LogLevel::Info);
///
/// logger.info("Hex: 0x%x", &[255u32.into()]);
/// if micro_logger::core::config::INFO_ENABLED {
///     assert_eq!(sink.contents(), "[info] Hex: 0xff\n");
/// }
/// ```
#[derive(Debug, Default)]
pub struct MemorySink {
    messages: Mutex<Vec<Vec<u8>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every message received so far, in arrival order.
    pub fn messages(&self) -> Vec<Vec<u8>> {
        self.messages.lock().clone()
    }

    pub fn last(&self) -> Option<Vec<u8>> {
        self.messages.lock().last().cloned()
    }

    pub fn count(&self) -> usize {
        self.messages.lock().len()
    }

    /// All messages concatenated, decoded lossily as UTF-8.
    pub fn contents(&self) -> String {
        let messages = self.messages.lock();
        messages
            .iter()
            .map(|m| String::from_utf8_lossy(m))
            .collect()
    }

    pub fn clear(&self) {
        self.messages.lock().clear();
    }
}

impl Sink for MemorySink {
    fn write(&self, message: &[u8]) {
        self.messages.lock().push(message.to_vec());
    }
}
