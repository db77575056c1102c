//! Stress tests for concurrent logging
//!
//! These tests verify:
//! - Each call reaches the sink as one whole message, even under contention
//! - No message is lost when the sink is mutex-guarded
//! - Filtering stays exact while many threads log at mixed levels

use micro_logger::prelude::*;
use micro_logger::{error, info, warning};
use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;

fn compiled_in(level: LogLevel) -> bool {
    level <= BUILD_CEILING
}

const THREADS: usize = 8;
const MESSAGES_PER_THREAD: usize = 500;

/// Concurrent writers never interleave bytes within a message
#[test]
fn test_messages_never_interleave() {
    let sink = WriterSink::new(Vec::new());
    let logger = Logger::builder().sink(&sink).threshold(LogLevel::Error).build();

    thread::scope(|s| {
        for t in 0..THREADS {
            let logger = &logger;
            s.spawn(move || {
                for i in 0..MESSAGES_PER_THREAD {
                    error!(logger, "thread %u message %u padding %s", t, i, "abcdefghijklmnop");
                }
            });
        }
    });

    let output = sink.with_writer(|w| String::from_utf8(w.clone()).expect("utf8 output"));
    let lines: Vec<&str> = output.lines().collect();
    if !compiled_in(LogLevel::Error) {
        assert!(lines.is_empty());
        return;
    }
    assert_eq!(lines.len(), THREADS * MESSAGES_PER_THREAD);

    let mut seen = HashSet::new();
    for line in &lines {
        let rest = line.strip_prefix("[error] thread ").expect("malformed line");
        let mut parts = rest.split(' ');
        let t: usize = parts.next().unwrap().parse().expect("thread id");
        assert_eq!(parts.next(), Some("message"));
        let i: usize = parts.next().unwrap().parse().expect("message id");
        assert_eq!(parts.next(), Some("padding"));
        assert_eq!(parts.next(), Some("abcdefghijklmnop"));
        assert!(parts.next().is_none());
        assert!(seen.insert((t, i)), "duplicate message {} {}", t, i);
    }
}

/// Exactly one sink call per emitted message
#[test]
fn test_one_write_per_message() {
    let calls = AtomicUsize::new(0);
    let sink = FnSink::new(|message: &[u8]| {
        assert_eq!(message.last(), Some(&b'\n'));
        assert_eq!(message.iter().filter(|&&b| b == b'\n').count(), 1);
        calls.fetch_add(1, Ordering::Relaxed);
    });
    let logger = Logger::builder().sink(&sink).threshold(LogLevel::Warning).build();

    thread::scope(|s| {
        for _ in 0..THREADS {
            s.spawn(|| {
                for i in 0..MESSAGES_PER_THREAD {
                    warning!(logger, "tick %d", i);
                    info!(logger, "filtered %d", i);
                }
            });
        }
    });

    let expected = usize::from(compiled_in(LogLevel::Warning)) * THREADS * MESSAGES_PER_THREAD;
    assert_eq!(calls.load(Ordering::Relaxed), expected);
}

/// Truncated messages from many threads all respect the buffer capacity
#[test]
fn test_concurrent_truncation() {
    let sink = MemorySink::new();
    let logger: Logger<'_, 32> = Logger::builder()
        .capacity::<32>()
        .sink(&sink)
        .threshold(LogLevel::Error)
        .build();
    let payload = "y".repeat(200);

    thread::scope(|s| {
        for _ in 0..THREADS {
            s.spawn(|| {
                for _ in 0..100 {
                    logger.error("%s", &[payload.as_str().into()]);
                }
            });
        }
    });

    let messages = sink.messages();
    assert_eq!(messages.len(), usize::from(compiled_in(LogLevel::Error)) * THREADS * 100);
    for message in messages {
        assert_eq!(message.len(), 31);
        assert!(message.starts_with(b"[error] yyyy"));
        assert_eq!(message[30], b'\n');
    }
}
