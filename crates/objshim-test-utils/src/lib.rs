//! Test utilities for objshim development.
//!
//! Provides [`capture_logs`], which runs a closure under a thread-scoped
//! `tracing` subscriber and hands back everything it printed, so tests can
//! assert on the lifecycle trace without touching the global subscriber.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::io;
use std::sync::{Arc, Mutex};

use tracing::Level;

/// Shared in-memory sink for formatted log output.
///
/// Clones write into the same buffer.
#[derive(Clone, Default)]
pub struct LogBuffer {
    buf: Arc<Mutex<Vec<u8>>>,
}

impl LogBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, lossily decoded as UTF-8.
    pub fn contents(&self) -> String {
        let buf = self.buf.lock().unwrap();
        String::from_utf8_lossy(&buf).into_owned()
    }

    /// Non-empty output lines.
    pub fn lines(&self) -> Vec<String> {
        self.contents()
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(str::to_owned)
            .collect()
    }
}

impl io::Write for LogBuffer {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.buf.lock().unwrap().extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Run `f` with a subscriber that records every event at `DEBUG` and above
/// on the current thread.
///
/// Output is plain text with no timestamps or ANSI colour, one event per
/// line, structured fields rendered as `key=value`.
pub fn capture_logs<R>(f: impl FnOnce() -> R) -> (R, LogBuffer) {
    let buf = LogBuffer::new();
    let writer = buf.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_max_level(Level::DEBUG)
        .with_ansi(false)
        .without_time()
        .finish();
    let out = tracing::subscriber::with_default(subscriber, f);
    (out, buf)
}
