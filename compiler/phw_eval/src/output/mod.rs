//! Output sink for script-visible text.
//!
//! Every byte a script produces goes through [`OutputHandler::write`], the
//! `write(stream, bytes)` boundary to the host. Writes are unbuffered and
//! single-pass: a short write is reported, never retried.
//!
//! Uses enum dispatch instead of trait objects; the handler is chosen once
//! when the engine is built.

use std::io::{self, Write};
use std::sync::Arc;

use parking_lot::Mutex;

/// Destination stream of a write.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StreamId {
    Stdout,
    Stderr,
}

/// Writes straight to the process's standard streams.
#[derive(Default)]
pub struct StdioOutput;

impl StdioOutput {
    pub fn write(&self, stream: StreamId, bytes: &[u8]) -> io::Result<usize> {
        match stream {
            StreamId::Stdout => {
                let mut out = io::stdout().lock();
                let written = out.write(bytes)?;
                out.flush()?;
                Ok(written)
            }
            StreamId::Stderr => io::stderr().lock().write(bytes),
        }
    }
}

/// Captures each stream into its own buffer.
///
/// Used by tests and by hosts embedding the engine.
#[derive(Default)]
pub struct BufferOutput {
    stdout: Mutex<Vec<u8>>,
    stderr: Mutex<Vec<u8>>,
}

impl BufferOutput {
    pub fn new() -> Self {
        Self::default()
    }

    fn buffer(&self, stream: StreamId) -> &Mutex<Vec<u8>> {
        match stream {
            StreamId::Stdout => &self.stdout,
            StreamId::Stderr => &self.stderr,
        }
    }

    pub fn write(&self, stream: StreamId, bytes: &[u8]) -> usize {
        self.buffer(stream).lock().extend_from_slice(bytes);
        bytes.len()
    }

    /// Everything written to `stream` so far.
    pub fn captured(&self, stream: StreamId) -> Vec<u8> {
        self.buffer(stream).lock().clone()
    }

    pub fn clear(&self) {
        self.stdout.lock().clear();
        self.stderr.lock().clear();
    }
}

/// Output sink implementation using enum dispatch.
pub enum OutputHandler {
    /// Process stdout/stderr (default).
    Stdio(StdioOutput),
    /// In-memory capture.
    Buffer(BufferOutput),
    /// Discards everything.
    Silent,
}

impl OutputHandler {
    /// Write `bytes` to `stream` in one pass, returning the count accepted.
    pub fn write(&self, stream: StreamId, bytes: &[u8]) -> io::Result<usize> {
        match self {
            Self::Stdio(h) => h.write(stream, bytes),
            Self::Buffer(h) => Ok(h.write(stream, bytes)),
            Self::Silent => Ok(bytes.len()),
        }
    }

    /// Captured bytes of `stream`.
    ///
    /// Empty for handlers that don't capture.
    pub fn captured(&self, stream: StreamId) -> Vec<u8> {
        match self {
            Self::Buffer(h) => h.captured(stream),
            Self::Stdio(_) | Self::Silent => Vec::new(),
        }
    }

    /// Captured standard output, lossily decoded.
    pub fn stdout_text(&self) -> String {
        String::from_utf8_lossy(&self.captured(StreamId::Stdout)).into_owned()
    }

    /// Captured standard error, lossily decoded.
    pub fn stderr_text(&self) -> String {
        String::from_utf8_lossy(&self.captured(StreamId::Stderr)).into_owned()
    }

    pub fn clear(&self) {
        if let Self::Buffer(h) = self {
            h.clear();
        }
    }
}

/// Best-effort write used by the engine and builtins.
///
/// A failed or short write is logged and otherwise ignored; bytes already
/// written are not retracted.
pub(crate) fn emit(output: &OutputHandler, stream: StreamId, bytes: &[u8]) {
    match output.write(stream, bytes) {
        Ok(written) if written < bytes.len() => {
            tracing::warn!(?stream, written, total = bytes.len(), "short write");
        }
        Ok(_) => {}
        Err(error) => tracing::warn!(?stream, %error, "write failed"),
    }
}

/// Output handler shared between the engine and its host.
pub type SharedOutput = Arc<OutputHandler>;

pub fn stdio_output() -> SharedOutput {
    Arc::new(OutputHandler::Stdio(StdioOutput))
}

pub fn buffer_output() -> SharedOutput {
    Arc::new(OutputHandler::Buffer(BufferOutput::new()))
}

pub fn silent_output() -> SharedOutput {
    Arc::new(OutputHandler::Silent)
}
