//! In-memory sink

use crate::core::Sink;
use parking_lot::Mutex;
use std::io::{self, Write};
use std::sync::Arc;

#[derive(Debug, Default)]
struct MemoryState {
    bytes: Vec<u8>,
    closed: bool,
}

/// A cloneable in-memory sink.
///
/// Clones share the same storage, so one clone can be handed to a logger while
/// another is kept to inspect what was written.
///
/// # Example
///
/// ```
/// use pooled_logger::{Logger, MemorySink};
///
/// let sink = MemorySink::new();
/// let logger = Logger::new();
/// logger.set_output(sink.clone());
///
/// logger.info("captured");
/// assert!(sink.contents().ends_with(" Info msg: captured\n"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    state: Arc<Mutex<MemoryState>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, decoded lossily.
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.state.lock().bytes).into_owned()
    }

    pub fn bytes(&self) -> Vec<u8> {
        self.state.lock().bytes.clone()
    }

    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(String::from).collect()
    }

    pub fn len(&self) -> usize {
        self.state.lock().bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.state.lock().bytes.clear();
    }

    pub fn is_closed(&self) -> bool {
        self.state.lock().closed
    }
}

impl Write for MemorySink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut state = self.state.lock();
        if state.closed {
            return Err(io::Error::new(
                io::ErrorKind::BrokenPipe,
                "memory sink is closed",
            ));
        }
        state.bytes.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Sink for MemorySink {
    fn close(&mut self) -> io::Result<()> {
        self.state.lock().closed = true;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_storage() {
        let sink = MemorySink::new();
        let mut writer = sink.clone();

        writer.write_all(b"one\ntwo\n").unwrap();

        assert_eq!(sink.contents(), "one\ntwo\n");
        assert_eq!(sink.lines(), vec!["one", "two"]);
        assert_eq!(sink.len(), 8);

        sink.clear();
        assert!(writer.is_empty());
    }

    #[test]
    fn test_write_after_close_fails() {
        let mut sink = MemorySink::new();
        sink.write_all(b"before\n").unwrap();
        sink.close().unwrap();

        assert!(sink.is_closed());
        let err = sink.write_all(b"after\n").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
        assert_eq!(sink.contents(), "before\n");
    }
}
