//! Adapter for arbitrary writers

use crate::core::Sink;
use std::io::{self, Write};

/// Wraps any `Write + Send` value as a [`Sink`] without a close operation.
#[derive(Debug, Default)]
pub struct WriterSink<W> {
    inner: W,
}

impl<W: Write + Send> WriterSink<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write + Send> Write for WriterSink<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.inner.write(buf)
    }

    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        self.inner.write_all(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

impl<W: Write + Send> Sink for WriterSink<W> {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_writer_sink_passthrough() {
        let mut sink = WriterSink::new(Cursor::new(Vec::new()));
        sink.write_all(b"line\n").unwrap();
        sink.close().unwrap();
        sink.write_all(b"still open\n").unwrap();

        assert_eq!(sink.into_inner().into_inner(), b"line\nstill open\n");
    }
}
