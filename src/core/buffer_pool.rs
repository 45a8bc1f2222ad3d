//! Reusable byte buffers for rendering log lines
//!
//! Every emitted line is assembled in a [`Buffer`] taken from a [`BufferPool`]
//! and handed back after the sink write, so steady-state logging allocates
//! nothing for message assembly.

use crossbeam_channel::{bounded, Receiver, Sender};
use std::fmt;

/// Default number of free buffers a pool keeps around
pub const DEFAULT_MAX_RETAINED: usize = 256;

/// Default starting capacity of a freshly allocated buffer
pub const DEFAULT_BUFFER_CAPACITY: usize = 256;

/// Buffers that grew past this are dropped instead of retained
pub const MAX_RETAINED_CAPACITY: usize = 64 * 1024;

/// A growable byte buffer owned by exactly one log call at a time.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Buffer {
    bytes: Vec<u8>,
}

impl Buffer {
    pub fn new() -> Self {
        Self { bytes: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            bytes: Vec::with_capacity(capacity),
        }
    }

    /// Empty the buffer, keeping its allocation.
    #[inline]
    pub fn reset(&mut self) {
        self.bytes.clear();
    }

    #[inline]
    pub fn push_str(&mut self, s: &str) {
        self.bytes.extend_from_slice(s.as_bytes());
    }

    #[inline]
    pub fn push_bytes(&mut self, bytes: &[u8]) {
        self.bytes.extend_from_slice(bytes);
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Contents as text, replacing invalid UTF-8 sequences.
    pub fn as_str_lossy(&self) -> std::borrow::Cow<'_, str> {
        String::from_utf8_lossy(&self.bytes)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.bytes.capacity()
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.bytes
    }
}

impl fmt::Write for Buffer {
    #[inline]
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.push_str(s);
        Ok(())
    }
}

impl std::io::Write for Buffer {
    #[inline]
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.bytes.extend_from_slice(buf);
        Ok(buf.len())
    }

    #[inline]
    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

/// A concurrency-safe free list of [`Buffer`]s.
///
/// The free list is a bounded channel: `get` never blocks (it allocates when the
/// list is empty) and `put` never blocks (it drops the buffer when the list is
/// full). Buffers move in and out by value, so a buffer that has been `put`
/// back cannot be touched by its previous owner.
#[derive(Debug, Clone)]
pub struct BufferPool {
    sender: Sender<Buffer>,
    receiver: Receiver<Buffer>,
    buffer_capacity: usize,
}

impl BufferPool {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_MAX_RETAINED, DEFAULT_BUFFER_CAPACITY)
    }

    /// # Arguments
    /// * `max_retained` - Maximum number of free buffers kept for reuse
    /// * `buffer_capacity` - Starting capacity of newly allocated buffers
    pub fn with_capacity(max_retained: usize, buffer_capacity: usize) -> Self {
        let (sender, receiver) = bounded(max_retained.max(1));
        Self {
            sender,
            receiver,
            buffer_capacity,
        }
    }

    /// Take an empty buffer, recycled when one is available.
    #[inline]
    pub fn get(&self) -> Buffer {
        match self.receiver.try_recv() {
            Ok(mut buffer) => {
                buffer.reset();
                buffer
            }
            Err(_) => Buffer::with_capacity(self.buffer_capacity),
        }
    }

    /// Return a buffer for reuse.
    #[inline]
    pub fn put(&self, mut buffer: Buffer) {
        if buffer.capacity() > MAX_RETAINED_CAPACITY {
            return;
        }
        buffer.reset();
        // Full pool: the buffer is simply dropped.
        let _ = self.sender.try_send(buffer);
    }

    /// Number of free buffers currently retained.
    pub fn available(&self) -> usize {
        self.receiver.len()
    }
}

impl Default for BufferPool {
    fn default() -> Self {
        Self::new()
    }
}
