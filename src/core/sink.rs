//! Sink trait for log output destinations

use std::io::{self, Write};

/// A byte stream rendered lines are written to.
///
/// Sinks that hold a releasable resource override [`Sink::close`]; for every
/// other writer closing is a no-op.
pub trait Sink: Write + Send {
    fn close(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Sink for io::Stdout {}

impl Sink for io::Stderr {}

impl Sink for Vec<u8> {}

impl<S: Sink + ?Sized> Sink for Box<S> {
    fn close(&mut self) -> io::Result<()> {
        (**self).close()
    }
}
