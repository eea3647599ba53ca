//! Output sinks
//!
//! The writer thread needs exactly one operation from its destination:
//! write a byte slice once and report how much was accepted. Every
//! `std::io::Write + Send` type (files, sockets, `Stdout`, `Vec<u8>`) already
//! provides that, so it is a [`Sink`] as-is.

pub mod file;
pub mod memory;

pub use file::FileSink;
pub use memory::MemorySink;

use std::io;

/// Destination for rendered log lines
pub trait Sink: Send {
    /// Write one rendered line with a single underlying write call
    fn write_record(&mut self, bytes: &[u8]) -> io::Result<usize>;
}

impl<W: io::Write + Send + ?Sized> Sink for W {
    #[inline]
    fn write_record(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.write(bytes)
    }
}
