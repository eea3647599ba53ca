//! In-memory sink

use parking_lot::Mutex;
use std::io::{self, Write};
use std::sync::Arc;

/// Records every write in memory.
///
/// Clones share the same storage, so one clone can be given to a logger
/// while another is kept to inspect what was written. Each `write` call is
/// kept as a separate chunk.
///
/// ```
/// use minlog::{Logger, MemorySink, DEFAULT_SHUTDOWN_TIMEOUT};
///
/// let sink = MemorySink::new();
/// let mut logger = Logger::new(sink.clone()).unwrap();
/// logger.info("hello");
/// logger.shutdown(DEFAULT_SHUTDOWN_TIMEOUT);
///
/// assert!(sink.contents_string().ends_with(" [INFO] hello\n"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    writes: Arc<Mutex<Vec<Vec<u8>>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every write call's bytes, in order
    pub fn writes(&self) -> Vec<Vec<u8>> {
        self.writes.lock().clone()
    }

    pub fn write_count(&self) -> usize {
        self.writes.lock().len()
    }

    pub fn contents(&self) -> Vec<u8> {
        self.writes.lock().concat()
    }

    pub fn contents_string(&self) -> String {
        String::from_utf8_lossy(&self.contents()).into_owned()
    }

    pub fn lines(&self) -> Vec<String> {
        self.contents_string().lines().map(String::from).collect()
    }

    pub fn clear(&self) {
        self.writes.lock().clear();
    }
}

impl Write for MemorySink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.writes.lock().push(buf.to_vec());
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
