//! Pool of reusable byte buffers
//!
//! Each log call takes a buffer from the pool to compose its message into,
//! and the writer thread hands the buffer back once the line is rendered.
//! An empty pool never blocks: it allocates a fresh buffer instead.

use parking_lot::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

/// Capacity of newly allocated buffers
pub const DEFAULT_BUFFER_CAPACITY: usize = 512;

/// Maximum number of idle buffers kept in the pool
pub const DEFAULT_MAX_RETAINED: usize = 256;

/// Buffers that grew beyond this capacity are freed instead of pooled
pub const MAX_RETAINED_CAPACITY: usize = 64 * 1024;

#[derive(Debug)]
pub struct BufferPool {
    buffers: Mutex<Vec<Vec<u8>>>,
    buffer_capacity: usize,
    max_retained: usize,
    allocated: AtomicU64,
}

impl BufferPool {
    pub fn new() -> Self {
        Self::with_limits(DEFAULT_BUFFER_CAPACITY, DEFAULT_MAX_RETAINED)
    }

    /// Create a pool with a custom initial buffer capacity and idle limit
    pub fn with_limits(buffer_capacity: usize, max_retained: usize) -> Self {
        Self {
            buffers: Mutex::new(Vec::with_capacity(max_retained.min(DEFAULT_MAX_RETAINED))),
            buffer_capacity,
            max_retained,
            allocated: AtomicU64::new(0),
        }
    }

    /// Take an empty buffer, allocating one if the pool has none
    pub fn acquire(&self) -> Vec<u8> {
        let pooled = self.buffers.lock().pop();
        if let Some(mut buffer) = pooled {
            buffer.clear();
            return buffer;
        }

        self.allocated.fetch_add(1, Ordering::Relaxed);
        Vec::with_capacity(self.buffer_capacity)
    }

    /// Give a buffer back for reuse. Its contents do not need to be cleared.
    pub fn release(&self, buffer: Vec<u8>) {
        if buffer.capacity() > MAX_RETAINED_CAPACITY {
            return;
        }

        let mut buffers = self.buffers.lock();
        if buffers.len() < self.max_retained {
            buffers.push(buffer);
        }
    }

    /// Number of buffers this pool has allocated over its lifetime
    pub fn allocated(&self) -> u64 {
        self.allocated.load(Ordering::Relaxed)
    }

    /// Number of idle buffers currently pooled
    pub fn available(&self) -> usize {
        self.buffers.lock().len()
    }
}

impl Default for BufferPool {
    fn default() -> Self {
        Self::new()
    }
}
