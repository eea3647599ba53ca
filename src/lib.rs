//! # minlog
//!
//! A minimal asynchronous logging core.
//!
//! ## Features
//!
//! - **Non-blocking I/O for callers**: log calls filter and compose, then
//!   hand the record to a dedicated writer thread that owns the sink
//! - **Ordered output**: one writer, one `write` per line, in hand-off order
//! - **Pooled buffers**: message buffers are recycled instead of allocated per call
//! - **Cached clock**: the timestamp is rendered on an interval, not per call
//!
//! ## Example
//!
//! ```
//! use minlog::prelude::*;
//!
//! let sink = MemorySink::new();
//! let mut logger = Logger::builder()
//!     .min_level(Severity::Info)
//!     .target(sink.clone())
//!     .build()?;
//!
//! logger.info("hello");
//! logger.debug("filtered out");
//! logger.shutdown(DEFAULT_SHUTDOWN_TIMEOUT);
//!
//! assert_eq!(sink.lines().len(), 1);
//! assert!(sink.lines()[0].ends_with(" [INFO] hello"));
//! # Ok::<(), LoggerError>(())
//! ```

pub mod core;
pub mod macros;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{
        LabelStyle, Logger, LoggerBuilder, LoggerConfig, LoggerError, LoggerMetrics, Result,
        Severity, TimestampFormat, DEFAULT_SHUTDOWN_TIMEOUT, NO_ARGS,
    };
    pub use crate::sinks::{FileSink, MemorySink, Sink};
}

pub use crate::core::{
    compose, should_log, BufferPool, ClockCache, LabelStyle, LevelFilter, Logger, LoggerBuilder,
    LoggerConfig, LoggerError, LoggerMetrics, PendingRecord, Result, Severity, TimestampFormat,
    DEFAULT_SHUTDOWN_TIMEOUT, NO_ARGS,
};
pub use crate::sinks::{FileSink, MemorySink, Sink};
