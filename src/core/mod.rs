//! Core logger types

pub mod buffer_pool;
pub mod clock;
pub mod compose;
pub mod config;
pub mod dispatcher;
pub mod error;
pub mod level_filter;
pub mod logger;
pub mod metrics;
pub mod record;
pub mod severity;
pub mod timestamp;

pub use buffer_pool::BufferPool;
pub use clock::{ClockCache, DEFAULT_CLOCK_REFRESH};
pub use compose::{compose, compose_into, NO_ARGS};
pub use config::{LabelStyle, LoggerConfig};
pub use dispatcher::{Dispatcher, Writer};
pub use error::{LoggerError, Result};
pub use level_filter::{should_log, LevelFilter};
pub use logger::{Logger, LoggerBuilder, DEFAULT_SHUTDOWN_TIMEOUT};
pub use metrics::LoggerMetrics;
pub use record::PendingRecord;
pub use severity::Severity;
pub use timestamp::TimestampFormat;
