//! Main logger implementation

use super::{
    buffer_pool::BufferPool,
    clock::ClockCache,
    compose::{compose_into, BytesWriter, NO_ARGS},
    config::{LabelStyle, LoggerConfig},
    dispatcher::{Dispatcher, Writer},
    error::Result,
    level_filter::LevelFilter,
    metrics::LoggerMetrics,
    record::PendingRecord,
    severity::Severity,
    timestamp::TimestampFormat,
};
use crate::sinks::Sink;
use std::fmt::Display;
use std::io;
use std::sync::Arc;
use std::time::Duration;

/// Default shutdown timeout for logger cleanup (5 seconds)
///
/// This timeout is used when the logger is dropped without explicit shutdown.
/// For custom timeout control, use the `shutdown()` method instead.
pub const DEFAULT_SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(5);

/// Logger handle shared by every producing thread.
///
/// `Logger` is `Send + Sync`; share it by reference or behind an `Arc`.
/// Each logger runs two background threads for its whole life: the clock
/// refresher and the writer.
pub struct Logger {
    config: LoggerConfig,
    filter: LevelFilter,
    pool: Arc<BufferPool>,
    clock: ClockCache,
    dispatcher: Dispatcher,
    metrics: Arc<LoggerMetrics>,
}

impl Logger {
    /// Create a logger with default settings writing to `target`
    pub fn new<S: Sink + 'static>(target: S) -> Result<Self> {
        Self::builder().target(target).build()
    }

    fn start(config: LoggerConfig, sink: Box<dyn Sink>) -> Result<Self> {
        config.validate()?;

        let pool = Arc::new(BufferPool::new());
        let metrics = Arc::new(LoggerMetrics::new());
        let clock = ClockCache::start(config.time_format.clone(), config.clock_refresh_interval())?;
        let writer = Writer::new(
            sink,
            Arc::clone(&pool),
            Arc::clone(&metrics),
            config.label_style,
        );
        let dispatcher = Dispatcher::start(config.queue_capacity, writer)?;

        Ok(Self {
            filter: config.level_filter(),
            config,
            pool,
            clock,
            dispatcher,
            metrics,
        })
    }

    /// Whether a record at `severity` would be written
    #[inline]
    pub fn is_enabled(&self, severity: Severity) -> bool {
        self.filter.allows(severity)
    }

    /// Log `template` formatted with `args` at `severity`.
    ///
    /// Out-of-band severities return immediately, before any buffer is
    /// taken. Otherwise the call blocks until the writer thread accepts the
    /// record. See [`compose`](super::compose::compose) for how `template`
    /// and `args` combine.
    pub fn log(&self, severity: Severity, template: &str, args: &[&dyn Display]) {
        if !self.filter.allows(severity) {
            self.metrics.record_filtered();
            return;
        }

        let mut body = self.pool.acquire();
        // Only an argument's Display impl can fail; keep what was written.
        let _ = compose_into(&mut BytesWriter(&mut body), template, args);

        let record = PendingRecord::new(severity, self.clock.snapshot(), body);
        match self.dispatcher.hand_off(record) {
            Ok(()) => {
                self.metrics.record_handed_off();
            }
            Err(record) => self.pool.release(record.into_body()),
        }
    }

    #[inline]
    pub fn debug(&self, message: &str) {
        self.log(Severity::Debug, message, NO_ARGS);
    }

    #[inline]
    pub fn info(&self, message: &str) {
        self.log(Severity::Info, message, NO_ARGS);
    }

    /// Info-level log with printf-style arguments
    #[inline]
    pub fn infof(&self, template: &str, args: &[&dyn Display]) {
        self.log(Severity::Info, template, args);
    }

    #[inline]
    pub fn warn(&self, message: &str) {
        self.log(Severity::Warn, message, NO_ARGS);
    }

    #[inline]
    pub fn error(&self, message: &str) {
        self.log(Severity::Error, message, NO_ARGS);
    }

    /// Log at `Fatal`. The process keeps running.
    #[inline]
    pub fn fatal(&self, message: &str) {
        self.log(Severity::Fatal, message, NO_ARGS);
    }

    pub fn config(&self) -> &LoggerConfig {
        &self.config
    }

    /// Get the logger metrics for detailed observability
    ///
    /// # Example
    ///
    /// ```
    /// use minlog::{Logger, Severity};
    ///
    /// let logger = Logger::builder().min_level(Severity::Warn).build().unwrap();
    /// logger.info("below the band");
    /// assert_eq!(logger.metrics().filtered(), 1);
    /// ```
    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    /// The pool message buffers are drawn from
    pub fn buffer_pool(&self) -> &BufferPool {
        &self.pool
    }

    /// The most recently cached timestamp
    pub fn timestamp(&self) -> Arc<str> {
        self.clock.snapshot()
    }

    /// Stop accepting records and wait for the writer to drain.
    ///
    /// Everything handed off before this call is written before the writer
    /// exits. Log calls made afterwards are discarded.
    ///
    /// **Note**: When the logger is dropped without calling `shutdown()` explicitly,
    /// it uses [`DEFAULT_SHUTDOWN_TIMEOUT`] (5 seconds).
    ///
    /// # Returns
    ///
    /// `true` if the writer finished within `timeout`, `false` otherwise
    ///
    /// # Example
    ///
    /// ```no_run
    /// use minlog::Logger;
    /// use std::time::Duration;
    ///
    /// let mut logger = Logger::new(std::io::stdout()).unwrap();
    /// logger.info("Important message");
    ///
    /// if !logger.shutdown(Duration::from_secs(10)) {
    ///     eprintln!("Warning: Logger shutdown timed out");
    /// }
    /// ```
    pub fn shutdown(&mut self, timeout: Duration) -> bool {
        let drained = self.dispatcher.close(timeout);
        self.clock.stop();
        drained
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        self.shutdown(DEFAULT_SHUTDOWN_TIMEOUT);

        let failed = self.metrics.write_failures() + self.metrics.short_writes();
        if failed > 0 {
            eprintln!(
                "[LOGGER WARNING] Logger shutting down with {} failed writes (failure rate: {:.2}%)",
                failed,
                self.metrics.failure_rate()
            );
        }
    }
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```
/// use minlog::prelude::*;
///
/// let sink = MemorySink::new();
/// let logger = Logger::builder()
///     .level_range(Severity::Info, Severity::Fatal)
///     .time_format(TimestampFormat::Iso8601)
///     .clock_refresh_interval_ms(250)
///     .target(sink.clone())
///     .build()
///     .unwrap();
/// ```
pub struct LoggerBuilder {
    config: LoggerConfig,
    target: Option<Box<dyn Sink>>,
}

impl LoggerBuilder {
    pub fn new() -> Self {
        Self {
            config: LoggerConfig::default(),
            target: None,
        }
    }

    /// Replace every setting with `config`
    #[must_use = "builder methods return a new value"]
    pub fn config(mut self, config: LoggerConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn time_format(mut self, format: TimestampFormat) -> Self {
        self.config.time_format = format;
        self
    }

    /// Use a strftime-compatible timestamp layout
    #[must_use = "builder methods return a new value"]
    pub fn custom_time_format(mut self, layout: &str) -> Self {
        self.config.time_format = TimestampFormat::Custom(layout.to_string());
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn min_level(mut self, level: Severity) -> Self {
        self.config.min_level = level;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn max_level(mut self, level: Severity) -> Self {
        self.config.max_level = level;
        self
    }

    /// Set both bounds of the inclusive severity band
    #[must_use = "builder methods return a new value"]
    pub fn level_range(self, min: Severity, max: Severity) -> Self {
        self.min_level(min).max_level(max)
    }

    /// Where lines are written. Without a target output is discarded.
    #[must_use = "builder methods return a new value"]
    pub fn target<S: Sink + 'static>(mut self, target: S) -> Self {
        self.target = Some(Box::new(target));
        self
    }

    /// Refresh interval of the cached timestamp; 0 formats the time per record
    #[must_use = "builder methods return a new value"]
    pub fn clock_refresh_interval_ms(mut self, interval_ms: u64) -> Self {
        self.config.clock_refresh_interval_ms = interval_ms;
        self
    }

    /// Let up to `capacity` records wait for the writer instead of handing
    /// each one off directly. Callers still block once the queue is full.
    #[must_use = "builder methods return a new value"]
    pub fn queue_capacity(mut self, capacity: usize) -> Self {
        self.config.queue_capacity = capacity;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn label_style(mut self, style: LabelStyle) -> Self {
        self.config.label_style = style;
        self
    }

    /// Validate the settings and start the logger's threads
    pub fn build(self) -> Result<Logger> {
        let sink = self.target.unwrap_or_else(|| Box::new(io::sink()));
        Logger::start(self.config, sink)
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    /// Create a builder for Logger
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LoggerError;
    use crate::sinks::MemorySink;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_logger_is_send_sync() {
        assert_send_sync::<Logger>();
    }

    #[test]
    fn test_builder_default() {
        let logger = LoggerBuilder::default().build().expect("build logger");
        assert_eq!(logger.config(), &LoggerConfig::default());
        assert!(logger.is_enabled(Severity::Debug));
        assert!(logger.is_enabled(Severity::Fatal));
    }

    #[test]
    fn test_builder_rejects_inverted_range() {
        let result = Logger::builder()
            .level_range(Severity::Error, Severity::Warn)
            .build();
        assert!(matches!(result, Err(LoggerError::InvalidConfiguration { .. })));
    }

    #[test]
    fn test_builder_full_configuration() {
        let logger = Logger::builder()
            .custom_time_format("%H:%M")
            .level_range(Severity::Info, Severity::Error)
            .clock_refresh_interval_ms(50)
            .queue_capacity(8)
            .label_style(LabelStyle::AlwaysInfo)
            .build()
            .expect("build logger");

        let config = logger.config();
        assert_eq!(config.time_format, TimestampFormat::Custom("%H:%M".into()));
        assert_eq!(config.clock_refresh_interval_ms, 50);
        assert_eq!(config.queue_capacity, 8);
        assert_eq!(config.label_style, LabelStyle::AlwaysInfo);
        assert!(!logger.is_enabled(Severity::Fatal));
    }

    #[test]
    fn test_filtered_calls_skip_the_pool() {
        let logger = Logger::builder()
            .min_level(Severity::Error)
            .build()
            .expect("build logger");

        logger.debug("dropped");
        logger.info("dropped");
        logger.warn("dropped");

        assert_eq!(logger.metrics().filtered(), 3);
        assert_eq!(logger.metrics().handed_off(), 0);
        assert_eq!(logger.buffer_pool().allocated(), 0);
    }

    #[test]
    fn test_infof_formats_arguments() {
        let sink = MemorySink::new();
        let mut logger = Logger::new(sink.clone()).expect("build logger");
        logger.infof("foo, bar%s", &[&"!"]);
        assert!(logger.shutdown(DEFAULT_SHUTDOWN_TIMEOUT));

        let lines = sink.lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].ends_with(" [INFO] foo, bar!"), "got {:?}", lines[0]);
    }

    #[test]
    fn test_log_after_shutdown_is_discarded() {
        let sink = MemorySink::new();
        let mut logger = Logger::new(sink.clone()).expect("build logger");
        assert!(logger.shutdown(DEFAULT_SHUTDOWN_TIMEOUT));

        logger.error("too late");
        assert_eq!(sink.write_count(), 0);
        assert_eq!(logger.metrics().handed_off(), 0);
        // The rejected record's buffer went back to the pool.
        assert_eq!(logger.buffer_pool().available(), 1);
    }

    #[test]
    fn test_shutdown_is_idempotent() {
        let mut logger = Logger::new(MemorySink::new()).expect("build logger");
        assert!(logger.shutdown(DEFAULT_SHUTDOWN_TIMEOUT));
        assert!(logger.shutdown(DEFAULT_SHUTDOWN_TIMEOUT));
    }
}
