//! Logger metrics for observability
//!
//! Log calls never see sink errors, so these counters are the only place
//! where failed or partial writes become visible.

use std::sync::atomic::{AtomicU64, Ordering};

/// Counters describing a logger's traffic.
///
/// # Example
///
/// ```
/// use minlog::LoggerMetrics;
///
/// let metrics = LoggerMetrics::new();
/// metrics.record_handed_off();
/// metrics.record_written();
///
/// assert_eq!(metrics.handed_off(), 1);
/// assert_eq!(metrics.written(), 1);
/// assert_eq!(metrics.failure_rate(), 0.0);
/// ```
#[derive(Debug)]
pub struct LoggerMetrics {
    /// Calls dropped by the severity band
    filtered: AtomicU64,

    /// Records accepted by the writer thread
    handed_off: AtomicU64,

    /// Records fully written to the sink
    written: AtomicU64,

    /// Sink writes that returned an error or panicked
    write_failures: AtomicU64,

    /// Sink writes that accepted fewer bytes than the line length
    short_writes: AtomicU64,
}

impl LoggerMetrics {
    pub const fn new() -> Self {
        Self {
            filtered: AtomicU64::new(0),
            handed_off: AtomicU64::new(0),
            written: AtomicU64::new(0),
            write_failures: AtomicU64::new(0),
            short_writes: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn filtered(&self) -> u64 {
        self.filtered.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn handed_off(&self) -> u64 {
        self.handed_off.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn written(&self) -> u64 {
        self.written.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn write_failures(&self) -> u64 {
        self.write_failures.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn short_writes(&self) -> u64 {
        self.short_writes.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn record_filtered(&self) -> u64 {
        self.filtered.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_handed_off(&self) -> u64 {
        self.handed_off.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_written(&self) -> u64 {
        self.written.fetch_add(1, Ordering::Relaxed)
    }

    /// Record a failed write, returning the previous failure count
    #[inline]
    pub fn record_write_failure(&self) -> u64 {
        self.write_failures.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_short_write(&self) -> u64 {
        self.short_writes.fetch_add(1, Ordering::Relaxed)
    }

    /// Share of processed records that did not fully reach the sink (0.0 - 100.0)
    pub fn failure_rate(&self) -> f64 {
        let failed = (self.write_failures() + self.short_writes()) as f64;
        let total = self.written() as f64 + failed;
        if total == 0.0 {
            0.0
        } else {
            (failed / total) * 100.0
        }
    }

    pub fn reset(&self) {
        self.filtered.store(0, Ordering::Relaxed);
        self.handed_off.store(0, Ordering::Relaxed);
        self.written.store(0, Ordering::Relaxed);
        self.write_failures.store(0, Ordering::Relaxed);
        self.short_writes.store(0, Ordering::Relaxed);
    }
}

impl Default for LoggerMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for LoggerMetrics {
    /// Snapshot of the current values
    fn clone(&self) -> Self {
        Self {
            filtered: AtomicU64::new(self.filtered()),
            handed_off: AtomicU64::new(self.handed_off()),
            written: AtomicU64::new(self.written()),
            write_failures: AtomicU64::new(self.write_failures()),
            short_writes: AtomicU64::new(self.short_writes()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_returns_previous() {
        let metrics = LoggerMetrics::new();
        assert_eq!(metrics.record_write_failure(), 0);
        assert_eq!(metrics.record_write_failure(), 1);
        assert_eq!(metrics.write_failures(), 2);
    }

    #[test]
    fn test_failure_rate() {
        let metrics = LoggerMetrics::new();
        assert_eq!(metrics.failure_rate(), 0.0);

        for _ in 0..90 {
            metrics.record_written();
        }
        for _ in 0..5 {
            metrics.record_write_failure();
            metrics.record_short_write();
        }

        let rate = metrics.failure_rate();
        assert!((9.9..=10.1).contains(&rate), "Failure rate was {}", rate);
    }

    #[test]
    fn test_snapshot_is_independent() {
        let metrics = LoggerMetrics::new();
        metrics.record_filtered();
        let snapshot = metrics.clone();
        metrics.record_filtered();
        assert_eq!(snapshot.filtered(), 1);
        assert_eq!(metrics.filtered(), 2);

        metrics.reset();
        assert_eq!(metrics.filtered(), 0);
        assert_eq!(snapshot.filtered(), 1);
    }
}
