//! Cached, periodically refreshed log timestamp
//!
//! Formatting the wall clock on every log call is expensive relative to the
//! rest of the hot path. `ClockCache` keeps one pre-formatted string that a
//! background thread re-renders on a fixed interval. Readers get whatever
//! was last published, so a timestamp may be stale by up to one interval.

use super::error::{LoggerError, Result};
use super::timestamp::TimestampFormat;
use crossbeam_channel::{select, tick, Sender};
use parking_lot::RwLock;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

/// Default refresh interval of the cached timestamp
pub const DEFAULT_CLOCK_REFRESH: Duration = Duration::from_millis(1000);

pub struct ClockCache {
    current: Arc<RwLock<Arc<str>>>,
    format: TimestampFormat,
    interval: Duration,
    stop: Option<Sender<()>>,
    refresher: Option<thread::JoinHandle<()>>,
}

impl ClockCache {
    /// Render the current time and start the refresher thread.
    ///
    /// A zero `interval` disables caching: no thread is started and every
    /// [`snapshot`](Self::snapshot) renders the current time.
    pub fn start(format: TimestampFormat, interval: Duration) -> Result<Self> {
        let current: Arc<RwLock<Arc<str>>> = Arc::new(RwLock::new(format.format_now().into()));

        if interval.is_zero() {
            return Ok(Self {
                current,
                format,
                interval,
                stop: None,
                refresher: None,
            });
        }

        let (stop_tx, stop_rx) = crossbeam_channel::bounded::<()>(0);
        let slot = Arc::clone(&current);
        let refresh_format = format.clone();

        let refresher = thread::Builder::new()
            .name("minlog-clock".into())
            .spawn(move || {
                let ticker = tick(interval);
                loop {
                    select! {
                        recv(ticker) -> _ => {
                            let now: Arc<str> = refresh_format.format_now().into();
                            *slot.write() = now;
                        }
                        // Only ever disconnected, never sent on.
                        recv(stop_rx) -> _ => break,
                    }
                }
            })
            .map_err(|e| {
                LoggerError::io_operation("spawning clock thread", "refresher not started", e)
            })?;

        Ok(Self {
            current,
            format,
            interval,
            stop: Some(stop_tx),
            refresher: Some(refresher),
        })
    }

    /// The most recently published timestamp
    #[inline]
    pub fn snapshot(&self) -> Arc<str> {
        if self.interval.is_zero() {
            return self.format.format_now().into();
        }
        Arc::clone(&*self.current.read())
    }

    /// Re-render the cached value immediately
    pub fn refresh(&self) {
        let now: Arc<str> = self.format.format_now().into();
        *self.current.write() = now;
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn format(&self) -> &TimestampFormat {
        &self.format
    }

    /// Whether a refresher thread is running
    pub fn is_running(&self) -> bool {
        self.refresher.is_some()
    }

    /// Stop the refresher thread. The last value stays readable.
    pub fn stop(&mut self) {
        drop(self.stop.take());
        if let Some(handle) = self.refresher.take() {
            if let Err(e) = handle.join() {
                eprintln!("[LOGGER ERROR] Clock refresher thread panicked: {:?}", e);
            }
        }
    }
}

impl Drop for ClockCache {
    fn drop(&mut self) {
        self.stop();
    }
}
