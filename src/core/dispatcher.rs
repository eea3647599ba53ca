//! Hand-off from log callers to the single writer thread
//!
//! Every logger owns one [`Dispatcher`]: the sending half of a
//! `crossbeam_channel` plus the thread running its [`Writer`]. Any number of
//! threads may hand records off concurrently. The writer receives them one
//! at a time, so the sink sees lines in exactly the order hand-offs
//! completed.
//!
//! With the default capacity of zero the channel is a rendezvous: a caller
//! blocks until the writer is ready to take its record. There is no timeout
//! and nothing is ever dropped for lack of room.

use super::buffer_pool::{BufferPool, DEFAULT_BUFFER_CAPACITY, MAX_RETAINED_CAPACITY};
use super::config::LabelStyle;
use super::error::{LoggerError, Result};
use super::logger::DEFAULT_SHUTDOWN_TIMEOUT;
use super::metrics::LoggerMetrics;
use super::record::PendingRecord;
use crate::sinks::Sink;
use crossbeam_channel::{bounded, Receiver, SendError, Sender};
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

/// Report the first sink problem and every 1000th after it
const ALERT_EVERY: u64 = 1000;

#[inline]
fn should_alert(previous: u64) -> bool {
    previous == 0 || (previous + 1).is_multiple_of(ALERT_EVERY)
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    }
}

/// Consumer side: renders records and writes them to the sink.
pub struct Writer {
    sink: Box<dyn Sink>,
    pool: Arc<BufferPool>,
    metrics: Arc<LoggerMetrics>,
    label_style: LabelStyle,
    line: Vec<u8>,
}

impl Writer {
    pub fn new(
        sink: Box<dyn Sink>,
        pool: Arc<BufferPool>,
        metrics: Arc<LoggerMetrics>,
        label_style: LabelStyle,
    ) -> Self {
        Self {
            sink,
            pool,
            metrics,
            label_style,
            line: Vec::with_capacity(DEFAULT_BUFFER_CAPACITY),
        }
    }

    /// Drain `receiver` until every sender is gone
    pub fn run(mut self, receiver: Receiver<PendingRecord>) {
        for record in receiver.iter() {
            self.dispatch(record);
        }
    }

    /// Render one record, recycle its buffer and write the line.
    ///
    /// Sink errors and panics are counted and reported on stderr; they never
    /// stop the writer.
    pub fn dispatch(&mut self, record: PendingRecord) {
        record.render_into(&mut self.line, self.label_style);
        self.pool.release(record.into_body());

        let expected = self.line.len();
        let sink = &mut self.sink;
        let line = &self.line;
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| sink.write_record(line)));

        match outcome {
            Ok(Ok(n)) if n == expected => {
                self.metrics.record_written();
            }
            Ok(Ok(n)) => {
                let previous = self.metrics.record_short_write();
                if should_alert(previous) {
                    eprintln!(
                        "[LOGGER WARNING] Sink accepted {} of {} bytes, {} short writes so far.",
                        n,
                        expected,
                        previous + 1
                    );
                }
            }
            Ok(Err(e)) => {
                let previous = self.metrics.record_write_failure();
                if should_alert(previous) {
                    eprintln!(
                        "[LOGGER ERROR] Sink write failed: {}. {} failed writes so far.",
                        e,
                        previous + 1
                    );
                }
            }
            Err(payload) => {
                let previous = self.metrics.record_write_failure();
                if should_alert(previous) {
                    eprintln!(
                        "[LOGGER CRITICAL] Sink panicked: {}. Writer continues.",
                        panic_message(payload.as_ref())
                    );
                }
            }
        }

        if self.line.capacity() > MAX_RETAINED_CAPACITY {
            self.line = Vec::with_capacity(DEFAULT_BUFFER_CAPACITY);
        }
    }
}

/// Producer side: the channel sender and the writer thread handle.
pub struct Dispatcher {
    sender: Option<Sender<PendingRecord>>,
    writer: Option<thread::JoinHandle<()>>,
}

impl Dispatcher {
    /// Start the writer thread behind a channel holding up to `capacity`
    /// waiting records (0 = rendezvous).
    pub fn start(capacity: usize, writer: Writer) -> Result<Self> {
        let (sender, receiver) = bounded(capacity);

        let handle = thread::Builder::new()
            .name("minlog-writer".into())
            .spawn(move || writer.run(receiver))
            .map_err(|e| {
                LoggerError::io_operation("spawning writer thread", "writer not started", e)
            })?;

        Ok(Self {
            sender: Some(sender),
            writer: Some(handle),
        })
    }

    /// Block until the writer accepts `record`.
    ///
    /// Gives the record back if the dispatcher is closed or the writer
    /// thread is gone, so the caller can recycle its buffer.
    pub fn hand_off(&self, record: PendingRecord) -> std::result::Result<(), PendingRecord> {
        match self.sender {
            Some(ref sender) => sender.send(record).map_err(|SendError(record)| record),
            None => Err(record),
        }
    }

    pub fn is_open(&self) -> bool {
        self.sender.is_some()
    }

    /// Close the channel and wait up to `timeout` for the writer to finish
    /// what was already handed off.
    ///
    /// Returns `true` if the writer drained and exited in time. Calling it
    /// again after a successful close returns `true` immediately; after a
    /// timeout it waits on the same writer again.
    pub fn close(&mut self, timeout: Duration) -> bool {
        drop(self.sender.take());

        let Some(handle) = self.writer.take() else {
            return true;
        };

        let start = Instant::now();
        loop {
            if handle.is_finished() {
                if let Err(e) = handle.join() {
                    eprintln!("[LOGGER ERROR] Writer thread panicked during shutdown: {:?}", e);
                    return false;
                }
                return true;
            }

            if start.elapsed() >= timeout {
                eprintln!(
                    "[LOGGER WARNING] Writer thread did not finish within {:?}. \
                     Some logs may be lost.",
                    timeout
                );
                self.writer = Some(handle);
                return false;
            }

            thread::sleep(Duration::from_millis(1));
        }
    }
}

impl Drop for Dispatcher {
    fn drop(&mut self) {
        self.close(DEFAULT_SHUTDOWN_TIMEOUT);
    }
}
