//! Records in flight between a log call and the writer thread

use super::config::LabelStyle;
use super::severity::Severity;
use std::sync::Arc;

/// A log call whose line has not been rendered yet.
///
/// `body` holds the composed message in a buffer taken from the logger's
/// [`BufferPool`](super::BufferPool). The record owns that buffer until the
/// writer renders the line and gives it back.
#[derive(Debug)]
pub struct PendingRecord {
    pub severity: Severity,
    pub timestamp: Arc<str>,
    pub body: Vec<u8>,
}

impl PendingRecord {
    pub fn new(severity: Severity, timestamp: Arc<str>, body: Vec<u8>) -> Self {
        Self {
            severity,
            timestamp,
            body,
        }
    }

    /// Render `<timestamp> [<LABEL>] <message>\n` into `line`, replacing its contents
    pub fn render_into(&self, line: &mut Vec<u8>, style: LabelStyle) {
        let label = style.label(self.severity);

        line.clear();
        line.reserve(self.timestamp.len() + label.len() + self.body.len() + 5);
        line.extend_from_slice(self.timestamp.as_bytes());
        line.extend_from_slice(b" [");
        line.extend_from_slice(label.as_bytes());
        line.extend_from_slice(b"] ");
        line.extend_from_slice(&self.body);
        line.push(b'\n');
    }

    /// Give up the message buffer so it can go back to the pool
    pub fn into_body(self) -> Vec<u8> {
        self.body
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(severity: Severity, message: &str) -> PendingRecord {
        PendingRecord::new(severity, Arc::from("2025-01-08T10:30:45Z"), message.as_bytes().to_vec())
    }

    #[test]
    fn test_render_line() {
        let mut line = Vec::new();
        record(Severity::Info, "hello").render_into(&mut line, LabelStyle::Severity);
        assert_eq!(line, b"2025-01-08T10:30:45Z [INFO] hello\n");
    }

    #[test]
    fn test_render_uses_true_severity() {
        let mut line = Vec::new();
        record(Severity::DPanic, "boom").render_into(&mut line, LabelStyle::Severity);
        assert_eq!(line, b"2025-01-08T10:30:45Z [DPANIC] boom\n");
    }

    #[test]
    fn test_render_legacy_label() {
        let mut line = Vec::new();
        record(Severity::Error, "disk full").render_into(&mut line, LabelStyle::AlwaysInfo);
        assert_eq!(line, b"2025-01-08T10:30:45Z [INFO] disk full\n");
    }

    #[test]
    fn test_render_replaces_previous_line() {
        let mut line = b"leftover from the last record".to_vec();
        record(Severity::Warn, "").render_into(&mut line, LabelStyle::Severity);
        assert_eq!(line, b"2025-01-08T10:30:45Z [WARN] \n");
    }
}
