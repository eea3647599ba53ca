//! Logger configuration

use super::clock::DEFAULT_CLOCK_REFRESH;
use super::error::{LoggerError, Result};
use super::level_filter::LevelFilter;
use super::severity::Severity;
use super::timestamp::TimestampFormat;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Which label the writer prints between the brackets of each line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LabelStyle {
    /// The record's own severity, e.g. `[WARN]`
    #[default]
    Severity,

    /// Always `[INFO]`, for consumers that parse the legacy line format
    AlwaysInfo,
}

impl LabelStyle {
    #[inline]
    pub fn label(&self, severity: Severity) -> &'static str {
        match self {
            LabelStyle::Severity => severity.to_str(),
            LabelStyle::AlwaysInfo => Severity::Info.to_str(),
        }
    }
}

/// Settings fixed at logger construction.
///
/// The sink is not part of this struct; it is handed to
/// [`LoggerBuilder::target`](super::LoggerBuilder::target). Every field has
/// a default, so a partial document deserializes:
///
/// ```
/// use minlog::{LoggerConfig, Severity};
///
/// let config: LoggerConfig = serde_json::from_str(r#"{"min_level":"Warn"}"#).unwrap();
/// assert_eq!(config.min_level, Severity::Warn);
/// assert_eq!(config.max_level, Severity::Fatal);
/// assert_eq!(config.clock_refresh_interval_ms, 1000);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    pub time_format: TimestampFormat,
    /// Lowest severity written (inclusive)
    pub min_level: Severity,
    /// Highest severity written (inclusive)
    pub max_level: Severity,
    /// How often the cached timestamp is re-rendered; 0 renders per record
    pub clock_refresh_interval_ms: u64,
    /// Records that may wait for the writer; 0 makes every hand-off a rendezvous
    pub queue_capacity: usize,
    pub label_style: LabelStyle,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            time_format: TimestampFormat::default(),
            min_level: Severity::Debug,
            max_level: Severity::Fatal,
            clock_refresh_interval_ms: DEFAULT_CLOCK_REFRESH.as_millis() as u64,
            queue_capacity: 0,
            label_style: LabelStyle::default(),
        }
    }
}

impl LoggerConfig {
    pub fn level_filter(&self) -> LevelFilter {
        LevelFilter::new(self.min_level, self.max_level)
    }

    pub fn clock_refresh_interval(&self) -> Duration {
        Duration::from_millis(self.clock_refresh_interval_ms)
    }

    /// Reject configurations under which no severity could ever be written
    /// or the timestamp layout cannot be rendered
    pub fn validate(&self) -> Result<()> {
        if !self.level_filter().is_valid() {
            return Err(LoggerError::config(
                "LoggerConfig",
                format!(
                    "min_level {} is above max_level {}",
                    self.min_level, self.max_level
                ),
            ));
        }
        if let TimestampFormat::Custom(layout) = &self.time_format {
            if !self.time_format.is_valid() {
                return Err(LoggerError::config(
                    "LoggerConfig",
                    format!("time_format '{}' is not a valid strftime layout", layout),
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = LoggerConfig::default();
        assert_eq!(config.time_format, TimestampFormat::Rfc3339);
        assert_eq!(config.min_level, Severity::Debug);
        assert_eq!(config.max_level, Severity::Fatal);
        assert_eq!(config.clock_refresh_interval(), Duration::from_secs(1));
        assert_eq!(config.queue_capacity, 0);
        assert_eq!(config.label_style, LabelStyle::Severity);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_inverted_levels_rejected() {
        let config = LoggerConfig {
            min_level: Severity::Error,
            max_level: Severity::Info,
            ..LoggerConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
        assert!(err.to_string().contains("ERROR"));
    }

    #[test]
    fn test_unparseable_time_format_rejected() {
        let config = LoggerConfig {
            time_format: TimestampFormat::Custom("%Q bad".into()),
            ..LoggerConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
        assert!(err.to_string().contains("%Q bad"));

        let config = LoggerConfig {
            time_format: TimestampFormat::Custom("%Y-%m-%d %H:%M:%S".into()),
            ..LoggerConfig::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_label_style() {
        assert_eq!(LabelStyle::Severity.label(Severity::Warn), "WARN");
        assert_eq!(LabelStyle::AlwaysInfo.label(Severity::Fatal), "INFO");
    }

    #[test]
    fn test_serde_roundtrip() {
        let config = LoggerConfig {
            time_format: TimestampFormat::Custom("%H:%M:%S".into()),
            min_level: Severity::Info,
            label_style: LabelStyle::AlwaysInfo,
            ..LoggerConfig::default()
        };
        let json = serde_json::to_string(&config).expect("serialize");
        let parsed: LoggerConfig = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(parsed, config);
    }
}
