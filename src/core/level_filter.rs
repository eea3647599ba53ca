//! Inclusive severity band used to gate log calls

use super::severity::Severity;

/// Returns true iff `min <= severity <= max`.
#[inline]
pub fn should_log(severity: Severity, min: Severity, max: Severity) -> bool {
    min <= severity && severity <= max
}

/// A `[min, max]` severity band.
///
/// Checked at the top of every log call, before any buffer is taken from the
/// pool or any formatting happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelFilter {
    min: Severity,
    max: Severity,
}

impl LevelFilter {
    pub const fn new(min: Severity, max: Severity) -> Self {
        Self { min, max }
    }

    #[inline]
    pub fn allows(&self, severity: Severity) -> bool {
        should_log(severity, self.min, self.max)
    }

    pub fn min(&self) -> Severity {
        self.min
    }

    pub fn max(&self) -> Severity {
        self.max
    }

    /// True when the band contains at least one severity
    pub fn is_valid(&self) -> bool {
        self.min <= self.max
    }
}

impl Default for LevelFilter {
    fn default() -> Self {
        Self::new(Severity::Debug, Severity::Fatal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_allows_everything() {
        let filter = LevelFilter::default();
        for severity in Severity::ALL {
            assert!(filter.allows(severity));
        }
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let filter = LevelFilter::new(Severity::Info, Severity::Error);
        assert!(!filter.allows(Severity::Debug));
        assert!(filter.allows(Severity::Info));
        assert!(filter.allows(Severity::Warn));
        assert!(filter.allows(Severity::Error));
        assert!(!filter.allows(Severity::DPanic));
        assert!(!filter.allows(Severity::Fatal));
    }

    #[test]
    fn test_single_level_band() {
        assert!(should_log(Severity::Warn, Severity::Warn, Severity::Warn));
        assert!(!should_log(Severity::Info, Severity::Warn, Severity::Warn));
    }

    #[test]
    fn test_inverted_band_rejects_all() {
        let filter = LevelFilter::new(Severity::Fatal, Severity::Debug);
        assert!(!filter.is_valid());
        assert!(Severity::ALL.iter().all(|s| !filter.allows(*s)));
    }
}
