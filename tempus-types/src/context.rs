use tempus_result::Result;

use crate::timezone::TimeZoneRef;

/// Per-query configuration threaded through signature resolution, execution,
/// and monotonicity analysis.
///
/// The default timezone applies whenever neither a timezone argument nor the
/// first argument's type names one. Nothing consults a process-wide default:
/// callers that want a session timezone set it here.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TemporalContext {
    default_timezone: TimeZoneRef,
}

impl Default for TemporalContext {
    fn default() -> Self {
        Self::new()
    }
}

impl TemporalContext {
    /// Construct a context whose default timezone is UTC.
    pub fn new() -> Self {
        Self {
            default_timezone: TimeZoneRef::UTC,
        }
    }

    pub fn with_default_timezone(mut self, timezone: TimeZoneRef) -> Self {
        self.default_timezone = timezone;
        self
    }

    /// Resolve `name` and use it as the default timezone.
    pub fn with_default_timezone_name(self, name: &str) -> Result<Self> {
        Ok(self.with_default_timezone(TimeZoneRef::resolve(name)?))
    }

    pub fn default_timezone(&self) -> TimeZoneRef {
        self.default_timezone
    }
}

impl AsRef<TimeZoneRef> for TemporalContext {
    fn as_ref(&self) -> &TimeZoneRef {
        &self.default_timezone
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_utc() {
        assert_eq!(TemporalContext::default().default_timezone(), TimeZoneRef::UTC);
    }

    #[test]
    fn named_default_timezone() {
        let ctx = TemporalContext::new()
            .with_default_timezone_name("Australia/Sydney")
            .unwrap();
        assert_eq!(ctx.default_timezone().name(), "Australia/Sydney");
        assert!(TemporalContext::new().with_default_timezone_name("Nowhere").is_err());
    }
}
