use chrono::{DateTime, Utc};
use std::fmt;

use crate::constants::TIMESTAMP_UNSET;

/// Wall-clock instant stored as milliseconds since the Unix epoch
///
/// Every `i64` is a valid value so stored timestamps round-trip exactly.
/// Zero doubles as the store's "unset" sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(i64);

impl Timestamp {
    pub const fn from_millis(millis: i64) -> Self {
        Self(millis)
    }

    pub fn now() -> Self {
        Self(Utc::now().timestamp_millis())
    }

    pub const fn as_millis(self) -> i64 {
        self.0
    }

    pub const fn is_unset(self) -> bool {
        self.0 == TIMESTAMP_UNSET
    }

    /// Convert to a chrono datetime, or None if outside chrono's range
    pub fn to_datetime(self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.0)
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(value: DateTime<Utc>) -> Self {
        Self(value.timestamp_millis())
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_datetime() {
            Some(dt) => write!(f, "{}", dt.to_rfc3339()),
            None => write!(f, "{}ms", self.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_zero_is_unset() {
        assert!(Timestamp::from_millis(0).is_unset());
        assert!(!Timestamp::from_millis(1).is_unset());
        assert!(!Timestamp::from_millis(-1).is_unset());
    }

    #[test]
    fn test_datetime_conversion() {
        let dt = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        let ts = Timestamp::from(dt);
        assert_eq!(ts.as_millis(), 1_709_294_400_000);
        assert_eq!(ts.to_datetime(), Some(dt));
    }

    #[test]
    fn test_display_out_of_chrono_range() {
        let ts = Timestamp::from_millis(i64::MAX);
        assert_eq!(ts.to_datetime(), None);
        assert_eq!(ts.to_string(), format!("{}ms", i64::MAX));
    }

    #[test]
    fn test_display_rfc3339() {
        let ts = Timestamp::from_millis(0);
        assert_eq!(ts.to_string(), "1970-01-01T00:00:00+00:00");
    }
}
