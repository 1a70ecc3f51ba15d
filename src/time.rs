//! Canonical embed timestamps.
//!
//! Discord expects the embed timestamp as ISO-8601 text. [`Timestamp`]
//! normalizes the accepted input forms (a `chrono` date value, a system
//! time, a numeric epoch in milliseconds, or text) into one canonical
//! representation at set time, so a builder always stores the same textual
//! form no matter how the caller expressed the instant.

use std::fmt;
use std::time::SystemTime;

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, TimeZone, Utc};

/// A canonical ISO-8601 timestamp, e.g. `2026-01-15T09:30:00.000Z`.
///
/// Conversions from date values and parseable text always produce the
/// canonical form. Text that does not parse is kept verbatim so that the
/// mutation succeeds and the malformed value is reported at validation time
/// instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timestamp(String);

impl Timestamp {
    /// The current time.
    pub fn now() -> Self {
        Self::from_datetime(Utc::now())
    }

    /// The canonical textual form.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn from_datetime(datetime: DateTime<Utc>) -> Self {
        Timestamp(datetime.to_rfc3339_opts(SecondsFormat::Millis, true))
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Timestamp> for String {
    fn from(timestamp: Timestamp) -> Self {
        timestamp.0
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for Timestamp {
    fn from(datetime: DateTime<Tz>) -> Self {
        Self::from_datetime(datetime.with_timezone(&Utc))
    }
}

impl From<SystemTime> for Timestamp {
    fn from(time: SystemTime) -> Self {
        Self::from_datetime(DateTime::<Utc>::from(time))
    }
}

impl From<i64> for Timestamp {
    /// Milliseconds since the Unix epoch. An epoch outside the representable
    /// date range is kept as its decimal text and fails validation.
    fn from(millis: i64) -> Self {
        match DateTime::from_timestamp_millis(millis) {
            Some(datetime) => Self::from_datetime(datetime),
            None => Timestamp(millis.to_string()),
        }
    }
}

impl From<&str> for Timestamp {
    fn from(text: &str) -> Self {
        match parse_text(text) {
            Some(datetime) => Self::from_datetime(datetime),
            None => Timestamp(text.to_string()),
        }
    }
}

impl From<String> for Timestamp {
    fn from(text: String) -> Self {
        Self::from(text.as_str())
    }
}

/// Accepts RFC 3339 text plus the zone-less date and date-time forms,
/// which are read as UTC.
fn parse_text(text: &str) -> Option<DateTime<Utc>> {
    if let Ok(datetime) = DateTime::parse_from_rfc3339(text) {
        return Some(datetime.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S") {
        return Some(naive.and_utc());
    }
    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return Some(date.and_hms_opt(0, 0, 0)?.and_utc());
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_forms_share_one_canonical_form() {
        let from_epoch = Timestamp::from(1_577_836_800_000_i64);
        let from_text = Timestamp::from("2020-01-01T00:00:00Z");
        let from_date = Timestamp::from("2020-01-01");
        let from_datetime =
            Timestamp::from(DateTime::parse_from_rfc3339("2020-01-01T00:00:00+00:00").unwrap());

        assert_eq!(from_epoch.as_str(), "2020-01-01T00:00:00.000Z");
        assert_eq!(from_epoch, from_text);
        assert_eq!(from_epoch, from_date);
        assert_eq!(from_epoch, from_datetime);
    }

    #[test]
    fn test_offset_text_normalizes_to_utc() {
        let timestamp = Timestamp::from("2020-06-01T12:00:00+02:00");
        assert_eq!(timestamp.as_str(), "2020-06-01T10:00:00.000Z");
    }

    #[test]
    fn test_unparseable_text_is_kept_verbatim() {
        let timestamp = Timestamp::from("tomorrow-ish");
        assert_eq!(timestamp.as_str(), "tomorrow-ish");
    }

    #[test]
    fn test_out_of_range_epoch_is_kept_as_decimal_text() {
        let timestamp = Timestamp::from(i64::MAX);
        assert_eq!(timestamp.as_str(), i64::MAX.to_string());
    }

    #[test]
    fn test_now_is_canonical() {
        let timestamp = Timestamp::now();
        assert!(DateTime::parse_from_rfc3339(timestamp.as_str()).is_ok());
        assert!(timestamp.as_str().ends_with('Z'));
    }
}
