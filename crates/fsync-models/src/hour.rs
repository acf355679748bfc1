//! Hour-bucket parsing and formatting.
//!
//! Recordings are partitioned by hour; an [`HourBucket`] names one such
//! partition and knows the two textual renderings the rest of the tool
//! needs: the `YYYY-MM/DD/HH` directory fragment and the `YYYY-MM-DD HH`
//! caption stamp.

use chrono::{Duration, Local, NaiveDate, NaiveDateTime, Timelike};
use thiserror::Error;

/// One hour-granularity time bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HourBucket(NaiveDateTime);

/// Hour literal parsing error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HourParseError {
    #[error("invalid hour literal {0:?}, expected YYYY-MM-DDTHH")]
    Format(String),
}

impl HourBucket {
    /// Parse a literal `YYYY-MM-DDTHH` hour, e.g. `2024-03-05T14`.
    ///
    /// The literal is exact: trailing minutes or any other suffix is
    /// rejected rather than truncated.
    pub fn parse(s: &str) -> Result<Self, HourParseError> {
        let err = || HourParseError::Format(s.to_string());

        let (date, hour) = s.split_once('T').ok_or_else(err)?;
        let date = NaiveDate::parse_from_str(date, "%Y-%m-%d").map_err(|_| err())?;
        let hour: u32 = hour.parse().map_err(|_| err())?;

        date.and_hms_opt(hour, 0, 0).map(Self).ok_or_else(err)
    }

    /// The bucket covering the hour before `now`.
    ///
    /// Minutes and seconds of `now` are discarded; at 14:37 this yields
    /// the 13:00 bucket.
    pub fn preceding(now: NaiveDateTime) -> Self {
        let hour_start = now.date().and_hms_opt(now.hour(), 0, 0).unwrap_or(now);
        Self(hour_start - Duration::hours(1))
    }

    /// The bucket covering the hour before the current local time.
    pub fn preceding_now() -> Self {
        Self::preceding(Local::now().naive_local())
    }

    /// Directory fragment under the recording prefix: `YYYY-MM/DD/HH`.
    pub fn dir_fragment(&self) -> String {
        self.0.format("%Y-%m/%d/%H").to_string()
    }

    /// Caption timestamp: `YYYY-MM-DD HH`.
    pub fn caption_stamp(&self) -> String {
        self.0.format("%Y-%m-%d %H").to_string()
    }
}

impl std::fmt::Display for HourBucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%dT%H"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn naive(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(h, mi, s)
            .unwrap()
    }

    #[test]
    fn parse_valid_literal() {
        let hour = HourBucket::parse("2024-03-05T14").unwrap();
        assert_eq!(hour.dir_fragment(), "2024-03/05/14");
        assert_eq!(hour.caption_stamp(), "2024-03-05 14");
        assert_eq!(hour.to_string(), "2024-03-05T14");
    }

    #[test]
    fn parse_zero_pads_components() {
        let hour = HourBucket::parse("2024-11-02T05").unwrap();
        assert_eq!(hour.dir_fragment(), "2024-11/02/05");
    }

    #[test]
    fn parse_rejects_bad_literals() {
        for bad in ["2024-03-05", "2024-03-05T14:30", "2024-03-05T99", "2024-13-05T10", "junk", ""] {
            assert!(
                matches!(HourBucket::parse(bad), Err(HourParseError::Format(_))),
                "accepted {bad:?}"
            );
        }
    }

    #[test]
    fn preceding_truncates_to_the_hour() {
        let hour = HourBucket::preceding(naive(2024, 3, 5, 14, 37, 22));
        assert_eq!(hour, HourBucket::parse("2024-03-05T13").unwrap());
    }

    #[test]
    fn preceding_crosses_midnight() {
        let hour = HourBucket::preceding(naive(2024, 3, 5, 0, 5, 0));
        assert_eq!(hour, HourBucket::parse("2024-03-04T23").unwrap());
    }
}
