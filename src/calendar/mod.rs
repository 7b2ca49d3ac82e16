//! Calendar labels derived from a block timestamp.
//!
//! Both labels are taken in UTC: the month selects the season and the hour
//! selects the time of day.

use crate::utils::error::DecodeError;
use chrono::{DateTime, Datelike, SecondsFormat, Timelike, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Meteorological season of the block month
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Winter,
    Spring,
    Summer,
    Autumn,
}

/// Coarse time of day in UTC
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Daytime {
    /// [00:00, 06:00)
    Night,
    /// [06:00, 12:00)
    Morning,
    /// [12:00, 16:00)
    Afterday,
    /// [16:00, 24:00)
    Evening,
}

impl Season {
    pub fn as_str(&self) -> &'static str {
        match self {
            Season::Winter => "winter",
            Season::Spring => "spring",
            Season::Summer => "summer",
            Season::Autumn => "autumn",
        }
    }
}

impl Daytime {
    pub fn as_str(&self) -> &'static str {
        match self {
            Daytime::Night => "night",
            Daytime::Morning => "morning",
            Daytime::Afterday => "afterday",
            Daytime::Evening => "evening",
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Daytime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Convert a UNIX timestamp (seconds) into a UTC date-time
///
/// **Public** - the timestamp is taken to milliseconds before conversion
///
/// # Errors
/// * `DecodeError::TimestampOutOfRange` - no calendar date for this timestamp
pub fn block_time(timestamp: i64) -> Result<DateTime<Utc>, DecodeError> {
    timestamp
        .checked_mul(1000)
        .and_then(DateTime::from_timestamp_millis)
        .ok_or(DecodeError::TimestampOutOfRange(timestamp))
}

/// ISO-8601 rendering with millisecond precision, e.g. `2021-11-11T18:20:00.000Z`
pub fn format_block_time(time: &DateTime<Utc>) -> String {
    time.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Season for a UNIX timestamp
///
/// **Public** - every representable timestamp yields a season
pub fn classify_season(timestamp: i64) -> Result<Season, DecodeError> {
    Ok(season_for_month(block_time(timestamp)?.month0()))
}

/// Time of day for a UNIX timestamp
///
/// **Public** - every representable timestamp yields a daytime
pub fn classify_daytime(timestamp: i64) -> Result<Daytime, DecodeError> {
    Ok(daytime_for_hour(block_time(timestamp)?.hour()))
}

/// Map a zero-based month (0 = January) to its season; callers pass `month0()`
pub(crate) fn season_for_month(month0: u32) -> Season {
    match month0 {
        11 | 0 | 1 => Season::Winter,
        2..=4 => Season::Spring,
        5..=7 => Season::Summer,
        8..=10 => Season::Autumn,
        _ => unreachable!("month0 is always in 0..=11, got {}", month0),
    }
}

/// Map an hour of day to its daytime bucket; callers pass `hour()`, always below 24
pub(crate) fn daytime_for_hour(hour: u32) -> Daytime {
    match hour {
        0..=5 => Daytime::Night,
        6..=11 => Daytime::Morning,
        12..=15 => Daytime::Afterday,
        _ => Daytime::Evening,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::config::SECONDS_PER_HOUR;

    // 2021-11-11T18:20:00Z
    const BLOCK_13596479: i64 = 1_636_654_800;

    #[test]
    fn test_reference_block() {
        assert_eq!(classify_season(BLOCK_13596479).unwrap(), Season::Autumn);
        assert_eq!(classify_daytime(BLOCK_13596479).unwrap(), Daytime::Evening);
        assert_eq!(
            format_block_time(&block_time(BLOCK_13596479).unwrap()),
            "2021-11-11T18:20:00.000Z"
        );
    }

    #[test]
    fn test_season_for_every_month() {
        let expected = [
            Season::Winter,
            Season::Winter,
            Season::Spring,
            Season::Spring,
            Season::Spring,
            Season::Summer,
            Season::Summer,
            Season::Summer,
            Season::Autumn,
            Season::Autumn,
            Season::Autumn,
            Season::Winter,
        ];
        for (month0, season) in expected.iter().enumerate() {
            assert_eq!(season_for_month(month0 as u32), *season, "month0 {}", month0);
        }
    }

    #[test]
    fn test_daytime_boundaries() {
        let midnight = 1_636_588_800; // 2021-11-11T00:00:00Z
        let at = |hour: i64| classify_daytime(midnight + hour * SECONDS_PER_HOUR).unwrap();

        assert_eq!(at(0), Daytime::Night);
        assert_eq!(at(5), Daytime::Night);
        assert_eq!(at(6), Daytime::Morning);
        assert_eq!(at(11), Daytime::Morning);
        assert_eq!(at(12), Daytime::Afterday);
        assert_eq!(at(15), Daytime::Afterday);
        assert_eq!(at(16), Daytime::Evening);
        assert_eq!(at(23), Daytime::Evening);
        assert_eq!(classify_daytime(midnight - 1).unwrap(), Daytime::Evening);
    }

    #[test]
    fn test_season_uses_utc_month() {
        // 2021-12-01T00:00:00Z and one second earlier
        assert_eq!(classify_season(1_638_316_800).unwrap(), Season::Winter);
        assert_eq!(classify_season(1_638_316_799).unwrap(), Season::Autumn);
    }

    #[test]
    fn test_epoch_and_negative_timestamps() {
        assert_eq!(classify_season(0).unwrap(), Season::Winter);
        assert_eq!(classify_daytime(0).unwrap(), Daytime::Night);
        // 1969-12-31T23:00:00Z
        assert_eq!(classify_daytime(-3_600).unwrap(), Daytime::Evening);
    }

    #[test]
    fn test_out_of_range_timestamp() {
        assert_eq!(
            classify_season(i64::MAX),
            Err(DecodeError::TimestampOutOfRange(i64::MAX))
        );
        assert!(block_time(i64::MAX / 1000).is_err());
    }
}
