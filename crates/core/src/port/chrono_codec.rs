// Chrono-backed codecs (native date/time values and text)

use super::time_codec::{TimeEncoder, TimeParser};
use crate::domain::zone::earliest_millis;
use crate::domain::{BucketZone, DomainError};
use crate::error::{AppError, Result};
use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};

/// Default text layout, e.g. `2020-01-01 00:05:10.000`
pub const DEFAULT_TEXT_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Naive layouts accepted when the text carries no offset
const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];

/// Native `chrono::DateTime` values; encoded results carry `zone`
#[derive(Debug, Clone, Copy, Default)]
pub struct DateTimeCodec<Tz: TimeZone> {
    zone: Tz,
}

impl<Tz: TimeZone> DateTimeCodec<Tz> {
    pub fn new(zone: Tz) -> Self {
        Self { zone }
    }
}

impl DateTimeCodec<Utc> {
    pub fn utc() -> Self {
        Self { zone: Utc }
    }
}

impl<Tz> TimeParser for DateTimeCodec<Tz>
where
    Tz: TimeZone + Send + Sync,
{
    type Time = DateTime<Tz>;

    fn parse(&self, time: &DateTime<Tz>) -> Result<i64> {
        Ok(time.timestamp_millis())
    }
}

impl<Tz> TimeEncoder for DateTimeCodec<Tz>
where
    Tz: TimeZone + Send + Sync,
{
    fn encode(&self, millis: i64) -> Result<DateTime<Tz>> {
        self.zone
            .timestamp_millis_opt(millis)
            .single()
            .ok_or_else(|| DomainError::OutOfRange(millis).into())
    }
}

/// Text timestamps
///
/// Accepts RFC 3339 (offset honored) or a naive `YYYY-MM-DD HH:MM[:SS[.fff]]`
/// form (space or `T` separated, or a bare date) read as wall-clock time in
/// `zone`. Encodes with `format` in `zone`.
#[derive(Debug, Clone)]
pub struct TextCodec {
    zone: BucketZone,
    format: String,
}

impl TextCodec {
    pub fn new(zone: BucketZone) -> Self {
        Self::with_format(zone, DEFAULT_TEXT_FORMAT)
    }

    pub fn with_format(zone: BucketZone, format: impl Into<String>) -> Self {
        Self {
            zone,
            format: format.into(),
        }
    }

    pub fn zone(&self) -> BucketZone {
        self.zone
    }

    fn parse_naive(text: &str) -> Result<NaiveDateTime> {
        for format in NAIVE_FORMATS {
            if let Ok(naive) = NaiveDateTime::parse_from_str(text, format) {
                return Ok(naive);
            }
        }
        let date = NaiveDate::parse_from_str(text, "%Y-%m-%d")?;
        Ok(date.and_time(chrono::NaiveTime::MIN))
    }
}

impl Default for TextCodec {
    fn default() -> Self {
        Self::new(BucketZone::default())
    }
}

fn local_to_millis<Tz: TimeZone>(zone: &Tz, naive: &NaiveDateTime) -> Result<i64> {
    earliest_millis(zone.from_local_datetime(naive))
        .ok_or_else(|| AppError::Parse(format!("{} does not exist in this zone", naive)))
}

fn format_millis<Tz>(zone: &Tz, millis: i64, format: &str) -> Result<String>
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    zone.timestamp_millis_opt(millis)
        .single()
        .map(|dt| dt.format(format).to_string())
        .ok_or_else(|| DomainError::OutOfRange(millis).into())
}

impl TimeParser for TextCodec {
    type Time = String;

    fn parse(&self, time: &String) -> Result<i64> {
        let text = time.trim();
        if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
            return Ok(dt.timestamp_millis());
        }

        let naive = Self::parse_naive(text)?;
        match self.zone {
            BucketZone::Utc => local_to_millis(&Utc, &naive),
            BucketZone::Local => local_to_millis(&chrono::Local, &naive),
            BucketZone::Fixed(offset) => local_to_millis(&offset, &naive),
        }
    }
}

impl TimeEncoder for TextCodec {
    fn encode(&self, millis: i64) -> Result<String> {
        match self.zone {
            BucketZone::Utc => format_millis(&Utc, millis, &self.format),
            BucketZone::Local => format_millis(&chrono::Local, millis, &self.format),
            BucketZone::Fixed(offset) => format_millis(&offset, millis, &self.format),
        }
    }
}
