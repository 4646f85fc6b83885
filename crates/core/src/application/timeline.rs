// Timeline bucketing use cases
use crate::domain::{floor_in_zone, tier_for, Bucket, BucketZone, DomainError, Scale};
use crate::error::Result;
use crate::port::{DateTimeCodec, TimeEncoder, TimeParser};
use chrono::{DateTime, TimeZone};
use tracing::{debug, warn};

/// Validate a raw scale, logging rejections
fn checked_scale(scale: i64) -> Result<Scale> {
    Scale::new(scale).map_err(|e| {
        warn!(scale = %scale, "Rejected scale that does not divide a day");
        e.into()
    })
}

/// Bucket boundaries aligned to the wall clock of one zone
///
/// Stateless apart from the zone; safe to share between threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct Timeline {
    zone: BucketZone,
}

impl Timeline {
    /// Create a timeline
    ///
    /// # Arguments
    /// * `zone` - Zone whose wall-clock fields are floored
    ///
    /// # Example
    /// ```text
    /// let timeline = Timeline::new(BucketZone::Utc);
    /// let begin = timeline.begin_millis(t, 3 * ONE_MINUTE)?;
    /// ```
    pub fn new(zone: BucketZone) -> Self {
        Self { zone }
    }

    pub fn zone(&self) -> BucketZone {
        self.zone
    }

    /// Start of the bucket containing `millis`
    ///
    /// Fails with `DomainError::InvalidScale` if `scale` does not divide a day.
    pub fn begin_millis(&self, millis: i64, scale: i64) -> Result<i64> {
        let scale = checked_scale(scale)?;
        self.floor(millis, scale)
    }

    /// Exclusive end of the bucket containing `millis` (`begin + scale`)
    pub fn end_millis(&self, millis: i64, scale: i64) -> Result<i64> {
        let scale = checked_scale(scale)?;
        Ok(self.floor(millis, scale)? + scale.as_millis())
    }

    /// Start of the bucket containing `time`, re-encoded by `codec`
    ///
    /// The scale is validated before `time` is parsed.
    pub fn begin_time<C: TimeEncoder>(
        &self,
        time: &C::Time,
        scale: i64,
        codec: &C,
    ) -> Result<C::Time> {
        let scale = checked_scale(scale)?;
        let begin = self.floor(codec.parse(time)?, scale)?;
        codec.encode(begin)
    }

    /// End of the bucket containing `time`, re-encoded by `codec`
    pub fn end_time<C: TimeEncoder>(
        &self,
        time: &C::Time,
        scale: i64,
        codec: &C,
    ) -> Result<C::Time> {
        let scale = checked_scale(scale)?;
        let begin = self.floor(codec.parse(time)?, scale)?;
        codec.encode(begin + scale.as_millis())
    }

    /// Both bounds of the bucket containing `time`, with a single parse
    pub fn bucket<P: TimeParser>(&self, time: &P::Time, scale: i64, parser: &P) -> Result<Bucket> {
        let scale = checked_scale(scale)?;
        let begin = self.floor(parser.parse(time)?, scale)?;
        Ok(Bucket::starting_at(begin, scale))
    }

    fn floor(&self, millis: i64, scale: Scale) -> Result<i64> {
        let begin = self.zone.floor_millis(millis, scale)?;

        debug!(
            millis = %millis,
            scale = %scale,
            zone = %self.zone,
            tier = %tier_for(scale.as_millis()).map(|r| r.unit.to_string()).unwrap_or_default(),
            begin = %begin,
            "Computed bucket start"
        );

        Ok(begin)
    }
}

/// Milliseconds from `start` to `end` (negative if `end` is earlier)
pub fn diff_time<Tz1: TimeZone, Tz2: TimeZone>(start: &DateTime<Tz1>, end: &DateTime<Tz2>) -> i64 {
    end.timestamp_millis() - start.timestamp_millis()
}

/// `parser(end) - parser(start)`
///
/// Fails with the parser's error, or with `DomainError::OutOfRange(end)` when
/// the difference does not fit in an `i64`.
pub fn diff_time_with<P: TimeParser>(start: &P::Time, end: &P::Time, parser: &P) -> Result<i64> {
    let start = parser.parse(start)?;
    let end = parser.parse(end)?;
    end.checked_sub(start)
        .ok_or_else(|| DomainError::OutOfRange(end).into())
}

/// Start of the bucket containing `time`, floored on `time`'s own zone
pub fn get_begin_time_of_time_line<Tz>(time: &DateTime<Tz>, scale: i64) -> Result<DateTime<Tz>>
where
    Tz: TimeZone + Send + Sync,
{
    let scale = checked_scale(scale)?;
    let zone = time.timezone();
    let begin = floor_in_zone(&zone, time.timestamp_millis(), scale)?;
    DateTimeCodec::new(zone).encode(begin)
}

/// End of the bucket containing `time`, floored on `time`'s own zone
pub fn get_end_time_of_time_line<Tz>(time: &DateTime<Tz>, scale: i64) -> Result<DateTime<Tz>>
where
    Tz: TimeZone + Send + Sync,
{
    let begin = get_begin_time_of_time_line(time, scale)?;
    DateTimeCodec::new(time.timezone()).encode(begin.timestamp_millis() + scale)
}

/// `get_begin_time_of_time_line` for any representation
pub fn get_begin_time_of_time_line_with<C: TimeEncoder>(
    time: &C::Time,
    scale: i64,
    codec: &C,
    zone: BucketZone,
) -> Result<C::Time> {
    Timeline::new(zone).begin_time(time, scale, codec)
}

/// `get_end_time_of_time_line` for any representation
pub fn get_end_time_of_time_line_with<C: TimeEncoder>(
    time: &C::Time,
    scale: i64,
    codec: &C,
    zone: BucketZone,
) -> Result<C::Time> {
    Timeline::new(zone).end_time(time, scale, codec)
}
