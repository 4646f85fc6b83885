// Bucket Zone - whose wall clock the tiers floor

use super::error::{DomainError, Result};
use super::scale::Scale;
use super::tier::floor_time_of_day;
use chrono::{DateTime, FixedOffset, LocalResult, NaiveDateTime, Offset, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Timezone in which buckets are aligned
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum BucketZone {
    Utc,
    /// Host timezone
    #[default]
    Local,
    Fixed(FixedOffset),
}

impl BucketZone {
    /// Floor an epoch-ms instant to the start of its bucket in this zone
    pub fn floor_millis(&self, millis: i64, scale: Scale) -> Result<i64> {
        match self {
            BucketZone::Utc => floor_in_zone(&Utc, millis, scale),
            BucketZone::Local => floor_in_zone(&chrono::Local, millis, scale),
            BucketZone::Fixed(offset) => floor_in_zone(offset, millis, scale),
        }
    }
}

/// Floor `millis` using the wall-clock fields of `zone`.
///
/// The floored wall-clock time is mapped back to an instant like host date
/// setters do: the earlier instant when it is ambiguous, and the offset in
/// force before the transition when it falls into a gap.
pub fn floor_in_zone<Tz: TimeZone>(zone: &Tz, millis: i64, scale: Scale) -> Result<i64> {
    let instant = zone
        .timestamp_millis_opt(millis)
        .single()
        .ok_or(DomainError::OutOfRange(millis))?;

    let local = instant.naive_local();
    let floored = local.date().and_time(floor_time_of_day(local.time(), scale));

    let begin = match zone.from_local_datetime(&floored) {
        LocalResult::Single(dt) => dt.timestamp_millis(),
        LocalResult::Ambiguous(a, b) => {
            // chrono does not order the pair; `Local` yields the later one first
            let (earliest, latest) = ordered_millis(&a, &b);
            debug!(
                local = %floored,
                earliest = earliest,
                latest = latest,
                "Ambiguous bucket start, using earliest"
            );
            earliest
        }
        LocalResult::None => {
            let begin = resolve_gap(zone, &floored, instant.offset().fix());
            debug!(local = %floored, begin = begin, "Bucket start skipped by transition");
            begin
        }
    };

    Ok(begin)
}

/// Earliest instant of a local-time lookup; `None` inside a gap
pub(crate) fn earliest_millis<Tz: TimeZone>(result: LocalResult<DateTime<Tz>>) -> Option<i64> {
    match result {
        LocalResult::Single(dt) => Some(dt.timestamp_millis()),
        LocalResult::Ambiguous(a, b) => Some(ordered_millis(&a, &b).0),
        LocalResult::None => None,
    }
}

fn ordered_millis<Tz: TimeZone>(a: &DateTime<Tz>, b: &DateTime<Tz>) -> (i64, i64) {
    let (a, b) = (a.timestamp_millis(), b.timestamp_millis());
    (a.min(b), a.max(b))
}

/// Map a wall-clock time that does not exist in `zone` to an instant,
/// using the offset in force just before the gap.
fn resolve_gap<Tz: TimeZone>(zone: &Tz, local: &NaiveDateTime, after: FixedOffset) -> i64 {
    // Interpreted with the later offset, the wall time lands before the gap.
    let guess = local.and_utc().timestamp_millis() - i64::from(after.local_minus_utc()) * 1000;
    let before = zone
        .timestamp_millis_opt(guess)
        .single()
        .map(|dt| dt.offset().fix())
        .unwrap_or(after);
    local.and_utc().timestamp_millis() - i64::from(before.local_minus_utc()) * 1000
}

impl std::fmt::Display for BucketZone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BucketZone::Utc => write!(f, "utc"),
            BucketZone::Local => write!(f, "local"),
            BucketZone::Fixed(offset) => write!(f, "{}", offset),
        }
    }
}

impl std::str::FromStr for BucketZone {
    type Err = DomainError;

    /// Accepts `utc`, `local`, `z`, or an offset such as `+09:00`
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        match s.to_ascii_lowercase().as_str() {
            "utc" | "z" => return Ok(BucketZone::Utc),
            "local" => return Ok(BucketZone::Local),
            _ => {}
        }
        s.parse::<FixedOffset>()
            .map(BucketZone::Fixed)
            .map_err(|_| DomainError::MalformedZone(s.to_string()))
    }
}

impl TryFrom<String> for BucketZone {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<BucketZone> for String {
    fn from(zone: BucketZone) -> Self {
        zone.to_string()
    }
}
