// Scale Domain Model

use super::error::{DomainError, Result};
use serde::{Deserialize, Serialize};

/// Milliseconds in one second
pub const ONE_SECOND: i64 = 1_000;
/// Milliseconds in one minute
pub const ONE_MINUTE: i64 = ONE_SECOND * 60;
/// Milliseconds in one hour
pub const ONE_HOUR: i64 = ONE_MINUTE * 60;
/// Milliseconds in one day (the timeline alignment period)
pub const ONE_DAY: i64 = ONE_HOUR * 24;

/// Check whether `scale` (ms) can be used as a bucket width.
///
/// A scale is available when it is positive and divides one day evenly.
pub fn is_available_scale(scale: i64) -> bool {
    if scale <= 0 {
        return false;
    }
    ONE_DAY % scale == 0
}

/// Validated bucket width in milliseconds
///
/// Invariant: `0 < ms` and `ONE_DAY % ms == 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct Scale(i64);

impl Scale {
    pub fn new(ms: i64) -> Result<Self> {
        if !is_available_scale(ms) {
            return Err(DomainError::InvalidScale(ms));
        }
        Ok(Self(ms))
    }

    pub fn as_millis(&self) -> i64 {
        self.0
    }

    /// Number of buckets that fit in one day
    pub fn buckets_per_day(&self) -> i64 {
        ONE_DAY / self.0
    }
}

impl TryFrom<i64> for Scale {
    type Error = DomainError;

    fn try_from(ms: i64) -> Result<Self> {
        Scale::new(ms)
    }
}

impl From<Scale> for i64 {
    fn from(scale: Scale) -> Self {
        scale.0
    }
}

impl std::fmt::Display for Scale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let ms = self.0;
        if ms % ONE_DAY == 0 {
            write!(f, "{}d", ms / ONE_DAY)
        } else if ms % ONE_HOUR == 0 {
            write!(f, "{}h", ms / ONE_HOUR)
        } else if ms % ONE_MINUTE == 0 {
            write!(f, "{}m", ms / ONE_MINUTE)
        } else if ms % ONE_SECOND == 0 {
            write!(f, "{}s", ms / ONE_SECOND)
        } else {
            write!(f, "{}ms", ms)
        }
    }
}

impl std::str::FromStr for Scale {
    type Err = DomainError;

    /// Accepts raw milliseconds (`"250"`) or a suffixed amount
    /// (`"250ms"`, `"6s"`, `"3m"`, `"2h"`, `"1d"`).
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let split = s
            .find(|c: char| !c.is_ascii_digit() && c != '-')
            .unwrap_or(s.len());
        let (amount, unit) = s.split_at(split);

        let amount: i64 = amount
            .parse()
            .map_err(|_| DomainError::MalformedScale(s.to_string()))?;
        let unit_ms = match unit.trim() {
            "" | "ms" => 1,
            "s" => ONE_SECOND,
            "m" | "min" => ONE_MINUTE,
            "h" => ONE_HOUR,
            "d" => ONE_DAY,
            _ => return Err(DomainError::MalformedScale(s.to_string())),
        };

        let ms = amount
            .checked_mul(unit_ms)
            .ok_or_else(|| DomainError::MalformedScale(s.to_string()))?;
        Scale::new(ms)
    }
}
