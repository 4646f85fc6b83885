// Tier Table - how a scale floors wall-clock fields
//
// Band edges are asymmetric: every band is inclusive at its lower edge, the
// hour band is also inclusive at its upper edge (a full day lands there),
// the others are exclusive.

use super::scale::{Scale, ONE_DAY, ONE_HOUR, ONE_MINUTE, ONE_SECOND};
use chrono::{NaiveTime, TimeDelta, Timelike};

/// Wall-clock field a tier floors
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum TimeUnit {
    Millisecond,
    Second,
    Minute,
    Hour,
}

impl TimeUnit {
    /// Width of one unit in milliseconds
    pub const fn millis(self) -> i64 {
        match self {
            TimeUnit::Millisecond => 1,
            TimeUnit::Second => ONE_SECOND,
            TimeUnit::Minute => ONE_MINUTE,
            TimeUnit::Hour => ONE_HOUR,
        }
    }

    /// Current value of this field (ms-of-second, second-of-minute, ...)
    pub fn get(self, time: &NaiveTime) -> i64 {
        match self {
            TimeUnit::Millisecond => i64::from(time.nanosecond() / 1_000_000).min(999),
            TimeUnit::Second => i64::from(time.second()),
            TimeUnit::Minute => i64::from(time.minute()),
            TimeUnit::Hour => i64::from(time.hour()),
        }
    }

    /// Milliseconds contributed by all fields smaller than this one
    fn below(self, time: &NaiveTime) -> i64 {
        match self {
            TimeUnit::Millisecond => 0,
            TimeUnit::Second => TimeUnit::Millisecond.get(time),
            TimeUnit::Minute => {
                TimeUnit::Second.get(time) * ONE_SECOND + TimeUnit::Millisecond.get(time)
            }
            TimeUnit::Hour => {
                TimeUnit::Minute.get(time) * ONE_MINUTE
                    + TimeUnit::Second.get(time) * ONE_SECOND
                    + TimeUnit::Millisecond.get(time)
            }
        }
    }
}

impl std::fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TimeUnit::Millisecond => write!(f, "MILLISECOND"),
            TimeUnit::Second => write!(f, "SECOND"),
            TimeUnit::Minute => write!(f, "MINUTE"),
            TimeUnit::Hour => write!(f, "HOUR"),
        }
    }
}

/// One row of the flooring table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TierRule {
    /// Smallest matching scale (inclusive)
    pub lower: i64,
    /// Upper scale edge
    pub upper: i64,
    /// Whether `upper` itself matches
    pub upper_inclusive: bool,
    /// Field floored by this tier; smaller fields are zeroed
    pub unit: TimeUnit,
}

/// Ordered flooring table. Rules are applied independently, in order.
pub const TIER_RULES: [TierRule; 4] = [
    TierRule {
        lower: 1,
        upper: ONE_SECOND,
        upper_inclusive: false,
        unit: TimeUnit::Millisecond,
    },
    TierRule {
        lower: ONE_SECOND,
        upper: ONE_MINUTE,
        upper_inclusive: false,
        unit: TimeUnit::Second,
    },
    TierRule {
        lower: ONE_MINUTE,
        upper: ONE_HOUR,
        upper_inclusive: false,
        unit: TimeUnit::Minute,
    },
    TierRule {
        lower: ONE_HOUR,
        upper: ONE_DAY,
        upper_inclusive: true,
        unit: TimeUnit::Hour,
    },
];

impl TierRule {
    pub fn matches(&self, scale: i64) -> bool {
        let below_upper = if self.upper_inclusive {
            scale <= self.upper
        } else {
            scale < self.upper
        };
        scale >= self.lower && below_upper
    }

    /// Zero the smaller fields and floor `unit` to a multiple of the scale
    /// expressed in that unit.
    ///
    /// The scale in unit may be fractional (1500 ms is 1.5 s); the product
    /// is truncated toward zero before it is written back.
    pub fn apply(&self, time: NaiveTime, scale: i64) -> NaiveTime {
        let scale_in_unit = scale as f64 / self.unit.millis() as f64;
        let current = self.unit.get(&time);
        let count = (current as f64 / scale_in_unit).floor();
        let floored = (count * scale_in_unit).trunc() as i64;

        let drop_ms = self.unit.below(&time) + (current - floored) * self.unit.millis();
        time - TimeDelta::milliseconds(drop_ms)
    }
}

/// First rule matching `scale`, if any
pub fn tier_for(scale: i64) -> Option<&'static TierRule> {
    TIER_RULES.iter().find(|rule| rule.matches(scale))
}

/// Floor a time of day to the start of its scale bucket
pub fn floor_time_of_day(time: NaiveTime, scale: Scale) -> NaiveTime {
    let scale = scale.as_millis();
    TIER_RULES
        .iter()
        .filter(|rule| rule.matches(scale))
        .fold(time, |acc, rule| rule.apply(acc, scale))
}
