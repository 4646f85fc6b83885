// Domain Layer - Pure bucketing rules and entities

pub mod bucket;
pub mod error;
pub mod scale;
pub mod tier;
pub mod zone;

// Re-exports
pub use bucket::Bucket;
pub use error::DomainError;
pub use scale::{is_available_scale, Scale, ONE_DAY, ONE_HOUR, ONE_MINUTE, ONE_SECOND};
pub use tier::{floor_time_of_day, tier_for, TierRule, TimeUnit, TIER_RULES};
pub use zone::{floor_in_zone, BucketZone};
