// Timeline Core - scale-aligned time buckets for timeline/Gantt views
// NO I/O dependencies: pure date math behind codec ports

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod port;

pub use application::{
    diff_time, diff_time_with, get_begin_time_of_time_line, get_begin_time_of_time_line_with,
    get_end_time_of_time_line, get_end_time_of_time_line_with, Timeline,
};
pub use config::TimelineConfig;
pub use domain::{
    is_available_scale, Bucket, BucketZone, DomainError, Scale, ONE_DAY, ONE_HOUR, ONE_MINUTE,
    ONE_SECOND,
};
pub use error::{AppError, Result};
pub use port::{DateTimeCodec, EpochMillisCodec, FnCodec, FnParser, TextCodec, TimeEncoder, TimeParser};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
