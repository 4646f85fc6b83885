// Port Layer - Interfaces for time representations

pub mod chrono_codec;
pub mod time_codec;

// Re-exports
pub use chrono_codec::{DateTimeCodec, TextCodec, DEFAULT_TEXT_FORMAT};
pub use time_codec::{EpochMillisCodec, FnCodec, FnParser, TimeEncoder, TimeParser};
