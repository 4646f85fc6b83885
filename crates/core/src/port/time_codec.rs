// Time Codec Port (pluggable time representations)

use crate::error::Result;
use std::marker::PhantomData;

/// Converts a time value into milliseconds since the Unix epoch
pub trait TimeParser: Send + Sync {
    type Time;

    fn parse(&self, time: &Self::Time) -> Result<i64>;
}

/// Converts milliseconds since the Unix epoch back into a time value
pub trait TimeEncoder: TimeParser {
    fn encode(&self, millis: i64) -> Result<Self::Time>;
}

/// Raw epoch milliseconds (identity codec)
#[derive(Debug, Clone, Copy, Default)]
pub struct EpochMillisCodec;

impl TimeParser for EpochMillisCodec {
    type Time = i64;

    fn parse(&self, time: &i64) -> Result<i64> {
        Ok(*time)
    }
}

impl TimeEncoder for EpochMillisCodec {
    fn encode(&self, millis: i64) -> Result<i64> {
        Ok(millis)
    }
}

/// Parser backed by a closure
///
/// # Example
/// ```text
/// let parser = FnParser::new(|t: &u64| Ok(*t as i64 * 1000));
/// let diff = diff_time_with(&1, &3, &parser)?; // 2000
/// ```
pub struct FnParser<T, P> {
    parse: P,
    _time: PhantomData<fn() -> T>,
}

impl<T, P> FnParser<T, P>
where
    P: Fn(&T) -> Result<i64>,
{
    pub fn new(parse: P) -> Self {
        Self {
            parse,
            _time: PhantomData,
        }
    }
}

impl<T, P> TimeParser for FnParser<T, P>
where
    P: Fn(&T) -> Result<i64> + Send + Sync,
{
    type Time = T;

    fn parse(&self, time: &T) -> Result<i64> {
        (self.parse)(time)
    }
}

/// Parser/encoder pair backed by closures
pub struct FnCodec<T, P, E> {
    parse: P,
    encode: E,
    _time: PhantomData<fn() -> T>,
}

impl<T, P, E> FnCodec<T, P, E>
where
    P: Fn(&T) -> Result<i64>,
    E: Fn(i64) -> Result<T>,
{
    pub fn new(parse: P, encode: E) -> Self {
        Self {
            parse,
            encode,
            _time: PhantomData,
        }
    }
}

impl<T, P, E> TimeParser for FnCodec<T, P, E>
where
    P: Fn(&T) -> Result<i64> + Send + Sync,
    E: Send + Sync,
{
    type Time = T;

    fn parse(&self, time: &T) -> Result<i64> {
        (self.parse)(time)
    }
}

impl<T, P, E> TimeEncoder for FnCodec<T, P, E>
where
    P: Fn(&T) -> Result<i64> + Send + Sync,
    E: Fn(i64) -> Result<T> + Send + Sync,
{
    fn encode(&self, millis: i64) -> Result<T> {
        (self.encode)(millis)
    }
}
