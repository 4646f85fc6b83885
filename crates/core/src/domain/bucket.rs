// Bucket Domain Model

use super::scale::Scale;
use serde::{Deserialize, Serialize};

/// Half-open interval `[begin, end)` in epoch ms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bucket {
    pub begin: i64,
    pub end: i64,
    pub scale: Scale,
}

impl Bucket {
    /// Bucket of width `scale` starting at `begin`
    pub fn starting_at(begin: i64, scale: Scale) -> Self {
        Self {
            begin,
            end: begin + scale.as_millis(),
            scale,
        }
    }

    pub fn contains(&self, millis: i64) -> bool {
        self.begin <= millis && millis < self.end
    }

    pub fn width(&self) -> i64 {
        self.end - self.begin
    }
}
