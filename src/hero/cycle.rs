use std::fmt;

use crate::foundation::error::{HeroError, HeroResult};

/// Next index in the closed cycle `1..=total`: `(current % total) + 1`.
pub fn advance(current: u32, total: u32) -> HeroResult<u32> {
    current
        .checked_rem(total)
        .map(|r| r + 1)
        .ok_or_else(|| HeroError::validation("video count must be > 0"))
}

/// A 1-based video index bounded by the number of videos in the reel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub struct VideoIndex {
    value: u32,
    total: u32,
}

impl VideoIndex {
    /// Validated index in `1..=total`.
    pub fn new(value: u32, total: u32) -> HeroResult<Self> {
        if total == 0 {
            return Err(HeroError::validation("video count must be > 0"));
        }
        if !(1..=total).contains(&value) {
            return Err(HeroError::validation(format!(
                "video index {value} is outside 1..={total}"
            )));
        }
        Ok(Self { value, total })
    }

    /// The first video.
    pub fn first(total: u32) -> HeroResult<Self> {
        Self::new(1, total)
    }

    /// 1-based value.
    pub fn get(self) -> u32 {
        self.value
    }

    /// Number of videos in the cycle.
    pub fn total(self) -> u32 {
        self.total
    }

    /// The index a click moves to. Wraps from `total` back to 1.
    #[must_use]
    pub fn advance(self) -> Self {
        Self {
            value: (self.value % self.total) + 1,
            total: self.total,
        }
    }
}

impl fmt::Display for VideoIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.value, self.total)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/hero/cycle.rs"]
mod tests;
