// SPDX-License-Identifier: MPL-2.0
use std::time::Instant;

/// High-resolution monotonic clock, measured in ticks since the clock was created.
#[derive(Debug, Clone, Copy)]
pub struct Clock {
    origin: Instant,
}

impl Clock {
    /// Ticks per second.
    pub const FREQUENCY: f64 = 1_000_000_000.0;

    pub fn new() -> Self {
        Clock {
            origin: Instant::now(),
        }
    }

    pub fn frequency(&self) -> f64 {
        Self::FREQUENCY
    }

    pub fn timestamp(&self) -> u64 {
        u64::try_from(self.origin.elapsed().as_nanos()).unwrap_or(u64::MAX)
    }

    /// Seconds since the clock was created.
    pub fn time(&self) -> f64 {
        self.timestamp() as f64 / Self::FREQUENCY
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}
