//! Time source abstraction for timestamped message fields
//!
//! A few layouts (position reports, base station report, aid-to-navigation
//! report) carry the UTC instant of composition. Encoders read it through
//! the [`Clock`] trait so tests can pin a fixed instant and keep the output
//! reproducible.

use chrono::{DateTime, TimeZone, Utc};

/// Source of the current UTC instant
pub trait Clock {
    /// The current instant
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time source
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Fixed time source for deterministic output
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    /// Create a fixed clock from UTC calendar fields
    ///
    /// Falls back to the Unix epoch when the fields do not name a real
    /// instant.
    pub fn from_ymd_hms(year: i32, month: u32, day: u32, hour: u32, min: u32, sec: u32) -> Self {
        FixedClock(
            Utc.with_ymd_and_hms(year, month, day, hour, min, sec)
                .single()
                .unwrap_or(DateTime::UNIX_EPOCH),
        )
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn test_fixed_clock() {
        let clock = FixedClock::from_ymd_hms(2024, 6, 15, 12, 34, 56);
        assert_eq!(clock.now().second(), 56);
        assert_eq!(clock.now(), clock.now());
    }
}
