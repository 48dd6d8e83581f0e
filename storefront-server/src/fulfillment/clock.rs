//! "Now" provider
//!
//! Handlers read the time through [`Clock`] so that tests and previews can pin
//! the instant the calculator sees.

use chrono::{DateTime, Utc};
use chrono_tz::Tz;

/// Source of the current instant
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;

    /// Current instant in business wall-clock fields
    fn business_now(&self, tz: Tz) -> DateTime<Tz> {
        self.now().with_timezone(&tz)
    }
}

/// Wall clock of the host
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock frozen at one instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    now: DateTime<Utc>,
}

impl FixedClock {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self { now }
    }

    /// Freeze at a wall-clock instant of any zone
    pub fn at(now: DateTime<Tz>) -> Self {
        Self::new(now.with_timezone(&Utc))
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.now
    }
}

/// Current instant in the business timezone, read from the system clock
pub fn current_business_time(tz: Tz) -> DateTime<Tz> {
    SystemClock.business_now(tz)
}
