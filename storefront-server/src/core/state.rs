//! Server state
//!
//! Cloned into every handler. Holds only immutable data: the schedule is
//! validated once at startup and the clock is shared behind an `Arc`.

use std::sync::Arc;

use chrono::DateTime;
use chrono_tz::Tz;

use crate::core::Config;
use crate::fulfillment::{Clock, FulfillmentSchedule, SystemClock};
use crate::utils::AppResult;

#[derive(Clone)]
pub struct ServerState {
    pub config: Config,
    pub schedule: Arc<FulfillmentSchedule>,
    pub clock: Arc<dyn Clock>,
}

impl ServerState {
    /// Build state against the system clock
    pub fn initialize(config: &Config) -> AppResult<Self> {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// Build state with an injected clock (tests, previews)
    pub fn with_clock(config: &Config, clock: Arc<dyn Clock>) -> AppResult<Self> {
        let schedule = FulfillmentSchedule::from_settings(&config.fulfillment)?;

        tracing::info!(
            timezone = %schedule.timezone(),
            cutoff_day = %schedule.cutoff().day,
            cutoff_time = %schedule.cutoff().time.format("%H:%M"),
            lead_time_days = schedule.lead_time_days(),
            "Fulfillment schedule loaded"
        );

        Ok(Self {
            config: config.clone(),
            schedule: Arc::new(schedule),
            clock,
        })
    }

    /// Current instant in the business timezone
    pub fn business_now(&self) -> DateTime<Tz> {
        self.clock.business_now(self.schedule.timezone())
    }
}
