//! Validated fulfillment schedule
//!
//! Raw [`FulfillmentSettings`] are plain numbers and strings. They are parsed
//! once into typed values here; the calculator only ever sees a weekday,
//! a `NaiveTime` and an unsigned lead time, so it cannot produce dates from
//! out-of-range input.

use std::collections::HashSet;

use chrono::{NaiveDate, NaiveTime, Weekday};
use chrono_tz::Tz;
use shared::{CutoffRule, FulfillmentDayRule, FulfillmentKind, FulfillmentSettings};

use super::{FulfillmentError, MAX_LEAD_TIME_DAYS};

/// Day of week index (0=Sunday..6=Saturday) → `Weekday`
pub fn weekday_from_index(day: i64) -> Result<Weekday, FulfillmentError> {
    match day {
        0 => Ok(Weekday::Sun),
        1 => Ok(Weekday::Mon),
        2 => Ok(Weekday::Tue),
        3 => Ok(Weekday::Wed),
        4 => Ok(Weekday::Thu),
        5 => Ok(Weekday::Fri),
        6 => Ok(Weekday::Sat),
        _ => Err(FulfillmentError::InvalidDayOfWeek(day)),
    }
}

/// `Weekday` → day of week index (0=Sunday)
pub fn weekday_index(day: Weekday) -> u8 {
    day.num_days_from_sunday() as u8
}

/// Parse a strict `HH:mm` time (24h, zero padded)
pub fn parse_cutoff_time(value: &str) -> Result<NaiveTime, FulfillmentError> {
    let bytes = value.as_bytes();
    let well_formed = bytes.len() == 5
        && bytes[2] == b':'
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| i == 2 || b.is_ascii_digit());
    if !well_formed {
        return Err(FulfillmentError::InvalidCutoffTime(value.to_string()));
    }

    NaiveTime::parse_from_str(value, "%H:%M")
        .map_err(|_| FulfillmentError::InvalidCutoffTime(value.to_string()))
}

/// Parse a `YYYY-MM-DD` calendar date
pub fn parse_date(value: &str) -> Result<NaiveDate, FulfillmentError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| FulfillmentError::InvalidDate(value.to_string()))
}

/// Resolve an IANA timezone identifier
pub fn parse_timezone(id: &str) -> Result<Tz, FulfillmentError> {
    id.trim()
        .parse::<Tz>()
        .map_err(|_| FulfillmentError::TimezoneUnavailable(id.to_string()))
}

/// Validate a lead time in days
pub fn parse_lead_time(days: i64) -> Result<u32, FulfillmentError> {
    if days < 0 {
        return Err(FulfillmentError::NegativeLeadTime(days));
    }
    if days > MAX_LEAD_TIME_DAYS as i64 {
        return Err(FulfillmentError::LeadTimeTooLong(days));
    }
    Ok(days as u32)
}

/// Weekly order cutoff in typed form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cutoff {
    pub day: Weekday,
    pub time: NaiveTime,
}

impl Cutoff {
    pub fn new(day: Weekday, time: NaiveTime) -> Self {
        Self { day, time }
    }

    pub fn from_rule(rule: &CutoffRule) -> Result<Self, FulfillmentError> {
        Ok(Self {
            day: weekday_from_index(rule.cutoff_day)?,
            time: parse_cutoff_time(&rule.cutoff_time)?,
        })
    }
}

/// A fulfillment weekday with its display window
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FulfillmentSlot {
    pub day: Weekday,
    pub time_window: String,
}

fn parse_slots(rules: &[FulfillmentDayRule]) -> Result<Vec<FulfillmentSlot>, FulfillmentError> {
    let mut seen = HashSet::new();
    rules
        .iter()
        .map(|rule| {
            let day = weekday_from_index(rule.day_of_week)?;
            if !seen.insert(day) {
                return Err(FulfillmentError::DuplicateDay(rule.day_of_week));
            }
            Ok(FulfillmentSlot {
                day,
                time_window: rule.time_window.clone(),
            })
        })
        .collect()
}

/// Validated, immutable fulfillment configuration
#[derive(Debug, Clone)]
pub struct FulfillmentSchedule {
    timezone: Tz,
    cutoff: Cutoff,
    lead_time_days: u32,
    delivery: Vec<FulfillmentSlot>,
    pickup: Vec<FulfillmentSlot>,
    settings: FulfillmentSettings,
}

impl FulfillmentSchedule {
    /// Validate raw settings. Fails on the first bad value; nothing is clamped.
    pub fn from_settings(settings: &FulfillmentSettings) -> Result<Self, FulfillmentError> {
        let timezone = parse_timezone(&settings.timezone)?;
        let cutoff = Cutoff::from_rule(&settings.cutoff)?;
        let lead_time_days = parse_lead_time(settings.lead_time_days as i64)?;
        let delivery = parse_slots(settings.days_for(FulfillmentKind::Delivery))?;
        let pickup = parse_slots(settings.days_for(FulfillmentKind::Pickup))?;

        if delivery.is_empty() && pickup.is_empty() {
            return Err(FulfillmentError::NoFulfillmentDays);
        }

        Ok(Self {
            timezone,
            cutoff,
            lead_time_days,
            delivery,
            pickup,
            settings: settings.clone(),
        })
    }

    pub fn timezone(&self) -> Tz {
        self.timezone
    }

    pub fn cutoff(&self) -> &Cutoff {
        &self.cutoff
    }

    pub fn lead_time_days(&self) -> u32 {
        self.lead_time_days
    }

    pub fn slots(&self, kind: FulfillmentKind) -> &[FulfillmentSlot] {
        match kind {
            FulfillmentKind::Delivery => &self.delivery,
            FulfillmentKind::Pickup => &self.pickup,
        }
    }

    /// The raw settings this schedule was built from
    pub fn settings(&self) -> &FulfillmentSettings {
        &self.settings
    }
}
