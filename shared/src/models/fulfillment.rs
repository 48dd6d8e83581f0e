//! Fulfillment Schedule Models
//!
//! Plain configuration values for delivery/pickup scheduling plus the
//! read-only windows derived from them. Days of week are `0=Sunday..6=Saturday`,
//! times are `HH:MM` in the business timezone.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, ErrorCode};

/// Default business timezone (U.S. Mountain Time, observes DST)
pub const DEFAULT_TIMEZONE: &str = "America/Boise";

/// Day names indexed by day of week (0=Sunday)
pub const DAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Name of a day of week, or "Invalid" outside 0-6
pub fn day_name(day_of_week: u8) -> &'static str {
    DAY_NAMES
        .get(day_of_week as usize)
        .copied()
        .unwrap_or("Invalid")
}

/// How the order reaches the customer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FulfillmentKind {
    Delivery,
    Pickup,
}

impl FulfillmentKind {
    pub const ALL: [FulfillmentKind; 2] = [FulfillmentKind::Delivery, FulfillmentKind::Pickup];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Delivery => "delivery",
            Self::Pickup => "pickup",
        }
    }
}

impl fmt::Display for FulfillmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FulfillmentKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "delivery" => Ok(Self::Delivery),
            "pickup" => Ok(Self::Pickup),
            other => Err(AppError::new(ErrorCode::InvalidFulfillmentKind)
                .with_detail("value", other.to_string())),
        }
    }
}

/// Weekly order cutoff
///
/// After `cutoff_time` on `cutoff_day` the current week is closed and new
/// orders roll to the following week's fulfillment days.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CutoffRule {
    /// 0=Sunday..6=Saturday; range checked when the schedule is built
    pub cutoff_day: i64,
    /// HH:MM
    pub cutoff_time: String,
}

impl Default for CutoffRule {
    fn default() -> Self {
        Self {
            cutoff_day: 2,
            cutoff_time: "23:59".to_string(),
        }
    }
}

/// A weekday on which delivery or pickup happens
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FulfillmentDayRule {
    /// 0=Sunday..6=Saturday; range checked when the schedule is built
    pub day_of_week: i64,
    /// Display string, attached verbatim (e.g. "10:00 AM - 2:00 PM")
    #[serde(default)]
    pub time_window: String,
}

impl FulfillmentDayRule {
    pub fn new(day_of_week: i64, time_window: impl Into<String>) -> Self {
        Self {
            day_of_week,
            time_window: time_window.into(),
        }
    }
}

/// Raw fulfillment configuration as loaded from the environment
///
/// Values are unvalidated; the server turns them into a schedule at startup
/// and refuses to start on bad input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FulfillmentSettings {
    /// IANA timezone identifier
    #[serde(default = "default_timezone")]
    pub timezone: String,
    pub cutoff: CutoffRule,
    /// Signed; negatives are rejected when the schedule is built
    pub lead_time_days: i32,
    #[serde(default)]
    pub delivery: Vec<FulfillmentDayRule>,
    #[serde(default)]
    pub pickup: Vec<FulfillmentDayRule>,
}

fn default_timezone() -> String {
    DEFAULT_TIMEZONE.to_string()
}

impl FulfillmentSettings {
    pub fn days_for(&self, kind: FulfillmentKind) -> &[FulfillmentDayRule] {
        match kind {
            FulfillmentKind::Delivery => &self.delivery,
            FulfillmentKind::Pickup => &self.pickup,
        }
    }
}

impl Default for FulfillmentSettings {
    fn default() -> Self {
        Self {
            timezone: default_timezone(),
            cutoff: CutoffRule::default(),
            lead_time_days: 2,
            delivery: vec![
                FulfillmentDayRule::new(4, "10:00 AM - 2:00 PM"),
                FulfillmentDayRule::new(6, "10:00 AM - 2:00 PM"),
            ],
            pickup: vec![
                FulfillmentDayRule::new(4, "8:00 AM - 12:00 PM"),
                FulfillmentDayRule::new(6, "8:00 AM - 12:00 PM"),
            ],
        }
    }
}

/// A selectable fulfillment date (derived, never persisted)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FulfillmentWindow {
    pub kind: FulfillmentKind,
    /// Serialized as YYYY-MM-DD, the form stored on the order record
    pub date: NaiveDate,
    pub day_of_week: u8,
    pub day_name: String,
    pub time_window: String,
    /// Whole days until the start of `date`, rounded up
    pub days_away: i64,
    /// Whether the first candidate date satisfied lead time (this week's
    /// occurrence before the cutoff, next week's after it)
    pub meets_lead_time: bool,
}

/// Everything the checkout page needs to render slot selection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FulfillmentQuote {
    pub timezone: String,
    pub business_time: DateTime<FixedOffset>,
    pub before_cutoff: bool,
    /// Next moment the weekly cutoff closes ordering
    pub ordering_closes_at: DateTime<FixedOffset>,
    pub windows: Vec<FulfillmentWindow>,
}

/// Customer's chosen slot, as submitted by the order-placement workflow
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FulfillmentSelection {
    pub kind: FulfillmentKind,
    /// YYYY-MM-DD
    pub date: String,
}
