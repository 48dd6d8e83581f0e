use chrono::NaiveDate;
use shared::{AppError, ErrorCode, FulfillmentKind};
use thiserror::Error;

/// Fulfillment scheduling errors
///
/// Everything except `TimezoneUnavailable` and `InvalidSetting` is bad input
/// from the caller; those two mean the server itself is misconfigured.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FulfillmentError {
    #[error("Invalid day of week: {0}. Must be 0-6 (Sunday-Saturday)")]
    InvalidDayOfWeek(i64),

    #[error("Invalid cutoff time '{0}': expected HH:mm")]
    InvalidCutoffTime(String),

    #[error("Lead time cannot be negative: {0}")]
    NegativeLeadTime(i64),

    #[error("Lead time of {0} days exceeds the maximum of {max}", max = super::MAX_LEAD_TIME_DAYS)]
    LeadTimeTooLong(i64),

    #[error("Fulfillment day listed twice: {0}")]
    DuplicateDay(i64),

    #[error("No delivery or pickup days configured")]
    NoFulfillmentDays,

    #[error("Invalid date '{0}': expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("{kind} is not available on {date}")]
    SlotUnavailable { kind: FulfillmentKind, date: NaiveDate },

    #[error("Cannot resolve business timezone '{0}'")]
    TimezoneUnavailable(String),

    #[error("Invalid setting {key}='{value}'")]
    InvalidSetting { key: String, value: String },
}

impl FulfillmentError {
    /// Bad caller input, as opposed to server misconfiguration
    pub fn is_invalid_input(&self) -> bool {
        !matches!(
            self,
            Self::TimezoneUnavailable(_) | Self::InvalidSetting { .. } | Self::SlotUnavailable { .. }
        )
    }
}

impl From<FulfillmentError> for AppError {
    fn from(err: FulfillmentError) -> Self {
        let message = err.to_string();
        match err {
            FulfillmentError::InvalidDayOfWeek(day) => {
                AppError::with_message(ErrorCode::InvalidDayOfWeek, message).with_detail("value", day)
            }
            FulfillmentError::InvalidCutoffTime(value) => {
                AppError::with_message(ErrorCode::InvalidCutoffTime, message)
                    .with_detail("value", value)
            }
            FulfillmentError::NegativeLeadTime(days) | FulfillmentError::LeadTimeTooLong(days) => {
                AppError::with_message(ErrorCode::InvalidLeadTime, message)
                    .with_detail("value", days)
            }
            FulfillmentError::DuplicateDay(day) => {
                AppError::with_message(ErrorCode::DuplicateFulfillmentDay, message)
                    .with_detail("value", day)
            }
            FulfillmentError::NoFulfillmentDays => {
                AppError::with_message(ErrorCode::NoFulfillmentDays, message)
            }
            FulfillmentError::InvalidDate(value) => {
                AppError::with_message(ErrorCode::InvalidFormat, message)
                    .with_detail("field", "date")
                    .with_detail("value", value)
            }
            FulfillmentError::SlotUnavailable { kind, date } => {
                AppError::slot_unavailable(message)
                    .with_detail("kind", kind.as_str())
                    .with_detail("date", date.to_string())
            }
            FulfillmentError::TimezoneUnavailable(tz) => AppError::timezone_unavailable(tz),
            FulfillmentError::InvalidSetting { key, value } => AppError::config(message)
                .with_detail("key", key)
                .with_detail("value", value),
        }
    }
}
