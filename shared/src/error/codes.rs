//! Unified error codes for the storefront
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 4xxx: Fulfillment errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values so the storefront frontend
/// and the order-placement workflow can match on them without string parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Resource not found
    NotFound = 3,
    /// Invalid request
    InvalidRequest = 5,
    /// Invalid format
    InvalidFormat = 6,

    // ==================== 4xxx: Fulfillment ====================
    /// Day of week outside 0-6
    InvalidDayOfWeek = 4001,
    /// Cutoff time is not "HH:mm"
    InvalidCutoffTime = 4002,
    /// Lead time is negative or too long
    InvalidLeadTime = 4003,
    /// Unknown fulfillment kind (delivery / pickup)
    InvalidFulfillmentKind = 4004,
    /// No fulfillment days configured
    NoFulfillmentDays = 4005,
    /// Same weekday listed twice for one fulfillment kind
    DuplicateFulfillmentDay = 4006,
    /// Selected date is not an offered fulfillment slot
    SlotUnavailable = 4101,

    // ==================== 9xxx: System ====================
    /// Configuration error
    ConfigError = 9005,
    /// Business timezone cannot be resolved
    TimezoneUnavailable = 9006,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Check if this is a success code
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Get the default message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::InvalidFormat => "Invalid format",

            // Fulfillment
            ErrorCode::InvalidDayOfWeek => "Day of week must be 0-6 (Sunday-Saturday)",
            ErrorCode::InvalidCutoffTime => "Cutoff time must use HH:mm format",
            ErrorCode::InvalidLeadTime => "Lead time is out of range",
            ErrorCode::InvalidFulfillmentKind => "Fulfillment kind must be delivery or pickup",
            ErrorCode::NoFulfillmentDays => "No fulfillment days configured",
            ErrorCode::DuplicateFulfillmentDay => "Fulfillment day listed more than once",
            ErrorCode::SlotUnavailable => "Selected fulfillment date is not available",

            // System
            ErrorCode::ConfigError => "Configuration error",
            ErrorCode::TimezoneUnavailable => "Business timezone is unavailable",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            0 => Ok(ErrorCode::Success),
            3 => Ok(ErrorCode::NotFound),
            5 => Ok(ErrorCode::InvalidRequest),
            6 => Ok(ErrorCode::InvalidFormat),

            // Fulfillment
            4001 => Ok(ErrorCode::InvalidDayOfWeek),
            4002 => Ok(ErrorCode::InvalidCutoffTime),
            4003 => Ok(ErrorCode::InvalidLeadTime),
            4004 => Ok(ErrorCode::InvalidFulfillmentKind),
            4005 => Ok(ErrorCode::NoFulfillmentDays),
            4006 => Ok(ErrorCode::DuplicateFulfillmentDay),
            4101 => Ok(ErrorCode::SlotUnavailable),

            // System
            9005 => Ok(ErrorCode::ConfigError),
            9006 => Ok(ErrorCode::TimezoneUnavailable),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_values() {
        assert_eq!(ErrorCode::Success.code(), 0);
        assert_eq!(ErrorCode::InvalidRequest.code(), 5);
        assert_eq!(ErrorCode::InvalidDayOfWeek.code(), 4001);
        assert_eq!(ErrorCode::DuplicateFulfillmentDay.code(), 4006);
        assert_eq!(ErrorCode::SlotUnavailable.code(), 4101);
        assert_eq!(ErrorCode::TimezoneUnavailable.code(), 9006);
    }

    #[test]
    fn test_is_success() {
        assert!(ErrorCode::Success.is_success());
        assert!(!ErrorCode::InvalidRequest.is_success());
        assert!(!ErrorCode::ConfigError.is_success());
    }

    #[test]
    fn test_try_from_every_variant() {
        let codes = [
            ErrorCode::Success,
            ErrorCode::NotFound,
            ErrorCode::InvalidRequest,
            ErrorCode::InvalidFormat,
            ErrorCode::InvalidDayOfWeek,
            ErrorCode::InvalidCutoffTime,
            ErrorCode::InvalidLeadTime,
            ErrorCode::InvalidFulfillmentKind,
            ErrorCode::NoFulfillmentDays,
            ErrorCode::DuplicateFulfillmentDay,
            ErrorCode::SlotUnavailable,
            ErrorCode::ConfigError,
            ErrorCode::TimezoneUnavailable,
        ];

        for code in codes {
            assert_eq!(ErrorCode::try_from(code.code()), Ok(code));
        }
    }

    #[test]
    fn test_serialize() {
        let json = serde_json::to_string(&ErrorCode::NotFound).unwrap();
        assert_eq!(json, "3");

        let json = serde_json::to_string(&ErrorCode::SlotUnavailable).unwrap();
        assert_eq!(json, "4101");
    }

    #[test]
    fn test_deserialize_invalid() {
        let result: Result<ErrorCode, _> = serde_json::from_str("999");
        assert!(result.is_err());

        let result: Result<ErrorCode, _> = serde_json::from_str("4999");
        assert!(result.is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", ErrorCode::Success), "0");
        assert_eq!(format!("{}", ErrorCode::InvalidLeadTime), "4003");
    }

    #[test]
    fn test_invalid_error_code_display() {
        let err = InvalidErrorCode(999);
        assert_eq!(format!("{}", err), "invalid error code: 999");
    }
}
