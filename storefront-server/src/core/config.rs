use std::str::FromStr;

use shared::{CutoffRule, FulfillmentDayRule, FulfillmentSettings, models::DEFAULT_TIMEZONE};

use crate::fulfillment::FulfillmentError;
use crate::utils::AppResult;

/// Server configuration
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | HTTP_PORT | 3000 | HTTP listen port |
/// | ENVIRONMENT | development | development / staging / production |
/// | REQUEST_TIMEOUT_MS | 30000 | per-request timeout |
/// | LOG_LEVEL | info | base log level (`RUST_LOG` wins) |
/// | LOG_JSON | false | JSON console output |
/// | LOG_DIR | (unset) | daily rolling log files |
/// | BUSINESS_TIMEZONE | America/Boise | IANA timezone |
/// | ORDER_CUTOFF_DAY | 2 | weekly cutoff day (0=Sunday) |
/// | ORDER_CUTOFF_TIME | 23:59 | cutoff time, HH:mm |
/// | LEAD_TIME_DAYS | 2 | minimum days between order and fulfillment |
/// | DELIVERY_DAYS | 4,6 | delivery weekdays, comma separated, `none` to disable |
/// | DELIVERY_TIME_WINDOW | 10:00 AM - 2:00 PM | display text |
/// | PICKUP_DAYS | 4,6 | pickup weekdays, comma separated, `none` to disable |
/// | PICKUP_TIME_WINDOW | 8:00 AM - 12:00 PM | display text |
///
/// Server knobs fall back to their defaults when unparsable. Fulfillment
/// values are business rules and are rejected instead.
///
/// ```ignore
/// ORDER_CUTOFF_DAY=3 ORDER_CUTOFF_TIME=18:00 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    pub http_port: u16,
    /// development | staging | production
    pub environment: String,
    pub request_timeout_ms: u64,
    pub log_level: String,
    pub log_json: bool,
    pub log_dir: Option<String>,
    /// Raw fulfillment rules, validated when the server state is built
    pub fulfillment: FulfillmentSettings,
}

impl Config {
    /// Load configuration from process environment variables
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup
    ///
    /// Lets tests supply variables without touching the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> AppResult<Self> {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let fulfillment = FulfillmentSettings {
            timezone: var("BUSINESS_TIMEZONE").unwrap_or_else(|| DEFAULT_TIMEZONE.into()),
            cutoff: CutoffRule {
                cutoff_day: parse_setting("ORDER_CUTOFF_DAY", var("ORDER_CUTOFF_DAY"), 2)?,
                cutoff_time: var("ORDER_CUTOFF_TIME").unwrap_or_else(|| "23:59".into()),
            },
            lead_time_days: parse_setting("LEAD_TIME_DAYS", var("LEAD_TIME_DAYS"), 2)?,
            delivery: day_rules(
                "DELIVERY_DAYS",
                var("DELIVERY_DAYS"),
                var("DELIVERY_TIME_WINDOW").unwrap_or_else(|| "10:00 AM - 2:00 PM".into()),
            )?,
            pickup: day_rules(
                "PICKUP_DAYS",
                var("PICKUP_DAYS"),
                var("PICKUP_TIME_WINDOW").unwrap_or_else(|| "8:00 AM - 12:00 PM".into()),
            )?,
        };

        Ok(Self {
            http_port: var("HTTP_PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            environment: var("ENVIRONMENT").unwrap_or_else(|| "development".into()),
            request_timeout_ms: var("REQUEST_TIMEOUT_MS")
                .and_then(|p| p.parse().ok())
                .unwrap_or(30000),
            log_level: var("LOG_LEVEL").unwrap_or_else(|| "info".into()),
            log_json: var("LOG_JSON")
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            log_dir: var("LOG_DIR"),
            fulfillment,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            http_port: 3000,
            environment: "development".into(),
            request_timeout_ms: 30000,
            log_level: "info".into(),
            log_json: false,
            log_dir: None,
            fulfillment: FulfillmentSettings::default(),
        }
    }
}

fn invalid_setting(key: &str, value: &str) -> FulfillmentError {
    FulfillmentError::InvalidSetting {
        key: key.to_string(),
        value: value.to_string(),
    }
}

fn parse_setting<T: FromStr>(
    key: &str,
    value: Option<String>,
    default: T,
) -> Result<T, FulfillmentError> {
    match value {
        Some(raw) => raw.trim().parse().map_err(|_| invalid_setting(key, &raw)),
        None => Ok(default),
    }
}

/// `"4,6"` → Thursday and Saturday rules sharing one time window.
/// An explicit `"none"` disables the fulfillment kind. Any integer is
/// accepted here; the 0-6 range is checked with the rest of the schedule.
fn day_rules(
    key: &str,
    value: Option<String>,
    time_window: String,
) -> Result<Vec<FulfillmentDayRule>, FulfillmentError> {
    let raw = value.unwrap_or_else(|| "4,6".into());
    if raw.trim().eq_ignore_ascii_case("none") {
        return Ok(Vec::new());
    }

    raw.split(',')
        .map(|part| {
            part.trim()
                .parse::<i64>()
                .map(|day| FulfillmentDayRule::new(day, time_window.clone()))
                .map_err(|_| invalid_setting(key, &raw))
        })
        .collect()
}
