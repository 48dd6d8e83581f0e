//! Storefront Server - bakery checkout fulfillment service
//!
//! Works out which delivery and pickup dates a customer may pick at checkout,
//! given a weekly order cutoff and a minimum lead time. All weekday and
//! time-of-day rules are evaluated in the business timezone (America/Boise by
//! default), never in UTC or the host's zone.
//!
//! # Layout
//!
//! ```text
//! storefront-server/src/
//! ├── core/          # config, state, server
//! ├── fulfillment/   # schedule validation and window arithmetic
//! ├── api/           # HTTP routes and handlers
//! └── utils/         # logger, timezone helpers
//! ```

pub mod api;
pub mod core;
pub mod fulfillment;
pub mod utils;

pub use crate::core::{Config, Server, ServerState, build_app};
pub use fulfillment::{Clock, FixedClock, FulfillmentError, FulfillmentSchedule, SystemClock};
pub use utils::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};

pub use utils::logger::init_logger_with_file;

/// Load `.env`, read configuration and start logging
pub fn setup_environment() -> anyhow::Result<Config> {
    // Missing .env is fine; real deployments use the process environment
    let _ = dotenv::dotenv();

    let config = Config::from_env()?;
    init_logger_with_file(
        Some(&config.log_level),
        config.log_json,
        config.log_dir.as_deref(),
    )?;

    Ok(config)
}

pub fn print_banner() {
    println!(
        r#"
   _____ __                  ____                  __
  / ___// /_____  ________  / __/________  ____  / /_
  \__ \/ __/ __ \/ ___/ _ \/ /_/ ___/ __ \/ __ \/ __/
 ___/ / /_/ /_/ / /  /  __/ __/ /  / /_/ / / / / /_
/____/\__/\____/_/   \___/_/ /_/   \____/_/ /_/\__/
    "#
    );
}
