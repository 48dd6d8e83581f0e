//! Fulfillment window calculation
//!
//! Given "now" in the business timezone, a weekly order cutoff, the weekdays
//! on which delivery/pickup happen and a minimum lead time, work out which
//! calendar dates a customer may choose at checkout.
//!
//! - [`schedule`]: raw settings → validated [`FulfillmentSchedule`]
//! - [`calculator`]: pure date arithmetic over business wall-clock time
//! - [`quote`]: checkout views and selection checks
//! - [`clock`]: injectable "now"

pub mod calculator;
pub mod clock;
pub mod error;
pub mod quote;
pub mod schedule;


/// Upper bound for a configured lead time
pub const MAX_LEAD_TIME_DAYS: u32 = 365;

pub use calculator::{
    FulfillmentDate, available_fulfillment_windows, days_between, days_until, is_before_cutoff,
    meets_lead_time, next_cutoff, next_occurrence_of_weekday, occurrence_one_week_later,
};
pub use clock::{Clock, FixedClock, SystemClock, current_business_time};
pub use error::FulfillmentError;
pub use quote::{build_quote, validate_selection, windows_for_kind};
pub use schedule::{Cutoff, FulfillmentSchedule, FulfillmentSlot};
