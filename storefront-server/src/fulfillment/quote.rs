//! Checkout-facing views over the calculator
//!
//! Turns [`FulfillmentDate`]s into the serializable windows the storefront
//! renders, and checks a customer's chosen date against what is offered.

use chrono::{DateTime, Weekday};
use chrono_tz::Tz;
use shared::{FulfillmentKind, FulfillmentQuote, FulfillmentSelection, FulfillmentWindow};

use super::calculator::{self, FulfillmentDate};
use super::schedule::{self, FulfillmentSchedule, weekday_index};
use super::FulfillmentError;

/// Windows for one fulfillment kind, sorted by date
pub fn windows_for_kind(
    schedule: &FulfillmentSchedule,
    now: &DateTime<Tz>,
    kind: FulfillmentKind,
) -> Vec<FulfillmentWindow> {
    let slots = schedule.slots(kind);
    let days: Vec<Weekday> = slots.iter().map(|slot| slot.day).collect();

    let dates = calculator::available_fulfillment_windows(
        now,
        schedule.cutoff(),
        &days,
        schedule.lead_time_days(),
    );

    let mut windows: Vec<FulfillmentWindow> = slots
        .iter()
        .zip(dates)
        .map(|(slot, fulfillment)| to_window(kind, &slot.time_window, now, fulfillment))
        .collect();
    windows.sort_by_key(|w| w.date);
    windows
}

fn to_window(
    kind: FulfillmentKind,
    time_window: &str,
    now: &DateTime<Tz>,
    fulfillment: FulfillmentDate,
) -> FulfillmentWindow {
    let day_of_week = weekday_index(fulfillment.day);
    FulfillmentWindow {
        kind,
        date: fulfillment.date,
        day_of_week,
        day_name: shared::models::day_name(day_of_week).to_string(),
        time_window: time_window.to_string(),
        days_away: calculator::days_until(now, fulfillment.date),
        meets_lead_time: fulfillment.meets_lead_time,
    }
}

/// Full quote for the checkout page; `kind = None` returns both kinds
pub fn build_quote(
    schedule: &FulfillmentSchedule,
    now: &DateTime<Tz>,
    kind: Option<FulfillmentKind>,
) -> FulfillmentQuote {
    let kinds: &[FulfillmentKind] = match kind {
        Some(ref k) => std::slice::from_ref(k),
        None => &FulfillmentKind::ALL,
    };

    let windows = kinds
        .iter()
        .flat_map(|&k| windows_for_kind(schedule, now, k))
        .collect();

    FulfillmentQuote {
        timezone: schedule.timezone().name().to_string(),
        business_time: now.fixed_offset(),
        before_cutoff: calculator::is_before_cutoff(now, schedule.cutoff()),
        ordering_closes_at: calculator::next_cutoff(now, schedule.cutoff()).fixed_offset(),
        windows,
    }
}

/// Check that a submitted date is one of the windows currently offered
pub fn validate_selection(
    schedule: &FulfillmentSchedule,
    now: &DateTime<Tz>,
    selection: &FulfillmentSelection,
) -> Result<FulfillmentWindow, FulfillmentError> {
    let date = schedule::parse_date(&selection.date)?;

    windows_for_kind(schedule, now, selection.kind)
        .into_iter()
        .find(|w| w.date == date)
        .ok_or(FulfillmentError::SlotUnavailable {
            kind: selection.kind,
            date,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone};
    use chrono_tz::America::Boise;
    use shared::{FulfillmentDayRule, FulfillmentSettings};

    fn schedule() -> FulfillmentSchedule {
        FulfillmentSchedule::from_settings(&FulfillmentSettings::default()).unwrap()
    }

    fn monday_morning() -> DateTime<Tz> {
        Boise.with_ymd_and_hms(2025, 6, 2, 10, 0, 0).unwrap()
    }

    #[test]
    fn test_windows_for_kind_presentation_fields() {
        let windows = windows_for_kind(&schedule(), &monday_morning(), FulfillmentKind::Delivery);
        assert_eq!(windows.len(), 2);

        let thursday = &windows[0];
        assert_eq!(thursday.date, NaiveDate::from_ymd_opt(2025, 6, 5).unwrap());
        assert_eq!(thursday.day_of_week, 4);
        assert_eq!(thursday.day_name, "Thursday");
        assert_eq!(thursday.time_window, "10:00 AM - 2:00 PM");
        assert_eq!(thursday.days_away, 3);
        assert!(thursday.meets_lead_time);
        assert_eq!(thursday.kind, FulfillmentKind::Delivery);
    }

    #[test]
    fn test_windows_sorted_by_date() {
        let mut settings = FulfillmentSettings::default();
        // Listed out of order: Saturday, then Monday
        settings.delivery = vec![
            FulfillmentDayRule::new(6, "sat"),
            FulfillmentDayRule::new(1, "mon"),
        ];
        let schedule = FulfillmentSchedule::from_settings(&settings).unwrap();

        // Wednesday after cutoff: next Saturday is 06-14, Monday 06-16
        let wednesday = Boise.with_ymd_and_hms(2025, 6, 4, 8, 0, 0).unwrap();
        let windows = windows_for_kind(&schedule, &wednesday, FulfillmentKind::Delivery);
        let names: Vec<&str> = windows.iter().map(|w| w.time_window.as_str()).collect();
        assert_eq!(names, vec!["sat", "mon"]);
        assert_eq!(windows[0].date, NaiveDate::from_ymd_opt(2025, 6, 14).unwrap());
        assert_eq!(windows[1].date, NaiveDate::from_ymd_opt(2025, 6, 16).unwrap());
    }

    #[test]
    fn test_build_quote_both_kinds() {
        let quote = build_quote(&schedule(), &monday_morning(), None);
        assert_eq!(quote.timezone, "America/Boise");
        assert!(quote.before_cutoff);
        assert_eq!(quote.windows.len(), 4);
        assert_eq!(
            quote.ordering_closes_at.to_rfc3339(),
            "2025-06-04T00:00:00-06:00"
        );
        assert_eq!(quote.business_time.to_rfc3339(), "2025-06-02T10:00:00-06:00");
    }

    #[test]
    fn test_build_quote_single_kind() {
        let quote = build_quote(&schedule(), &monday_morning(), Some(FulfillmentKind::Pickup));
        assert_eq!(quote.windows.len(), 2);
        assert!(quote.windows.iter().all(|w| w.kind == FulfillmentKind::Pickup));
    }

    #[test]
    fn test_validate_selection_accepts_offered_date() {
        let selection = FulfillmentSelection {
            kind: FulfillmentKind::Pickup,
            date: "2025-06-07".to_string(),
        };
        let window = validate_selection(&schedule(), &monday_morning(), &selection).unwrap();
        assert_eq!(window.day_name, "Saturday");
    }

    #[test]
    fn test_validate_selection_rejects_skipped_week() {
        // After Tuesday's cutoff this week's Thursday is no longer offered
        let wednesday = Boise.with_ymd_and_hms(2025, 6, 4, 8, 0, 0).unwrap();
        let selection = FulfillmentSelection {
            kind: FulfillmentKind::Delivery,
            date: "2025-06-05".to_string(),
        };
        assert_eq!(
            validate_selection(&schedule(), &wednesday, &selection),
            Err(FulfillmentError::SlotUnavailable {
                kind: FulfillmentKind::Delivery,
                date: NaiveDate::from_ymd_opt(2025, 6, 5).unwrap(),
            })
        );
    }

    #[test]
    fn test_validate_selection_rejects_malformed_date() {
        let selection = FulfillmentSelection {
            kind: FulfillmentKind::Delivery,
            date: "June 5th".to_string(),
        };
        assert_eq!(
            validate_selection(&schedule(), &monday_morning(), &selection),
            Err(FulfillmentError::InvalidDate("June 5th".to_string()))
        );
    }
}
