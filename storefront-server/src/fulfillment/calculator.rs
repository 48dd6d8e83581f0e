//! Fulfillment window arithmetic
//!
//! Pure functions over business wall-clock time. `now` is always a
//! `DateTime<Tz>` in the business timezone, so `weekday()`, `hour()` and
//! `date_naive()` are civil fields of that zone, never of UTC or the host.
//!
//! # Same-day policy
//!
//! When today is the target weekday, the "next occurrence" is next week's:
//! [`next_occurrence_of_weekday`] always moves forward 1..=7 days.

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveDateTime, Timelike, Weekday};
use chrono_tz::Tz;

use super::schedule::Cutoff;
use crate::utils::time;

/// Outcome for one fulfillment weekday
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FulfillmentDate {
    pub day: Weekday,
    pub date: NaiveDate,
    /// Whether the first candidate satisfied lead time: this week's occurrence
    /// before the cutoff, next week's after it.
    pub meets_lead_time: bool,
}

/// Is `now` at or before the weekly cutoff?
///
/// Weeks start on Sunday. Compares `(weekday, hour, minute)` lexicographically;
/// seconds are ignored, so the whole cutoff minute still counts.
pub fn is_before_cutoff(now: &DateTime<Tz>, cutoff: &Cutoff) -> bool {
    let now_key = (
        now.weekday().num_days_from_sunday(),
        now.hour(),
        now.minute(),
    );
    let cutoff_key = (
        cutoff.day.num_days_from_sunday(),
        cutoff.time.hour(),
        cutoff.time.minute(),
    );
    now_key <= cutoff_key
}

/// Next date strictly after `from`'s date that falls on `target`
pub fn next_occurrence_of_weekday(target: Weekday, from: &DateTime<Tz>) -> NaiveDate {
    let current = from.weekday().num_days_from_sunday() as i64;
    let target = target.num_days_from_sunday() as i64;

    let days_until = match (target - current + 7) % 7 {
        0 => 7,
        n => n,
    };

    from.date_naive() + Duration::days(days_until)
}

/// The occurrence after the next one
pub fn occurrence_one_week_later(target: Weekday, from: &DateTime<Tz>) -> NaiveDate {
    next_occurrence_of_weekday(target, from) + Duration::weeks(1)
}

/// Whole days from `a` to `b` (`b - a`)
pub fn days_between(a: NaiveDate, b: NaiveDate) -> i64 {
    (b - a).num_days()
}

/// Days from `now` until the start of `date`, rounded up
///
/// Used for "N days away" so a slot is never shown closer than it is.
pub fn days_until(now: &DateTime<Tz>, date: NaiveDate) -> i64 {
    const SECS_PER_DAY: i64 = 86_400;

    let start = time::day_start(date, now.timezone());
    let secs = (start - *now).num_seconds();
    (secs + SECS_PER_DAY - 1).div_euclid(SECS_PER_DAY)
}

/// `candidate >= now.date + lead_time_days`
pub fn meets_lead_time(candidate: NaiveDate, now: &DateTime<Tz>, lead_time_days: u32) -> bool {
    candidate >= now.date_naive() + Duration::days(lead_time_days as i64)
}

/// Selectable fulfillment dates for each requested weekday, in input order
///
/// Before the cutoff the immediate occurrence is offered if it meets lead
/// time, otherwise the week after. After the cutoff the immediate occurrence
/// is skipped and the week after is the first candidate. Lead times longer than a week push the date further by whole
/// weeks, so every returned date satisfies [`meets_lead_time`].
pub fn available_fulfillment_windows(
    now: &DateTime<Tz>,
    cutoff: &Cutoff,
    fulfillment_days: &[Weekday],
    lead_time_days: u32,
) -> Vec<FulfillmentDate> {
    let before_cutoff = is_before_cutoff(now, cutoff);

    let windows: Vec<FulfillmentDate> = fulfillment_days
        .iter()
        .map(|&day| {
            let (mut date, first_attempt_ok) = if before_cutoff {
                let next = next_occurrence_of_weekday(day, now);
                if meets_lead_time(next, now, lead_time_days) {
                    (next, true)
                } else {
                    (occurrence_one_week_later(day, now), false)
                }
            } else {
                let next = occurrence_one_week_later(day, now);
                (next, meets_lead_time(next, now, lead_time_days))
            };

            while !meets_lead_time(date, now, lead_time_days) {
                date += Duration::weeks(1);
            }

            FulfillmentDate {
                day,
                date,
                meets_lead_time: first_attempt_ok,
            }
        })
        .collect();

    tracing::debug!(
        now = %now,
        before_cutoff,
        lead_time_days,
        count = windows.len(),
        "Computed fulfillment windows"
    );

    windows
}

/// Next instant at which ordering for the current week closes
///
/// The cutoff minute is inclusive, so ordering closes one minute after
/// `cutoff.time` on `cutoff.day`.
pub fn next_cutoff(now: &DateTime<Tz>, cutoff: &Cutoff) -> DateTime<Tz> {
    let current = now.weekday().num_days_from_sunday() as i64;
    let target = cutoff.day.num_days_from_sunday() as i64;

    let mut days_ahead = (target - current + 7) % 7;
    if days_ahead == 0 && !is_before_cutoff(now, cutoff) {
        days_ahead = 7;
    }

    let date = now.date_naive() + Duration::days(days_ahead);
    let closes: NaiveDateTime = date.and_time(cutoff.time) + Duration::minutes(1);
    time::resolve_local(closes, now.timezone())
}
