//! Business timezone helpers
//!
//! Every civil-time conversion goes through `chrono-tz` offset lookups for the
//! configured zone. Nothing here reads the process-local timezone.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};
use chrono_tz::Tz;

/// Wall-clock date + time → instant (business timezone)
///
/// Ambiguous (fall back): the later of the two instants.
/// Nonexistent (spring forward gap): shifted forward by one hour, so 02:30 on
/// the transition day becomes 03:30 daylight time.
pub fn resolve_local(naive: NaiveDateTime, tz: Tz) -> DateTime<Tz> {
    naive
        .and_local_timezone(tz)
        .latest()
        .or_else(|| {
            (naive + chrono::Duration::hours(1))
                .and_local_timezone(tz)
                .earliest()
        })
        .unwrap_or_else(|| {
            tracing::warn!(%naive, %tz, "Cannot resolve local time, treating as UTC");
            tz.from_utc_datetime(&naive)
        })
}

/// Start of a calendar date (00:00 business time)
pub fn day_start(date: NaiveDate, tz: Tz) -> DateTime<Tz> {
    resolve_local(date.and_time(NaiveTime::MIN), tz)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike, Utc, Weekday};
    use chrono_tz::America::Boise;

    fn naive(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    #[test]
    fn test_resolve_local_regular() {
        let dt = resolve_local(naive(2025, 6, 3, 23, 59), Boise);
        assert_eq!(dt.hour(), 23);
        assert_eq!(dt.minute(), 59);
        // MDT = UTC-6
        assert_eq!(dt.with_timezone(&Utc).hour(), 5);
    }

    #[test]
    fn test_resolve_local_spring_forward_gap() {
        // 2025-03-09 02:00 MST jumps to 03:00 MDT
        let dt = resolve_local(naive(2025, 3, 9, 2, 30), Boise);
        assert_eq!(dt.hour(), 3);
        assert_eq!(dt.minute(), 30);
        assert_eq!(dt.weekday(), Weekday::Sun);
    }

    #[test]
    fn test_resolve_local_fall_back_ambiguous() {
        // 2025-11-02 01:30 happens twice; the later one is MST (UTC-7)
        let dt = resolve_local(naive(2025, 11, 2, 1, 30), Boise);
        assert_eq!(dt.with_timezone(&Utc).hour(), 8);
    }

    #[test]
    fn test_day_start() {
        let start = day_start(NaiveDate::from_ymd_opt(2025, 6, 5).unwrap(), Boise);
        assert_eq!(start.hour(), 0);
        assert_eq!(start.date_naive(), NaiveDate::from_ymd_opt(2025, 6, 5).unwrap());
    }
}
