use chrono::{DateTime, Datelike, Duration, NaiveDateTime, Offset, TimeZone, Utc};
use chrono_tz::Tz;
use serde::Serialize;

use super::{day_range::DayRange, weekly_hours::WeeklyHours};

/// Whether a location is open at some instant, and the hours to show for today.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct EvaluationResult {
    pub is_open: bool,
    /// Today's range, or `None` when today has no usable hours.
    pub today_range: Option<DayRange>,
}

impl EvaluationResult {
    pub fn unavailable() -> Self {
        Self {
            is_open: false,
            today_range: None,
        }
    }
}

/// Evaluates `hours` at `now`, with all wall-clock comparisons done in `zone`.
///
/// Today's window is built on today's local date. A close time that is not
/// after the open time is taken to be past midnight, so the window ends on the
/// following day. Yesterday's overnight window is also checked so that the
/// early hours of a day count as open when the previous day's hours run past
/// midnight.
///
/// Missing or malformed hours never fail: they just leave the location closed.
pub fn evaluate(hours: &WeeklyHours, now: DateTime<Utc>, zone: Tz) -> EvaluationResult {
    let Some(local) = local_time(now, zone) else {
        return EvaluationResult::unavailable();
    };
    let today = local.date();

    let today_range = hours
        .get(today.weekday())
        .filter(|range| range.bounds().is_some());
    let open_today = today_range
        .and_then(|range| range.window_on(today))
        .is_some_and(|window| window.contains(local));

    let open_from_yesterday = today.pred_opt().is_some_and(|yesterday| {
        hours
            .get(yesterday.weekday())
            .and_then(|range| range.window_on(yesterday))
            .is_some_and(|window| window.is_overnight() && window.contains(local))
    });

    EvaluationResult {
        is_open: open_today || open_from_yesterday,
        today_range: today_range.cloned(),
    }
}

/// Wall-clock reading of `now` in `zone`, `None` past the ends of the calendar.
fn local_time(now: DateTime<Utc>, zone: Tz) -> Option<NaiveDateTime> {
    let utc = now.naive_utc();
    let offset = zone.offset_from_utc_datetime(&utc).fix();
    utc.checked_add_signed(Duration::seconds(offset.local_minus_utc().into()))
}

#[cfg(test)]
mod tests {
    use chrono::Weekday;
    use chrono_tz::America::New_York;

    use super::*;

    // 2024-03-11 is a Monday.
    fn local(day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
        New_York
            .with_ymd_and_hms(2024, 3, day, hour, minute, 0)
            .unwrap()
            .with_timezone(&Utc)
    }

    fn week(day: Weekday, open: &str, close: &str) -> WeeklyHours {
        WeeklyHours::new().with_day(day, DayRange::new(open, close))
    }

    #[test]
    fn open_during_same_day_hours() {
        let hours = week(Weekday::Mon, "7:00 AM", "9:00 PM");
        let result = evaluate(&hours, local(11, 8, 0), New_York);
        assert!(result.is_open);
        assert_eq!(result.today_range, Some(DayRange::new("7:00 AM", "9:00 PM")));
    }

    #[test]
    fn same_day_bounds_are_inclusive() {
        let hours = week(Weekday::Mon, "7:00 AM", "9:00 PM");
        assert!(evaluate(&hours, local(11, 7, 0), New_York).is_open);
        assert!(evaluate(&hours, local(11, 21, 0), New_York).is_open);
        assert!(!evaluate(&hours, local(11, 6, 59), New_York).is_open);
        assert!(!evaluate(&hours, local(11, 21, 1), New_York).is_open);
    }

    #[test]
    fn closed_outside_hours_still_reports_range() {
        let hours = week(Weekday::Mon, "7:00 AM", "9:00 PM");
        let result = evaluate(&hours, local(11, 22, 0), New_York);
        assert!(!result.is_open);
        assert!(result.today_range.is_some());
    }

    #[test]
    fn overnight_hours_carry_into_next_morning() {
        // Friday 2024-03-15
        let hours = week(Weekday::Fri, "11:00 PM", "2:00 AM");
        assert!(evaluate(&hours, local(15, 23, 30), New_York).is_open);

        let saturday = evaluate(&hours, local(16, 1, 0), New_York);
        assert!(saturday.is_open);
        assert_eq!(saturday.today_range, None);

        assert!(!evaluate(&hours, local(16, 2, 30), New_York).is_open);
        assert!(!evaluate(&hours, local(15, 22, 59), New_York).is_open);
    }

    #[test]
    fn absent_day_is_unavailable() {
        // Sunday 2024-03-10
        let hours = week(Weekday::Mon, "7:00 AM", "9:00 PM");
        assert_eq!(
            evaluate(&hours, local(10, 12, 0), New_York),
            EvaluationResult::unavailable()
        );
        assert_eq!(
            evaluate(&WeeklyHours::new(), local(10, 12, 0), New_York),
            EvaluationResult::unavailable()
        );
    }

    #[test]
    fn equal_times_are_open_for_a_full_day() {
        // Tuesday 2024-03-12
        let hours = week(Weekday::Tue, "8 AM", "8 AM");
        assert!(!evaluate(&hours, local(12, 7, 59), New_York).is_open);
        assert!(evaluate(&hours, local(12, 8, 0), New_York).is_open);
        assert!(evaluate(&hours, local(12, 20, 0), New_York).is_open);
        assert!(evaluate(&hours, local(13, 7, 59), New_York).is_open);
        assert!(evaluate(&hours, local(13, 8, 0), New_York).is_open);
        assert!(!evaluate(&hours, local(13, 8, 1), New_York).is_open);
    }

    #[test]
    fn malformed_hours_are_unavailable_at_any_time() {
        for (open, close) in [("25:00 AM", "9 PM"), ("noon", "9 PM"), ("7 AM", ""), ("", "")] {
            let hours = week(Weekday::Mon, open, close);
            for hour in [0, 7, 12, 23] {
                assert_eq!(
                    evaluate(&hours, local(11, hour, 0), New_York),
                    EvaluationResult::unavailable()
                );
            }
        }
    }

    #[test]
    fn previous_night_overrides_malformed_today() {
        let hours = week(Weekday::Fri, "11:00 PM", "2:00 AM")
            .with_day(Weekday::Sat, DayRange::new("noon", "9 PM"));
        let result = evaluate(&hours, local(16, 1, 0), New_York);
        assert!(result.is_open);
        assert_eq!(result.today_range, None);

        assert_eq!(
            evaluate(&hours, local(16, 13, 0), New_York),
            EvaluationResult::unavailable()
        );
    }

    #[test]
    fn instants_at_the_calendar_edges_are_closed() {
        let mut hours = WeeklyHours::new();
        for day in [
            Weekday::Sun,
            Weekday::Mon,
            Weekday::Tue,
            Weekday::Wed,
            Weekday::Thu,
            Weekday::Fri,
            Weekday::Sat,
        ] {
            hours.set(day, Some(DayRange::new("6 PM", "2 AM")));
        }

        let last = evaluate(&hours, DateTime::<Utc>::MAX_UTC, New_York);
        assert!(!last.is_open);

        let first = evaluate(&hours, DateTime::<Utc>::MIN_UTC, New_York);
        assert_eq!(first, EvaluationResult::unavailable());
    }

    #[test]
    fn day_is_taken_in_the_reference_zone() {
        // Monday 02:00 UTC is still Sunday evening in New York.
        let hours = week(Weekday::Sun, "6 PM", "11 PM");
        let now = Utc.with_ymd_and_hms(2024, 3, 18, 2, 0, 0).unwrap();
        let result = evaluate(&hours, now, New_York);
        assert!(result.is_open);
        assert_eq!(result.today_range, Some(DayRange::new("6 PM", "11 PM")));
    }
}
