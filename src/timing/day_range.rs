use chrono::{Duration, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::clock::{parse_time12, ClockTime};

/// Label shown when a day has no usable hours.
pub const HOURS_UNAVAILABLE: &str = "Hours unavailable";

/// Opening and closing times for one day, kept as the raw 12-hour strings
/// from the data file.
///
/// Either side may be missing. That means "hours unavailable" rather than
/// an error.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayRange {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub open: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub close: Option<String>,
}

impl DayRange {
    #[cfg(test)]
    pub fn new(open: &str, close: &str) -> Self {
        Self {
            open: Some(open.to_string()),
            close: Some(close.to_string()),
        }
    }

    /// Parsed opening and closing times, `None` if either is missing or malformed.
    pub fn bounds(&self) -> Option<(ClockTime, ClockTime)> {
        let open = parse_time12(self.open.as_deref()?)?;
        let close = parse_time12(self.close.as_deref()?)?;
        Some((open, close))
    }

    /// The window this range describes when it starts on `date`.
    ///
    /// A close time that is not after the open time rolls over to the next day.
    pub fn window_on(&self, date: NaiveDate) -> Option<OpeningWindow> {
        let (open, close) = self.bounds()?;
        let start = date.and_time(open.as_naive());
        let mut end = date.and_time(close.as_naive());
        let overnight = end <= start;
        if overnight {
            end = end.checked_add_signed(Duration::hours(24))?;
        }
        Some(OpeningWindow {
            start,
            end,
            overnight,
        })
    }

    /// "open – close" for display, or [`HOURS_UNAVAILABLE`].
    pub fn label(range: Option<&DayRange>) -> String {
        match range {
            Some(DayRange {
                open: Some(open),
                close: Some(close),
            }) => format!("{} – {}", open, close),
            _ => HOURS_UNAVAILABLE.to_string(),
        }
    }
}

/// Wall-clock span in the reference zone. Both ends are inclusive.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct OpeningWindow {
    start: NaiveDateTime,
    end: NaiveDateTime,
    overnight: bool,
}

impl OpeningWindow {
    pub fn is_overnight(&self) -> bool {
        self.overnight
    }

    pub fn contains(&self, at: NaiveDateTime) -> bool {
        self.start <= at && at <= self.end
    }
}
