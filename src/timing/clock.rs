use std::sync::OnceLock;

use chrono::NaiveTime;
use regex::Regex;

/// A time of day read from a 12-hour clock string such as "7:30 AM" or "11 PM".
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct ClockTime(NaiveTime);

impl ClockTime {
    /// `hour` is 24-hour based.
    pub fn new(hour: u32, minute: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, minute, 0).map(Self)
    }

    pub fn as_naive(&self) -> NaiveTime {
        self.0
    }
}

fn time12_regex() -> &'static Regex {
    static TIME12: OnceLock<Regex> = OnceLock::new();
    // H[:MM] followed by AM or PM, any case
    TIME12.get_or_init(|| {
        Regex::new(r"(?i)^(\d{1,2})(?::(\d{2}))?\s*([AP]M)$").expect("static regex is valid")
    })
}

/// Parses a 12-hour clock string.
///
/// Returns `None` for anything that is not a real 12-hour time: no meridiem,
/// an hour outside 1-12, minutes past 59, or an empty string.
pub fn parse_time12(text: &str) -> Option<ClockTime> {
    let captures = time12_regex().captures(text.trim())?;

    let hour: u32 = captures.get(1)?.as_str().parse().ok()?;
    let minute: u32 = match captures.get(2) {
        Some(minute) => minute.as_str().parse().ok()?,
        None => 0,
    };
    if !(1..=12).contains(&hour) || minute > 59 {
        return None;
    }

    let hour = match (captures.get(3)?.as_str().to_ascii_uppercase().as_str(), hour) {
        ("AM", 12) => 0,
        ("PM", 12) => 12,
        ("PM", hour) => hour + 12,
        (_, hour) => hour,
    };
    ClockTime::new(hour, minute)
}
