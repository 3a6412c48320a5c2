use chrono::Weekday;
use serde::{Deserialize, Serialize};

use super::day_range::DayRange;

/// The seven day keys used in the data file, Sunday first.
pub const DAY_KEYS: [&str; 7] = ["sun", "mon", "tue", "wed", "thu", "fri", "sat"];

/// Hours for each day of the week. Any day may be absent.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeeklyHours {
    #[serde(skip_serializing_if = "Option::is_none")]
    sun: Option<DayRange>,
    #[serde(skip_serializing_if = "Option::is_none")]
    mon: Option<DayRange>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tue: Option<DayRange>,
    #[serde(skip_serializing_if = "Option::is_none")]
    wed: Option<DayRange>,
    #[serde(skip_serializing_if = "Option::is_none")]
    thu: Option<DayRange>,
    #[serde(skip_serializing_if = "Option::is_none")]
    fri: Option<DayRange>,
    #[serde(skip_serializing_if = "Option::is_none")]
    sat: Option<DayRange>,
}

impl WeeklyHours {
    #[cfg(test)]
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn with_day(mut self, day: Weekday, range: DayRange) -> Self {
        self.set(day, Some(range));
        self
    }

    #[cfg(test)]
    pub fn set(&mut self, day: Weekday, range: Option<DayRange>) {
        *self.slot_mut(day) = range;
    }

    pub fn get(&self, day: Weekday) -> Option<&DayRange> {
        match day {
            Weekday::Sun => self.sun.as_ref(),
            Weekday::Mon => self.mon.as_ref(),
            Weekday::Tue => self.tue.as_ref(),
            Weekday::Wed => self.wed.as_ref(),
            Weekday::Thu => self.thu.as_ref(),
            Weekday::Fri => self.fri.as_ref(),
            Weekday::Sat => self.sat.as_ref(),
        }
    }

    pub fn is_empty(&self) -> bool {
        Self::week().into_iter().all(|day| self.get(day).is_none())
    }

    /// Key of `day` in the data file.
    pub fn day_key(day: Weekday) -> &'static str {
        DAY_KEYS[day.num_days_from_sunday() as usize]
    }

    fn week() -> [Weekday; 7] {
        [
            Weekday::Sun,
            Weekday::Mon,
            Weekday::Tue,
            Weekday::Wed,
            Weekday::Thu,
            Weekday::Fri,
            Weekday::Sat,
        ]
    }

    #[cfg(test)]
    fn slot_mut(&mut self, day: Weekday) -> &mut Option<DayRange> {
        match day {
            Weekday::Sun => &mut self.sun,
            Weekday::Mon => &mut self.mon,
            Weekday::Tue => &mut self.tue,
            Weekday::Wed => &mut self.wed,
            Weekday::Thu => &mut self.thu,
            Weekday::Fri => &mut self.fri,
            Weekday::Sat => &mut self.sat,
        }
    }
}
