use chrono::{DateTime, Datelike, Utc};
use chrono_tz::Tz;
use serde::Serialize;

use crate::{
    feed::location::Location,
    timing::{day_range::DayRange, weekly_hours::WeeklyHours},
};

const DIET_TAGS: [&str; 2] = ["Vegan", "Vegetarian"];
const HALAL_TAGS: [&str; 1] = ["Halal"];

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TagClass {
    Plain,
    Diet,
    Halal,
}

impl TagClass {
    pub fn of(tag: &str) -> Self {
        if DIET_TAGS.contains(&tag) {
            TagClass::Diet
        } else if HALAL_TAGS.contains(&tag) {
            TagClass::Halal
        } else {
            TagClass::Plain
        }
    }

    pub fn css(&self) -> &'static str {
        match self {
            TagClass::Plain => "tag",
            TagClass::Diet => "tag diet",
            TagClass::Halal => "tag halal",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Tag {
    pub label: String,
    pub class: TagClass,
}

/// What every card is evaluated against during one render pass.
#[derive(Clone, Copy, Debug)]
pub struct CardContext<'a> {
    pub now: DateTime<Utc>,
    pub zone: Tz,
    pub campus: &'a str,
    pub default_address: &'a str,
}

/// Everything needed to display one location.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Card {
    pub name: String,
    pub is_open: bool,
    pub meta: String,
    pub hours: String,
    pub tags: Vec<Tag>,
    pub href: String,
}

impl Card {
    pub fn build(location: &Location, context: &CardContext) -> Self {
        let status = location.status(context.now, context.zone);
        if location.hours.as_ref().map_or(true, WeeklyHours::is_empty) {
            tracing::debug!("No hours listed for {}", location.name);
        } else if status.today_range.is_none() {
            let today = context.now.with_timezone(&context.zone).weekday();
            tracing::debug!(
                "No usable '{}' hours for {}",
                WeeklyHours::day_key(today),
                location.name
            );
        }

        Self {
            name: location.name.clone(),
            is_open: status.is_open,
            meta: location.meta_line(context.default_address).to_string(),
            hours: DayRange::label(status.today_range.as_ref()),
            tags: location
                .tags
                .iter()
                .map(|tag| Tag {
                    label: tag.clone(),
                    class: TagClass::of(tag),
                })
                .collect(),
            href: location.maps_href(context.campus),
        }
    }

    /// Case-insensitive key the lists are ordered by.
    ///
    /// Keys compare by code point, not by locale collation: accented initials
    /// sort after `z` and leading punctuation sorts before letters.
    pub fn sort_key(&self) -> String {
        self.name.to_lowercase()
    }
}
