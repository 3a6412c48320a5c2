use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::{
    error::Result,
    timing::{
        evaluator::{evaluate, EvaluationResult},
        weekly_hours::WeeklyHours,
    },
};

/// One dining location as listed in the data file.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Location {
    pub name: String,
    pub address: Option<String>,
    pub building: Option<String>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub tags: Vec<String>,
    pub hours: Option<WeeklyHours>,
}

impl Location {
    /// Open/closed status at `now`. A location without hours is never open.
    pub fn status(&self, now: DateTime<Utc>, zone: Tz) -> EvaluationResult {
        match &self.hours {
            Some(hours) => evaluate(hours, now, zone),
            None => EvaluationResult::unavailable(),
        }
    }

    /// Address, else building, else `fallback`. Blank strings count as missing.
    pub fn meta_line<'a>(&'a self, fallback: &'a str) -> &'a str {
        [self.address.as_deref(), self.building.as_deref()]
            .into_iter()
            .flatten()
            .find(|text| !text.trim().is_empty())
            .unwrap_or(fallback)
    }

    /// Google Maps link: exact coordinates when known, otherwise a search for
    /// the name on `campus`.
    pub fn maps_href(&self, campus: &str) -> String {
        match (self.lat, self.lng) {
            (Some(lat), Some(lng)) if lat != 0.0 && lng != 0.0 => {
                format!("https://www.google.com/maps?q={},{}", lat, lng)
            }
            _ => {
                let query = format!("{} {}", self.name, campus);
                format!(
                    "https://www.google.com/maps/search/?api=1&query={}",
                    url_escape::encode_component(&query)
                )
            }
        }
    }
}

pub fn parse_locations(body: &str) -> Result<Vec<Location>> {
    Ok(serde_json::from_str(body)?)
}
