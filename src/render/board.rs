use serde::Serialize;

use super::card::{Card, CardContext};
use crate::feed::location::Location;

/// Cards split into what is open right now and what is not.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Board {
    pub open: Vec<Card>,
    pub closed: Vec<Card>,
}

impl Board {
    /// Evaluates each location once. Both lists are ordered by name,
    /// ignoring case; ties keep feed order.
    pub fn build(locations: &[Location], context: &CardContext) -> Self {
        let (mut open, mut closed): (Vec<Card>, Vec<Card>) = locations
            .iter()
            .map(|location| Card::build(location, context))
            .partition(|card| card.is_open);

        open.sort_by_cached_key(Card::sort_key);
        closed.sort_by_cached_key(Card::sort_key);

        tracing::info!("{} open, {} closed", open.len(), closed.len());
        Self { open, closed }
    }

    pub fn len(&self) -> usize {
        self.open.len() + self.closed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc, Weekday};
    use chrono_tz::America::New_York;

    use super::*;
    use crate::timing::{day_range::DayRange, weekly_hours::WeeklyHours};

    fn location(name: &str, hours: Option<(&str, &str)>) -> Location {
        Location {
            name: name.to_string(),
            hours: hours.map(|(open, close)| {
                WeeklyHours::new().with_day(Weekday::Fri, DayRange::new(open, close))
            }),
            ..Default::default()
        }
    }

    #[test]
    fn partitions_and_sorts_case_insensitively() {
        let locations = vec![
            location("zaro's", Some(("7 AM", "9 PM"))),
            location("Bits & Bytes", None),
            location("au Bon Pain", Some(("7 AM", "9 PM"))),
            location("Late Night Grill", Some(("11 PM", "2 AM"))),
            location("Hofstra Deli", Some(("6 AM", "8 AM"))),
        ];
        let context = CardContext {
            // Friday noon
            now: New_York
                .with_ymd_and_hms(2024, 3, 15, 12, 0, 0)
                .unwrap()
                .with_timezone(&Utc),
            zone: New_York,
            campus: "Hofstra University, Hempstead NY",
            default_address: "Hofstra University, Hempstead, NY",
        };

        let board = Board::build(&locations, &context);
        let open: Vec<&str> = board.open.iter().map(|card| card.name.as_str()).collect();
        let closed: Vec<&str> = board.closed.iter().map(|card| card.name.as_str()).collect();

        assert_eq!(open, vec!["au Bon Pain", "zaro's"]);
        assert_eq!(closed, vec!["Bits & Bytes", "Hofstra Deli", "Late Night Grill"]);
        assert_eq!(board.len(), 5);
    }

    #[test]
    fn empty_feed_gives_empty_board() {
        let context = CardContext {
            now: Utc::now(),
            zone: New_York,
            campus: "",
            default_address: "",
        };
        assert!(Board::build(&[], &context).is_empty());
    }
}
