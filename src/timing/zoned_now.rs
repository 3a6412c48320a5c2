use chrono::{DateTime, Utc};
use chrono_tz::Tz;

use crate::error::{DiningError, Result};

/// Zone every "open now" check is made in unless configured otherwise.
pub const DEFAULT_ZONE: Tz = chrono_tz::America::New_York;

/// The current instant as seen in `zone`.
pub fn zoned_now(zone: Tz) -> DateTime<Tz> {
    Utc::now().with_timezone(&zone)
}

/// Looks up an IANA zone name such as "America/New_York".
pub fn parse_zone(name: &str) -> Result<Tz> {
    name.trim().parse::<Tz>().map_err(|_| DiningError::Timezone {
        name: name.to_string(),
    })
}
