pub mod cached;
pub mod location;
pub mod meetup;
pub mod movie;
pub mod restaurant;
pub mod trail;
pub mod weather;

pub use cached::Cached;
pub use location::{Location, NewLocation};
pub use meetup::Meetup;
pub use movie::Movie;
pub use restaurant::Restaurant;
pub use trail::Trail;
pub use weather::Weather;

use chrono::{DateTime, Utc};

const DAY_FORMAT: &str = "%a %b %d %Y";

/// Formats a Unix timestamp in seconds as a day string, e.g. `Mon Jan 01 2024`.
#[must_use]
pub fn day_string_from_secs(secs: i64) -> String {
    DateTime::<Utc>::from_timestamp(secs, 0)
        .map(|t| t.format(DAY_FORMAT).to_string())
        .unwrap_or_default()
}

/// Same as [`day_string_from_secs`] for a timestamp in milliseconds.
#[must_use]
pub fn day_string_from_millis(millis: i64) -> String {
    DateTime::<Utc>::from_timestamp_millis(millis)
        .map(|t| t.format(DAY_FORMAT).to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_seconds_as_day_string() {
        // 2024-01-01T12:00:00Z
        assert_eq!(day_string_from_secs(1_704_110_400), "Mon Jan 01 2024");
    }

    #[test]
    fn formats_millis_as_day_string() {
        // 2019-03-15T08:30:00Z
        assert_eq!(day_string_from_millis(1_552_638_600_000), "Fri Mar 15 2019");
    }

    #[test]
    fn out_of_range_timestamp_is_empty() {
        assert_eq!(day_string_from_secs(i64::MAX), "");
    }
}
