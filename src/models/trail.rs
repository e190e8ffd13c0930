use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trail {
    pub name: String,
    pub location: String,
    pub length: f64,
    pub stars: f64,
    pub star_votes: i64,
    pub summary: String,
    pub trail_url: String,
    pub conditions: Option<String>,
    pub condition_date: String,
    pub condition_time: String,
}

impl Trail {
    /// Splits a provider condition stamp such as `2018-07-21 17:13:21` into
    /// its date and time parts. Missing parts come back empty.
    #[must_use]
    pub fn split_condition_stamp(stamp: &str) -> (String, String) {
        let mut parts = stamp.split_whitespace();
        let date = parts.next().unwrap_or_default().to_string();
        let time = parts.next().unwrap_or_default().to_string();
        (date, time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_condition_stamp() {
        let (date, time) = Trail::split_condition_stamp("2018-07-21 17:13:21");
        assert_eq!(date, "2018-07-21");
        assert_eq!(time, "17:13:21");
    }

    #[test]
    fn condition_stamp_without_time() {
        let (date, time) = Trail::split_condition_stamp("1970-01-01");
        assert_eq!(date, "1970-01-01");
        assert!(time.is_empty());

        let (date, time) = Trail::split_condition_stamp("");
        assert!(date.is_empty());
        assert!(time.is_empty());
    }
}
