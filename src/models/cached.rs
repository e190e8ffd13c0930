use serde::{Deserialize, Serialize};

use crate::domain::LocationId;

/// A category record as stored in the cache: the provider fields plus the
/// bookkeeping columns every category table carries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cached<R> {
    #[serde(flatten)]
    pub record: R,
    /// Milliseconds since the Unix epoch.
    pub created_at: i64,
    pub location_id: LocationId,
}

impl<R> Cached<R> {
    #[must_use]
    pub const fn new(record: R, created_at: i64, location_id: LocationId) -> Self {
        Self {
            record,
            created_at,
            location_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Weather;

    #[test]
    fn serializes_record_fields_inline() {
        let cached = Cached::new(
            Weather {
                forecast: "Light rain".to_string(),
                time: "Mon Jan 01 2024".to_string(),
            },
            1_700_000_000_000,
            LocationId::new(4),
        );

        let json = serde_json::to_value(&cached).unwrap();
        assert_eq!(json["forecast"], "Light rain");
        assert_eq!(json["time"], "Mon Jan 01 2024");
        assert_eq!(json["created_at"], 1_700_000_000_000_i64);
        assert_eq!(json["location_id"], 4);
        assert!(json.get("record").is_none());
    }
}
