use serde::{Deserialize, Serialize};

use crate::domain::LocationId;

/// A geocoded place, as stored in `locations` and passed back by clients in
/// the `data` parameter of the category endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub id: LocationId,
    pub search_query: String,
    #[serde(default)]
    pub formatted_query: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Milliseconds since the Unix epoch.
    #[serde(default)]
    pub created_at: i64,
}

/// A location that has been geocoded but not yet persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct NewLocation {
    pub search_query: String,
    pub formatted_query: String,
    pub latitude: f64,
    pub longitude: f64,
    pub created_at: i64,
}

impl NewLocation {
    #[must_use]
    pub fn with_id(self, id: LocationId) -> Location {
        Location {
            id,
            search_query: self.search_query,
            formatted_query: self.formatted_query,
            latitude: self.latitude,
            longitude: self.longitude,
            created_at: self.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_minimal_client_payload() {
        let json = r#"{"id":3,"search_query":"Seattle","latitude":47.6,"longitude":-122.3}"#;
        let location: Location = serde_json::from_str(json).unwrap();
        assert_eq!(location.id, LocationId::new(3));
        assert_eq!(location.search_query, "Seattle");
        assert!(location.formatted_query.is_empty());
        assert_eq!(location.created_at, 0);
    }

    #[test]
    fn with_id_keeps_all_fields() {
        let new = NewLocation {
            search_query: "Lynnwood".to_string(),
            formatted_query: "Lynnwood, WA, USA".to_string(),
            latitude: 47.82,
            longitude: -122.31,
            created_at: 1_000,
        };
        let location = new.clone().with_id(LocationId::new(9));
        assert_eq!(location.id.value(), 9);
        assert_eq!(location.formatted_query, new.formatted_query);
        assert_eq!(location.created_at, 1_000);
    }
}
