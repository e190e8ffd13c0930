//! Domain primitives shared by the store, the services and the HTTP layer.
//!
//! The newtype and enum here keep location ids from being mixed with row ids
//! and give every cached category a single name used in metrics and logs.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Surrogate id of a row in the `locations` table.
///
/// # Examples
///
/// ```rust
/// use city_explorer::domain::LocationId;
///
/// let id = LocationId::new(7);
/// assert_eq!(id.value(), 7);
/// assert_eq!(id.to_string(), "7");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct LocationId(i32);

impl LocationId {
    #[must_use]
    pub const fn new(id: i32) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn value(&self) -> i32 {
        self.0
    }
}

impl fmt::Display for LocationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<LocationId> for i32 {
    fn from(id: LocationId) -> Self {
        id.0
    }
}

impl From<i32> for LocationId {
    fn from(id: i32) -> Self {
        Self::new(id)
    }
}

impl Serialize for LocationId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_i32(self.0)
    }
}

impl<'de> Deserialize<'de> for LocationId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let id = i32::deserialize(deserializer)?;
        Ok(Self::new(id))
    }
}

/// A category of location data cached in its own table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Location,
    Weather,
    Restaurant,
    Movie,
    Meetup,
    Trail,
}

impl Category {
    /// Short label used in logs and metric labels.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Location => "location",
            Self::Weather => "weather",
            Self::Restaurant => "restaurant",
            Self::Movie => "movie",
            Self::Meetup => "meetup",
            Self::Trail => "trail",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn location_id_conversions() {
        let id = LocationId::new(42);
        assert_eq!(id.value(), 42);
        assert_eq!(id.to_string(), "42");
        assert_eq!(i32::from(id), 42);
        assert_eq!(LocationId::from(42), id);
    }

    #[test]
    fn location_id_serializes_as_plain_integer() {
        let json = serde_json::to_string(&LocationId::new(3)).unwrap();
        assert_eq!(json, "3");
        let back: LocationId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, LocationId::new(3));
    }

    #[test]
    fn category_labels() {
        assert_eq!(Category::Weather.as_str(), "weather");
        assert_eq!(Category::Restaurant.to_string(), "restaurant");
        assert_eq!(Category::Trail.to_string(), "trail");
    }
}
