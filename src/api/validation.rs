use std::str::FromStr;

use super::{ApiError, DataQuery};
use crate::domain::LocationId;
use crate::models::Location;

/// Accepts any non-blank place name. The name is kept as sent, since
/// locations are keyed on the raw query string.
pub fn validate_search_query(query: &str) -> Result<&str, ApiError> {
    if query.trim().is_empty() {
        return Err(ApiError::validation("This location is not a valid input"));
    }
    Ok(query)
}

/// Decodes the location passed to the category endpoints, either as a
/// JSON document in `data` or as `data[...]` fields.
pub fn parse_location_param(params: &DataQuery) -> Result<Location, ApiError> {
    let location = match params.data.as_deref().map(str::trim) {
        Some(raw) if !raw.is_empty() => serde_json::from_str(raw)
            .map_err(|e| ApiError::validation(format!("Invalid location in 'data': {e}")))?,
        _ if params.has_fields() => location_from_fields(params)?,
        _ => return Err(ApiError::validation("Missing 'data' query parameter")),
    };

    check_location(location)
}

fn location_from_fields(params: &DataQuery) -> Result<Location, ApiError> {
    let search_query = params
        .search_query
        .clone()
        .filter(|q| !q.trim().is_empty())
        .ok_or_else(|| ApiError::validation("Missing 'data[search_query]'"))?;

    Ok(Location {
        id: LocationId::new(required(params.id.as_deref(), "id")?),
        search_query,
        formatted_query: params.formatted_query.clone().unwrap_or_default(),
        latitude: required(params.latitude.as_deref(), "latitude")?,
        longitude: required(params.longitude.as_deref(), "longitude")?,
        created_at: optional(params.created_at.as_deref(), "created_at")?.unwrap_or_default(),
    })
}

fn required<T: FromStr>(value: Option<&str>, field: &str) -> Result<T, ApiError> {
    optional(value, field)?
        .ok_or_else(|| ApiError::validation(format!("Missing 'data[{field}]'")))
}

fn optional<T: FromStr>(value: Option<&str>, field: &str) -> Result<Option<T>, ApiError> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(|v| {
            v.parse()
                .map_err(|_| ApiError::validation(format!("Invalid 'data[{field}]': {v}")))
        })
        .transpose()
}

fn check_location(location: Location) -> Result<Location, ApiError> {
    if location.id.value() <= 0 {
        return Err(ApiError::validation(format!(
            "Invalid location ID: {}. ID must be a positive integer",
            location.id
        )));
    }

    if !location.latitude.is_finite() || !location.longitude.is_finite() {
        return Err(ApiError::validation("Location coordinates must be numbers"));
    }

    Ok(location)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn json(data: &str) -> DataQuery {
        DataQuery {
            data: Some(data.to_string()),
            ..DataQuery::default()
        }
    }

    fn bracketed(id: &str, latitude: &str) -> DataQuery {
        DataQuery {
            id: Some(id.to_string()),
            search_query: Some("Seattle".to_string()),
            latitude: Some(latitude.to_string()),
            longitude: Some("-122.3".to_string()),
            ..DataQuery::default()
        }
    }

    #[test]
    fn test_validate_search_query() {
        assert_eq!(validate_search_query("Seattle").unwrap(), "Seattle");
        assert_eq!(validate_search_query(" Seattle").unwrap(), " Seattle");
        assert!(validate_search_query("").is_err());
        assert!(validate_search_query("   ").is_err());
    }

    #[test]
    fn test_parse_json_location() {
        let data = r#"{"id":1,"search_query":"Seattle","formatted_query":"Seattle, WA, USA","latitude":47.6,"longitude":-122.3}"#;
        let location = parse_location_param(&json(data)).unwrap();
        assert_eq!(location.id.value(), 1);
        assert_eq!(location.search_query, "Seattle");
    }

    #[test]
    fn test_parse_bracketed_location() {
        let mut params = bracketed("4", "47.6");
        params.formatted_query = Some("Seattle, WA, USA".to_string());
        params.created_at = Some("1700000000000".to_string());

        let location = parse_location_param(&params).unwrap();
        assert_eq!(location.id, LocationId::new(4));
        assert_eq!(location.search_query, "Seattle");
        assert_eq!(location.formatted_query, "Seattle, WA, USA");
        assert!((location.latitude - 47.6).abs() < f64::EPSILON);
        assert_eq!(location.created_at, 1_700_000_000_000);
    }

    #[test]
    fn test_parse_bracketed_location_rejects_bad_fields() {
        assert!(parse_location_param(&bracketed("abc", "47.6")).is_err());
        assert!(parse_location_param(&bracketed("4", "north")).is_err());
        assert!(parse_location_param(&bracketed("0", "47.6")).is_err());

        let mut missing_query = bracketed("4", "47.6");
        missing_query.search_query = None;
        assert!(parse_location_param(&missing_query).is_err());
    }

    #[test]
    fn test_parse_location_param_rejects_bad_input() {
        assert!(parse_location_param(&DataQuery::default()).is_err());
        assert!(parse_location_param(&json(" ")).is_err());
        assert!(parse_location_param(&json("Seattle")).is_err());
        assert!(parse_location_param(&json(r#"{"search_query":"Seattle"}"#)).is_err());
        assert!(
            parse_location_param(&json(
                r#"{"id":0,"search_query":"Seattle","latitude":1.0,"longitude":2.0}"#
            ))
            .is_err()
        );
    }
}
