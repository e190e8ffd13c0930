use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub const fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

/// Query string of every lookup endpoint.
///
/// `data` is either a plain value (`?data=Seattle`, or a JSON-encoded
/// location) or a nested object in bracket notation
/// (`?data[id]=1&data[search_query]=Seattle&data[latitude]=47.6&...`).
#[derive(Debug, Default, Deserialize)]
pub struct DataQuery {
    pub data: Option<String>,

    #[serde(rename = "data[id]")]
    pub id: Option<String>,

    #[serde(rename = "data[search_query]")]
    pub search_query: Option<String>,

    #[serde(rename = "data[formatted_query]")]
    pub formatted_query: Option<String>,

    #[serde(rename = "data[latitude]")]
    pub latitude: Option<String>,

    #[serde(rename = "data[longitude]")]
    pub longitude: Option<String>,

    #[serde(rename = "data[created_at]")]
    pub created_at: Option<String>,
}

impl DataQuery {
    /// Whether any `data[...]` field was sent.
    #[must_use]
    pub const fn has_fields(&self) -> bool {
        self.id.is_some()
            || self.search_query.is_some()
            || self.formatted_query.is_some()
            || self.latitude.is_some()
            || self.longitude.is_some()
            || self.created_at.is_some()
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub database: bool,
    pub uptime_seconds: u64,
    pub version: &'static str,
}
