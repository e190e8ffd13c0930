//! Clients for the remote data providers.
//!
//! Each client knows one provider's request shape and maps its payload into
//! the crate's record types. The cache layer only sees the two traits below.

pub mod darksky;
pub mod google_geocode;
pub mod hiking_project;
pub mod meetup;
pub mod tmdb;
pub mod yelp;

use anyhow::{Context, Result};
use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use url::Url;

use crate::models::Location;

/// A candidate place returned by a geocoding provider.
#[derive(Debug, Clone, PartialEq)]
pub struct GeocodedPlace {
    pub formatted_address: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// Resolves a free-form place name into candidate places, best match first.
#[async_trait::async_trait]
pub trait Geocoder: Send + Sync {
    fn service(&self) -> &'static str;

    async fn geocode(&self, query: &str) -> Result<Vec<GeocodedPlace>>;
}

/// Fetches one category of records for a resolved location.
#[async_trait::async_trait]
pub trait RecordSource<R>: Send + Sync {
    fn service(&self) -> &'static str;

    async fn fetch(&self, location: &Location) -> Result<Vec<R>>;
}

/// Parses a configured base URL so relative endpoint paths join under it
/// instead of replacing its last segment.
pub fn parse_base_url(base: &str) -> Result<Url> {
    let mut base = base.to_string();
    if !base.ends_with('/') {
        base.push('/');
    }
    Url::parse(&base).with_context(|| format!("Invalid provider base URL: {base}"))
}

/// Reads an absent or `null` payload field as the type's default.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Sends the request and decodes a JSON body, turning non-2xx answers into errors.
pub(crate) async fn send_json<T: DeserializeOwned>(
    request: RequestBuilder,
    service: &str,
) -> Result<T> {
    let response = request
        .send()
        .await
        .with_context(|| format!("{service} request failed"))?;

    if !response.status().is_success() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        anyhow::bail!("{service} API error: {status} - {body}");
    }

    response
        .json()
        .await
        .with_context(|| format!("Failed to decode {service} response"))
}
