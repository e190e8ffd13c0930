use anyhow::Result;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;
use url::Url;

use super::{GeocodedPlace, Geocoder, parse_base_url, send_json};
use crate::config::ProviderConfig;

#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    #[serde(default)]
    results: Vec<GeocodeResult>,
}

#[derive(Debug, Deserialize)]
pub struct GeocodeResult {
    pub formatted_address: String,
    pub geometry: Geometry,
}

#[derive(Debug, Deserialize)]
pub struct Geometry {
    pub location: LatLng,
}

#[derive(Debug, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl From<GeocodeResult> for GeocodedPlace {
    fn from(r: GeocodeResult) -> Self {
        Self {
            formatted_address: r.formatted_address,
            latitude: r.geometry.location.lat,
            longitude: r.geometry.location.lng,
        }
    }
}

#[derive(Clone)]
pub struct GoogleGeocodeClient {
    client: Client,
    base_url: Url,
    api_key: String,
}

impl GoogleGeocodeClient {
    pub fn with_shared_client(client: Client, config: &ProviderConfig) -> Result<Self> {
        Ok(Self {
            client,
            base_url: parse_base_url(&config.base_url)?,
            api_key: config.api_key.clone(),
        })
    }

    pub fn endpoint(&self, query: &str) -> Result<Url> {
        let mut url = self.base_url.join("maps/api/geocode/json")?;
        url.query_pairs_mut()
            .append_pair("address", query)
            .append_pair("key", &self.api_key);
        Ok(url)
    }
}

#[async_trait::async_trait]
impl Geocoder for GoogleGeocodeClient {
    fn service(&self) -> &'static str {
        "Google Geocoding"
    }

    async fn geocode(&self, query: &str) -> Result<Vec<GeocodedPlace>> {
        debug!("Geocoding query: {}", query);
        let url = self.endpoint(query)?;
        let response: GeocodeResponse = send_json(self.client.get(url), self.service()).await?;
        Ok(response.results.into_iter().map(GeocodedPlace::from).collect())
    }
}
