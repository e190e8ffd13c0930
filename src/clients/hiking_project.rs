use anyhow::Result;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;
use url::Url;

use super::{RecordSource, parse_base_url, send_json};
use crate::config::ProviderConfig;
use crate::models::{Location, Trail};

const MAX_DISTANCE_MILES: &str = "20";

#[derive(Debug, Deserialize)]
struct TrailsResponse {
    #[serde(default)]
    trails: Vec<HikingTrail>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HikingTrail {
    pub name: String,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub location: String,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub length: f64,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub stars: f64,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub star_votes: i64,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub summary: String,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub url: String,
    pub condition_details: Option<String>,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub condition_date: String,
}

impl From<HikingTrail> for Trail {
    fn from(t: HikingTrail) -> Self {
        let (condition_date, condition_time) = Self::split_condition_stamp(&t.condition_date);
        Self {
            name: t.name,
            location: t.location,
            length: t.length,
            stars: t.stars,
            star_votes: t.star_votes,
            summary: t.summary,
            trail_url: t.url,
            conditions: t.condition_details,
            condition_date,
            condition_time,
        }
    }
}

#[derive(Clone)]
pub struct HikingProjectClient {
    client: Client,
    base_url: Url,
    api_key: String,
}

impl HikingProjectClient {
    pub fn with_shared_client(client: Client, config: &ProviderConfig) -> Result<Self> {
        Ok(Self {
            client,
            base_url: parse_base_url(&config.base_url)?,
            api_key: config.api_key.clone(),
        })
    }

    pub fn endpoint(&self, latitude: f64, longitude: f64) -> Result<Url> {
        let mut url = self.base_url.join("data/get-trails")?;
        url.query_pairs_mut()
            .append_pair("lat", &latitude.to_string())
            .append_pair("lon", &longitude.to_string())
            .append_pair("maxDistance", MAX_DISTANCE_MILES)
            .append_pair("key", &self.api_key);
        Ok(url)
    }
}

#[async_trait::async_trait]
impl RecordSource<Trail> for HikingProjectClient {
    fn service(&self) -> &'static str {
        "Hiking Project"
    }

    async fn fetch(&self, location: &Location) -> Result<Vec<Trail>> {
        debug!(location_id = %location.id, "Fetching nearby trails");
        let url = self.endpoint(location.latitude, location.longitude)?;
        let response: TrailsResponse = send_json(self.client.get(url), self.service()).await?;
        Ok(response.trails.into_iter().map(Trail::from).collect())
    }
}
