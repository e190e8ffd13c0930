use anyhow::Result;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;
use url::Url;

use super::{RecordSource, parse_base_url, send_json};
use crate::config::ProviderConfig;
use crate::models::{Location, Restaurant};

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    businesses: Vec<Business>,
}

#[derive(Debug, Deserialize)]
pub struct Business {
    pub name: String,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub image_url: String,
    pub price: Option<String>,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub rating: f64,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub url: String,
}

impl From<Business> for Restaurant {
    fn from(b: Business) -> Self {
        Self {
            name: b.name,
            image_url: b.image_url,
            price: b.price,
            rating: b.rating,
            url: b.url,
        }
    }
}

#[derive(Clone)]
pub struct YelpClient {
    client: Client,
    base_url: Url,
    api_key: String,
}

impl YelpClient {
    pub fn with_shared_client(client: Client, config: &ProviderConfig) -> Result<Self> {
        Ok(Self {
            client,
            base_url: parse_base_url(&config.base_url)?,
            api_key: config.api_key.clone(),
        })
    }

    pub fn endpoint(&self, search_query: &str) -> Result<Url> {
        let mut url = self.base_url.join("v3/businesses/search")?;
        url.query_pairs_mut().append_pair("location", search_query);
        Ok(url)
    }
}

#[async_trait::async_trait]
impl RecordSource<Restaurant> for YelpClient {
    fn service(&self) -> &'static str {
        "Yelp"
    }

    async fn fetch(&self, location: &Location) -> Result<Vec<Restaurant>> {
        debug!(location_id = %location.id, "Searching businesses");
        let url = self.endpoint(&location.search_query)?;
        let request = self.client.get(url).bearer_auth(&self.api_key);
        let response: SearchResponse = send_json(request, self.service()).await?;
        Ok(response
            .businesses
            .into_iter()
            .map(Restaurant::from)
            .collect())
    }
}
