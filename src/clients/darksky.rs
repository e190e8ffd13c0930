use anyhow::{Result, anyhow};
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;
use url::Url;

use super::{RecordSource, parse_base_url, send_json};
use crate::config::ProviderConfig;
use crate::models::{Location, Weather, day_string_from_secs};

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    daily: DailyBlock,
}

#[derive(Debug, Deserialize)]
struct DailyBlock {
    #[serde(default)]
    data: Vec<DailyForecast>,
}

#[derive(Debug, Deserialize)]
pub struct DailyForecast {
    /// Unix seconds at the start of the day.
    pub time: i64,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub summary: String,
}

impl From<DailyForecast> for Weather {
    fn from(day: DailyForecast) -> Self {
        Self {
            forecast: day.summary,
            time: day_string_from_secs(day.time),
        }
    }
}

#[derive(Clone)]
pub struct DarkSkyClient {
    client: Client,
    base_url: Url,
    api_key: String,
}

impl DarkSkyClient {
    pub fn with_shared_client(client: Client, config: &ProviderConfig) -> Result<Self> {
        Ok(Self {
            client,
            base_url: parse_base_url(&config.base_url)?,
            api_key: config.api_key.clone(),
        })
    }

    /// The key travels as a path segment, so it is escaped like one.
    pub fn endpoint(&self, latitude: f64, longitude: f64) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| anyhow!("Invalid Dark Sky base URL: {}", self.base_url))?
            .pop_if_empty()
            .push("forecast")
            .push(&self.api_key)
            .push(&format!("{latitude},{longitude}"));
        Ok(url)
    }
}

#[async_trait::async_trait]
impl RecordSource<Weather> for DarkSkyClient {
    fn service(&self) -> &'static str {
        "Dark Sky"
    }

    async fn fetch(&self, location: &Location) -> Result<Vec<Weather>> {
        debug!(location_id = %location.id, "Fetching daily forecast");
        let url = self.endpoint(location.latitude, location.longitude)?;
        let response: ForecastResponse = send_json(self.client.get(url), self.service()).await?;
        Ok(response.daily.data.into_iter().map(Weather::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base_url: &str, api_key: &str) -> DarkSkyClient {
        let config = ProviderConfig {
            base_url: base_url.to_string(),
            api_key: api_key.to_string(),
        };
        DarkSkyClient::with_shared_client(Client::new(), &config).unwrap()
    }

    #[test]
    fn test_endpoint() {
        let url = client("https://api.darksky.net", "KEY")
            .endpoint(47.6, -122.3)
            .unwrap();
        assert_eq!(url.as_str(), "https://api.darksky.net/forecast/KEY/47.6,-122.3");
    }

    #[test]
    fn test_endpoint_escapes_key() {
        let url = client("https://api.darksky.net", "a/b?c#d")
            .endpoint(47.6, -122.3)
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.darksky.net/forecast/a%2Fb%3Fc%23d/47.6,-122.3"
        );
        assert!(url.query().is_none());
        assert!(url.fragment().is_none());
    }

    #[test]
    fn test_endpoint_under_path_prefix() {
        let url = client("http://localhost:8080/proxy", "KEY")
            .endpoint(1.5, 2.5)
            .unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/proxy/forecast/KEY/1.5,2.5");
    }

    #[test]
    fn test_maps_daily_forecasts() {
        let body = r#"{
            "latitude": 47.6,
            "daily": {
                "summary": "Rain throughout the week.",
                "data": [
                    {"time": 1704110400, "summary": "Light rain in the morning.", "icon": "rain"},
                    {"time": 1704196800, "summary": "Overcast throughout the day."}
                ]
            }
        }"#;
        let response: ForecastResponse = serde_json::from_str(body).unwrap();
        let records: Vec<Weather> = response.daily.data.into_iter().map(Weather::from).collect();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].forecast, "Light rain in the morning.");
        assert_eq!(records[0].time, "Mon Jan 01 2024");
        assert_eq!(records[1].time, "Tue Jan 02 2024");
    }
}
