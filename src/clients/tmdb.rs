use anyhow::Result;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;
use url::Url;

use super::{RecordSource, parse_base_url, send_json};
use crate::config::ProviderConfig;
use crate::constants::providers::TMDB_POSTER_BASE;
use crate::models::{Location, Movie};

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Vec<TmdbMovie>,
}

#[derive(Debug, Deserialize)]
pub struct TmdbMovie {
    pub title: String,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub overview: String,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub vote_average: f64,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub vote_count: i64,
    pub poster_path: Option<String>,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub popularity: f64,
    pub release_date: Option<String>,
}

impl From<TmdbMovie> for Movie {
    fn from(m: TmdbMovie) -> Self {
        Self {
            title: m.title,
            overview: m.overview,
            average_votes: m.vote_average,
            total_votes: m.vote_count,
            image_url: m
                .poster_path
                .map(|p| format!("{TMDB_POSTER_BASE}{}", p.trim_start_matches('/'))),
            popularity: m.popularity,
            released_on: m.release_date,
        }
    }
}

#[derive(Clone)]
pub struct TmdbClient {
    client: Client,
    base_url: Url,
    api_key: String,
}

impl TmdbClient {
    pub fn with_shared_client(client: Client, config: &ProviderConfig) -> Result<Self> {
        Ok(Self {
            client,
            base_url: parse_base_url(&config.base_url)?,
            api_key: config.api_key.clone(),
        })
    }

    pub fn endpoint(&self, search_query: &str) -> Result<Url> {
        let mut url = self.base_url.join("3/search/movie")?;
        url.query_pairs_mut()
            .append_pair("api_key", &self.api_key)
            .append_pair("query", search_query);
        Ok(url)
    }
}

#[async_trait::async_trait]
impl RecordSource<Movie> for TmdbClient {
    fn service(&self) -> &'static str {
        "The Movie Database"
    }

    async fn fetch(&self, location: &Location) -> Result<Vec<Movie>> {
        debug!(location_id = %location.id, "Searching movies");
        let url = self.endpoint(&location.search_query)?;
        let response: SearchResponse = send_json(self.client.get(url), self.service()).await?;
        Ok(response.results.into_iter().map(Movie::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint() {
        let config = ProviderConfig {
            base_url: "https://api.themoviedb.org".to_string(),
            api_key: "KEY".to_string(),
        };
        let client = TmdbClient::with_shared_client(Client::new(), &config).unwrap();
        let url = client.endpoint("Seattle").unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.themoviedb.org/3/search/movie?api_key=KEY&query=Seattle"
        );
    }

    #[test]
    fn test_maps_movies() {
        let body = r#"{
            "page": 1,
            "results": [
                {"title": "Sleepless in Seattle", "overview": "A widower...", "vote_average": 6.8,
                 "vote_count": 1500, "poster_path": "/iLWsLVrfkFvOXOG9PbUAYg7AK3E.jpg",
                 "popularity": 12.3, "release_date": "1993-06-24"},
                {"title": "Untitled", "poster_path": null, "release_date": null}
            ]
        }"#;
        let response: SearchResponse = serde_json::from_str(body).unwrap();
        let records: Vec<Movie> = response.results.into_iter().map(Movie::from).collect();

        assert_eq!(records[0].title, "Sleepless in Seattle");
        assert_eq!(records[0].total_votes, 1500);
        assert_eq!(
            records[0].image_url.as_deref(),
            Some("https://image.tmdb.org/t/p/w200_and_h300_bestv2/iLWsLVrfkFvOXOG9PbUAYg7AK3E.jpg")
        );
        assert_eq!(records[0].released_on.as_deref(), Some("1993-06-24"));
        assert!(records[1].image_url.is_none());
        assert!(records[1].overview.is_empty());
    }

    #[test]
    fn test_null_fields_map_to_defaults() {
        let body = r#"{"results": [
            {"title": "Lost Reel", "overview": null, "vote_average": null, "vote_count": null,
             "poster_path": null, "popularity": null, "release_date": ""}
        ]}"#;
        let response: SearchResponse = serde_json::from_str(body).unwrap();
        let record = Movie::from(response.results.into_iter().next().unwrap());

        assert_eq!(record.title, "Lost Reel");
        assert!(record.overview.is_empty());
        assert_eq!(record.total_votes, 0);
        assert!(record.image_url.is_none());
    }
}
