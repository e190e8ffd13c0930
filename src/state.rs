use std::sync::Arc;
use tokio::sync::RwLock;

use crate::clients::darksky::DarkSkyClient;
use crate::clients::google_geocode::GoogleGeocodeClient;
use crate::clients::hiking_project::HikingProjectClient;
use crate::clients::meetup::MeetupClient;
use crate::clients::tmdb::TmdbClient;
use crate::clients::yelp::YelpClient;
use crate::clients::{Geocoder, RecordSource};
use crate::config::Config;
use crate::constants::providers::USER_AGENT;
use crate::db::Store;
use crate::domain::Category;
use crate::models::{Meetup, Movie, Restaurant, Trail, Weather};
use crate::services::{CachePolicy, CategoryService, LocationService};

/// Build a shared HTTP client with reasonable defaults for API calls.
/// This client should be reused across all provider clients to enable
/// connection pooling.
fn build_shared_http_client(timeout_seconds: u64) -> anyhow::Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(timeout_seconds))
        .user_agent(USER_AGENT)
        .pool_max_idle_per_host(10)
        .build()
        .map_err(|e| anyhow::anyhow!("Failed to build shared HTTP client: {e}"))
}

/// The remote providers behind each category.
#[derive(Clone)]
pub struct Sources {
    pub geocoder: Arc<dyn Geocoder>,

    pub weather: Arc<dyn RecordSource<Weather>>,

    pub restaurants: Arc<dyn RecordSource<Restaurant>>,

    pub movies: Arc<dyn RecordSource<Movie>>,

    pub meetups: Arc<dyn RecordSource<Meetup>>,

    pub trails: Arc<dyn RecordSource<Trail>>,
}

impl Sources {
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let providers = &config.providers;
        let http = build_shared_http_client(providers.request_timeout_seconds)?;

        Ok(Self {
            geocoder: Arc::new(GoogleGeocodeClient::with_shared_client(
                http.clone(),
                &providers.geocode,
            )?),
            weather: Arc::new(DarkSkyClient::with_shared_client(
                http.clone(),
                &providers.weather,
            )?),
            restaurants: Arc::new(YelpClient::with_shared_client(
                http.clone(),
                &providers.yelp,
            )?),
            movies: Arc::new(TmdbClient::with_shared_client(
                http.clone(),
                &providers.moviedb,
            )?),
            meetups: Arc::new(MeetupClient::with_shared_client(
                http.clone(),
                &providers.meetup,
            )?),
            trails: Arc::new(HikingProjectClient::with_shared_client(
                http,
                &providers.trails,
            )?),
        })
    }
}

#[derive(Clone)]
pub struct SharedState {
    pub config: Arc<RwLock<Config>>,

    pub store: Store,

    pub locations: LocationService,

    pub weather: CategoryService<Weather>,

    pub restaurants: CategoryService<Restaurant>,

    pub movies: CategoryService<Movie>,

    pub meetups: CategoryService<Meetup>,

    pub trails: CategoryService<Trail>,
}

impl SharedState {
    pub async fn new(config: Config) -> anyhow::Result<Self> {
        let store = Store::with_pool_options(
            &config.general.database_path,
            config.general.max_db_connections,
            config.general.min_db_connections,
        )
        .await?;
        let sources = Sources::from_config(&config)?;

        Ok(Self::with_sources(config, store, sources))
    }

    /// Assembles the services over an existing store and provider set.
    pub fn with_sources(config: Config, store: Store, sources: Sources) -> Self {
        let policy = |category| CachePolicy::for_category(&config.cache, category);

        Self {
            locations: LocationService::new(store.clone(), sources.geocoder),
            weather: CategoryService::new(
                store.clone(),
                sources.weather,
                Category::Weather,
                policy(Category::Weather),
            ),
            restaurants: CategoryService::new(
                store.clone(),
                sources.restaurants,
                Category::Restaurant,
                policy(Category::Restaurant),
            ),
            movies: CategoryService::new(
                store.clone(),
                sources.movies,
                Category::Movie,
                policy(Category::Movie),
            ),
            meetups: CategoryService::new(
                store.clone(),
                sources.meetups,
                Category::Meetup,
                policy(Category::Meetup),
            ),
            trails: CategoryService::new(
                store.clone(),
                sources.trails,
                Category::Trail,
                policy(Category::Trail),
            ),
            store,
            config: Arc::new(RwLock::new(config)),
        }
    }
}
