use crate::domain::LocationId;
use crate::models::{Cached, Location, Meetup, Movie, NewLocation, Restaurant, Trail, Weather};
use anyhow::Result;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, Statement};
use std::path::Path;
use std::time::Duration;
use tracing::info;

pub mod migrator;
pub mod repositories;

/// Table-level operations the cache-or-fetch flow needs for one category.
///
/// Rows of a location are always returned in insertion order.
#[async_trait::async_trait]
pub trait CategoryRepository<R: Send + Sync>: Send + Sync {
    async fn find_records(&self, location_id: LocationId) -> Result<Vec<Cached<R>>>;

    /// Deletes every row of the location, returning how many were removed.
    async fn delete_records(&self, location_id: LocationId) -> Result<u64>;

    async fn insert_records(&self, records: &[Cached<R>]) -> Result<()>;
}

#[derive(Clone)]
pub struct Store {
    pub conn: DatabaseConnection,
}

impl Store {
    pub async fn new(db_url: &str) -> Result<Self> {
        Self::with_pool_options(db_url, 5, 1).await
    }

    pub async fn with_pool_options(
        db_url: &str,
        max_connections: u32,
        min_connections: u32,
    ) -> Result<Self> {
        use sea_orm_migration::MigratorTrait;

        if let Some(path_str) = db_url.strip_prefix("sqlite:")
            && !path_str.starts_with(":memory:")
        {
            let path_str = path_str.split('?').next().unwrap_or(path_str);
            if let Some(parent) = Path::new(path_str).parent() {
                tokio::fs::create_dir_all(parent).await.ok();
            }
            if !Path::new(path_str).exists() {
                std::fs::File::create(path_str)?;
            }
        }

        let mut opt = ConnectOptions::new(db_url.to_string());
        opt.max_connections(max_connections)
            .min_connections(min_connections)
            .connect_timeout(Duration::from_secs(10))
            .acquire_timeout(Duration::from_secs(10))
            .idle_timeout(Duration::from_secs(300))
            .max_lifetime(Duration::from_secs(600))
            .sqlx_logging(false);

        let conn = Database::connect(opt).await?;

        migrator::Migrator::up(&conn, None).await?;

        info!(
            "Database connected & migrations applied (pool: {}-{})",
            min_connections, max_connections
        );

        Ok(Self { conn })
    }

    pub async fn ping(&self) -> Result<()> {
        let backend = self.conn.get_database_backend();
        self.conn
            .query_one(Statement::from_string(backend, "SELECT 1".to_string()))
            .await?;
        Ok(())
    }

    fn location_repo(&self) -> repositories::location::LocationRepository {
        repositories::location::LocationRepository::new(self.conn.clone())
    }

    fn weather_repo(&self) -> repositories::weather::WeatherRepository {
        repositories::weather::WeatherRepository::new(self.conn.clone())
    }

    fn restaurant_repo(&self) -> repositories::restaurant::RestaurantRepository {
        repositories::restaurant::RestaurantRepository::new(self.conn.clone())
    }

    fn movie_repo(&self) -> repositories::movie::MovieRepository {
        repositories::movie::MovieRepository::new(self.conn.clone())
    }

    fn meetup_repo(&self) -> repositories::meetup::MeetupRepository {
        repositories::meetup::MeetupRepository::new(self.conn.clone())
    }

    fn trail_repo(&self) -> repositories::trail::TrailRepository {
        repositories::trail::TrailRepository::new(self.conn.clone())
    }

    pub async fn find_location_by_query(&self, query: &str) -> Result<Option<Location>> {
        self.location_repo().find_by_query(query).await
    }

    pub async fn get_location(&self, id: LocationId) -> Result<Option<Location>> {
        self.location_repo().get(id).await
    }

    pub async fn insert_location(&self, location: &NewLocation) -> Result<LocationId> {
        self.location_repo().insert(location).await
    }
}

#[async_trait::async_trait]
impl CategoryRepository<Weather> for Store {
    async fn find_records(&self, location_id: LocationId) -> Result<Vec<Cached<Weather>>> {
        self.weather_repo().find_by_location(location_id).await
    }

    async fn delete_records(&self, location_id: LocationId) -> Result<u64> {
        self.weather_repo().delete_by_location(location_id).await
    }

    async fn insert_records(&self, records: &[Cached<Weather>]) -> Result<()> {
        self.weather_repo().insert_many(records).await
    }
}

#[async_trait::async_trait]
impl CategoryRepository<Restaurant> for Store {
    async fn find_records(&self, location_id: LocationId) -> Result<Vec<Cached<Restaurant>>> {
        self.restaurant_repo().find_by_location(location_id).await
    }

    async fn delete_records(&self, location_id: LocationId) -> Result<u64> {
        self.restaurant_repo().delete_by_location(location_id).await
    }

    async fn insert_records(&self, records: &[Cached<Restaurant>]) -> Result<()> {
        self.restaurant_repo().insert_many(records).await
    }
}

#[async_trait::async_trait]
impl CategoryRepository<Movie> for Store {
    async fn find_records(&self, location_id: LocationId) -> Result<Vec<Cached<Movie>>> {
        self.movie_repo().find_by_location(location_id).await
    }

    async fn delete_records(&self, location_id: LocationId) -> Result<u64> {
        self.movie_repo().delete_by_location(location_id).await
    }

    async fn insert_records(&self, records: &[Cached<Movie>]) -> Result<()> {
        self.movie_repo().insert_many(records).await
    }
}

#[async_trait::async_trait]
impl CategoryRepository<Meetup> for Store {
    async fn find_records(&self, location_id: LocationId) -> Result<Vec<Cached<Meetup>>> {
        self.meetup_repo().find_by_location(location_id).await
    }

    async fn delete_records(&self, location_id: LocationId) -> Result<u64> {
        self.meetup_repo().delete_by_location(location_id).await
    }

    async fn insert_records(&self, records: &[Cached<Meetup>]) -> Result<()> {
        self.meetup_repo().insert_many(records).await
    }
}

#[async_trait::async_trait]
impl CategoryRepository<Trail> for Store {
    async fn find_records(&self, location_id: LocationId) -> Result<Vec<Cached<Trail>>> {
        self.trail_repo().find_by_location(location_id).await
    }

    async fn delete_records(&self, location_id: LocationId) -> Result<u64> {
        self.trail_repo().delete_by_location(location_id).await
    }

    async fn insert_records(&self, records: &[Cached<Trail>]) -> Result<()> {
        self.trail_repo().insert_many(records).await
    }
}
