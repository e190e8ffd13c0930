use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::constants::{cache, providers};
use crate::domain::Category;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,

    pub server: ServerConfig,

    pub providers: ProvidersConfig,

    pub cache: CacheConfig,

    pub observability: ObservabilityConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Store connection string (`sqlite:...` or `postgres://...`).
    pub database_path: String,

    pub log_level: String,

    /// Number of tokio worker threads (default: 2)
    /// Set to 0 to use the number of CPU cores
    pub worker_threads: usize,

    pub max_db_connections: u32,

    pub min_db_connections: u32,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            database_path: "sqlite:data/city-explorer.db".to_string(),
            log_level: "info".to_string(),
            worker_threads: 2,
            max_db_connections: 5,
            min_db_connections: 1,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub port: u16,

    /// `"*"` allows any origin.
    pub cors_allowed_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            cors_allowed_origins: vec!["*".to_string()],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    pub base_url: String,

    #[serde(default)]
    pub api_key: String,
}

impl ProviderConfig {
    fn with_base(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            api_key: String::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProvidersConfig {
    /// Request timeout in seconds (default: 30)
    pub request_timeout_seconds: u64,

    pub geocode: ProviderConfig,

    pub weather: ProviderConfig,

    pub yelp: ProviderConfig,

    pub moviedb: ProviderConfig,

    pub meetup: ProviderConfig,

    pub trails: ProviderConfig,
}

impl Default for ProvidersConfig {
    fn default() -> Self {
        Self {
            request_timeout_seconds: 30,
            geocode: ProviderConfig::with_base(providers::GOOGLE_GEOCODE_API),
            weather: ProviderConfig::with_base(providers::DARKSKY_API),
            yelp: ProviderConfig::with_base(providers::YELP_API),
            moviedb: ProviderConfig::with_base(providers::TMDB_API),
            meetup: ProviderConfig::with_base(providers::MEETUP_API),
            trails: ProviderConfig::with_base(providers::HIKING_PROJECT_API),
        }
    }
}

impl ProvidersConfig {
    fn named(&self) -> [(&'static str, &ProviderConfig); 6] {
        [
            ("geocode", &self.geocode),
            ("weather", &self.weather),
            ("yelp", &self.yelp),
            ("moviedb", &self.moviedb),
            ("meetup", &self.meetup),
            ("trails", &self.trails),
        ]
    }
}

/// Staleness thresholds in minutes. Locations never expire.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    pub weather_minutes: u32,

    pub restaurant_minutes: u32,

    pub movie_minutes: u32,

    pub meetup_minutes: u32,

    pub trail_minutes: u32,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            weather_minutes: cache::WEATHER_TTL_MINUTES,
            restaurant_minutes: cache::RESTAURANT_TTL_MINUTES,
            movie_minutes: cache::MOVIE_TTL_MINUTES,
            meetup_minutes: cache::MEETUP_TTL_MINUTES,
            trail_minutes: cache::TRAIL_TTL_MINUTES,
        }
    }
}

impl CacheConfig {
    /// Threshold for a category, `None` meaning the rows never go stale.
    #[must_use]
    pub const fn max_age_minutes(&self, category: Category) -> Option<u32> {
        match category {
            Category::Location => None,
            Category::Weather => Some(self.weather_minutes),
            Category::Restaurant => Some(self.restaurant_minutes),
            Category::Movie => Some(self.movie_minutes),
            Category::Meetup => Some(self.meetup_minutes),
            Category::Trail => Some(self.trail_minutes),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    pub metrics_enabled: bool,

    pub loki_enabled: bool,

    pub loki_url: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            metrics_enabled: true,
            loki_enabled: false,
            loki_url: "http://localhost:3100".to_string(),
        }
    }
}

impl Config {
    /// Loads the first config file found (or defaults), then applies
    /// environment overrides, reading a `.env` file if present.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        dotenvy::dotenv().ok();

        let mut config = match explicit {
            Some(path) => Self::load_from_path(path)?,
            None => Self::load_from_search_paths()?,
        };

        config.apply_env(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    fn load_from_search_paths() -> Result<Self> {
        for path in &Self::config_paths() {
            if path.exists() {
                info!("Loading config from: {}", path.display());
                return Self::load_from_path(path);
            }
        }

        info!("No config file found, using defaults");
        Ok(Self::default())
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Overrides file values with the deployment's environment variables.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(port) = lookup("PORT") {
            self.server.port = port
                .trim()
                .parse()
                .with_context(|| format!("PORT is not a valid port number: {port}"))?;
        }

        if let Some(url) = lookup("DATABASE_URL") {
            self.general.database_path = url;
        }

        let keys = [
            ("GEOCODE_API_KEY", &mut self.providers.geocode),
            ("WEATHER_API_KEY", &mut self.providers.weather),
            ("YELP_API_KEY", &mut self.providers.yelp),
            ("MOVIEDB_API_KEY", &mut self.providers.moviedb),
            ("MEETUP_API_KEY", &mut self.providers.meetup),
            ("TRAIL_API_KEY", &mut self.providers.trails),
        ];
        for (var, provider) in keys {
            if let Some(key) = lookup(var) {
                provider.api_key = key;
            }
        }

        Ok(())
    }

    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        info!("Config saved to: {}", path.display());
        Ok(())
    }

    fn config_paths() -> Vec<PathBuf> {
        let mut paths = vec![];

        paths.push(PathBuf::from("config.toml"));

        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join("city-explorer").join("config.toml"));
        }

        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".city-explorer").join("config.toml"));
        }

        paths
    }

    #[must_use]
    pub fn default_config_path() -> PathBuf {
        PathBuf::from("config.toml")
    }

    /// Writes a default config file at `path` unless one already exists.
    pub fn create_default_if_missing(path: &Path) -> Result<bool> {
        if path.exists() {
            Ok(false)
        } else {
            Self::default().save_to_path(path)?;
            info!("Created default config file: {}", path.display());
            Ok(true)
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            anyhow::bail!("Server port cannot be 0");
        }

        if self.general.min_db_connections > self.general.max_db_connections {
            anyhow::bail!(
                "min_db_connections ({}) cannot exceed max_db_connections ({})",
                self.general.min_db_connections,
                self.general.max_db_connections
            );
        }

        let missing: Vec<&str> = self
            .providers
            .named()
            .iter()
            .filter(|(_, p)| p.api_key.trim().is_empty())
            .map(|(name, _)| *name)
            .collect();
        if !missing.is_empty() {
            anyhow::bail!("Missing API key for provider(s): {}", missing.join(", "));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn with_all_keys() -> Config {
        let mut config = Config::default();
        let env: HashMap<&str, &str> = [
            ("GEOCODE_API_KEY", "g"),
            ("WEATHER_API_KEY", "w"),
            ("YELP_API_KEY", "y"),
            ("MOVIEDB_API_KEY", "m"),
            ("MEETUP_API_KEY", "e"),
            ("TRAIL_API_KEY", "t"),
        ]
        .into_iter()
        .collect();
        config
            .apply_env(|k| env.get(k).map(|v| (*v).to_string()))
            .unwrap();
        config
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.cache.max_age_minutes(Category::Weather), Some(1));
        assert_eq!(config.cache.max_age_minutes(Category::Restaurant), Some(2));
        assert_eq!(config.cache.max_age_minutes(Category::Movie), Some(3));
        assert_eq!(config.cache.max_age_minutes(Category::Meetup), Some(4));
        assert_eq!(config.cache.max_age_minutes(Category::Trail), Some(5));
        assert_eq!(config.cache.max_age_minutes(Category::Location), None);
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        assert!(toml_str.contains("[general]"));
        assert!(toml_str.contains("[providers.weather]"));
        assert!(toml_str.contains("[cache]"));
    }

    #[test]
    fn test_config_deserialization() {
        let toml_str = r#"
            [general]
            log_level = "debug"

            [cache]
            weather_minutes = 10

            [providers.yelp]
            base_url = "http://localhost:9000"
            api_key = "abc"
        "#;

        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.log_level, "debug");
        assert_eq!(config.cache.weather_minutes, 10);
        assert_eq!(config.cache.trail_minutes, 5);
        assert_eq!(config.providers.yelp.api_key, "abc");
        assert_eq!(config.providers.geocode.base_url, providers::GOOGLE_GEOCODE_API);
    }

    #[test]
    fn test_env_overrides() {
        let mut config = Config::default();
        config
            .apply_env(|k| match k {
                "PORT" => Some("8081".to_string()),
                "DATABASE_URL" => Some("postgres://localhost/city".to_string()),
                "YELP_API_KEY" => Some("secret".to_string()),
                _ => None,
            })
            .unwrap();

        assert_eq!(config.server.port, 8081);
        assert_eq!(config.general.database_path, "postgres://localhost/city");
        assert_eq!(config.providers.yelp.api_key, "secret");
        assert!(config.providers.weather.api_key.is_empty());
    }

    #[test]
    fn test_invalid_port_env() {
        let mut config = Config::default();
        let result = config.apply_env(|k| (k == "PORT").then(|| "eighty".to_string()));
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_requires_api_keys() {
        let err = Config::default().validate().unwrap_err();
        assert!(err.to_string().contains("geocode"));

        assert!(with_all_keys().validate().is_ok());
    }

    #[test]
    fn test_validate_pool_bounds() {
        let mut config = with_all_keys();
        config.general.min_db_connections = 10;
        assert!(config.validate().is_err());
    }
}
