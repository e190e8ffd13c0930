use std::sync::Arc;

use tracing::{debug, info, warn};

use super::category_service::{now_millis, record_lookup};
use super::LookupError;
use crate::clients::Geocoder;
use crate::db::Store;
use crate::domain::Category;
use crate::models::{Location, NewLocation};

/// Resolves place names to stored locations. Locations never expire.
#[derive(Clone)]
pub struct LocationService {
    store: Store,
    geocoder: Arc<dyn Geocoder>,
}

impl LocationService {
    pub fn new(store: Store, geocoder: Arc<dyn Geocoder>) -> Self {
        Self { store, geocoder }
    }

    pub async fn resolve(&self, query: &str) -> Result<Location, LookupError> {
        self.resolve_at(query, now_millis()).await
    }

    pub async fn resolve_at(&self, query: &str, now: i64) -> Result<Location, LookupError> {
        if let Some(location) = self.store.find_location_by_query(query).await? {
            debug!(location_id = %location.id, "Location cache hit for '{}'", query);
            record_lookup(Category::Location, "hit");
            return Ok(location);
        }
        record_lookup(Category::Location, "miss");

        let service = self.geocoder.service();
        let places = self.geocoder.geocode(query).await.map_err(|e| {
            warn!("{} lookup for '{}' failed: {:#}", service, query, e);
            LookupError::provider(service, &e)
        })?;

        let Some(best) = places.into_iter().next() else {
            warn!("{} found nothing for '{}'", service, query);
            return Err(LookupError::empty(service));
        };

        let new_location = NewLocation {
            search_query: query.to_string(),
            formatted_query: best.formatted_address,
            latitude: best.latitude,
            longitude: best.longitude,
            created_at: now,
        };

        let id = self.store.insert_location(&new_location).await?;
        info!(location_id = %id, "Resolved '{}' to {}", query, new_location.formatted_query);

        Ok(new_location.with_id(id))
    }
}
