//! The cache-or-fetch flow shared by every per-location category.

use std::marker::PhantomData;
use std::sync::Arc;

use tracing::{debug, info, warn};

use super::{CachePolicy, LookupError};
use crate::clients::RecordSource;
use crate::db::{CategoryRepository, Store};
use crate::domain::Category;
use crate::models::{Cached, Location};

/// Counts a cache decision and notes it on the enclosing request span.
pub(crate) fn record_lookup(category: Category, outcome: &'static str) {
    let span = tracing::Span::current();
    span.record("category", category.as_str());
    span.record("cache", outcome);

    metrics::counter!(
        "cache_lookups_total",
        "category" => category.as_str(),
        "outcome" => outcome
    )
    .increment(1);
}

pub(crate) fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Serves one category of records for a location, using its table as a cache
/// in front of the remote provider.
pub struct CategoryService<R> {
    store: Store,
    source: Arc<dyn RecordSource<R>>,
    policy: CachePolicy,
    category: Category,
    _record: PhantomData<fn() -> R>,
}

impl<R> Clone for CategoryService<R> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            source: Arc::clone(&self.source),
            policy: self.policy,
            category: self.category,
            _record: PhantomData,
        }
    }
}

impl<R> CategoryService<R>
where
    R: Clone + Send + Sync + 'static,
    Store: CategoryRepository<R>,
{
    pub fn new(
        store: Store,
        source: Arc<dyn RecordSource<R>>,
        category: Category,
        policy: CachePolicy,
    ) -> Self {
        Self {
            store,
            source,
            policy,
            category,
            _record: PhantomData,
        }
    }

    #[must_use]
    pub const fn category(&self) -> Category {
        self.category
    }

    pub async fn get(&self, location: &Location) -> Result<Vec<Cached<R>>, LookupError> {
        self.get_at(location, now_millis()).await
    }

    /// Same as [`Self::get`] with the current time supplied by the caller.
    ///
    /// Only the first cached row is aged: a location's rows are written
    /// together and share one timestamp.
    pub async fn get_at(
        &self,
        location: &Location,
        now: i64,
    ) -> Result<Vec<Cached<R>>, LookupError> {
        let category = self.category;
        let cached = CategoryRepository::<R>::find_records(&self.store, location.id).await?;

        if let Some(first) = cached.first() {
            if !self.policy.is_stale(first.created_at, now) {
                debug!(%category, location_id = %location.id, rows = cached.len(), "Cache hit");
                record_lookup(category, "hit");
                return Ok(cached);
            }

            let removed = CategoryRepository::<R>::delete_records(&self.store, location.id).await?;
            info!(
                %category,
                location_id = %location.id,
                age_minutes = CachePolicy::age_minutes(first.created_at, now),
                removed,
                "Cached rows are stale, refreshing"
            );
            record_lookup(category, "stale");
        } else {
            debug!(%category, location_id = %location.id, "Cache miss");
            record_lookup(category, "miss");
        }

        self.fetch_and_store(location, now).await
    }

    async fn fetch_and_store(
        &self,
        location: &Location,
        now: i64,
    ) -> Result<Vec<Cached<R>>, LookupError> {
        let service = self.source.service();
        let fetched = self.source.fetch(location).await.map_err(|e| {
            warn!(category = %self.category, "{} fetch failed: {:#}", service, e);
            LookupError::provider(service, &e)
        })?;

        if fetched.is_empty() {
            warn!(
                category = %self.category,
                location_id = %location.id,
                "{} returned no results",
                service
            );
            return Err(LookupError::empty(service));
        }

        let records: Vec<Cached<R>> = fetched
            .into_iter()
            .map(|record| Cached::new(record, now, location.id))
            .collect();

        CategoryRepository::<R>::insert_records(&self.store, &records).await?;
        info!(
            category = %self.category,
            location_id = %location.id,
            rows = records.len(),
            "Stored fresh {} results",
            service
        );

        Ok(records)
    }
}
