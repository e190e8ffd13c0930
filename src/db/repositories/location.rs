use crate::domain::LocationId;
use crate::entities::{locations, prelude::*};
use crate::models::{Location, NewLocation};
use anyhow::Result;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set};
use tracing::info;

pub struct LocationRepository {
    conn: DatabaseConnection,
}

impl LocationRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    fn map_model(m: locations::Model) -> Location {
        Location {
            id: LocationId::new(m.id),
            search_query: m.search_query,
            formatted_query: m.formatted_query,
            latitude: m.latitude,
            longitude: m.longitude,
            created_at: m.created_at,
        }
    }

    pub async fn find_by_query(&self, query: &str) -> Result<Option<Location>> {
        let row = Locations::find()
            .filter(locations::Column::SearchQuery.eq(query))
            .order_by_asc(locations::Column::Id)
            .one(&self.conn)
            .await?;
        Ok(row.map(Self::map_model))
    }

    pub async fn get(&self, id: LocationId) -> Result<Option<Location>> {
        let row = Locations::find_by_id(id.value()).one(&self.conn).await?;
        Ok(row.map(Self::map_model))
    }

    pub async fn insert(&self, location: &NewLocation) -> Result<LocationId> {
        let active_model = locations::ActiveModel {
            search_query: Set(location.search_query.clone()),
            formatted_query: Set(location.formatted_query.clone()),
            latitude: Set(location.latitude),
            longitude: Set(location.longitude),
            created_at: Set(location.created_at),
            ..Default::default()
        };

        let res = Locations::insert(active_model).exec(&self.conn).await?;
        info!(
            location_id = res.last_insert_id,
            search_query = %location.search_query,
            "Saved location"
        );
        Ok(LocationId::new(res.last_insert_id))
    }
}
