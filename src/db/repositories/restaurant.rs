use super::INSERT_BATCH_SIZE;
use crate::domain::LocationId;
use crate::entities::{prelude::*, restaurants};
use crate::models::{Cached, Restaurant};
use anyhow::Result;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set};

pub struct RestaurantRepository {
    conn: DatabaseConnection,
}

impl RestaurantRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    fn map_model(m: restaurants::Model) -> Cached<Restaurant> {
        Cached::new(
            Restaurant {
                name: m.name,
                image_url: m.image_url,
                price: m.price,
                rating: m.rating,
                url: m.url,
            },
            m.created_at,
            LocationId::new(m.location_id),
        )
    }

    pub async fn find_by_location(
        &self,
        location_id: LocationId,
    ) -> Result<Vec<Cached<Restaurant>>> {
        let rows = Restaurants::find()
            .filter(restaurants::Column::LocationId.eq(location_id.value()))
            .order_by_asc(restaurants::Column::Id)
            .all(&self.conn)
            .await?;
        Ok(rows.into_iter().map(Self::map_model).collect())
    }

    pub async fn delete_by_location(&self, location_id: LocationId) -> Result<u64> {
        let res = Restaurants::delete_many()
            .filter(restaurants::Column::LocationId.eq(location_id.value()))
            .exec(&self.conn)
            .await?;
        Ok(res.rows_affected)
    }

    pub async fn insert_many(&self, records: &[Cached<Restaurant>]) -> Result<()> {
        for chunk in records.chunks(INSERT_BATCH_SIZE) {
            let models = chunk.iter().map(|c| restaurants::ActiveModel {
                name: Set(c.record.name.clone()),
                image_url: Set(c.record.image_url.clone()),
                price: Set(c.record.price.clone()),
                rating: Set(c.record.rating),
                url: Set(c.record.url.clone()),
                created_at: Set(c.created_at),
                location_id: Set(c.location_id.value()),
                ..Default::default()
            });
            Restaurants::insert_many(models).exec(&self.conn).await?;
        }
        Ok(())
    }
}
