use super::INSERT_BATCH_SIZE;
use crate::domain::LocationId;
use crate::entities::{prelude::*, weathers};
use crate::models::{Cached, Weather};
use anyhow::Result;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set};

pub struct WeatherRepository {
    conn: DatabaseConnection,
}

impl WeatherRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    fn map_model(m: weathers::Model) -> Cached<Weather> {
        Cached::new(
            Weather {
                forecast: m.forecast,
                time: m.time,
            },
            m.created_at,
            LocationId::new(m.location_id),
        )
    }

    pub async fn find_by_location(&self, location_id: LocationId) -> Result<Vec<Cached<Weather>>> {
        let rows = Weathers::find()
            .filter(weathers::Column::LocationId.eq(location_id.value()))
            .order_by_asc(weathers::Column::Id)
            .all(&self.conn)
            .await?;
        Ok(rows.into_iter().map(Self::map_model).collect())
    }

    pub async fn delete_by_location(&self, location_id: LocationId) -> Result<u64> {
        let res = Weathers::delete_many()
            .filter(weathers::Column::LocationId.eq(location_id.value()))
            .exec(&self.conn)
            .await?;
        Ok(res.rows_affected)
    }

    pub async fn insert_many(&self, records: &[Cached<Weather>]) -> Result<()> {
        for chunk in records.chunks(INSERT_BATCH_SIZE) {
            let models = chunk.iter().map(|c| weathers::ActiveModel {
                forecast: Set(c.record.forecast.clone()),
                time: Set(c.record.time.clone()),
                created_at: Set(c.created_at),
                location_id: Set(c.location_id.value()),
                ..Default::default()
            });
            Weathers::insert_many(models).exec(&self.conn).await?;
        }
        Ok(())
    }
}
