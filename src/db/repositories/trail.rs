use super::INSERT_BATCH_SIZE;
use crate::domain::LocationId;
use crate::entities::{prelude::*, trails};
use crate::models::{Cached, Trail};
use anyhow::Result;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set};

pub struct TrailRepository {
    conn: DatabaseConnection,
}

impl TrailRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    fn map_model(m: trails::Model) -> Cached<Trail> {
        Cached::new(
            Trail {
                name: m.name,
                location: m.location,
                length: m.length,
                stars: m.stars,
                star_votes: m.star_votes,
                summary: m.summary,
                trail_url: m.trail_url,
                conditions: m.conditions,
                condition_date: m.condition_date,
                condition_time: m.condition_time,
            },
            m.created_at,
            LocationId::new(m.location_id),
        )
    }

    pub async fn find_by_location(&self, location_id: LocationId) -> Result<Vec<Cached<Trail>>> {
        let rows = Trails::find()
            .filter(trails::Column::LocationId.eq(location_id.value()))
            .order_by_asc(trails::Column::Id)
            .all(&self.conn)
            .await?;
        Ok(rows.into_iter().map(Self::map_model).collect())
    }

    pub async fn delete_by_location(&self, location_id: LocationId) -> Result<u64> {
        let res = Trails::delete_many()
            .filter(trails::Column::LocationId.eq(location_id.value()))
            .exec(&self.conn)
            .await?;
        Ok(res.rows_affected)
    }

    pub async fn insert_many(&self, records: &[Cached<Trail>]) -> Result<()> {
        for chunk in records.chunks(INSERT_BATCH_SIZE) {
            let models = chunk.iter().map(|c| trails::ActiveModel {
                name: Set(c.record.name.clone()),
                location: Set(c.record.location.clone()),
                length: Set(c.record.length),
                stars: Set(c.record.stars),
                star_votes: Set(c.record.star_votes),
                summary: Set(c.record.summary.clone()),
                trail_url: Set(c.record.trail_url.clone()),
                conditions: Set(c.record.conditions.clone()),
                condition_date: Set(c.record.condition_date.clone()),
                condition_time: Set(c.record.condition_time.clone()),
                created_at: Set(c.created_at),
                location_id: Set(c.location_id.value()),
                ..Default::default()
            });
            Trails::insert_many(models).exec(&self.conn).await?;
        }
        Ok(())
    }
}
