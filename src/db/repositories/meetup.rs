use super::INSERT_BATCH_SIZE;
use crate::domain::LocationId;
use crate::entities::{meetups, prelude::*};
use crate::models::{Cached, Meetup};
use anyhow::Result;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set};

pub struct MeetupRepository {
    conn: DatabaseConnection,
}

impl MeetupRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    fn map_model(m: meetups::Model) -> Cached<Meetup> {
        Cached::new(
            Meetup {
                link: m.link,
                name: m.name,
                creation_date: m.creation_date,
                host: m.host,
            },
            m.created_at,
            LocationId::new(m.location_id),
        )
    }

    pub async fn find_by_location(&self, location_id: LocationId) -> Result<Vec<Cached<Meetup>>> {
        let rows = Meetups::find()
            .filter(meetups::Column::LocationId.eq(location_id.value()))
            .order_by_asc(meetups::Column::Id)
            .all(&self.conn)
            .await?;
        Ok(rows.into_iter().map(Self::map_model).collect())
    }

    pub async fn delete_by_location(&self, location_id: LocationId) -> Result<u64> {
        let res = Meetups::delete_many()
            .filter(meetups::Column::LocationId.eq(location_id.value()))
            .exec(&self.conn)
            .await?;
        Ok(res.rows_affected)
    }

    pub async fn insert_many(&self, records: &[Cached<Meetup>]) -> Result<()> {
        for chunk in records.chunks(INSERT_BATCH_SIZE) {
            let models = chunk.iter().map(|c| meetups::ActiveModel {
                link: Set(c.record.link.clone()),
                name: Set(c.record.name.clone()),
                creation_date: Set(c.record.creation_date.clone()),
                host: Set(c.record.host.clone()),
                created_at: Set(c.created_at),
                location_id: Set(c.location_id.value()),
                ..Default::default()
            });
            Meetups::insert_many(models).exec(&self.conn).await?;
        }
        Ok(())
    }
}
