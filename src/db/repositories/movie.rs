use super::INSERT_BATCH_SIZE;
use crate::domain::LocationId;
use crate::entities::{movies, prelude::*};
use crate::models::{Cached, Movie};
use anyhow::Result;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set};

pub struct MovieRepository {
    conn: DatabaseConnection,
}

impl MovieRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    fn map_model(m: movies::Model) -> Cached<Movie> {
        Cached::new(
            Movie {
                title: m.title,
                overview: m.overview,
                average_votes: m.average_votes,
                total_votes: m.total_votes,
                image_url: m.image_url,
                popularity: m.popularity,
                released_on: m.released_on,
            },
            m.created_at,
            LocationId::new(m.location_id),
        )
    }

    pub async fn find_by_location(&self, location_id: LocationId) -> Result<Vec<Cached<Movie>>> {
        let rows = Movies::find()
            .filter(movies::Column::LocationId.eq(location_id.value()))
            .order_by_asc(movies::Column::Id)
            .all(&self.conn)
            .await?;
        Ok(rows.into_iter().map(Self::map_model).collect())
    }

    pub async fn delete_by_location(&self, location_id: LocationId) -> Result<u64> {
        let res = Movies::delete_many()
            .filter(movies::Column::LocationId.eq(location_id.value()))
            .exec(&self.conn)
            .await?;
        Ok(res.rows_affected)
    }

    pub async fn insert_many(&self, records: &[Cached<Movie>]) -> Result<()> {
        for chunk in records.chunks(INSERT_BATCH_SIZE) {
            let models = chunk.iter().map(|c| movies::ActiveModel {
                title: Set(c.record.title.clone()),
                overview: Set(c.record.overview.clone()),
                average_votes: Set(c.record.average_votes),
                total_votes: Set(c.record.total_votes),
                image_url: Set(c.record.image_url.clone()),
                popularity: Set(c.record.popularity),
                released_on: Set(c.record.released_on.clone()),
                created_at: Set(c.created_at),
                location_id: Set(c.location_id.value()),
                ..Default::default()
            });
            Movies::insert_many(models).exec(&self.conn).await?;
        }
        Ok(())
    }
}
