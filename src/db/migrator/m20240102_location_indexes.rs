use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Category tables are always read and purged by `location_id`, and locations
/// are looked up by their raw search query.
const CATEGORY_TABLES: [&str; 5] = ["weathers", "restaurants", "movies", "meetups", "trails"];

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_index(
                Index::create()
                    .name("idx_locations_search_query")
                    .table(Locations::Table)
                    .col(Locations::SearchQuery)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        for table in CATEGORY_TABLES {
            manager
                .create_index(
                    Index::create()
                        .name(format!("idx_{table}_location_id"))
                        .table(Alias::new(table))
                        .col(Alias::new("location_id"))
                        .if_not_exists()
                        .to_owned(),
                )
                .await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for table in CATEGORY_TABLES {
            manager
                .drop_index(
                    Index::drop()
                        .name(format!("idx_{table}_location_id"))
                        .table(Alias::new(table))
                        .to_owned(),
                )
                .await?;
        }

        manager
            .drop_index(
                Index::drop()
                    .name("idx_locations_search_query")
                    .table(Locations::Table)
                    .to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
enum Locations {
    Table,
    SearchQuery,
}
