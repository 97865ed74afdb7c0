//! Create `tag` table.
//!
//! `tag_description` is the natural key used to reuse tags across blogs.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Tag::Table)
                    .if_not_exists()
                    .col(uuid(Tag::Id).primary_key())
                    .col(text(Tag::TagDescription).unique_key().not_null())
                    .col(timestamp_with_time_zone(Tag::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Tag::UpdatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Tag::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Tag { Table, Id, TagDescription, CreatedAt, UpdatedAt }
