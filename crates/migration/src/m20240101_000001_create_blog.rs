//! Create `blog` table.
//!
//! The slug is the external lookup key and must be unique.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Blog::Table)
                    .if_not_exists()
                    .col(uuid(Blog::Id).primary_key())
                    .col(text(Blog::Slug).unique_key().not_null())
                    .col(text(Blog::Title).not_null())
                    .col(text(Blog::Description).not_null())
                    .col(text(Blog::Body).not_null())
                    .col(timestamp_with_time_zone(Blog::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Blog::UpdatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Blog::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Blog { Table, Id, Slug, Title, Description, Body, CreatedAt, UpdatedAt }
