//! Create `blog_tag` join table.
//! Composite primary key; rows go away with either parent.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BlogTag::Table)
                    .if_not_exists()
                    .col(uuid(BlogTag::BlogId).not_null())
                    .col(uuid(BlogTag::TagId).not_null())
                    .col(timestamp_with_time_zone(BlogTag::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(BlogTag::UpdatedAt).not_null())
                    .primary_key(
                        Index::create()
                            .name("pk_blog_tag")
                            .col(BlogTag::BlogId)
                            .col(BlogTag::TagId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_blog_tag_blog")
                            .from(BlogTag::Table, BlogTag::BlogId)
                            .to(Blog::Table, Blog::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_blog_tag_tag")
                            .from(BlogTag::Table, BlogTag::TagId)
                            .to(Tag::Table, Tag::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(BlogTag::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum BlogTag { Table, BlogId, TagId, CreatedAt, UpdatedAt }

#[derive(DeriveIden)]
enum Blog { Table, Id }

#[derive(DeriveIden)]
enum Tag { Table, Id }
