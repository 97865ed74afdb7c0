use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Blog: listing is newest-first
        manager
            .create_index(
                Index::create()
                    .name("idx_blog_created_at")
                    .table(Blog::Table)
                    .col(Blog::CreatedAt)
                    .to_owned(),
            )
            .await?;

        // BlogTag: reverse lookup for tag filtering
        manager
            .create_index(
                Index::create()
                    .name("idx_blog_tag_tag")
                    .table(BlogTag::Table)
                    .col(BlogTag::TagId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_blog_created_at").table(Blog::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_blog_tag_tag").table(BlogTag::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Blog { Table, CreatedAt }

#[derive(DeriveIden)]
enum BlogTag { Table, TagId }
