//! Migrator registering the blog schema in dependency order.
//! Indexes are applied last.
pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_blog;
mod m20240101_000002_create_tag;
mod m20240101_000003_create_blog_tag;
mod m20240101_000004_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_blog::Migration),
            Box::new(m20240101_000002_create_tag::Migration),
            Box::new(m20240101_000003_create_blog_tag::Migration),
            // Indexes should always be applied last
            Box::new(m20240101_000004_add_indexes::Migration),
        ]
    }
}
