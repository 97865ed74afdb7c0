#![cfg(test)]
use sea_orm::DatabaseConnection;

/// Private in-memory SQLite database with migrations applied.
/// Every call returns an isolated database, so tests never see each other's rows.
pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    models::db::connect_in_memory().await
}
