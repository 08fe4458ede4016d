#![cfg(test)]
use configs::DatabaseConfig;
use sea_orm::DatabaseConnection;

/// Fresh in-memory sqlite database with the schema applied. The pool is
/// pinned to a single connection because an in-memory sqlite database lives
/// and dies with its connection.
pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    let cfg = DatabaseConfig {
        url: "sqlite::memory:".into(),
        max_connections: 1,
        min_connections: 1,
        ..Default::default()
    };
    let db = models::db::connect(&cfg).await?;
    models::schema::ensure_schema(&db).await?;
    Ok(db)
}
