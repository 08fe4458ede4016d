use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, Schema};

use crate::{player, user};

/// Create any missing tables from the entity definitions. Existing tables
/// are left untouched.
pub async fn ensure_schema(db: &DatabaseConnection) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);
    for mut stmt in [
        schema.create_table_from_entity(user::Entity),
        schema.create_table_from_entity(player::Entity),
    ] {
        stmt.if_not_exists();
        db.execute(backend.build(&stmt)).await?;
    }
    Ok(())
}
