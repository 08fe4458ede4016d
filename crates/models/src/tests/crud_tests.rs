use anyhow::Result;
use configs::DatabaseConfig;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, NotSet, Set};

use crate::{db, player, schema, user};

/// Fresh in-memory sqlite with the schema applied. The pool is pinned to a
/// single connection because an in-memory sqlite database lives and dies
/// with its connection.
async fn setup_test_db() -> Result<DatabaseConnection> {
    let cfg = DatabaseConfig {
        url: "sqlite::memory:".into(),
        max_connections: 1,
        min_connections: 1,
        ..Default::default()
    };
    let db = db::connect(&cfg).await?;
    schema::ensure_schema(&db).await?;
    Ok(db)
}

#[tokio::test]
async fn user_row_roundtrip() -> Result<()> {
    let db = setup_test_db().await?;

    let created = user::ActiveModel {
        id: NotSet,
        name: Set("John".into()),
        surname: Set("Doe".into()),
        email: Set("john@example.com".into()),
    }
    .insert(&db)
    .await?;
    assert!(created.id >= 1);

    let found = user::Entity::find_by_id(created.id)
        .one(&db)
        .await?
        .expect("inserted row should be findable");
    assert_eq!(found.name, "John");
    assert_eq!(found.surname, "Doe");
    assert_eq!(found.email, "john@example.com");

    user::Entity::delete_by_id(created.id).exec(&db).await?;
    assert!(user::Entity::find_by_id(created.id).one(&db).await?.is_none());
    Ok(())
}

#[tokio::test]
async fn player_row_roundtrip() -> Result<()> {
    let db = setup_test_db().await?;

    let created = player::ActiveModel {
        id: NotSet,
        name: Set("Jane".into()),
        surname: Set("Smith".into()),
        email: Set("jane@example.com".into()),
    }
    .insert(&db)
    .await?;

    let found = player::Entity::find_by_id(created.id)
        .one(&db)
        .await?
        .expect("inserted row should be findable");
    assert_eq!(found, created);
    Ok(())
}

#[tokio::test]
async fn user_ids_are_not_reused_after_delete() -> Result<()> {
    let db = setup_test_db().await?;

    let first = user::ActiveModel {
        id: NotSet,
        name: Set("John".into()),
        surname: Set("Doe".into()),
        email: Set("john@example.com".into()),
    }
    .insert(&db)
    .await?;
    user::Entity::delete_by_id(first.id).exec(&db).await?;

    let second = user::ActiveModel {
        id: NotSet,
        name: Set("Jane".into()),
        surname: Set("Smith".into()),
        email: Set("jane@example.com".into()),
    }
    .insert(&db)
    .await?;
    assert!(second.id > first.id);
    Ok(())
}

#[tokio::test]
async fn ensure_schema_is_idempotent() -> Result<()> {
    let db = setup_test_db().await?;
    schema::ensure_schema(&db).await?;

    let created = player::ActiveModel {
        id: NotSet,
        name: Set("Jane".into()),
        surname: Set("Smith".into()),
        email: Set("jane@example.com".into()),
    }
    .insert(&db)
    .await?;
    assert!(created.id >= 1);
    Ok(())
}
