use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, NotSet, QueryOrder, Set};

use crate::domain::{Player, User};
use crate::errors::RepositoryError;
use crate::repository::Repository;

impl From<models::user::Model> for User {
    fn from(row: models::user::Model) -> Self {
        User {
            id: Some(row.id),
            name: row.name,
            surname: row.surname,
            email: row.email,
        }
    }
}

impl From<models::player::Model> for Player {
    fn from(row: models::player::Model) -> Self {
        Player {
            id: Some(row.id),
            name: row.name,
            surname: row.surname,
            email: row.email,
        }
    }
}

fn user_active_model(user: User) -> models::user::ActiveModel {
    models::user::ActiveModel {
        id: user.id.map_or(NotSet, Set),
        name: Set(user.name),
        surname: Set(user.surname),
        email: Set(user.email),
    }
}

fn player_active_model(player: Player) -> models::player::ActiveModel {
    models::player::ActiveModel {
        id: player.id.map_or(NotSet, Set),
        name: Set(player.name),
        surname: Set(player.surname),
        email: Set(player.email),
    }
}

pub struct SeaOrmUserRepository {
    pub db: DatabaseConnection,
}

#[async_trait::async_trait]
impl Repository<User, i64> for SeaOrmUserRepository {
    async fn find_all(&self) -> Result<Vec<User>, RepositoryError> {
        let rows = models::user::Entity::find()
            .order_by_asc(models::user::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| RepositoryError::Db(e.to_string()))?;
        Ok(rows.into_iter().map(User::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, RepositoryError> {
        let row = models::user::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| RepositoryError::Db(e.to_string()))?;
        Ok(row.map(User::from))
    }

    async fn save(&self, user: User) -> Result<User, RepositoryError> {
        let is_update = user.id.is_some();
        let am = user_active_model(user);
        let row = if is_update {
            am.update(&self.db).await
        } else {
            am.insert(&self.db).await
        }
        .map_err(|e| RepositoryError::Db(e.to_string()))?;
        Ok(User::from(row))
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), RepositoryError> {
        models::user::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| RepositoryError::Db(e.to_string()))?;
        Ok(())
    }
}

pub struct SeaOrmPlayerRepository {
    pub db: DatabaseConnection,
}

#[async_trait::async_trait]
impl Repository<Player, i64> for SeaOrmPlayerRepository {
    async fn find_all(&self) -> Result<Vec<Player>, RepositoryError> {
        let rows = models::player::Entity::find()
            .order_by_asc(models::player::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| RepositoryError::Db(e.to_string()))?;
        Ok(rows.into_iter().map(Player::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Player>, RepositoryError> {
        let row = models::player::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| RepositoryError::Db(e.to_string()))?;
        Ok(row.map(Player::from))
    }

    async fn save(&self, player: Player) -> Result<Player, RepositoryError> {
        let is_update = player.id.is_some();
        let am = player_active_model(player);
        let row = if is_update {
            am.update(&self.db).await
        } else {
            am.insert(&self.db).await
        }
        .map_err(|e| RepositoryError::Db(e.to_string()))?;
        Ok(Player::from(row))
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), RepositoryError> {
        models::player::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| RepositoryError::Db(e.to_string()))?;
        Ok(())
    }
}
