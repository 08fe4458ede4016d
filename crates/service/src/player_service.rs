use std::sync::Arc;

use tracing::{info, instrument};

use crate::domain::Player;
use crate::errors::ServiceError;
use crate::repository::Repository;

/// Player business service, the same shape as [`crate::UserService`]
pub struct PlayerService<R: Repository<Player, i64>> {
    repo: Arc<R>,
}

impl<R: Repository<Player, i64>> PlayerService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Every stored player, ordered by ascending id.
    pub async fn list(&self) -> Result<Vec<Player>, ServiceError> {
        Ok(self.repo.find_all().await?)
    }

    /// A single player, or the typed not-found failure.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use service::domain::Player;
    /// use service::repository::memory::InMemoryRepository;
    /// use service::PlayerService;
    /// let svc = PlayerService::new(Arc::new(InMemoryRepository::default()));
    /// let created = tokio_test::block_on(svc.create(Player::new("Jane", "Smith", "jane@example.com"))).unwrap();
    /// let found = tokio_test::block_on(svc.get(created.id.unwrap())).unwrap();
    /// assert_eq!(found.surname, "Smith");
    /// ```
    pub async fn get(&self, id: i64) -> Result<Player, ServiceError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("player", id))
    }

    /// Persist a new player. Any caller-supplied id is discarded; the store
    /// assigns the real one.
    #[instrument(skip(self, player))]
    pub async fn create(&self, player: Player) -> Result<Player, ServiceError> {
        let created = self.repo.save(Player { id: None, ..player }).await?;
        info!(id = ?created.id, "player_created");
        Ok(created)
    }

    /// Overwrite name, surname and email of an existing player. The
    /// identifier never changes; the patch's own id is ignored.
    #[instrument(skip(self, patch))]
    pub async fn update(&self, id: i64, patch: Player) -> Result<Player, ServiceError> {
        let existing = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("player", id))?;
        let updated = self.repo.save(existing.merge(patch)).await?;
        info!(id, "player_updated");
        Ok(updated)
    }

    /// Unconditional delete; an unknown id is a no-op.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> Result<(), ServiceError> {
        self.repo.delete_by_id(id).await?;
        info!(id, "player_deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repo::seaorm::SeaOrmPlayerRepository;
    use crate::repository::memory::InMemoryRepository;
    use crate::test_support::get_db;

    fn service() -> PlayerService<InMemoryRepository<Player>> {
        PlayerService::new(Arc::new(InMemoryRepository::new()))
    }

    #[tokio::test]
    async fn lifecycle_create_get_update_delete() {
        let svc = service();

        let created = svc
            .create(Player::new("Jane", "Smith", "jane@example.com"))
            .await
            .unwrap();
        let id = created.id.unwrap();
        assert_eq!(svc.get(id).await.unwrap(), created);

        let updated = svc
            .update(id, Player::new("Janet", "Smith", "janet.smith@example.com"))
            .await
            .unwrap();
        assert_eq!(updated.id, Some(id));
        assert_eq!(updated.name, "Janet");

        svc.delete(id).await.unwrap();
        assert!(matches!(svc.get(id).await, Err(ServiceError::NotFound { .. })));
    }

    #[tokio::test]
    async fn get_missing_is_not_found() {
        let svc = service();
        let err = svc.get(7).await.unwrap_err();
        assert_eq!(err.to_string(), "player with id 7 not found");
    }

    #[tokio::test]
    async fn update_missing_is_not_found() {
        let svc = service();
        let err = svc
            .update(7, Player::new("Janet", "Smith", "janet@example.com"))
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::NotFound { id: 7, .. }));
    }

    #[tokio::test]
    async fn delete_missing_succeeds() {
        let svc = service();
        svc.delete(7).await.unwrap();
    }

    #[tokio::test]
    async fn list_preserves_insertion_order() {
        let svc = service();
        for (name, surname, email) in [
            ("Jane", "Smith", "jane@example.com"),
            ("John", "Doe", "john@example.com"),
            ("Janet", "Jones", "janet@example.com"),
        ] {
            svc.create(Player::new(name, surname, email)).await.unwrap();
        }

        let all = svc.list().await.unwrap();
        let names: Vec<&str> = all.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Jane", "John", "Janet"]);
    }

    /// Same flows against the real store adapter.
    #[tokio::test]
    async fn lifecycle_against_sqlite() -> Result<(), anyhow::Error> {
        let svc = PlayerService::new(Arc::new(SeaOrmPlayerRepository { db: get_db().await? }));

        let created = svc.create(Player::new("Jane", "Smith", "jane@example.com")).await?;
        let id = created.id.expect("store should assign an id");

        let updated = svc
            .update(id, Player::new("Janet", "Smith", "janet@example.com"))
            .await?;
        assert_eq!(updated.id, Some(id));
        assert_eq!(svc.get(id).await?.email, "janet@example.com");

        svc.delete(id).await?;
        assert!(svc.list().await?.is_empty());
        Ok(())
    }
}
