use std::sync::Arc;

use tracing::{info, instrument};

use crate::domain::User;
use crate::errors::ServiceError;
use crate::repository::Repository;

/// User business service independent of web framework and store backend
pub struct UserService<R: Repository<User, i64>> {
    repo: Arc<R>,
}

impl<R: Repository<User, i64>> UserService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Every stored user, ordered by ascending id.
    pub async fn list(&self) -> Result<Vec<User>, ServiceError> {
        Ok(self.repo.find_all().await?)
    }

    /// A single user, or the typed not-found failure.
    pub async fn get(&self, id: i64) -> Result<User, ServiceError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("user", id))
    }

    /// Persist a new user. Any caller-supplied id is discarded; the store
    /// assigns the real one.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use service::domain::User;
    /// use service::repository::memory::InMemoryRepository;
    /// use service::UserService;
    /// let svc = UserService::new(Arc::new(InMemoryRepository::default()));
    /// let created = tokio_test::block_on(svc.create(User::new("John", "Doe", "john@example.com"))).unwrap();
    /// assert_eq!(created.id, Some(1));
    /// ```
    #[instrument(skip(self, user))]
    pub async fn create(&self, user: User) -> Result<User, ServiceError> {
        let created = self.repo.save(User { id: None, ..user }).await?;
        info!(id = ?created.id, "user_created");
        Ok(created)
    }

    /// Overwrite name, surname and email of an existing user. The identifier
    /// never changes; the patch's own id is ignored.
    #[instrument(skip(self, patch))]
    pub async fn update(&self, id: i64, patch: User) -> Result<User, ServiceError> {
        let existing = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("user", id))?;
        let updated = self.repo.save(existing.merge(patch)).await?;
        info!(id, "user_updated");
        Ok(updated)
    }

    /// Unconditional delete; an unknown id is a no-op.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> Result<(), ServiceError> {
        self.repo.delete_by_id(id).await?;
        info!(id, "user_deleted");
        Ok(())
    }
}
