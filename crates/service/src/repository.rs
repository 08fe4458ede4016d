use async_trait::async_trait;

use crate::errors::RepositoryError;

/// Persistence port shared by every resource: the find-all / find-by-id /
/// save / delete-by-id surface, parameterized over the entity and its key.
#[async_trait]
pub trait Repository<T, Id>: Send + Sync {
    /// Every stored entity, ordered by ascending id.
    async fn find_all(&self) -> Result<Vec<T>, RepositoryError>;
    async fn find_by_id(&self, id: Id) -> Result<Option<T>, RepositoryError>;
    /// Insert when the entity carries no id, assigning a fresh one;
    /// otherwise overwrite the record stored under that id.
    async fn save(&self, entity: T) -> Result<T, RepositoryError>;
    /// Idempotent; deleting an unknown id is a no-op.
    async fn delete_by_id(&self, id: Id) -> Result<(), RepositoryError>;
}

/// Simple in-memory repository for tests and doc examples
pub mod memory {
    use std::collections::BTreeMap;
    use std::sync::atomic::{AtomicI64, Ordering};
    use std::sync::Mutex;

    use super::*;
    use crate::domain::HasId;

    pub struct InMemoryRepository<T> {
        // BTreeMap iterates in ascending id order, which matches insertion
        // order for monotonically assigned ids.
        rows: Mutex<BTreeMap<i64, T>>,
        next_id: AtomicI64,
    }

    impl<T> Default for InMemoryRepository<T> {
        fn default() -> Self {
            Self {
                rows: Mutex::new(BTreeMap::new()),
                next_id: AtomicI64::new(1),
            }
        }
    }

    impl<T> InMemoryRepository<T> {
        pub fn new() -> Self {
            Self::default()
        }
    }

    #[async_trait]
    impl<T> Repository<T, i64> for InMemoryRepository<T>
    where
        T: HasId + Clone + Send + Sync,
    {
        async fn find_all(&self) -> Result<Vec<T>, RepositoryError> {
            let rows = self.rows.lock().unwrap();
            Ok(rows.values().cloned().collect())
        }

        async fn find_by_id(&self, id: i64) -> Result<Option<T>, RepositoryError> {
            let rows = self.rows.lock().unwrap();
            Ok(rows.get(&id).cloned())
        }

        async fn save(&self, entity: T) -> Result<T, RepositoryError> {
            let id = match entity.id() {
                Some(id) => {
                    // keep the counter ahead of any id stored explicitly,
                    // so assigned ids are never reused
                    self.next_id.fetch_max(id + 1, Ordering::SeqCst);
                    id
                }
                None => self.next_id.fetch_add(1, Ordering::SeqCst),
            };
            let stored = entity.with_id(id);
            self.rows.lock().unwrap().insert(id, stored.clone());
            Ok(stored)
        }

        async fn delete_by_id(&self, id: i64) -> Result<(), RepositoryError> {
            self.rows.lock().unwrap().remove(&id);
            Ok(())
        }
    }

}
