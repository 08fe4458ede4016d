use thiserror::Error;

/// Failure surfaced by a persistence adapter. Backend error types are folded
/// into this one so callers never see ORM details.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("database error: {0}")]
    Db(String),
}

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: i64 },
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl ServiceError {
    pub fn not_found(entity: &'static str, id: i64) -> Self {
        Self::NotFound { entity, id }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_names_entity_and_id() {
        let err = ServiceError::not_found("player", 42);
        assert_eq!(err.to_string(), "player with id 42 not found");
    }

    #[test]
    fn repository_errors_pass_through_unchanged() {
        let err = ServiceError::from(RepositoryError::Db("connection refused".into()));
        assert_eq!(err.to_string(), "database error: connection refused");
    }
}
