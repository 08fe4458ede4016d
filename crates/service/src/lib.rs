//! Service layer providing resource-oriented CRUD operations on top of a
//! persistence port.
//! - Keeps orchestration out of both the HTTP boundary and the ORM adapters.
//! - One service per resource, all sharing the same repository abstraction.
//! - Surfaces a typed error for the single domain failure, a missing record.

pub mod domain;
pub mod errors;
pub mod repo;
pub mod repository;
pub mod player_service;
pub mod user_service;
#[cfg(test)]
pub mod test_support;

pub use player_service::PlayerService;
pub use user_service::UserService;
