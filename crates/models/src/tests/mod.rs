/// CRUD round-trips against an in-memory sqlite database
pub mod crud_tests;
