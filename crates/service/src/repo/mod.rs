//! Concrete implementations of the repository port.

pub mod seaorm;
