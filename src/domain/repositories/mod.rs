//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; the PostgreSQL implementation
//! lives in `crate::infrastructure::persistence`. Mock implementations are
//! generated via `mockall` for unit tests.
//!
//! # Testing
//!
//! See integration tests in `tests/repository_course.rs` for usage examples.

pub mod course_repository;
pub mod errors;

pub use course_repository::{CourseFilters, CourseRepository};
pub use errors::{RepositoryError, RepositoryResult};

#[cfg(test)]
pub use course_repository::MockCourseRepository;
