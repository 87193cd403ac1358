//! Error type shared by repository implementations.

use thiserror::Error;

/// Failure reported by a [`super::CourseRepository`].
///
/// `NotFound` is raised when the store matched zero rows for the requested id;
/// every other store failure is carried as `Database`.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("course with ID {id} not found")]
    NotFound { id: String },

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl RepositoryError {
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound { id: id.into() }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;
