//! Repository trait for course persistence.

use crate::domain::entities::{Course, CoursePatch, NewCourse};
use crate::domain::repositories::errors::RepositoryResult;
use async_trait::async_trait;

/// Narrowing criteria for list and count queries.
///
/// An empty name means "no filter". Whitespace is matched as given.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CourseFilters {
    pub name: String,
}

impl CourseFilters {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Returns the lower-cased `LIKE` pattern for a substring match on `name`.
    ///
    /// `%`, `_` and `\` in the input are escaped so they match literally.
    pub fn name_pattern(&self) -> Option<String> {
        let needle = self.name.as_str();
        if needle.is_empty() {
            return None;
        }

        let mut pattern = String::with_capacity(needle.len() + 2);
        pattern.push('%');
        for c in needle.to_lowercase().chars() {
            if matches!(c, '%' | '_' | '\\') {
                pattern.push('\\');
            }
            pattern.push(c);
        }
        pattern.push('%');

        Some(pattern)
    }
}

/// Repository interface for the `courses` table.
///
/// Implementations are the only code that reads or writes course rows.
/// `get`, `update` and `delete` report [`RepositoryError::NotFound`] carrying the
/// requested id when no row matches; all other store failures are
/// [`RepositoryError::Database`].
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgCourseRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// [`RepositoryError::NotFound`]: crate::domain::repositories::RepositoryError::NotFound
/// [`RepositoryError::Database`]: crate::domain::repositories::RepositoryError::Database
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CourseRepository: Send + Sync {
    /// Inserts a course and returns the stored row.
    async fn create(&self, new_course: NewCourse) -> RepositoryResult<Course>;

    /// Finds a course by id.
    async fn get(&self, id: &str) -> RepositoryResult<Course>;

    /// Lists courses matching `filters`, newest first.
    ///
    /// Ordering is `created_at DESC` so consecutive pages stay stable while the
    /// underlying data does not change.
    async fn get_all(
        &self,
        filters: CourseFilters,
        offset: i64,
        limit: i64,
    ) -> RepositoryResult<Vec<Course>>;

    /// Counts courses matching `filters`.
    async fn count(&self, filters: CourseFilters) -> RepositoryResult<i64>;

    /// Applies a sparse update. Only `Some` fields of the patch are written.
    async fn update(&self, id: &str, patch: CoursePatch) -> RepositoryResult<()>;

    /// Deletes a course.
    async fn delete(&self, id: &str) -> RepositoryResult<()>;

    /// Round-trips the store. Used by the health check.
    async fn ping(&self) -> RepositoryResult<()>;
}
