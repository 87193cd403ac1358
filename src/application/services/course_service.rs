//! Course management service.

use chrono::NaiveDate;
use std::sync::Arc;
use uuid::Uuid;

use crate::application::services::error::{CourseAction, ServiceError};
use crate::domain::entities::{Course, CoursePatch, NewCourse};
use crate::domain::repositories::{CourseFilters, CourseRepository, RepositoryError};

/// Calendar date format accepted for `start_date` / `end_date`.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Service owning the course business rules.
///
/// - Dates are parsed with [`DATE_FORMAT`]
/// - `start_date <= end_date` holds after every create and update
/// - Repository not-found errors are passed through, everything else is
///   wrapped with the failing operation
///
/// There is no optimistic locking: concurrent updates of the same course are
/// last-write-wins per column.
pub struct CourseService<R: CourseRepository> {
    repository: Arc<R>,
}

impl<R: CourseRepository> CourseService<R> {
    /// Creates a new course service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Creates a course from raw date strings.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::InvalidStartDate`] / [`ServiceError::InvalidEndDate`]
    /// if a date does not parse, and [`ServiceError::StartDateAfterEndDate`] if the
    /// range is inverted. Nothing is written in either case.
    /// Returns [`ServiceError::Failed`] on storage errors.
    pub async fn create(
        &self,
        name: String,
        start_date: &str,
        end_date: &str,
    ) -> Result<Course, ServiceError> {
        tracing::info!(name = %name, "creating course");

        let start_date = parse_start_date(start_date)?;
        let end_date = parse_end_date(end_date)?;

        if start_date > end_date {
            tracing::warn!(%start_date, %end_date, "start date is after end date");
            return Err(ServiceError::StartDateAfterEndDate);
        }

        let new_course = NewCourse {
            id: Uuid::new_v4().to_string(),
            name,
            start_date,
            end_date,
        };

        self.repository
            .create(new_course)
            .await
            .map_err(|e| fail(CourseAction::Create, e))
    }

    /// Retrieves a course by id.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::NotFound`] if the course does not exist.
    pub async fn get(&self, id: &str) -> Result<Course, ServiceError> {
        self.repository
            .get(id)
            .await
            .map_err(|e| fail(CourseAction::Get, e))
    }

    /// Lists one page of courses matching `filters`, newest first.
    pub async fn get_all(
        &self,
        filters: CourseFilters,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<Course>, ServiceError> {
        tracing::info!(name = %filters.name, offset, limit, "listing courses");

        self.repository
            .get_all(filters, offset, limit)
            .await
            .map_err(|e| fail(CourseAction::GetAll, e))
    }

    /// Counts courses matching `filters`.
    pub async fn count(&self, filters: CourseFilters) -> Result<i64, ServiceError> {
        self.repository
            .count(filters)
            .await
            .map_err(|e| fail(CourseAction::Count, e))
    }

    /// Partially updates a course.
    ///
    /// Only the supplied fields change. When a single date is supplied the other
    /// one is read from the stored course, and the resulting pair must still be
    /// ordered.
    ///
    /// # Errors
    ///
    /// - [`ServiceError::InvalidStartDate`] / [`ServiceError::InvalidEndDate`] on parse failure
    /// - [`ServiceError::EndDateBeforeStartDate`] if a new end date precedes the effective start
    /// - [`ServiceError::StartDateAfterEndDate`] if a new start date follows the effective end
    /// - [`ServiceError::NotFound`] if the course does not exist
    pub async fn update(
        &self,
        id: &str,
        name: Option<String>,
        start_date: Option<&str>,
        end_date: Option<&str>,
    ) -> Result<(), ServiceError> {
        tracing::info!(course_id = %id, "updating course");

        let start_date = start_date.map(parse_start_date).transpose()?;
        let end_date = end_date.map(parse_end_date).transpose()?;

        if start_date.is_some() || end_date.is_some() {
            let (effective_start, effective_end) = match (start_date, end_date) {
                (Some(start), Some(end)) => (start, end),
                _ => {
                    let current = self.get(id).await?;
                    (
                        start_date.unwrap_or(current.start_date),
                        end_date.unwrap_or(current.end_date),
                    )
                }
            };

            check_effective_range(effective_start, effective_end, end_date.is_some())?;
        }

        let patch = CoursePatch {
            name,
            start_date,
            end_date,
        };

        self.repository
            .update(id, patch)
            .await
            .map_err(|e| fail(CourseAction::Update, e))
    }

    /// Deletes a course.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::NotFound`] if the course does not exist.
    pub async fn delete(&self, id: &str) -> Result<(), ServiceError> {
        tracing::info!(course_id = %id, "deleting course");

        self.repository
            .delete(id)
            .await
            .map_err(|e| fail(CourseAction::Delete, e))
    }
}

fn fail(action: CourseAction, err: RepositoryError) -> ServiceError {
    if err.is_not_found() {
        tracing::debug!(error = %err, "{action}");
    } else {
        tracing::error!(error = %err, "failed to {action}");
    }
    ServiceError::from_repository(action, err)
}

fn parse_start_date(raw: &str) -> Result<NaiveDate, ServiceError> {
    NaiveDate::parse_from_str(raw, DATE_FORMAT).map_err(|e| {
        tracing::warn!(error = %e, raw, "invalid start date");
        ServiceError::InvalidStartDate(e)
    })
}

fn parse_end_date(raw: &str) -> Result<NaiveDate, ServiceError> {
    NaiveDate::parse_from_str(raw, DATE_FORMAT).map_err(|e| {
        tracing::warn!(error = %e, raw, "invalid end date");
        ServiceError::InvalidEndDate(e)
    })
}

/// Validates the date pair a partial update would leave behind.
///
/// A supplied end date earlier than the start reports end-before-start;
/// otherwise an inverted range reports start-after-end.
fn check_effective_range(
    start: NaiveDate,
    end: NaiveDate,
    end_supplied: bool,
) -> Result<(), ServiceError> {
    if end_supplied && end < start {
        tracing::warn!(%start, %end, "end date is before start date");
        return Err(ServiceError::EndDateBeforeStartDate);
    }
    if start > end {
        tracing::warn!(%start, %end, "start date is after end date");
        return Err(ServiceError::StartDateAfterEndDate);
    }
    Ok(())
}
