//! Errors produced by the course service.

use std::fmt;
use thiserror::Error;

use crate::domain::repositories::RepositoryError;

/// Service operation used to tag wrapped storage failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CourseAction {
    Create,
    Get,
    GetAll,
    Update,
    Delete,
    Count,
}

impl fmt::Display for CourseAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CourseAction::Create => "create course",
            CourseAction::Get => "get course",
            CourseAction::GetAll => "get all courses",
            CourseAction::Update => "update course",
            CourseAction::Delete => "delete course",
            CourseAction::Count => "count courses",
        };
        f.write_str(s)
    }
}

/// Failure returned by [`super::CourseService`].
///
/// `NotFound` is passed through from the repository as-is. Any other storage
/// failure is wrapped in `Failed`, whose [`std::error::Error::source`] is the
/// original [`RepositoryError`].
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("course with ID {id} not found")]
    NotFound { id: String },

    #[error("invalid start date format: {0}")]
    InvalidStartDate(#[source] chrono::ParseError),

    #[error("invalid end date format: {0}")]
    InvalidEndDate(#[source] chrono::ParseError),

    #[error("start date cannot be after end date")]
    StartDateAfterEndDate,

    #[error("end date cannot be before start date")]
    EndDateBeforeStartDate,

    #[error("failed to {action}: {source}")]
    Failed {
        action: CourseAction,
        #[source]
        source: RepositoryError,
    },
}

impl ServiceError {
    /// Tags a repository failure with `action`, keeping not-found untouched.
    pub fn from_repository(action: CourseAction, err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound { id } => Self::NotFound { id },
            other => Self::Failed {
                action,
                source: other,
            },
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Date parsing and date ordering failures.
    pub fn is_invalid_dates(&self) -> bool {
        matches!(
            self,
            Self::InvalidStartDate(_)
                | Self::InvalidEndDate(_)
                | Self::StartDateAfterEndDate
                | Self::EndDateBeforeStartDate
        )
    }
}
