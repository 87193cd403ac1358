//! Course entity and its creation/update inputs.

use chrono::{DateTime, NaiveDate, Utc};

/// A course with a name and an inclusive date range.
///
/// `start_date <= end_date` always holds for persisted courses. The invariant is
/// enforced by [`crate::application::services::CourseService`] and backed by a
/// `CHECK` constraint on the `courses` table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    pub id: String,
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Course {
    pub fn new(
        id: String,
        name: String,
        start_date: NaiveDate,
        end_date: NaiveDate,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            start_date,
            end_date,
            created_at,
            updated_at,
        }
    }
}

/// Input data for inserting a new course.
///
/// The id is generated by the service before the row is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCourse {
    pub id: String,
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// Sparse column update for an existing course.
///
/// `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CoursePatch {
    pub name: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl CoursePatch {
    /// Returns `true` when no column would change.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.start_date.is_none() && self.end_date.is_none()
    }
}
