//! DTOs for course endpoints.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_with::{DefaultOnError, DisplayFromStr, serde_as};

use crate::application::endpoints::ListCoursesRequest;
use crate::domain::entities::Course;

/// Course as returned by the API.
#[derive(Debug, Serialize)]
pub struct CourseItem {
    pub id: String,
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Course> for CourseItem {
    fn from(c: Course) -> Self {
        Self {
            id: c.id,
            name: c.name,
            start_date: c.start_date,
            end_date: c.end_date,
            created_at: c.created_at,
            updated_at: c.updated_at,
        }
    }
}

/// Request body for `PATCH /courses/{id}`.
///
/// Absent (or `null`) fields are left unchanged.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateCourseBody {
    pub name: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

/// Query parameters for `GET /courses`.
///
/// Unparsable `limit` / `page` values are treated as absent, which selects
/// the defaults.
#[serde_as]
#[derive(Debug, Default, Deserialize)]
pub struct ListCoursesQuery {
    #[serde(default)]
    pub name: Option<String>,

    #[serde_as(as = "DefaultOnError<Option<DisplayFromStr>>")]
    #[serde(default)]
    pub limit: Option<i64>,

    #[serde_as(as = "DefaultOnError<Option<DisplayFromStr>>")]
    #[serde(default)]
    pub page: Option<i64>,
}

impl From<ListCoursesQuery> for ListCoursesRequest {
    fn from(q: ListCoursesQuery) -> Self {
        Self {
            name: q.name.unwrap_or_default(),
            limit: q.limit.unwrap_or(0),
            page: q.page.unwrap_or(0),
        }
    }
}
