//! Plain request values accepted by [`super::CourseEndpoints`].
//!
//! The transport decodes into these; missing string fields decode to `""` so
//! that "absent" and "empty" are rejected the same way for required fields.

use serde::Deserialize;
use validator::Validate;

pub const ID_REQUIRED: &str = "id is required";
pub const NAME_REQUIRED: &str = "name is required";
pub const DATES_REQUIRED: &str = "start_date and end_date are required";
pub const AT_LEAST_ONE_FIELD_REQUIRED: &str = "at least one field is required";

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreateCourseRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "start_date and end_date are required"))]
    pub start_date: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "start_date and end_date are required"))]
    pub end_date: String,
}

#[derive(Debug, Clone, Default, Validate)]
pub struct GetCourseRequest {
    #[validate(length(min = 1, message = "id is required"))]
    pub id: String,
}

#[derive(Debug, Clone, Default, Validate)]
pub struct DeleteCourseRequest {
    #[validate(length(min = 1, message = "id is required"))]
    pub id: String,
}

/// List query. Non-positive `limit` / `page` select the defaults.
#[derive(Debug, Clone, Default)]
pub struct ListCoursesRequest {
    pub name: String,
    pub limit: i64,
    pub page: i64,
}

/// Partial update. `None` means "leave unchanged"; `Some("")` is rejected.
#[derive(Debug, Clone, Default, Validate)]
pub struct UpdateCourseRequest {
    #[validate(length(min = 1, message = "id is required"))]
    pub id: String,

    #[validate(length(min = 1, message = "name is required"))]
    pub name: Option<String>,

    #[validate(length(min = 1, message = "start_date and end_date are required"))]
    pub start_date: Option<String>,

    #[validate(length(min = 1, message = "start_date and end_date are required"))]
    pub end_date: Option<String>,
}

impl UpdateCourseRequest {
    pub fn has_changes(&self) -> bool {
        self.name.is_some() || self.start_date.is_some() || self.end_date.is_some()
    }
}
