//! Handlers for course endpoints.
//!
//! Each handler decodes the HTTP request into an endpoint request value,
//! delegates to [`crate::application::endpoints::CourseEndpoints`], and renders
//! the envelope. Malformed bodies are rejected here with 400.

use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
};
use serde_json::json;

use crate::api::dto::course::{CourseItem, ListCoursesQuery, UpdateCourseBody};
use crate::application::endpoints::{
    CreateCourseRequest, DeleteCourseRequest, Envelope, GetCourseRequest, UpdateCourseRequest,
};
use crate::domain::repositories::CourseRepository;
use crate::error::AppError;
use crate::state::AppState;

fn invalid_json(rejection: JsonRejection) -> AppError {
    AppError::bad_request(
        "invalid JSON format",
        json!({ "reason": rejection.body_text() }),
    )
}

fn invalid_query(rejection: QueryRejection) -> AppError {
    AppError::bad_request(
        "invalid query parameters",
        json!({ "reason": rejection.body_text() }),
    )
}

/// Creates a course.
///
/// # Endpoint
///
/// `POST /courses`
///
/// # Request Body
///
/// ```json
/// { "name": "Intro Course", "start_date": "2025-01-10", "end_date": "2025-03-10" }
/// ```
///
/// # Errors
///
/// Returns 400 if the body is malformed, a field is missing, or the dates are
/// malformed or inverted.
pub async fn create_course_handler<R: CourseRepository + 'static>(
    State(state): State<AppState<R>>,
    payload: Result<Json<CreateCourseRequest>, JsonRejection>,
) -> Result<Envelope<CourseItem>, AppError> {
    let Json(payload) = payload.map_err(invalid_json)?;

    let envelope = state.course_endpoints.create(payload).await?;

    Ok(envelope.map(CourseItem::from))
}

/// Retrieves a course by id.
///
/// # Endpoint
///
/// `GET /courses/{id}`
///
/// # Errors
///
/// Returns 404 if the course does not exist.
pub async fn get_course_handler<R: CourseRepository + 'static>(
    Path(id): Path<String>,
    State(state): State<AppState<R>>,
) -> Result<Envelope<CourseItem>, AppError> {
    let envelope = state
        .course_endpoints
        .get(GetCourseRequest { id })
        .await?;

    Ok(envelope.map(CourseItem::from))
}

/// Lists courses, newest first, with pagination metadata.
///
/// # Endpoint
///
/// `GET /courses`
///
/// # Query Parameters
///
/// - `name` (optional): case-insensitive substring filter
/// - `limit` (optional): page size (default: configured `PAGINATOR_LIMIT_DEFAULT`)
/// - `page` (optional): page number (default: 1)
pub async fn list_courses_handler<R: CourseRepository + 'static>(
    State(state): State<AppState<R>>,
    query: Result<Query<ListCoursesQuery>, QueryRejection>,
) -> Result<Envelope<Vec<CourseItem>>, AppError> {
    let Query(query) = query.map_err(invalid_query)?;

    let envelope = state.course_endpoints.get_all(query.into()).await?;

    Ok(envelope.map(|courses| courses.into_iter().map(CourseItem::from).collect()))
}

/// Partially updates a course.
///
/// # Endpoint
///
/// `PATCH /courses/{id}`
///
/// All fields are optional, but at least one must be present and none may be
/// an empty string.
///
/// # Errors
///
/// Returns 400 on validation failure, 404 if the course does not exist.
pub async fn update_course_handler<R: CourseRepository + 'static>(
    Path(id): Path<String>,
    State(state): State<AppState<R>>,
    payload: Result<Json<UpdateCourseBody>, JsonRejection>,
) -> Result<Envelope<()>, AppError> {
    let Json(body) = payload.map_err(invalid_json)?;

    let request = UpdateCourseRequest {
        id,
        name: body.name,
        start_date: body.start_date,
        end_date: body.end_date,
    };

    state.course_endpoints.update(request).await
}

/// Deletes a course.
///
/// # Endpoint
///
/// `DELETE /courses/{id}`
///
/// # Errors
///
/// Returns 404 if the course does not exist.
pub async fn delete_course_handler<R: CourseRepository + 'static>(
    Path(id): Path<String>,
    State(state): State<AppState<R>>,
) -> Result<Envelope<()>, AppError> {
    state
        .course_endpoints
        .delete(DeleteCourseRequest { id })
        .await
}
