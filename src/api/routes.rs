//! API route configuration.

use crate::api::handlers::{
    create_course_handler, delete_course_handler, get_course_handler, list_courses_handler,
    update_course_handler,
};
use crate::domain::repositories::CourseRepository;
use crate::state::AppState;
use axum::{Router, routing::get};

/// Course routes.
///
/// # Endpoints
///
/// - `GET    /courses`        - List courses (paginated, `name` filter)
/// - `POST   /courses`        - Create a course
/// - `GET    /courses/{id}`   - Fetch one course
/// - `PATCH  /courses/{id}`   - Partially update a course
/// - `DELETE /courses/{id}`   - Delete a course
pub fn course_routes<R: CourseRepository + 'static>() -> Router<AppState<R>> {
    Router::new()
        .route(
            "/courses",
            get(list_courses_handler::<R>).post(create_course_handler::<R>),
        )
        .route(
            "/courses/{id}",
            get(get_course_handler::<R>)
                .patch(update_course_handler::<R>)
                .delete(delete_course_handler::<R>),
        )
}
