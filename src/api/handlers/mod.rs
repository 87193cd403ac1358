//! HTTP request handlers for API endpoints.
//!
//! Handlers are generic over the [`crate::domain::repositories::CourseRepository`]
//! backing the application state.

pub mod courses;
pub mod health;

pub use courses::{
    create_course_handler, delete_course_handler, get_course_handler, list_courses_handler,
    update_course_handler,
};
pub use health::health_handler;
