//! Business logic services for the application layer.

pub mod course_service;
pub mod error;

pub use course_service::CourseService;
pub use error::{CourseAction, ServiceError};
