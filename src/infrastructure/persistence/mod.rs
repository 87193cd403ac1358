//! PostgreSQL repository implementations built on SQLx.

pub mod pg_course_repository;

pub use pg_course_repository::PgCourseRepository;
