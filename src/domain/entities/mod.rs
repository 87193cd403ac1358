//! Core domain entities.
//!
//! - [`Course`] - A stored course
//! - [`NewCourse`] - Values for inserting a course
//! - [`CoursePatch`] - Partial update; `None` fields are left untouched

pub mod course;

pub use course::{Course, CoursePatch, NewCourse};
