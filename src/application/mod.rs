//! Application layer: business rules and request handling independent of HTTP.
//!
//! # Modules
//!
//! - [`pagination`] - Page/limit defaults and pagination metadata
//! - [`services`] - [`services::CourseService`] with the course business rules
//! - [`endpoints`] - [`endpoints::CourseEndpoints`], request validation and result classification

pub mod endpoints;
pub mod pagination;
pub mod services;
