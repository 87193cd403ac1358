//! REST API layer for HTTP request/response handling.
//!
//! This layer is the transport for [`crate::application::endpoints`]: it decodes
//! HTTP requests into endpoint request values and renders envelopes and errors
//! as JSON.
//!
//! # Modules
//!
//! - [`dto`] - Wire shapes for requests and responses
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Request tracing
//! - [`routes`] - Route configuration

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
