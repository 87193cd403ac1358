//! Endpoint layer: request validation and outcome classification.
//!
//! [`CourseEndpoints`] exposes one method per operation. Each method checks the
//! shape of its request, calls [`CourseService`], and resolves to an
//! [`Envelope`] or an [`AppError`] kind. No business rules live here.

pub mod envelope;
pub mod requests;

pub use envelope::{Envelope, Outcome};
pub use requests::{
    CreateCourseRequest, DeleteCourseRequest, GetCourseRequest, ListCoursesRequest,
    UpdateCourseRequest,
};

use serde_json::json;
use std::sync::Arc;
use validator::Validate;

use crate::application::pagination::{self, PageMeta, PaginationError};
use crate::application::services::{CourseService, ServiceError};
use crate::domain::entities::Course;
use crate::domain::repositories::{CourseFilters, CourseRepository};
use crate::error::AppError;

/// Settings the endpoint layer receives from configuration.
#[derive(Debug, Clone)]
pub struct EndpointConfig {
    /// Default page size, string-encoded as it comes from the environment.
    pub default_page_limit: String,
}

/// Course endpoints composed over a shared [`CourseService`].
pub struct CourseEndpoints<R: CourseRepository> {
    service: Arc<CourseService<R>>,
    config: EndpointConfig,
}

impl<R: CourseRepository> CourseEndpoints<R> {
    pub fn new(service: Arc<CourseService<R>>, config: EndpointConfig) -> Self {
        Self { service, config }
    }

    /// Creates a course.
    ///
    /// # Errors
    ///
    /// - `Validation` if a field is empty, a date is malformed or the range is inverted
    /// - `Internal` on storage failures
    pub async fn create(&self, req: CreateCourseRequest) -> Result<Envelope<Course>, AppError> {
        req.validate()
            .map_err(|e| AppError::from_validation(&e, &["name", "start_date", "end_date"]))?;

        let course = self
            .service
            .create(req.name, &req.start_date, &req.end_date)
            .await
            .map_err(classify)?;

        Ok(Envelope::created("Course created successfully", course))
    }

    /// Retrieves a single course.
    pub async fn get(&self, req: GetCourseRequest) -> Result<Envelope<Course>, AppError> {
        req.validate()
            .map_err(|e| AppError::from_validation(&e, &["id"]))?;

        let course = self.service.get(&req.id).await.map_err(classify)?;

        Ok(Envelope::ok("Course retrieved successfully", course))
    }

    /// Lists one page of courses together with pagination metadata.
    ///
    /// The total is counted before the page is fetched so the metadata and the
    /// requested window agree.
    pub async fn get_all(&self, req: ListCoursesRequest) -> Result<Envelope<Vec<Course>>, AppError> {
        let filters = CourseFilters::new(req.name);

        let limit = pagination::effective_limit(req.limit, &self.config.default_page_limit)
            .map_err(config_error)?;
        let page = pagination::effective_page(req.page);

        let total = self
            .service
            .count(filters.clone())
            .await
            .map_err(classify)?;

        let meta = PageMeta::new(page, limit, total, &self.config.default_page_limit)
            .map_err(config_error)?;

        let courses = self
            .service
            .get_all(filters, meta.offset, meta.limit)
            .await
            .map_err(classify)?;

        Ok(Envelope::ok("Courses retrieved successfully", courses).with_meta(meta))
    }

    /// Partially updates a course.
    ///
    /// # Errors
    ///
    /// - `Validation` if the id is empty, no field is present, a present field is
    ///   empty, or the resulting dates are malformed or inverted
    /// - `NotFound` if the course does not exist
    /// - `Internal` on storage failures
    pub async fn update(&self, req: UpdateCourseRequest) -> Result<Envelope<()>, AppError> {
        if req.id.is_empty() {
            return Err(AppError::bad_request(requests::ID_REQUIRED, json!({})));
        }
        if !req.has_changes() {
            return Err(AppError::bad_request(
                requests::AT_LEAST_ONE_FIELD_REQUIRED,
                json!({ "fields": ["name", "start_date", "end_date"] }),
            ));
        }
        req.validate()
            .map_err(|e| AppError::from_validation(&e, &["name", "start_date", "end_date"]))?;

        self.service
            .update(
                &req.id,
                req.name,
                req.start_date.as_deref(),
                req.end_date.as_deref(),
            )
            .await
            .map_err(classify)?;

        Ok(Envelope::empty("Course updated successfully"))
    }

    /// Deletes a course.
    pub async fn delete(&self, req: DeleteCourseRequest) -> Result<Envelope<()>, AppError> {
        req.validate()
            .map_err(|e| AppError::from_validation(&e, &["id"]))?;

        self.service.delete(&req.id).await.map_err(classify)?;

        Ok(Envelope::empty("Course deleted successfully"))
    }
}

/// Maps a service failure to its result kind.
fn classify(err: ServiceError) -> AppError {
    match err {
        ServiceError::NotFound { ref id } => {
            let details = json!({ "id": id });
            AppError::not_found(err.to_string(), details)
        }
        ref e if e.is_invalid_dates() => AppError::bad_request(e.to_string(), json!({})),
        ServiceError::Failed { action, ref source } => AppError::internal(
            err.to_string(),
            json!({ "action": action.to_string(), "cause": source.to_string() }),
        ),
        other => AppError::internal(other.to_string(), json!({})),
    }
}

fn config_error(err: PaginationError) -> AppError {
    tracing::error!(error = %err, "invalid pagination configuration");
    AppError::internal(
        "invalid default limit configuration",
        json!({ "value": err.value }),
    )
}
