use std::sync::Arc;

use crate::application::endpoints::{CourseEndpoints, EndpointConfig};
use crate::application::services::CourseService;
use crate::domain::repositories::CourseRepository;
use crate::infrastructure::persistence::PgCourseRepository;

/// Shared state injected into every handler.
///
/// Generic over the repository so the HTTP layer can run against any
/// [`CourseRepository`]; production uses [`PgCourseRepository`].
pub struct AppState<R: CourseRepository = PgCourseRepository> {
    pub course_endpoints: Arc<CourseEndpoints<R>>,
    pub repository: Arc<R>,
}

impl<R: CourseRepository> AppState<R> {
    /// Wires repository, service and endpoints together.
    pub fn new(repository: Arc<R>, default_page_limit: impl Into<String>) -> Self {
        let service = Arc::new(CourseService::new(repository.clone()));
        let course_endpoints = Arc::new(CourseEndpoints::new(
            service,
            EndpointConfig {
                default_page_limit: default_page_limit.into(),
            },
        ));

        Self {
            course_endpoints,
            repository,
        }
    }
}

impl<R: CourseRepository> Clone for AppState<R> {
    fn clone(&self) -> Self {
        Self {
            course_endpoints: Arc::clone(&self.course_endpoints),
            repository: Arc::clone(&self.repository),
        }
    }
}
