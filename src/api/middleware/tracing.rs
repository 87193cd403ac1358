//! HTTP request/response tracing middleware.

use axum::http::Request;
use tower_http::LatencyUnit;
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::{DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::{Level, Span};

type MakeCourseSpan = fn(&Request<axum::body::Body>) -> Span;

/// Trace layer used by the course router.
pub type CourseTraceLayer = TraceLayer<
    SharedClassifier<ServerErrorsAsFailures>,
    MakeCourseSpan,
    DefaultOnRequest,
    DefaultOnResponse,
>;

/// Creates a tracing middleware for HTTP requests.
///
/// Every request gets an `INFO` span carrying method and path; requests to
/// `/courses/{id}` also record `course_id`. Responses are logged at `INFO`
/// with latency in milliseconds, 5xx responses additionally at `ERROR`.
///
/// # Example Logs
///
/// ```text
/// INFO request{method=PATCH path=/courses/4f1c course_id=4f1c}: finished processing request latency=3 ms status=200
/// ```
///
/// # Integration
///
/// ```rust,ignore
/// let app = Router::new()
///     .merge(course_routes())
///     .layer(tracing::layer());
/// ```
pub fn layer() -> CourseTraceLayer {
    TraceLayer::new_for_http()
        .make_span_with(make_span as MakeCourseSpan)
        .on_request(DefaultOnRequest::new().level(Level::DEBUG))
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        )
        .on_failure(
            DefaultOnFailure::new()
                .level(Level::ERROR)
                .latency_unit(LatencyUnit::Millis),
        )
}

fn make_span(request: &Request<axum::body::Body>) -> Span {
    let path = request.uri().path();

    match course_id(path) {
        Some(id) => tracing::info_span!(
            "request",
            method = %request.method(),
            path = %path,
            course_id = %id
        ),
        None => tracing::info_span!("request", method = %request.method(), path = %path),
    }
}

/// Extracts the id segment from `/courses/{id}` paths.
fn course_id(path: &str) -> Option<&str> {
    path.strip_prefix("/courses/")
        .map(|rest| rest.trim_end_matches('/'))
        .filter(|id| !id.is_empty() && !id.contains('/'))
}
