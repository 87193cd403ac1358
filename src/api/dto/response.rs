//! JSON rendering of endpoint envelopes.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::application::endpoints::{Envelope, Outcome};
use crate::application::pagination::PageMeta;

/// Wire shape of a successful response.
#[derive(Debug, Serialize)]
pub struct ResponseBody<T> {
    pub status: u16,
    pub message: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<PageMeta>,
}

fn status_for(outcome: Outcome) -> StatusCode {
    match outcome {
        Outcome::Ok => StatusCode::OK,
        Outcome::Created => StatusCode::CREATED,
    }
}

impl<T: Serialize> IntoResponse for Envelope<T> {
    fn into_response(self) -> Response {
        let status = status_for(self.outcome);
        let body = ResponseBody {
            status: status.as_u16(),
            message: self.message,
            data: self.data,
            meta: self.meta,
        };

        (status, Json(body)).into_response()
    }
}
