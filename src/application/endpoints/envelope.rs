//! Transport-agnostic success result.

use crate::application::pagination::PageMeta;

/// Kind of success, mapped to a status code by the transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Ok,
    Created,
}

/// Successful endpoint result: outcome, message, optional payload and metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct Envelope<T> {
    pub outcome: Outcome,
    pub message: &'static str,
    pub data: Option<T>,
    pub meta: Option<PageMeta>,
}

impl<T> Envelope<T> {
    pub fn ok(message: &'static str, data: T) -> Self {
        Self {
            outcome: Outcome::Ok,
            message,
            data: Some(data),
            meta: None,
        }
    }

    pub fn created(message: &'static str, data: T) -> Self {
        Self {
            outcome: Outcome::Created,
            message,
            data: Some(data),
            meta: None,
        }
    }

    /// Success without payload.
    pub fn empty(message: &'static str) -> Self {
        Self {
            outcome: Outcome::Ok,
            message,
            data: None,
            meta: None,
        }
    }

    pub fn with_meta(mut self, meta: PageMeta) -> Self {
        self.meta = Some(meta);
        self
    }

    /// Converts the payload, keeping outcome, message and metadata.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Envelope<U> {
        Envelope {
            outcome: self.outcome,
            message: self.message,
            data: self.data.map(f),
            meta: self.meta,
        }
    }
}
