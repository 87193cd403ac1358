//! Page/limit normalisation and pagination metadata.

use serde::Serialize;
use std::num::ParseIntError;
use thiserror::Error;

/// Raised when the configured default page size is not an integer.
#[derive(Debug, Error)]
#[error("invalid default limit configuration: {value:?}")]
pub struct PaginationError {
    pub value: String,
    #[source]
    pub source: ParseIntError,
}

/// Derived pagination summary returned alongside list results.
///
/// Computed per request from the requested page/limit and the current row
/// count; never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageMeta {
    pub page: i64,
    pub limit: i64,
    pub total: i64,
    pub offset: i64,
    pub total_pages: i64,
}

impl PageMeta {
    /// Builds metadata for `page`/`limit` over `total` rows.
    ///
    /// Non-positive `limit` falls back to `default_limit`, non-positive `page`
    /// falls back to 1. `total_pages` is 0 when the effective limit is not positive.
    /// An offset that does not fit in `i64` saturates to `i64::MAX`.
    ///
    /// # Errors
    ///
    /// Returns [`PaginationError`] if the default limit is needed and does not parse.
    pub fn new(
        page: i64,
        limit: i64,
        total: i64,
        default_limit: &str,
    ) -> Result<Self, PaginationError> {
        let limit = effective_limit(limit, default_limit)?;
        let page = effective_page(page);

        let total_pages = if limit > 0 {
            total / limit + i64::from(total % limit != 0)
        } else {
            0
        };

        // Saturates past the last addressable row; such a page is simply empty.
        let offset = (page - 1).checked_mul(limit).unwrap_or(i64::MAX);

        Ok(Self {
            page,
            limit,
            total,
            offset,
            total_pages,
        })
    }
}

/// Returns `limit` if positive, otherwise the parsed `default_limit`.
pub fn effective_limit(limit: i64, default_limit: &str) -> Result<i64, PaginationError> {
    if limit > 0 {
        return Ok(limit);
    }
    parse_default_limit(default_limit)
}

/// Returns `page` if positive, otherwise 1.
pub fn effective_page(page: i64) -> i64 {
    if page > 0 { page } else { 1 }
}

/// Parses the string-encoded default page size.
pub fn parse_default_limit(default_limit: &str) -> Result<i64, PaginationError> {
    default_limit
        .trim()
        .parse::<i64>()
        .map_err(|source| PaginationError {
            value: default_limit.to_string(),
            source,
        })
}
