//! Numeric path identifier extractor.

use std::num::IntErrorKind;

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

use crate::errors::{AppError, AppResult};

/// Integer `:id` path segment.
///
/// Malformed identifiers are rejected as `AppError::Validation` so the
/// client receives the usual error body instead of axum's plain-text one.
/// A well-formed number outside the `i32` range cannot name a stored book
/// and is reported as `AppError::NotFound`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathId(pub i32);

#[async_trait]
impl<S> FromRequestParts<S> for PathId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::validation("Invalid book id"))?;

        parse_id(&raw).map(PathId)
    }
}

fn parse_id(raw: &str) -> AppResult<i32> {
    raw.parse::<i32>().map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => AppError::NotFound,
        _ => AppError::validation("Invalid book id"),
    })
}
