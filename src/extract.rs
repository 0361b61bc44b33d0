use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use tracing::debug;

use crate::error::AppError;

/// Integer record id taken from the `{id}` path segment.
///
/// A segment that is not an `i64` means the route does not exist for this
/// request, so it is rejected as not found rather than as a bad request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdPath(pub i64);

impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<i64>::from_request_parts(parts, state).await {
            Ok(Path(id)) => Ok(IdPath(id)),
            Err(rejection) => {
                debug!("Unusable id in {}: {}", parts.uri, rejection.body_text());
                Err(AppError::RouteNotFound(parts.uri.to_string()))
            }
        }
    }
}
