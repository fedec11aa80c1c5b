//! Numeric id path parameter extractor with automatic validation.

use crate::errors::{error_response, ErrorCode};
use axum::{
    extract::{FromRequestParts, Path},
    http::{request::Parts, StatusCode},
    response::{IntoResponse, Response},
};

/// Extractor for numeric id path parameters.
///
/// Automatically parses and validates a `u64` id from path parameters,
/// returning a proper error response if the segment is not a number.
///
/// # Example
/// ```ignore
/// use axum::Router;
/// use axum::routing::get;
/// use axum_helpers::extractors::IdPath;
///
/// async fn get_product(IdPath(id): IdPath) -> String {
///     format!("Product id: {}", id)
/// }
///
/// let app = Router::new().route("/products/{id}", get(get_product));
/// ```
pub struct IdPath(pub u64);

impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| e.into_response())?;

        match id.parse::<u64>() {
            Ok(id) => Ok(IdPath(id)),
            Err(_) => Err(error_response(
                StatusCode::BAD_REQUEST,
                format!("Invalid id: {}", id),
                ErrorCode::InvalidId,
            )),
        }
    }
}
