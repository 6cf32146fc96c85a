pub mod order;
pub mod orderbook;

use axum::extract::rejection::PathRejection;
use axum::extract::Path;
use axum::http::{header, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::cache::LookupError;
use crate::error::AppError;

/// Serialize `body` into a JSON response
///
/// `committed` marks responses for requests that already changed state, so an
/// encoding failure still tells the caller the operation took effect.
pub(crate) fn json_response<T: Serialize>(
    status: StatusCode,
    body: &T,
    committed: bool,
) -> Result<Response, AppError> {
    let bytes = serde_json::to_vec(body).map_err(|source| AppError::Encoding { committed, source })?;
    Ok((status, [(header::CONTENT_TYPE, "application/json")], bytes).into_response())
}

/// Fallback for mutating routes hit with any verb but POST
pub async fn post_required() -> AppError {
    AppError::MethodNotAllowed(Method::POST)
}

/// Fallback for read routes hit with a verb other than GET
pub async fn get_required() -> AppError {
    AppError::MethodNotAllowed(Method::GET)
}

/// Trailing id segment of a detail route
///
/// A segment that does not decode (bad percent-encoding, invalid UTF-8)
/// cannot name any session, so it reports as `unknown`.
pub(crate) fn path_id(
    path: Result<Path<String>, PathRejection>,
    unknown: LookupError,
) -> Result<String, AppError> {
    match path {
        Ok(Path(id)) => Ok(id),
        Err(_) => Err(unknown.into()),
    }
}

/// Router-wide fallback
///
/// Extra segments under `/orderbook/` or `/order/` are ids that cannot exist;
/// anything else is an unknown route.
pub async fn unmatched(uri: Uri) -> AppError {
    let path = uri.path();
    if path.starts_with("/orderbook/") {
        LookupError::UnknownOrderBook.into()
    } else if path.starts_with("/order/") {
        LookupError::UnknownOrder.into()
    } else {
        AppError::NotFound(path.to_string())
    }
}
