use axum::{
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::time::Instant;
use thiserror::Error;
use tracing::{debug, error, info};

/// Logs every request once it has been handled. Handlers attach a
/// `Result<(), ApiError>` extension through `to_response` so the outcome
/// is logged with its cause rather than just a status code.
pub async fn logging_middleware(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let uri = req.uri().clone();
    let start = Instant::now();

    let response = next.run(req).await;

    let status = response.status();
    let elapsed = start.elapsed();
    match response.extensions().get::<Result<(), ApiError>>() {
        Some(Ok(())) => info!(
            method = %method,
            uri = %uri,
            status = %status,
            elapsed = ?elapsed,
            "Processed request"
        ),
        Some(Err(err)) => error!(
            method = %method,
            uri = %uri,
            status = %status,
            elapsed = ?elapsed,
            error = %err,
            "Failed to process request"
        ),
        None => debug!(
            method = %method,
            uri = %uri,
            status = %status,
            elapsed = ?elapsed,
            "Processed request without a logging extension"
        ),
    }

    response
}

#[derive(Clone, Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    General(String),
    #[error("Resource not found: {0}")]
    NotFound(String),
    #[error("Failed to validate: {0}")]
    ValidationFail(String),
    #[error("Storage error: {0}")]
    Storage(String),
}

/// Wraps a handler result and attaches the logging extension read by
/// `logging_middleware`.
pub fn to_response<T: IntoResponse>(response: T, ext: Result<(), ApiError>) -> Response {
    let mut response = response.into_response();

    response.extensions_mut().insert(ext);

    response
}
