//! Endpoint modules, one per remote resource.
//!
//! # Design
//! Each operation comes in three parts: a pure `build_*` function producing
//! an `HttpRequest`, a pure `parse_*` function consuming an `HttpResponse`,
//! and a convenience function that runs both around a caller-supplied
//! `RequestExecutor`. Nothing here holds state between calls.

pub mod customfields;

use tracing::{debug, warn};

use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse, RequestExecutor};
use crate::model::Model;

fn execute(client: &impl RequestExecutor, request: &HttpRequest) -> Result<HttpResponse, ApiError> {
    debug!(method = %request.method, path = %request.resolved_path(), "executing request");
    client.execute(request)
}

/// Map any non-2xx status to `ApiError::Client`.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    warn!(status = response.status, "request failed");
    Err(ApiError::Client {
        status: response.status,
        body: response.body.clone(),
    })
}

/// Serialize a record into a request body.
fn encode<T: Model>(record: &T) -> Result<String, ApiError> {
    let map = record.to_json()?;
    serde_json::to_string(&map).map_err(|e| ApiError::Serialization(e.to_string()))
}

/// Check the status and decode the body as a single record.
fn parse_record<T: Model>(response: &HttpResponse) -> Result<T, ApiError> {
    check_status(response)?;
    T::from_json_str(&response.body)?
        .ok_or_else(|| ApiError::decode(T::NAME, "response body is null"))
}
