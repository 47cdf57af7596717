use serde_json::Value;
use tracing::debug;

use crate::errors::Result;
use crate::response::{HttpResponse, ResponsePayload, STATUS_OK};

/// Answers every invocation with `200` and `{"message": "Hello from Lambda!"}`.
///
/// Neither the event nor the context is read, so any event shape (including
/// `null`) and any context type is accepted. Serializing the fixed payload
/// cannot fail in practice; an error here would come from `serde_json` itself
/// and is left for the runtime to report.
pub fn handle<C: ?Sized>(_event: &Value, _context: &C) -> Result<HttpResponse> {
    let response = HttpResponse::json(STATUS_OK, &ResponsePayload::default())?;
    debug!(status = response.status_code, "built hello response");
    Ok(response)
}
