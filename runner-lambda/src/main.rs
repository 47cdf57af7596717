use hello_core::handler::handle;
use hello_core::response::HttpResponse;
use hello_core::telemetry::init_tracing;
use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde_json::Value;
use tracing::{debug, info};

/// Lambda entry point. The event is taken as raw JSON so any trigger shape
/// deserializes; the response is returned as a proxy-integration object.
pub async fn lambda_handler(event: LambdaEvent<Value>) -> Result<HttpResponse, Error> {
    let (payload, context) = event.into_parts();
    info!(request_id = %context.request_id, "invocation received");
    debug!(event = %payload, "event payload");

    Ok(handle(&payload, &context)?)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    init_tracing();
    lambda_runtime::run(service_fn(lambda_handler)).await
}
