pub mod encoding;
pub mod errors;
pub mod handler;
pub mod response;
pub mod telemetry;

pub use errors::{HandlerError, Result};
pub use handler::handle;
pub use response::{HttpResponse, ResponsePayload};
