pub mod cors;
pub mod request_id;

pub use cors::cors_headers;
pub use request_id::{RequestId, RequestIdValue};
