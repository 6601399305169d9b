use actix_web::{
    error::{PayloadError, ResponseError},
    http::StatusCode,
    HttpResponse,
};
use serde_json::Value;

/// Application-wide Result type
pub type Result<T> = std::result::Result<T, AppError>;

pub const CONFIGURATION_MISSING_MESSAGE: &str = "Payment configuration missing on server";
pub const METHOD_NOT_ALLOWED_MESSAGE: &str = "Method Not Allowed";
pub const TRANSPORT_FAILURE_MESSAGE: &str = "Connection to Chapa failed";
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal Server Error";
pub const PAYLOAD_TOO_LARGE_MESSAGE: &str = "Payload Too Large";
pub const INVALID_BODY_MESSAGE: &str = "Invalid request body";

/// Main application error type
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// Required configuration is absent or malformed
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Request input failed validation
    #[error("Validation error: {0}")]
    Validation(String),

    /// Method other than POST/OPTIONS on the checkout endpoint
    #[error("Method not allowed: {0}")]
    MethodNotAllowed(String),

    /// Gateway was reachable but refused to initialize the transaction.
    /// The message is whatever the gateway reported, passed through verbatim.
    #[error("Gateway rejected transaction: {message}")]
    GatewayRejection { message: Value },

    /// Gateway could not be reached or answered with something unreadable
    #[error("Gateway transport error: {0}")]
    Transport(String),

    /// HTTP client errors while talking to the gateway
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Request body exceeded the given byte limit
    #[error("Request body larger than {0} bytes")]
    PayloadTooLarge(usize),

    /// Request body stream broke off while being read
    #[error("Payload error: {0}")]
    Payload(#[from] PayloadError),
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        let status_code = self.status_code();

        // Detail for 5xx stays in the logs; the caller only sees the generic body.
        if status_code.is_server_error() {
            tracing::error!(error = %self, status = status_code.as_u16(), "Request failed");
        } else {
            tracing::warn!(error = %self, status = status_code.as_u16(), "Request rejected");
        }

        HttpResponse::build(status_code).json(self.response_body())
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            AppError::GatewayRejection { .. } => StatusCode::BAD_REQUEST,
            AppError::Transport(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::HttpClient(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Json(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::Payload(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl AppError {
    pub fn configuration(msg: impl Into<String>) -> Self {
        AppError::Configuration(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn method_not_allowed(method: impl Into<String>) -> Self {
        AppError::MethodNotAllowed(method.into())
    }

    pub fn rejection(message: Value) -> Self {
        AppError::GatewayRejection { message }
    }

    pub fn transport(msg: impl Into<String>) -> Self {
        AppError::Transport(msg.into())
    }

    /// JSON body sent to the caller for this error
    pub fn response_body(&self) -> Value {
        match self {
            AppError::Configuration(_) => {
                serde_json::json!({ "error": CONFIGURATION_MISSING_MESSAGE })
            }
            AppError::Validation(msg) => serde_json::json!({ "error": msg }),
            AppError::MethodNotAllowed(_) => {
                serde_json::json!({ "error": METHOD_NOT_ALLOWED_MESSAGE })
            }
            AppError::GatewayRejection { message } => serde_json::json!({
                "success": false,
                "error": message,
            }),
            AppError::Transport(_) | AppError::HttpClient(_) => {
                serde_json::json!({ "error": TRANSPORT_FAILURE_MESSAGE })
            }
            AppError::Json(_) => serde_json::json!({ "error": INTERNAL_ERROR_MESSAGE }),
            AppError::PayloadTooLarge(_) => {
                serde_json::json!({ "error": PAYLOAD_TOO_LARGE_MESSAGE })
            }
            AppError::Payload(_) => serde_json::json!({ "error": INVALID_BODY_MESSAGE }),
        }
    }
}
