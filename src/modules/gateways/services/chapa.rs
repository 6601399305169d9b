use super::gateway_trait::{InitializeOutcome, InitializeRequest, PaymentGateway};
use crate::config::{ChapaConfig, DEFAULT_CHAPA_BASE_URL};
use crate::core::{AppError, Result};
use async_trait::async_trait;
use reqwest::{header, Client};
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

pub const INITIALIZE_PATH: &str = "/v1/transaction/initialize";
pub const REJECTION_FALLBACK_MESSAGE: &str = "Chapa initialization failed";

/// Chapa payment gateway client
///
/// Implements PaymentGateway for the Chapa hosted checkout API.
/// API Documentation: https://developer.chapa.co/integrations/accept-payments
pub struct ChapaClient {
    client: Client,
    base_url: String,
}

impl ChapaClient {
    /// Create a new Chapa client
    ///
    /// # Arguments
    /// * `base_url` - Chapa API origin (defaults to https://api.chapa.co)
    pub fn new(base_url: Option<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_CHAPA_BASE_URL.to_string()),
        }
    }

    pub fn from_config(config: &ChapaConfig) -> Self {
        Self::new(Some(config.base_url.clone()))
    }

    pub fn initialize_url(&self) -> String {
        format!("{}{}", self.base_url, INITIALIZE_PATH)
    }
}

#[async_trait]
impl PaymentGateway for ChapaClient {
    async fn initialize_transaction(
        &self,
        secret_key: &str,
        request: &InitializeRequest,
    ) -> Result<InitializeOutcome> {
        let url = self.initialize_url();
        let payload = serde_json::to_vec(request)?;

        let response = self
            .client
            .post(&url)
            .bearer_auth(secret_key)
            .header(header::CONTENT_TYPE, "application/json")
            .body(payload)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() || e.is_timeout() {
                    AppError::transport(format!(
                        "Chapa gateway unavailable: {} ({})",
                        if e.is_timeout() {
                            "timeout"
                        } else {
                            "connection failed"
                        },
                        e
                    ))
                } else {
                    AppError::transport(format!("Chapa API request failed: {}", e))
                }
            })?;

        let status_code = response.status();
        let response_body = response.text().await?;

        // Chapa reports rejections in the body, often with a 4xx status. Only a
        // body we cannot read at all is a transport failure.
        let reply: ChapaInitializeResponse = serde_json::from_str(&response_body).map_err(|e| {
            AppError::transport(format!(
                "Failed to parse Chapa response - HTTP {} ({})",
                status_code.as_u16(),
                e
            ))
        })?;

        if !status_code.is_success() {
            warn!(
                status = status_code.as_u16(),
                tx_ref = %request.tx_ref,
                "Chapa returned non-success HTTP status"
            );
        }

        let outcome = reply.into_outcome();
        debug!(?outcome, "Chapa initialize reply interpreted");

        Ok(outcome)
    }

    fn name(&self) -> &str {
        "chapa"
    }
}

#[derive(Debug, Deserialize)]
struct ChapaInitializeResponse {
    #[serde(default)]
    status: Value,
    #[serde(default)]
    message: Value,
    #[serde(default)]
    data: Value,
}

impl ChapaInitializeResponse {
    fn into_outcome(self) -> InitializeOutcome {
        let checkout_url = self
            .data
            .get("checkout_url")
            .and_then(Value::as_str)
            .filter(|url| !url.is_empty());

        match (self.status.as_str(), checkout_url) {
            (Some("success"), Some(url)) => InitializeOutcome::CheckoutReady {
                checkout_url: url.to_string(),
            },
            _ => InitializeOutcome::Rejected {
                message: if is_truthy(&self.message) {
                    self.message
                } else {
                    Value::String(REJECTION_FALLBACK_MESSAGE.to_string())
                },
            },
        }
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
