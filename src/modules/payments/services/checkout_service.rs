use std::sync::Arc;

use tracing::{error, info, warn};

use super::super::models::{Amount, CheckoutContext, CheckoutResponse, IncomingPaymentRequest};
use crate::config::ChapaConfig;
use crate::core::{AppError, Currency, Result};
use crate::modules::gateways::{
    ChapaClient, Customization, InitializeOutcome, InitializeRequest, PaymentGateway,
};

pub const CHECKOUT_TITLE: &str = "ConstructAI Credits";
pub const PLACEHOLDER_EMAIL: &str = "customer@example.com";
pub const PLACEHOLDER_FIRST_NAME: &str = "Customer";
pub const PLACEHOLDER_LAST_NAME: &str = "User";

/// Turns a client checkout request into one gateway initialization call
pub struct CheckoutService {
    gateway: Arc<dyn PaymentGateway>,
    secret_key: Option<String>,
}

impl CheckoutService {
    pub fn new(gateway: Arc<dyn PaymentGateway>, secret_key: Option<String>) -> Self {
        Self {
            gateway,
            secret_key,
        }
    }

    /// Service backed by the real Chapa API
    pub fn from_config(config: &ChapaConfig) -> Self {
        Self::new(
            Arc::new(ChapaClient::from_config(config)),
            config.secret_key.clone(),
        )
    }

    pub fn is_configured(&self) -> bool {
        self.secret_key.is_some()
    }

    /// The gateway secret, or a configuration error when none was provided
    pub fn ensure_configured(&self) -> Result<&str> {
        self.secret_key
            .as_deref()
            .ok_or_else(|| AppError::configuration("CHAPA_SECRET_KEY not set"))
    }

    /// Build the gateway payload. Absent contact fields get placeholders so the
    /// gateway does not reject the call for missing customer details.
    pub fn build_initialize_request(
        &self,
        request: &IncomingPaymentRequest,
        amount: &Amount,
        credits_to_add: i64,
        context: &CheckoutContext,
    ) -> InitializeRequest {
        InitializeRequest {
            amount: amount.to_gateway_string(),
            currency: Currency::ETB,
            email: request
                .email
                .clone()
                .unwrap_or_else(|| PLACEHOLDER_EMAIL.to_string()),
            first_name: request
                .first_name
                .clone()
                .unwrap_or_else(|| PLACEHOLDER_FIRST_NAME.to_string()),
            last_name: request
                .last_name
                .clone()
                .unwrap_or_else(|| PLACEHOLDER_LAST_NAME.to_string()),
            tx_ref: request
                .tx_ref
                .clone()
                .unwrap_or_else(|| context.generated_tx_ref()),
            return_url: context.return_url(credits_to_add),
            customization: Customization {
                title: CHECKOUT_TITLE.to_string(),
                description: format!("Payment for {} Credits", credits_to_add),
            },
        }
    }

    /// Validate, call the gateway once, and map its answer
    pub async fn initialize_checkout(
        &self,
        request: &IncomingPaymentRequest,
        context: &CheckoutContext,
    ) -> Result<CheckoutResponse> {
        let secret_key = self.ensure_configured()?;
        let amount = request.amount()?;
        let credits_to_add = request.credits_to_add(&amount);
        let payload = self.build_initialize_request(request, &amount, credits_to_add, context);

        info!(
            gateway = %self.gateway.name(),
            tx_ref = %payload.tx_ref,
            amount = %payload.amount,
            currency = %payload.currency,
            credits = credits_to_add,
            "Initializing checkout with gateway"
        );

        let outcome = self
            .gateway
            .initialize_transaction(secret_key, &payload)
            .await
            .inspect_err(|e| {
                error!(
                    gateway = %self.gateway.name(),
                    tx_ref = %payload.tx_ref,
                    error = %e,
                    "Gateway call failed"
                );
            })?;

        match outcome {
            InitializeOutcome::CheckoutReady { checkout_url } => {
                info!(
                    gateway = %self.gateway.name(),
                    tx_ref = %payload.tx_ref,
                    "Checkout initialized"
                );
                Ok(CheckoutResponse::new(checkout_url))
            }
            InitializeOutcome::Rejected { message } => {
                warn!(
                    gateway = %self.gateway.name(),
                    tx_ref = %payload.tx_ref,
                    message = %message,
                    "Gateway rejected checkout"
                );
                Err(AppError::rejection(message))
            }
        }
    }
}
