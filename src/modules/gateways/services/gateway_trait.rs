use crate::core::{Currency, Result};
use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;

/// Payment gateway port used by the checkout flow
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Initialize a hosted-checkout transaction.
    ///
    /// Returns `Ok` for any reply the gateway actually produced, including
    /// rejections. Connection failures and unreadable replies are errors.
    async fn initialize_transaction(
        &self,
        secret_key: &str,
        request: &InitializeRequest,
    ) -> Result<InitializeOutcome>;

    /// Get gateway name
    fn name(&self) -> &str;
}

/// Transaction initialization payload, in the gateway's wire format
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InitializeRequest {
    /// Amount exactly as the caller supplied it, rendered as a string
    pub amount: String,

    pub currency: Currency,

    pub email: String,

    pub first_name: String,

    pub last_name: String,

    /// Merchant transaction reference
    pub tx_ref: String,

    /// Where the gateway sends the customer after payment
    pub return_url: String,

    pub customization: Customization,
}

/// Hosted checkout page customization
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Customization {
    pub title: String,
    pub description: String,
}

/// What the gateway said about an initialization attempt
#[derive(Debug, Clone, PartialEq)]
pub enum InitializeOutcome {
    /// Transaction created; the customer should be sent to `checkout_url`
    CheckoutReady { checkout_url: String },

    /// Gateway refused the transaction. `message` is the gateway's own
    /// message, which may be a string or a structured object of field errors.
    Rejected { message: Value },
}
