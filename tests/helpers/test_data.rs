// Test Data Factory
//
// Builds checkout request bodies for integration tests.

use serde_json::{json, Value};
use uuid::Uuid;

pub const TEST_HOST: &str = "credits.example.et";
pub const TEST_CHECKOUT_URL: &str = "https://pay.example/abc";

/// Test data factory for checkout payloads
pub struct TestDataFactory;

impl TestDataFactory {
    /// Unique merchant reference in format "TEST-{uuid}"
    pub fn random_tx_ref() -> String {
        format!("TEST-{}", Uuid::new_v4())
    }

    /// Body with only an amount
    pub fn amount_only(amount: Value) -> Value {
        json!({ "amount": amount })
    }

    /// Body with every field the client app sends
    pub fn full_checkout_payload() -> Value {
        json!({
            "amount": 25000,
            "credits": 5,
            "email": "abebe@example.et",
            "firstName": "Abebe",
            "lastName": "Kebede",
            "tx_ref": Self::random_tx_ref()
        })
    }

    /// Valid checkout JSON padded past the endpoint's body limit
    pub fn oversized_checkout_body() -> String {
        let padding = "x".repeat(chapa_checkout::payments::MAX_BODY_SIZE + 1024);
        json!({ "amount": 10000, "note": padding }).to_string()
    }
}
