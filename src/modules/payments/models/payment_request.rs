use crate::core::{AppError, Result};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Number, Value};
use std::str::FromStr;

/// Largest integer an f64 holds exactly (2^53 - 1)
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Birr per credit when the caller does not state a credit count
pub const CREDIT_UNIT_PRICE: i64 = 5000;

pub const AMOUNT_REQUIRED_MESSAGE: &str = "Amount is required";

/// Checkout request body as sent by the client application.
///
/// Every field is optional at the parsing stage so that a wrongly-typed field
/// never turns into a parse failure; `amount` is enforced by [`Self::amount`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IncomingPaymentRequest {
    #[serde(default)]
    pub amount: Option<Value>,

    #[serde(default)]
    pub credits: Option<Value>,

    #[serde(default, deserialize_with = "non_empty_text")]
    pub email: Option<String>,

    #[serde(default, rename = "firstName", deserialize_with = "non_empty_text")]
    pub first_name: Option<String>,

    #[serde(default, rename = "lastName", deserialize_with = "non_empty_text")]
    pub last_name: Option<String>,

    #[serde(default, deserialize_with = "non_empty_text")]
    pub tx_ref: Option<String>,
}

impl IncomingPaymentRequest {
    /// Parse a raw request body. Anything that is not a JSON object is treated
    /// as an empty request, which then fails amount validation.
    pub fn from_body(body: &[u8]) -> Self {
        let parsed = serde_json::from_slice::<Value>(body)
            .and_then(|value| match value {
                Value::Object(_) => serde_json::from_value::<Self>(value),
                _ => Ok(Self::default()),
            });

        match parsed {
            Ok(request) => request,
            Err(e) => {
                if !body.is_empty() {
                    tracing::debug!(error = %e, "Unparseable checkout body treated as empty");
                }
                Self::default()
            }
        }
    }

    /// The payable amount, or a validation error when it is missing or falsy
    pub fn amount(&self) -> Result<Amount> {
        self.amount
            .as_ref()
            .and_then(Amount::from_value)
            .ok_or_else(|| AppError::validation(AMOUNT_REQUIRED_MESSAGE))
    }

    /// Credits granted for this payment: the explicit count when given,
    /// otherwise one credit per [`CREDIT_UNIT_PRICE`] of the amount.
    pub fn credits_to_add(&self, amount: &Amount) -> i64 {
        self.credits
            .as_ref()
            .and_then(explicit_credits)
            .unwrap_or_else(|| amount.estimated_credits())
    }
}

/// A truthy amount as supplied by the caller
#[derive(Debug, Clone, PartialEq)]
pub enum Amount {
    Number(Number),
    Text(String),
}

impl Amount {
    /// `None` for null, zero, the empty string and non-scalar values
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Number(n) if n.as_f64() != Some(0.0) => Some(Amount::Number(n.clone())),
            Value::String(s) if !s.is_empty() => Some(Amount::Text(s.clone())),
            _ => None,
        }
    }

    /// Amount as forwarded to the gateway. Strings pass through untouched;
    /// an integral float renders without its fraction (`10000.0` as `10000`).
    pub fn to_gateway_string(&self) -> String {
        match self {
            Amount::Number(n) if n.is_f64() => match n.as_f64() {
                Some(f) if f.fract() == 0.0 && f.abs() <= MAX_SAFE_INTEGER => {
                    (f as i64).to_string()
                }
                _ => n.to_string(),
            },
            Amount::Number(n) => n.to_string(),
            Amount::Text(s) => s.clone(),
        }
    }

    pub fn to_decimal(&self) -> Option<Decimal> {
        let text = match self {
            Amount::Number(n) => n.to_string(),
            Amount::Text(s) => s.trim().to_string(),
        };
        Decimal::from_str(&text)
            .or_else(|_| Decimal::from_scientific(&text))
            .ok()
    }

    /// floor(amount / CREDIT_UNIT_PRICE); 0 when the amount is not numeric
    pub fn estimated_credits(&self) -> i64 {
        self.to_decimal()
            .and_then(|amount| (amount / Decimal::from(CREDIT_UNIT_PRICE)).floor().to_i64())
            .unwrap_or(0)
    }
}

fn explicit_credits(value: &Value) -> Option<i64> {
    let credits = match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && f.abs() < i64::MAX as f64)
                .map(|f| f as i64)
        }),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    };
    credits.filter(|c| *c != 0)
}

fn non_empty_text<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) if !s.is_empty() => Some(s),
        _ => None,
    })
}

/// Successful checkout response body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckoutResponse {
    pub success: bool,
    pub checkout_url: String,
}

impl CheckoutResponse {
    pub fn new(checkout_url: String) -> Self {
        Self {
            success: true,
            checkout_url,
        }
    }
}
