use actix_web::{http::header, HttpRequest};
use chrono::{DateTime, Utc};

pub const DEFAULT_SCHEME: &str = "http";
pub const FORWARDED_PROTO_HEADER: &str = "x-forwarded-proto";

/// Per-request facts the gateway payload depends on besides the body
#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutContext {
    /// Scheme the client used to reach us, as reported by the edge proxy
    pub scheme: String,
    /// Host the client used to reach us
    pub host: String,
    /// Clock reading used for the generated transaction reference
    pub requested_at: DateTime<Utc>,
}

impl CheckoutContext {
    pub fn new(scheme: impl Into<String>, host: impl Into<String>, requested_at: DateTime<Utc>) -> Self {
        Self {
            scheme: scheme.into(),
            host: host.into(),
            requested_at,
        }
    }

    /// Scheme from `X-Forwarded-Proto` (first hop when a list is given),
    /// otherwise `http`. Host from the `Host` header, otherwise whatever the
    /// connection info resolves.
    pub fn from_request(req: &HttpRequest) -> Self {
        let scheme = req
            .headers()
            .get(FORWARDED_PROTO_HEADER)
            .and_then(|h| h.to_str().ok())
            .and_then(|v| v.split(',').next())
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .unwrap_or(DEFAULT_SCHEME)
            .to_string();

        let host = req
            .headers()
            .get(header::HOST)
            .and_then(|h| h.to_str().ok())
            .map(str::to_string)
            .unwrap_or_else(|| req.connection_info().host().to_string());

        Self::new(scheme, host, Utc::now())
    }

    /// `<scheme>://<host>`
    pub fn origin(&self) -> String {
        format!("{}://{}", self.scheme, self.host)
    }

    /// Where the gateway redirects the customer once payment completes.
    /// The client app reads `payment_success` and `amount` (the credit count)
    /// from the query string; nothing about it is signed.
    pub fn return_url(&self, credits_to_add: i64) -> String {
        format!(
            "{}/?payment_success=true&amount={}",
            self.origin(),
            credits_to_add
        )
    }

    /// `TX-<epoch millis>`
    pub fn generated_tx_ref(&self) -> String {
        format!("TX-{}", self.requested_at.timestamp_millis())
    }
}
