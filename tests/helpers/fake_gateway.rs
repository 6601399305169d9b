// In-process Payment Gateway Fake
//
// Stands in for Chapa behind the PaymentGateway trait so handler tests can
// assert on exactly what was sent and how many times.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use actix_web::web;
use async_trait::async_trait;
use chapa_checkout::core::{AppError, Result};
use chapa_checkout::gateways::{InitializeOutcome, InitializeRequest, PaymentGateway};
use chapa_checkout::payments::CheckoutService;
use serde_json::Value;

pub const TEST_SECRET_KEY: &str = "CHASECK_TEST-integration-secret";

/// How the fake answers every call
#[derive(Debug, Clone)]
pub enum FakeReply {
    Ready(String),
    Rejected(Value),
    TransportFailure,
}

/// Call recorded by the fake
#[derive(Debug, Clone)]
pub struct RecordedInitialize {
    pub secret_key: String,
    pub request: InitializeRequest,
}

pub struct FakeGateway {
    reply: FakeReply,
    calls: AtomicUsize,
    recorded: Mutex<Vec<RecordedInitialize>>,
}

impl FakeGateway {
    pub fn new(reply: FakeReply) -> Arc<Self> {
        Arc::new(Self {
            reply,
            calls: AtomicUsize::new(0),
            recorded: Mutex::new(Vec::new()),
        })
    }

    /// Answers every call with a checkout URL
    pub fn ready(checkout_url: &str) -> Arc<Self> {
        Self::new(FakeReply::Ready(checkout_url.to_string()))
    }

    /// Answers every call with a rejection carrying `message`
    pub fn rejecting(message: Value) -> Arc<Self> {
        Self::new(FakeReply::Rejected(message))
    }

    /// Fails every call the way an unreachable host does
    pub fn unreachable() -> Arc<Self> {
        Self::new(FakeReply::TransportFailure)
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_call(&self) -> Option<RecordedInitialize> {
        self.recorded.lock().unwrap().last().cloned()
    }

    pub fn last_request(&self) -> Option<InitializeRequest> {
        self.last_call().map(|call| call.request)
    }
}

#[async_trait]
impl PaymentGateway for FakeGateway {
    async fn initialize_transaction(
        &self,
        secret_key: &str,
        request: &InitializeRequest,
    ) -> Result<InitializeOutcome> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.recorded.lock().unwrap().push(RecordedInitialize {
            secret_key: secret_key.to_string(),
            request: request.clone(),
        });

        match &self.reply {
            FakeReply::Ready(url) => Ok(InitializeOutcome::CheckoutReady {
                checkout_url: url.clone(),
            }),
            FakeReply::Rejected(message) => Ok(InitializeOutcome::Rejected {
                message: message.clone(),
            }),
            FakeReply::TransportFailure => Err(AppError::transport(
                "tcp connect error: Connection refused (os error 111)",
            )),
        }
    }

    fn name(&self) -> &str {
        "fake"
    }
}

/// Checkout service wired to `gateway`, configured with the test secret
pub fn configured_service(gateway: Arc<FakeGateway>) -> web::Data<CheckoutService> {
    web::Data::new(CheckoutService::new(
        gateway,
        Some(TEST_SECRET_KEY.to_string()),
    ))
}

/// Checkout service wired to `gateway` but without a secret key
pub fn unconfigured_service(gateway: Arc<FakeGateway>) -> web::Data<CheckoutService> {
    web::Data::new(CheckoutService::new(gateway, None))
}
