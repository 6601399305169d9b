pub mod controllers;
pub mod models;
pub mod services;

pub use controllers::{configure, CHECKOUT_PATH, MAX_BODY_SIZE};
pub use models::{Amount, CheckoutContext, CheckoutResponse, IncomingPaymentRequest};
pub use services::CheckoutService;
