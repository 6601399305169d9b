pub mod checkout_context;
pub mod payment_request;

pub use checkout_context::CheckoutContext;
pub use payment_request::{
    Amount, CheckoutResponse, IncomingPaymentRequest, AMOUNT_REQUIRED_MESSAGE, CREDIT_UNIT_PRICE,
};
