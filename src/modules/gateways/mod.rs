pub mod services;

pub use services::{ChapaClient, Customization, InitializeOutcome, InitializeRequest, PaymentGateway};
