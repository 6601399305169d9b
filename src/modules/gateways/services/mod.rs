pub mod chapa;
pub mod gateway_trait;

pub use chapa::ChapaClient;
pub use gateway_trait::{Customization, InitializeOutcome, InitializeRequest, PaymentGateway};
