//! Chapa checkout service library
//!
//! A single endpoint that turns a client's credit purchase into a Chapa
//! hosted-checkout transaction and hands back the checkout URL.

pub mod config;
pub mod core;
pub mod middleware;
pub mod modules;
pub mod telemetry;

// Re-export commonly used types
pub use modules::gateways;
pub use modules::payments;
