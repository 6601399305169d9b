pub mod checkout_controller;

pub use checkout_controller::{configure, initialize_checkout, CHECKOUT_PATH, MAX_BODY_SIZE};
