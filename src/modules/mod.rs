use actix_web::web;

pub mod gateways;
pub mod health;
pub mod payments;

/// Register every route the service exposes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.configure(payments::configure)
        .configure(health::configure);
}
