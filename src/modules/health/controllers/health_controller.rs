use actix_web::{web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};

use crate::modules::payments::CheckoutService;

/// Health check response structure
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub checks: HealthChecks,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthChecks {
    pub gateway_configured: bool,
    pub application: String,
}

/// Readiness probe response structure
#[derive(Debug, Serialize, Deserialize)]
pub struct ReadinessResponse {
    pub ready: bool,
    pub checks: ReadinessChecks,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ReadinessChecks {
    pub gateway_configured: bool,
    pub application: bool,
}

/// GET /health - Liveness probe
/// Returns 200 if the application can respond to requests.
/// Never contacts the gateway.
pub async fn health_check(service: web::Data<CheckoutService>) -> impl Responder {
    let response = HealthResponse {
        status: "healthy".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        checks: HealthChecks {
            gateway_configured: service.is_configured(),
            application: "healthy".to_string(),
        },
    };

    HttpResponse::Ok().json(response)
}

/// GET /ready - Readiness probe
/// 503 while the gateway secret is missing, since every checkout would fail
pub async fn readiness_check(service: web::Data<CheckoutService>) -> impl Responder {
    let checks = ReadinessChecks {
        gateway_configured: service.is_configured(),
        application: true,
    };
    let ready = checks.gateway_configured && checks.application;

    if !ready {
        tracing::warn!("Readiness check failed: gateway secret not configured");
    }

    let response = ReadinessResponse { ready, checks };

    if ready {
        HttpResponse::Ok().json(response)
    } else {
        HttpResponse::ServiceUnavailable().json(response)
    }
}

/// Configure health check routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/ready", web::get().to(readiness_check));
}
