use actix_web::{http::Method, web, HttpMessage, HttpRequest, HttpResponse};
use futures_util::StreamExt;
use tracing::debug;

use crate::core::{AppError, Result};
use crate::middleware::RequestIdValue;
use crate::modules::payments::models::{CheckoutContext, IncomingPaymentRequest};
use crate::modules::payments::services::CheckoutService;

pub const CHECKOUT_PATH: &str = "/api/chapa";

/// Largest request body read for a checkout (256 KiB)
pub const MAX_BODY_SIZE: usize = 262_144;

/// Initialize a Chapa checkout
///
/// ANY /api/chapa
///
/// Checks run in a fixed order and the first failure wins:
/// 1. `OPTIONS` answers the CORS preflight with an empty 200
/// 2. missing gateway secret gives 500
/// 3. anything but `POST` gives 405
/// 4. missing or falsy `amount` gives 400
///
/// The body is only read once the first three checks pass, so neither the
/// preflight nor the configuration error depends on what the client sent.
///
/// # Returns
/// * `200 OK` - `{ "success": true, "checkout_url": ... }`
/// * `400 Bad Request` - validation failure or gateway rejection
/// * `405 Method Not Allowed`
/// * `413 Payload Too Large` - body over [`MAX_BODY_SIZE`]
/// * `500 Internal Server Error` - configuration or transport failure
pub async fn initialize_checkout(
    req: HttpRequest,
    payload: web::Payload,
    service: web::Data<CheckoutService>,
) -> Result<HttpResponse> {
    if req.method() == Method::OPTIONS {
        return Ok(HttpResponse::Ok().finish());
    }

    service.ensure_configured()?;

    if req.method() != Method::POST {
        return Err(AppError::method_not_allowed(req.method().as_str()));
    }

    let body = read_body(payload).await?;
    let request = IncomingPaymentRequest::from_body(&body);
    let context = CheckoutContext::from_request(&req);

    let request_id = req
        .extensions()
        .get::<RequestIdValue>()
        .map(|id| id.0.clone())
        .unwrap_or_default();
    debug!(
        request_id = %request_id,
        origin = %context.origin(),
        body_bytes = body.len(),
        "Checkout request received"
    );

    let response = service.initialize_checkout(&request, &context).await?;

    Ok(HttpResponse::Ok().json(response))
}

async fn read_body(mut payload: web::Payload) -> Result<web::Bytes> {
    let mut body = web::BytesMut::new();
    while let Some(chunk) = payload.next().await {
        let chunk = chunk?;
        if body.len() + chunk.len() > MAX_BODY_SIZE {
            return Err(AppError::PayloadTooLarge(MAX_BODY_SIZE));
        }
        body.extend_from_slice(&chunk);
    }
    Ok(body.freeze())
}

/// Configure checkout routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource(CHECKOUT_PATH).to(initialize_checkout));
}
