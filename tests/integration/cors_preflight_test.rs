// Integration tests for CORS preflight handling
// OPTIONS must succeed before any other check, whatever the body or config.

#[path = "../helpers/mod.rs"]
mod helpers;

use actix_web::{http::StatusCode, test};
use helpers::*;

#[actix_web::test]
async fn test_preflight_returns_empty_200_with_cors_headers() {
    let gateway = FakeGateway::ready(TEST_CHECKOUT_URL);
    let app = helpers::init_app!(configured_service(gateway.clone())).await;

    let req = test::TestRequest::default()
        .method(actix_web::http::Method::OPTIONS)
        .uri("/api/chapa")
        .insert_header(("Origin", "https://app.example.et"))
        .insert_header(("Access-Control-Request-Method", "POST"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_cors_headers(resp.headers());

    let body = test::read_body(resp).await;
    assert!(body.is_empty());
    assert_eq!(gateway.call_count(), 0);
}

#[actix_web::test]
async fn test_preflight_ignores_body_content() {
    let gateway = FakeGateway::ready(TEST_CHECKOUT_URL);
    let app = helpers::init_app!(configured_service(gateway.clone())).await;

    for payload in ["", "{not json", r#"{"amount": 0}"#, r#"{"amount": 10000}"#] {
        let req = test::TestRequest::default()
            .method(actix_web::http::Method::OPTIONS)
            .uri("/api/chapa")
            .set_payload(payload)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK, "payload: {}", payload);
    }

    assert_eq!(gateway.call_count(), 0);
}

#[actix_web::test]
async fn test_preflight_ignores_oversized_body() {
    let gateway = FakeGateway::ready(TEST_CHECKOUT_URL);
    let app = helpers::init_app!(configured_service(gateway.clone())).await;

    let req = test::TestRequest::default()
        .method(actix_web::http::Method::OPTIONS)
        .uri("/api/chapa")
        .insert_header(("Content-Type", "application/json"))
        .set_payload(TestDataFactory::oversized_checkout_body())
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_cors_headers(resp.headers());
    let body = test::read_body(resp).await;
    assert!(body.is_empty());
    assert_eq!(gateway.call_count(), 0);
}

#[actix_web::test]
async fn test_preflight_succeeds_without_gateway_secret() {
    let gateway = FakeGateway::ready(TEST_CHECKOUT_URL);
    let app = helpers::init_app!(unconfigured_service(gateway.clone())).await;

    let req = test::TestRequest::default()
        .method(actix_web::http::Method::OPTIONS)
        .uri("/api/chapa")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_cors_headers(resp.headers());
    assert_eq!(gateway.call_count(), 0);
}

#[actix_web::test]
async fn test_cors_headers_on_configuration_error() {
    let gateway = FakeGateway::ready(TEST_CHECKOUT_URL);
    let app = helpers::init_app!(unconfigured_service(gateway)).await;

    let req = test::TestRequest::post()
        .uri("/api/chapa")
        .set_json(serde_json::json!({ "amount": 10000 }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_cors_headers(resp.headers());
}

#[actix_web::test]
async fn test_cors_headers_on_validation_error() {
    let gateway = FakeGateway::ready(TEST_CHECKOUT_URL);
    let app = helpers::init_app!(configured_service(gateway)).await;

    let req = test::TestRequest::post()
        .uri("/api/chapa")
        .set_json(serde_json::json!({}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_cors_headers(resp.headers());
}

#[actix_web::test]
async fn test_cors_headers_on_oversized_body() {
    let gateway = FakeGateway::ready(TEST_CHECKOUT_URL);
    let app = helpers::init_app!(configured_service(gateway)).await;

    let req = test::TestRequest::post()
        .uri("/api/chapa")
        .insert_header(("Content-Type", "application/json"))
        .set_payload(TestDataFactory::oversized_checkout_body())
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::PAYLOAD_TOO_LARGE);
    assert_cors_headers(resp.headers());
}
