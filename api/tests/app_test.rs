//! Tests for the non-contact surface of the app: health, 404, headers

use std::sync::Arc;

use actix_web::http::{header, StatusCode};
use actix_web::{test, web};
use serde_json::Value;

use ep_api::{create_app, AppState};
use ep_core::services::{ContactService, ContactServiceConfig};
use ep_infra::{ConsoleEmailSender, MockCaptchaVerifier};
use ep_shared::config::{AppConfig, CorsConfig};

fn state() -> web::Data<AppState> {
    let service = ContactService::new(
        Arc::new(MockCaptchaVerifier::new()),
        Arc::new(ConsoleEmailSender::new()),
        ContactServiceConfig::default(),
    );
    web::Data::new(AppState::new(Arc::new(service), &AppConfig::default()))
}

#[actix_web::test]
async fn test_health_check() {
    let app = test::init_service(create_app(state(), &CorsConfig::development())).await;

    let resp = test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.headers().get(header::X_CONTENT_TYPE_OPTIONS).unwrap(), "nosniff");
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[actix_web::test]
async fn test_unknown_route_is_json_404() {
    let app = test::init_service(create_app(state(), &CorsConfig::development())).await;

    let resp = test::call_service(&app, test::TestRequest::get().uri("/api/nope").to_request()).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "not_found");
}

#[actix_web::test]
async fn test_contact_only_accepts_post() {
    let app = test::init_service(create_app(state(), &CorsConfig::development())).await;

    let resp = test::call_service(&app, test::TestRequest::get().uri("/api/contact").to_request()).await;

    assert!(resp.status().is_client_error());
}

#[actix_web::test]
async fn test_cors_preflight_for_contact() {
    let cors = CorsConfig {
        allow_any_origin: false,
        allowed_origins: vec!["https://theempoweringpath.com".to_string()],
        max_age: 600,
    };
    let app = test::init_service(create_app(state(), &cors)).await;

    let req = test::TestRequest::default()
        .method(actix_web::http::Method::OPTIONS)
        .uri("/api/contact")
        .insert_header((header::ORIGIN, "https://theempoweringpath.com"))
        .insert_header((header::ACCESS_CONTROL_REQUEST_METHOD, "POST"))
        .insert_header((header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert!(resp.status().is_success());
    assert_eq!(
        resp.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "https://theempoweringpath.com"
    );
}
