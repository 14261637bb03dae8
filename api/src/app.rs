//! Application state and factory
//!
//! This module holds the shared application state and provides the factory
//! for creating the Actix-web application, used by both the binary and the
//! endpoint tests.

use std::sync::Arc;

use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{middleware::Logger, web, App, HttpResponse};

use ep_core::services::ContactService;
use ep_shared::config::{AppConfig, CorsConfig, Environment};

use crate::handlers::json_error_handler;
use crate::middleware::{cors::create_cors, security::SecurityMiddleware};
use crate::routes::contact::submit_contact;

/// Application state shared by every worker
pub struct AppState {
    /// Contact relay service
    pub contact_service: Arc<ContactService>,
    /// Deployment environment, drives the security headers
    pub environment: Environment,
    /// Maximum accepted JSON body size in bytes
    pub max_payload_size: usize,
}

impl AppState {
    pub fn new(contact_service: Arc<ContactService>, config: &AppConfig) -> Self {
        Self {
            contact_service,
            environment: config.environment,
            max_payload_size: config.server.max_payload_size,
        }
    }
}

/// Create and configure the application with all dependencies
pub fn create_app(
    app_state: web::Data<AppState>,
    cors_config: &CorsConfig,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let json_config = web::JsonConfig::default()
        .limit(app_state.max_payload_size)
        .content_type_required(false)
        .error_handler(json_error_handler);

    let cors = create_cors(cors_config);
    let security = SecurityMiddleware::for_environment(app_state.environment);

    App::new()
        // Add application state
        .app_data(app_state)
        .app_data(json_config)

        // Add middleware (last wrapped runs first: security, then CORS, then logging)
        .wrap(Logger::default())
        .wrap(cors)
        .wrap(security)

        // Health check endpoint
        .route("/health", web::get().to(health_check))

        // Contact relay
        .service(web::scope("/api").route("/contact", web::post().to(submit_contact)))

        // Default 404 handler
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "empowering-path-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({
        "error": "not_found",
        "message": "The requested resource was not found"
    }))
}
