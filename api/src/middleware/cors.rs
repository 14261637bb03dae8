//! CORS middleware configuration for cross-origin requests.
//!
//! The contact form is posted from the site's own pages. In development the
//! site runs on a separate dev server, so any origin is accepted; in
//! production only the origins listed in `ALLOWED_ORIGINS` are.

use actix_cors::Cors;
use actix_web::http::{header, Method};

use ep_shared::config::CorsConfig;

/// Creates a CORS middleware instance from configuration
pub fn create_cors(config: &CorsConfig) -> Cors {
    let mut cors = Cors::default()
        .allowed_methods(vec![Method::GET, Method::POST, Method::OPTIONS])
        .allowed_headers(vec![
            header::ACCEPT,
            header::CONTENT_TYPE,
            header::ORIGIN,
            header::HeaderName::from_static("x-request-id"),
            header::HeaderName::from_static("x-requested-with"),
        ])
        .expose_headers(vec![header::HeaderName::from_static("x-request-id")])
        .max_age(config.max_age);

    if config.allow_any_origin {
        log::info!("Configuring CORS to allow any origin");
        cors = cors.allow_any_origin();
    } else {
        if config.allowed_origins.is_empty() {
            log::warn!("ALLOWED_ORIGINS is empty; cross-origin requests will be refused");
        }
        for origin in &config.allowed_origins {
            log::info!("Adding allowed origin: {}", origin);
            cors = cors.allowed_origin(origin);
        }
    }

    cors
}
