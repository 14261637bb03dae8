use std::sync::Arc;

use actix_web::{web, HttpServer};
use dotenvy::dotenv;
use log::{info, warn};

use ep_api::{create_app, AppState};
use ep_core::services::{ContactService, ContactServiceConfig};
use ep_shared::config::AppConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting The Empowering Path API server");

    // Load configuration
    let config = AppConfig::from_env()?;
    info!(
        "Environment: {:?}, captcha provider: {:?}, email provider: {:?}",
        config.environment, config.contact.captcha_provider, config.contact.email_provider
    );

    if config.contact.recaptcha_site_key.is_none() {
        warn!("RECAPTCHA_SITE_KEY is not set; the contact form widget cannot be rendered");
    }

    // Wire providers into the contact relay
    let providers = ep_infra::initialize(&config.contact)?;
    let contact_service = Arc::new(ContactService::new(
        providers.captcha_verifier,
        providers.email_sender,
        ContactServiceConfig::from(&config.contact),
    ));

    let app_state = web::Data::new(AppState::new(contact_service, &config));
    let cors_config = config.cors.clone();

    let bind_address = config.server.bind_address();
    info!("Server will bind to: {}", bind_address);

    let mut server = HttpServer::new(move || create_app(app_state.clone(), &cors_config));
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server.bind(&bind_address)?.run().await?;

    Ok(())
}
