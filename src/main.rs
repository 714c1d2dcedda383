#![warn(clippy::pedantic)]
#![warn(clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use anyhow::Context;
use shopee_auth_relay::{
    configure_services, utils::logging::LoggingHelper, AuthCodeForwarder, BackendClient,
    RelaySettings,
};
use std::sync::Arc;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Loads .env, Settings.toml and environment overrides, and installs the logger
    let settings = RelaySettings::load().context("Failed to load settings")?;

    let forwarder: Arc<dyn AuthCodeForwarder> = Arc::new(BackendClient::from_settings(&settings));

    start_server(settings, forwarder)
        .await
        .context("Server terminated with an error")
}

/// Start the relay server
///
/// # Errors
///
/// Returns an error if:
/// - Server binding fails
/// - Server fails to start
async fn start_server(
    settings: RelaySettings,
    forwarder: Arc<dyn AuthCodeForwarder>,
) -> std::io::Result<()> {
    let bind_address = settings.get_bind_address();
    LoggingHelper::log_startup(&settings);

    let cors_origins = settings.get_cors_origins();

    HttpServer::new(move || {
        let cors_origins = cors_origins.clone();
        let cors = Cors::default()
            .allowed_origin_fn(move |origin, _| {
                cors_origins
                    .iter()
                    .any(|allowed| allowed == origin.to_str().unwrap_or(""))
            })
            .allowed_methods(vec!["GET", "OPTIONS"])
            .allowed_headers(vec!["Content-Type", "Accept"])
            .max_age(3600);

        let settings = settings.clone();
        App::new()
            .app_data(web::Data::new(settings.clone()))
            .app_data(web::Data::from(forwarder.clone()))
            .wrap(cors)
            .wrap(Logger::default())
            .configure(move |cfg| configure_services(cfg, &settings))
    })
    .bind(&bind_address)?
    .run()
    .await
}
