// HTTP request handlers for the authorization relay
pub mod auth;
pub mod callback;
pub mod static_files;


// Re-export the main handler functions
pub use auth::{shopee_authorization_link, shopee_authorize, shopee_deauthorize};
pub use callback::{auth_callback, deauth_callback};
pub use static_files::health;

use crate::settings::RelaySettings;
use actix_web::web;

/// Register every relay route
///
/// Expects `web::Data<RelaySettings>` and `web::Data<dyn AuthCodeForwarder>`
/// in app data.
pub fn configure_services(cfg: &mut web::ServiceConfig, settings: &RelaySettings) {
    cfg
        // Shopee redirect landings
        .route(&settings.shopee.redirect_path, web::get().to(auth_callback))
        .route(
            &settings.shopee.deauth_redirect_path,
            web::get().to(deauth_callback),
        )
        // Link endpoints
        .route("/auth/shopee/authorize", web::get().to(shopee_authorize))
        .route("/auth/shopee/deauthorize", web::get().to(shopee_deauthorize))
        .route("/auth/shopee/link", web::get().to(shopee_authorization_link))
        // Health endpoint
        .route("/ping", web::get().to(health));
}
