// Centralized logging for the relay's redirect and link flows
use crate::backend::ForwardError;
use crate::settings::RelaySettings;
use log::{debug, error, info, warn};

pub struct LoggingHelper;

impl LoggingHelper {
    /// Log that a redirect arrived without an authorization code
    pub fn log_redirect_without_code() {
        debug!("Redirect received without authorization code, nothing to forward");
    }

    /// Log the start of a token-exchange request
    pub fn log_forward_start(main_account_id: Option<&str>) {
        match main_account_id {
            Some(account) => info!(
                "🔄 Forwarding authorization code to backend (main_account_id={account})"
            ),
            None => info!("🔄 Forwarding authorization code to backend"),
        }
    }

    /// Log a successful token exchange with the backend payload
    pub fn log_token_fetched(payload: &serde_json::Value) {
        info!("Token fetched {payload}");
    }

    /// Log a failed token exchange
    pub fn log_token_fetch_failed(err: &ForwardError) {
        error!("Error fetching token {err}");
    }

    /// Log the return from a cancel-authorization redirect
    pub fn log_deauthorization_return(query: &str) {
        info!("Shopee deauthorization redirect received ({query})");
    }

    /// Log a generated Shopee link without its signature
    pub fn log_link_built(kind: &str, timestamp: i64) {
        debug!("🔍 Built Shopee {kind} link at timestamp {timestamp}");
    }

    /// Log a link request that could not be served
    pub fn log_link_unavailable(kind: &str, reason: &str) {
        warn!("Cannot build Shopee {kind} link: {reason}");
    }

    /// Log startup configuration
    pub fn log_startup(settings: &RelaySettings) {
        info!(
            "Starting Shopee authorization relay on http://{}",
            settings.get_bind_address()
        );
        info!(
            "Redirect landing: {}{}",
            settings.application.redirect_base_url, settings.shopee.redirect_path
        );
        info!("Token exchange endpoint: {}", settings.auth_code_endpoint());
        if settings.backend.csrf_token.is_empty() {
            warn!("No anti-forgery token configured; the backend may reject forwarded codes");
        }
        if settings.shopee.partner_id.is_none() || settings.shopee.partner_key.is_none() {
            warn!("Shopee partner credentials missing; authorization links are disabled");
        }
    }
}
