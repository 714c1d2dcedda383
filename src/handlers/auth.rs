// Shopee authorization link handlers
use crate::models::AuthLinkResponse;
use crate::settings::RelaySettings;
use crate::shopee::{AuthLinkBuilder, ShopeeError};
use crate::utils::logging::LoggingHelper;
use crate::utils::responses::ResponseBuilder;
use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse};

#[derive(Clone, Copy)]
enum LinkKind {
    Authorization,
    Deauthorization,
}

impl LinkKind {
    const fn label(self) -> &'static str {
        match self {
            Self::Authorization => "authorization",
            Self::Deauthorization => "deauthorization",
        }
    }
}

fn build_link(settings: &RelaySettings, kind: LinkKind) -> Result<String, ShopeeError> {
    let builder = AuthLinkBuilder::from_settings(settings)?;
    let timestamp = chrono::Utc::now().timestamp();
    match kind {
        LinkKind::Authorization => builder.authorization_link(timestamp),
        LinkKind::Deauthorization => builder.deauthorization_link(timestamp),
    }
}

fn link_error(kind: LinkKind, err: &ShopeeError) -> HttpResponse {
    LoggingHelper::log_link_unavailable(kind.label(), &err.to_string());
    let error = match err {
        ShopeeError::Configuration(_) => "configuration_error",
        ShopeeError::Url(_) => "link_error",
    };
    ResponseBuilder::json_error(StatusCode::INTERNAL_SERVER_ERROR, error, &err.to_string())
}

/// Redirect the merchant to Shopee's authorization page
pub async fn shopee_authorize(settings: web::Data<RelaySettings>) -> HttpResponse {
    match build_link(&settings, LinkKind::Authorization) {
        Ok(link) => ResponseBuilder::redirect(&link),
        Err(e) => link_error(LinkKind::Authorization, &e),
    }
}

/// Redirect the merchant to Shopee's cancel-authorization page
pub async fn shopee_deauthorize(settings: web::Data<RelaySettings>) -> HttpResponse {
    match build_link(&settings, LinkKind::Deauthorization) {
        Ok(link) => ResponseBuilder::redirect(&link),
        Err(e) => link_error(LinkKind::Deauthorization, &e),
    }
}

/// Return the authorization link as JSON for front ends that open it themselves
pub async fn shopee_authorization_link(settings: web::Data<RelaySettings>) -> HttpResponse {
    match build_link(&settings, LinkKind::Authorization) {
        Ok(url) => HttpResponse::Ok().json(AuthLinkResponse { url }),
        Err(e) => link_error(LinkKind::Authorization, &e),
    }
}
