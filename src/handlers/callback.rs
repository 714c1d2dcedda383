// Redirect landing handlers
use crate::backend::AuthCodeForwarder;
use crate::models::RedirectParams;
use crate::redirect::handle_redirect;
use crate::utils::logging::LoggingHelper;
use crate::utils::responses::ResponseBuilder;
use actix_web::{web, HttpRequest, HttpResponse};

use super::static_files::landing_page;

/// Shopee authorization redirect landing
///
/// Forwards the authorization code, if any, before answering. The page is the
/// same whatever the outcome; failures only reach the log.
pub async fn auth_callback(
    req: HttpRequest,
    forwarder: web::Data<dyn AuthCodeForwarder>,
) -> HttpResponse {
    let params = RedirectParams::from_query(req.query_string());
    handle_redirect(&params, forwarder.get_ref()).await;
    ResponseBuilder::html(landing_page("Shopee authorization received"))
}

/// Shopee cancel-authorization redirect landing
pub async fn deauth_callback(req: HttpRequest) -> HttpResponse {
    LoggingHelper::log_deauthorization_return(req.query_string());
    ResponseBuilder::html(landing_page("Shopee authorization cancelled"))
}
