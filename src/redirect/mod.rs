//! Redirect landing
//!
//! Shopee sends the browser back to the redirect path with `code` and, for
//! merchant-level authorization, `main_account_id` in the query string. When a
//! code is present it is forwarded exactly once to the token-exchange backend.
//! The outcome is only logged.

use crate::backend::AuthCodeForwarder;
use crate::models::{AuthCodeRequest, RedirectParams};
use crate::utils::logging::LoggingHelper;
use url::{form_urlencoded, Url};

/// What happened to a redirect
#[derive(Debug, Clone, PartialEq)]
pub enum RedirectOutcome {
    /// No authorization code, nothing was sent
    Skipped,
    /// Backend accepted the code; carries its JSON payload
    Forwarded(serde_json::Value),
    /// The request failed; carries the logged message
    Failed(String),
}

impl RedirectParams {
    /// Read the parameters from a full page URL
    #[must_use]
    pub fn from_url(url: &Url) -> Self {
        Self::from_query(url.query().unwrap_or_default())
    }

    /// Read the parameters from a raw query string (without the leading `?`)
    ///
    /// Repeated keys keep their first value.
    #[must_use]
    pub fn from_query(query: &str) -> Self {
        let mut params = Self::default();
        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            match key.as_ref() {
                "code" if params.code.is_none() => params.code = Some(value.into_owned()),
                "main_account_id" if params.main_account_id.is_none() => {
                    params.main_account_id = Some(value.into_owned());
                }
                _ => {}
            }
        }
        params
    }

    /// Body to post, or `None` when there is no usable code
    #[must_use]
    pub fn auth_code_request(&self) -> Option<AuthCodeRequest> {
        let code = self.code.as_deref().filter(|code| !code.is_empty())?;
        Some(AuthCodeRequest {
            auth_code: code.to_string(),
            main_account_id: self.main_account_id.clone(),
        })
    }
}

/// Forward the authorization code carried by a redirect, if any
///
/// Never fails: forwarding errors are logged and reported as
/// [`RedirectOutcome::Failed`].
pub async fn handle_redirect(
    params: &RedirectParams,
    forwarder: &dyn AuthCodeForwarder,
) -> RedirectOutcome {
    let Some(request) = params.auth_code_request() else {
        LoggingHelper::log_redirect_without_code();
        return RedirectOutcome::Skipped;
    };

    LoggingHelper::log_forward_start(request.main_account_id.as_deref());

    match forwarder.forward_auth_code(&request).await {
        Ok(payload) => {
            LoggingHelper::log_token_fetched(&payload);
            RedirectOutcome::Forwarded(payload)
        }
        Err(e) => {
            LoggingHelper::log_token_fetch_failed(&e);
            RedirectOutcome::Failed(e.to_string())
        }
    }
}

/// Parse a page URL and forward its authorization code, if any
///
/// An unparseable URL is treated like a URL without a code.
pub async fn handle_redirect_url(url: &str, forwarder: &dyn AuthCodeForwarder) -> RedirectOutcome {
    match Url::parse(url) {
        Ok(url) => handle_redirect(&RedirectParams::from_url(&url), forwarder).await,
        Err(e) => {
            log::warn!("Ignoring unparseable redirect URL: {e}");
            RedirectOutcome::Skipped
        }
    }
}
