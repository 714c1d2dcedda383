use super::{generate_signature, ShopeeError, SignatureExtras};
use crate::settings::RelaySettings;
use crate::utils::logging::LoggingHelper;
use url::Url;

/// Path that starts shop authorization
pub const AUTH_PARTNER_PATH: &str = "/api/v2/shop/auth_partner";

/// Path that cancels shop authorization
pub const CANCEL_AUTH_PARTNER_PATH: &str = "/api/v2/shop/cancel_auth_partner";

/// Builds signed Shopee authorization and deauthorization links
#[derive(Debug, Clone)]
pub struct AuthLinkBuilder {
    host: String,
    partner_id: String,
    partner_key: String,
    redirect_url: String,
    deauth_redirect_url: String,
}

impl AuthLinkBuilder {
    /// # Errors
    ///
    /// Returns a configuration error if the partner id or key is missing
    pub fn from_settings(settings: &RelaySettings) -> Result<Self, ShopeeError> {
        let shopee = &settings.shopee;
        let partner_id = Self::required(shopee.partner_id.as_deref(), "partner id")?;
        let partner_key = Self::required(shopee.partner_key.as_deref(), "partner key")?;
        let base = settings.application.redirect_base_url.trim_end_matches('/');

        Ok(Self {
            host: shopee.host.trim_end_matches('/').to_string(),
            partner_id,
            partner_key,
            redirect_url: format!("{base}{}", shopee.redirect_path),
            deauth_redirect_url: format!("{base}{}", shopee.deauth_redirect_path),
        })
    }

    // Empty values count as missing, whichever source they came from
    fn required(value: Option<&str>, name: &str) -> Result<String, ShopeeError> {
        value
            .filter(|v| !v.is_empty())
            .map(ToString::to_string)
            .ok_or_else(|| {
                ShopeeError::Configuration(format!("Shopee {name} is not configured"))
            })
    }

    /// Link that asks the merchant to authorize the partner app
    ///
    /// # Errors
    ///
    /// Returns an error if signing fails or the host is not a valid URL
    pub fn authorization_link(&self, timestamp: i64) -> Result<String, ShopeeError> {
        let link = self.build(AUTH_PARTNER_PATH, &self.redirect_url, timestamp)?;
        LoggingHelper::log_link_built("authorization", timestamp);
        Ok(link)
    }

    /// Link that asks the merchant to cancel the authorization
    ///
    /// # Errors
    ///
    /// Returns an error if signing fails or the host is not a valid URL
    pub fn deauthorization_link(&self, timestamp: i64) -> Result<String, ShopeeError> {
        let link = self.build(CANCEL_AUTH_PARTNER_PATH, &self.deauth_redirect_url, timestamp)?;
        LoggingHelper::log_link_built("deauthorization", timestamp);
        Ok(link)
    }

    fn build(&self, path: &str, redirect: &str, timestamp: i64) -> Result<String, ShopeeError> {
        let sign = generate_signature(
            &self.partner_id,
            path,
            timestamp,
            &self.partner_key,
            SignatureExtras::default(),
        )?;

        let mut url = Url::parse(&format!("{}{path}", self.host))?;
        url.query_pairs_mut()
            .append_pair("partner_id", &self.partner_id)
            .append_pair("timestamp", &timestamp.to_string())
            .append_pair("sign", &sign)
            .append_pair("redirect", redirect);

        Ok(url.into())
    }
}
