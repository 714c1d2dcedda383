use super::ShopeeError;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use std::fmt::Write as _;

type HmacSha256 = Hmac<Sha256>;

/// Optional parts appended to the signed base string
///
/// Public APIs sign none of them. Shop APIs add the access token and shop id,
/// merchant APIs the access token and merchant id.
#[derive(Debug, Default, Clone, Copy)]
pub struct SignatureExtras<'a> {
    pub access_token: Option<&'a str>,
    pub shop_id: Option<&'a str>,
    pub merchant_id: Option<&'a str>,
}

/// Sign a Shopee API path
///
/// The base string is `partner_id + path + timestamp` followed by any present
/// extras in field order. Returns the lowercase hex HMAC-SHA256 keyed by the
/// partner key.
///
/// # Errors
///
/// Returns a configuration error if the partner key is empty
pub fn generate_signature(
    partner_id: &str,
    path: &str,
    timestamp: i64,
    partner_key: &str,
    extras: SignatureExtras<'_>,
) -> Result<String, ShopeeError> {
    if partner_key.is_empty() {
        return Err(ShopeeError::Configuration("Shopee partner key is empty".to_string()));
    }

    let mut message = format!("{partner_id}{path}{timestamp}");
    for part in [extras.access_token, extras.shop_id, extras.merchant_id]
        .into_iter()
        .flatten()
    {
        message.push_str(part);
    }

    let mut mac = <HmacSha256 as Mac>::new_from_slice(partner_key.as_bytes())
        .map_err(|e| ShopeeError::Configuration(e.to_string()))?;
    mac.update(message.as_bytes());

    Ok(mac
        .finalize()
        .into_bytes()
        .iter()
        .fold(String::with_capacity(64), |mut hex, byte| {
            let _ = write!(hex, "{byte:02x}");
            hex
        }))
}
