//! Shopee open-platform authorization links
//!
//! Authorization starts by sending the merchant to a signed Shopee URL. Shopee
//! then redirects back to the relay's landing path with the authorization code.

pub mod links;
pub mod signature;

pub use links::{AuthLinkBuilder, AUTH_PARTNER_PATH, CANCEL_AUTH_PARTNER_PATH};
pub use signature::{generate_signature, SignatureExtras};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ShopeeError {
    #[error("Configuration error: {0}")]
    Configuration(String),
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),
}
