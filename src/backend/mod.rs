//! Token-exchange backend
//!
//! The relay never exchanges authorization codes itself. It hands them to the
//! backend method that owns the partner credentials, through the
//! [`AuthCodeForwarder`] seam so handlers can be exercised without a network.

pub mod client;

pub use client::BackendClient;

use crate::models::AuthCodeRequest;
use async_trait::async_trait;
use thiserror::Error;

/// Failure while forwarding an authorization code
#[derive(Debug, Clone, Error)]
pub enum ForwardError {
    /// Transport failure (connect, TLS, invalid header, body write)
    #[error("request failed: {0}")]
    Request(String),
    /// Backend answered with a non-2xx status
    #[error("backend responded with status {status}: {body}")]
    Status { status: u16, body: String },
    /// Backend answered 2xx but the body was not JSON
    #[error("invalid JSON response: {0}")]
    Decode(String),
}

/// Forwards an authorization code to the token-exchange endpoint
#[async_trait]
pub trait AuthCodeForwarder: Send + Sync {
    /// Post the code and return the backend's JSON payload
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The request cannot be sent or the connection fails
    /// - The backend responds with a non-success status
    /// - The response body is not valid JSON
    async fn forward_auth_code(
        &self,
        request: &AuthCodeRequest,
    ) -> Result<serde_json::Value, ForwardError>;
}
