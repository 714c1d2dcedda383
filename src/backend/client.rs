use super::{AuthCodeForwarder, ForwardError};
use crate::models::AuthCodeRequest;
use crate::settings::RelaySettings;
use async_trait::async_trait;
use reqwest::header::ACCEPT;

/// reqwest-backed forwarder for the token-exchange method
///
/// No timeout and no retry: a single attempt per redirect.
#[derive(Clone, Debug)]
pub struct BackendClient {
    endpoint: String,
    csrf_header: String,
    csrf_token: String,
    http_client: reqwest::Client,
}

impl BackendClient {
    #[must_use]
    pub fn new(
        endpoint: impl Into<String>,
        csrf_header: impl Into<String>,
        csrf_token: impl Into<String>,
    ) -> Self {
        Self {
            endpoint: endpoint.into(),
            csrf_header: csrf_header.into(),
            csrf_token: csrf_token.into(),
            http_client: reqwest::Client::new(),
        }
    }

    #[must_use]
    pub fn from_settings(settings: &RelaySettings) -> Self {
        Self::new(
            settings.auth_code_endpoint(),
            settings.backend.csrf_header.clone(),
            settings.backend.csrf_token.clone(),
        )
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl AuthCodeForwarder for BackendClient {
    async fn forward_auth_code(
        &self,
        request: &AuthCodeRequest,
    ) -> Result<serde_json::Value, ForwardError> {
        log::debug!("Posting authorization code to {}", self.endpoint);

        let response = self
            .http_client
            .post(&self.endpoint)
            .header(ACCEPT, "application/json")
            .header(self.csrf_header.as_str(), self.csrf_token.as_str())
            .json(request)
            .send()
            .await
            .map_err(|e| ForwardError::Request(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ForwardError::Request(e.to_string()))?;

        if !status.is_success() {
            return Err(ForwardError::Status {
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_str(&body).map_err(|e| ForwardError::Decode(e.to_string()))
    }
}
