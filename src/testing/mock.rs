//! Mock objects and fake implementations for testing
//!
//! This module provides a fake token-exchange backend that records every
//! forwarded request and replays a canned result.

use crate::backend::{AuthCodeForwarder, ForwardError};
use crate::models::AuthCodeRequest;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Mutex;

/// Recording forwarder with a fixed response
pub struct MockForwarder {
    response: Result<Value, ForwardError>,
    calls: Mutex<Vec<AuthCodeRequest>>,
}

impl MockForwarder {
    /// Forwarder whose backend always answers with `payload`
    #[must_use]
    pub fn succeeding(payload: Value) -> Self {
        Self {
            response: Ok(payload),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Forwarder whose backend always fails with `error`
    #[must_use]
    pub fn failing(error: ForwardError) -> Self {
        Self {
            response: Err(error),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Requests received so far, in order
    ///
    /// # Panics
    ///
    /// Panics if the call log mutex is poisoned.
    #[must_use]
    pub fn calls(&self) -> Vec<AuthCodeRequest> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl AuthCodeForwarder for MockForwarder {
    async fn forward_auth_code(&self, request: &AuthCodeRequest) -> Result<Value, ForwardError> {
        self.calls
            .lock()
            .map_err(|e| ForwardError::Request(e.to_string()))?
            .push(request.clone());
        self.response.clone()
    }
}
