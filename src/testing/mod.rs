//! Testing utilities for the relay
//!
//! - [`mock`] - Recording fake of the token-exchange backend
//! - [`logger`] - Per-thread capturing logger
//!
//! ## Usage
//!
//! ```rust,ignore
//! use shopee_auth_relay::testing::MockForwarder;
//!
//! let forwarder = MockForwarder::succeeding(serde_json::json!({"message": "ok"}));
//! assert!(forwarder.calls().is_empty());
//! ```

pub mod logger;
pub mod mock;

pub use logger::{capture_logs, captured_logs, logs_containing, CapturedLog};
pub use mock::MockForwarder;

/// Common test constants
pub mod constants {
    /// Authorization code used across tests
    pub const TEST_AUTH_CODE: &str = "ABC123";

    /// Merchant account id used across tests
    pub const TEST_MAIN_ACCOUNT_ID: &str = "42";
}
