#![warn(clippy::pedantic)]
#![warn(clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

/// Version of the relay
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod backend;
pub mod handlers;
pub mod models;
pub mod redirect;
pub mod settings;
pub mod shopee;
pub mod utils;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

/// Re-export commonly used items
pub use backend::{AuthCodeForwarder, BackendClient, ForwardError};
pub use handlers::configure_services;
pub use models::{AuthCodeRequest, RedirectParams};
pub use redirect::{handle_redirect, handle_redirect_url, RedirectOutcome};
pub use settings::RelaySettings;
pub use shopee::AuthLinkBuilder;
