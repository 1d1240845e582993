//! # API crate: the marketplace backend, as seen from the web app
//!
//! Everything the frontend needs to talk to the external marketplace REST
//! backend, plus the one server function the web server itself provides.
//!
//! ## Modules
//!
//! | Module | Feature gate | Purpose |
//! |--------|-------------|---------|
//! | [`client`] | - | [`ApiClient`]: bearer-token REST client, one method per backend endpoint |
//! | [`models`] | - | Wire models (profile, KYC, plans, orders, media kit, channels, signup payloads) |
//! | [`validation`] | - | Regex-based input checks run before a request is sent |
//! | [`flows`] | - | Forward-only state machines for signup, purchase and account linking |
//! | [`error`] | - | [`ApiError`] |
//! | [`settings`] | `server` | Loads `marketplace.toml` + environment overrides |
//!
//! ## Server functions exposed here
//!
//! - `get_client_config` (`GET /app/config`): the runtime [`MarketplaceConfig`]
//!   (backend URL, payment key). Compiled twice, like every Dioxus server
//!   function: once with the server logic behind `#[cfg(feature = "server")]`
//!   and once as a client stub that forwards the call over HTTP.

use dioxus::prelude::*;

pub mod client;
pub mod error;
pub mod flows;
pub mod models;
#[cfg(feature = "server")]
pub mod settings;
pub mod validation;

pub use client::ApiClient;
pub use error::ApiError;
pub use flows::FlowError;
pub use models::{Profile, Role};
pub use validation::ValidationError;

pub use store::MarketplaceConfig;

/// Get the client configuration (backend URL, payment key).
#[cfg(feature = "server")]
#[get("/app/config")]
pub async fn get_client_config() -> Result<MarketplaceConfig, ServerFnError> {
    let config = settings::get_config()
        .await
        .map_err(|e| ServerFnError::new(e))?;
    Ok(config.clone())
}

#[cfg(not(feature = "server"))]
#[get("/app/config")]
pub async fn get_client_config() -> Result<MarketplaceConfig, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}
