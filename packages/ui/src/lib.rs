//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

pub mod components;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_brands_icons::{FaInstagram, FaYoutube};
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod views;

pub const MARKETPLACE_CSS: Asset = asset!("/assets/marketplace.css");

mod config;
pub use config::{use_client_config, ConfigProvider};

mod token;
pub use token::{make_token_store, PlatformTokenStore};

mod auth;
pub use auth::{use_api, use_auth, ApiHandle, AuthProvider, AuthState, LogoutButton};

mod navbar;
pub use navbar::Navbar;

mod timer;

pub mod notice;
pub use notice::{notify, use_notices, NoticeLevel, NoticeProvider};

mod otp_field;
pub use otp_field::{OtpField, OtpTarget};

pub mod checkout;
pub use checkout::CHECKOUT_SCRIPT_URL;

pub mod sections;

/// Log a rejected flow transition.
pub(crate) fn log_flow(result: Result<(), api::FlowError>) {
    if let Err(e) = result {
        tracing::warn!("{e}");
    }
}
