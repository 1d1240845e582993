//! # Client configuration: `marketplace.toml`
//!
//! Defines the runtime configuration the web app needs before it can talk to
//! anything: where the marketplace backend lives, which payment key the
//! checkout widget is opened with, and where the YouTube OAuth consent screen
//! sends the user back to.
//!
//! The web server reads the file (filename: [`MarketplaceConfig::filename`])
//! at startup, applies environment overrides, and serves the result to the
//! browser through the `get_client_config` server function.
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = "http://localhost:5000"
//!
//! [payments]
//! key_id = "rzp_test_xxx"
//! merchant_name = "Creator Marketplace"
//! currency = "INR"
//!
//! [social]
//! youtube_callback_path = "/dashboard/social/youtube/callback"
//! ```
//!
//! ## Types
//!
//! | Struct | Purpose |
//! |--------|---------|
//! | [`MarketplaceConfig`] | Top-level config with TOML (de)serialisation, override helpers and the canonical filename. |
//! | [`ApiConfig`] | Backend base URL. |
//! | [`PaymentsConfig`] | Checkout widget key, merchant label and currency. |
//! | [`SocialConfig`] | Path of the OAuth callback page. |
//!
//! Every section has production defaults, so a missing or empty file is
//! equivalent to the default configuration.

use serde::{Deserialize, Serialize};

/// Top-level configuration stored in `marketplace.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MarketplaceConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub payments: PaymentsConfig,
    #[serde(default)]
    pub social: SocialConfig,
}

/// Backend location.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the marketplace REST backend, without a trailing slash.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    "http://localhost:5000".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

/// Payment checkout settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PaymentsConfig {
    /// Public key id of the checkout widget. Empty disables purchasing.
    #[serde(default)]
    pub key_id: String,
    /// Name shown in the checkout widget header.
    #[serde(default = "default_merchant_name")]
    pub merchant_name: String,
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_merchant_name() -> String {
    "Creator Marketplace".to_string()
}

fn default_currency() -> String {
    "INR".to_string()
}

impl Default for PaymentsConfig {
    fn default() -> Self {
        Self {
            key_id: String::new(),
            merchant_name: default_merchant_name(),
            currency: default_currency(),
        }
    }
}

/// Social account linking settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SocialConfig {
    #[serde(default = "default_youtube_callback_path")]
    pub youtube_callback_path: String,
}

fn default_youtube_callback_path() -> String {
    "/dashboard/social/youtube/callback".to_string()
}

impl Default for SocialConfig {
    fn default() -> Self {
        Self {
            youtube_callback_path: default_youtube_callback_path(),
        }
    }
}

impl MarketplaceConfig {
    /// Create a config pointing at the given backend.
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut config = Self::default();
        config.api.base_url = normalize_base_url(&base_url.into());
        config
    }

    /// Builder method to set the checkout key.
    pub fn with_payment_key(mut self, key_id: impl Into<String>) -> Self {
        self.payments.key_id = key_id.into().trim().to_string();
        self
    }

    /// Apply optional overrides (typically read from the environment).
    /// Blank values are ignored.
    pub fn with_overrides(mut self, base_url: Option<String>, key_id: Option<String>) -> Self {
        if let Some(url) = base_url.filter(|u| !u.trim().is_empty()) {
            self.api.base_url = normalize_base_url(&url);
        }
        if let Some(key) = key_id.filter(|k| !k.trim().is_empty()) {
            self.payments.key_id = key.trim().to_string();
        }
        self
    }

    /// Whether the checkout widget can be opened.
    pub fn payments_enabled(&self) -> bool {
        !self.payments.key_id.is_empty()
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "marketplace.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        let mut config: Self = toml::from_str(s)?;
        config.api.base_url = normalize_base_url(&config.api.base_url);
        Ok(config)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_default() {
        let config = MarketplaceConfig::from_toml("").unwrap();
        assert_eq!(config, MarketplaceConfig::default());
        assert_eq!(config.api.base_url, "http://localhost:5000");
        assert_eq!(config.payments.currency, "INR");
        assert!(!config.payments_enabled());
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let config = MarketplaceConfig::from_toml(
            r#"
            [api]
            base_url = "https://api.example.com/"

            [payments]
            key_id = "rzp_test_123"
            "#,
        )
        .unwrap();

        // Trailing slash is dropped
        assert_eq!(config.api.base_url, "https://api.example.com");
        assert_eq!(config.payments.key_id, "rzp_test_123");
        assert_eq!(config.payments.merchant_name, "Creator Marketplace");
        assert_eq!(
            config.social.youtube_callback_path,
            "/dashboard/social/youtube/callback"
        );
        assert!(config.payments_enabled());
    }

    #[test]
    fn test_overrides_ignore_blank_values() {
        let config = MarketplaceConfig::new("http://a.test")
            .with_payment_key("key-a")
            .with_overrides(Some("  ".to_string()), None);
        assert_eq!(config.api.base_url, "http://a.test");
        assert_eq!(config.payments.key_id, "key-a");

        let config = config.with_overrides(Some("http://b.test/".to_string()), Some("key-b".to_string()));
        assert_eq!(config.api.base_url, "http://b.test");
        assert_eq!(config.payments.key_id, "key-b");
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = MarketplaceConfig::new("https://api.example.com").with_payment_key("rzp_live_1");
        let text = config.to_toml().unwrap();
        assert_eq!(MarketplaceConfig::from_toml(&text).unwrap(), config);
    }
}
