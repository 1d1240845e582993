//! # Server-side configuration loading
//!
//! The web server owns the client configuration. On first use it reads the
//! TOML file named by `MARKETPLACE_CONFIG` (default `marketplace.toml` in the
//! working directory), then applies environment overrides:
//!
//! | Variable | Overrides |
//! |----------|-----------|
//! | `MARKETPLACE_API_URL` | `api.base_url` |
//! | `MARKETPLACE_PAYMENT_KEY_ID` | `payments.key_id` |
//!
//! `.env` files are honoured through `dotenvy`. The result is cached in a
//! process-wide [`tokio::sync::OnceCell`], the same way for every request.

use std::io::ErrorKind;

use store::MarketplaceConfig;
use tokio::sync::OnceCell;

static CONFIG: OnceCell<MarketplaceConfig> = OnceCell::const_new();

/// Get or load the client configuration.
pub async fn get_config() -> Result<&'static MarketplaceConfig, String> {
    CONFIG.get_or_try_init(|| async { load_config() }).await
}

fn load_config() -> Result<MarketplaceConfig, String> {
    dotenvy::dotenv().ok();

    let path = std::env::var("MARKETPLACE_CONFIG")
        .unwrap_or_else(|_| MarketplaceConfig::filename().to_string());

    let base = match std::fs::read_to_string(&path) {
        Ok(text) => {
            MarketplaceConfig::from_toml(&text).map_err(|e| format!("Invalid {path}: {e}"))?
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::info!("{} not found, using default configuration", path);
            MarketplaceConfig::default()
        }
        Err(e) => return Err(format!("Failed to read {path}: {e}")),
    };

    let config = base.with_overrides(
        std::env::var("MARKETPLACE_API_URL").ok(),
        std::env::var("MARKETPLACE_PAYMENT_KEY_ID").ok(),
    );
    tracing::info!("Marketplace backend: {}", config.api.base_url);
    if !config.payments_enabled() {
        tracing::warn!("No payment key configured, plan purchases are disabled");
    }
    Ok(config)
}
