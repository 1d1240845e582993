//! Runtime client configuration context.

use dioxus::prelude::*;
use store::MarketplaceConfig;

/// Current client configuration.
pub fn use_client_config() -> Signal<MarketplaceConfig> {
    use_context::<Signal<MarketplaceConfig>>()
}

/// Fetches the configuration from the server once and provides it to the
/// tree. Children are rendered only after it has resolved, so every API call
/// goes to the configured backend.
///
/// When the server function fails the defaults are used.
#[component]
pub fn ConfigProvider(children: Element) -> Element {
    let mut config = use_signal(MarketplaceConfig::default);
    let mut ready = use_signal(|| false);

    let _ = use_resource(move || async move {
        match api::get_client_config().await {
            Ok(loaded) => {
                tracing::debug!(base_url = %loaded.api.base_url, "client config loaded");
                config.set(loaded);
            }
            Err(e) => {
                tracing::warn!("Failed to load client config, using defaults: {e}");
            }
        }
        ready.set(true);
    });

    use_context_provider(|| config);

    if !ready() {
        return rsx! {
            div { class: "page-loading", "Loading..." }
        };
    }

    rsx! {
        {children}
    }
}
