//! Authentication context and hooks for the UI.
//!
//! The session is a bearer token (persisted through [`store::TokenStore`])
//! plus the profile it belongs to. Pages never talk to the token store
//! directly; they go through [`ApiHandle`], which builds authorised clients
//! and signs the user out when the backend answers 401.

use api::models::AuthSession;
use api::{ApiClient, ApiError, Profile};
use dioxus::prelude::*;
use store::{MarketplaceConfig, TokenStore};

use crate::config::use_client_config;
use crate::token::{make_token_store, PlatformTokenStore};

/// Authentication state for the application.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthState {
    pub token: Option<String>,
    pub profile: Option<Profile>,
    /// True until the stored token has been checked.
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            token: None,
            profile: None,
            loading: true,
        }
    }
}

impl AuthState {
    pub fn signed_out() -> Self {
        Self {
            token: None,
            profile: None,
            loading: false,
        }
    }

    pub fn from_session(session: AuthSession) -> Self {
        Self {
            token: Some(session.token),
            profile: Some(session.profile),
            loading: false,
        }
    }

    pub fn is_signed_in(&self) -> bool {
        self.token.is_some()
    }
}

/// Get the current authentication state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// Provider component that restores the session from the token store.
/// Must sit inside [`crate::ConfigProvider`].
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let config = use_client_config();
    let mut auth_state = use_signal(AuthState::default);
    let tokens = use_signal(make_token_store);

    // Validate the stored token on mount
    let _ = use_resource(move || async move {
        let store = tokens.peek().clone();
        let Some(token) = store.load().await else {
            auth_state.set(AuthState::signed_out());
            return;
        };
        let client = ApiClient::from_config(&config.peek()).with_token(token.clone());
        match client.profile().await {
            Ok(profile) => auth_state.set(AuthState {
                token: Some(token),
                profile: Some(profile),
                loading: false,
            }),
            Err(ApiError::Unauthorized) => {
                tracing::info!("Stored session expired");
                store.clear().await;
                auth_state.set(AuthState::signed_out());
            }
            Err(e) => {
                // Keep the token; pages retry the profile when they need it
                tracing::warn!("Failed to load profile: {e}");
                auth_state.set(AuthState {
                    token: Some(token),
                    profile: None,
                    loading: false,
                });
            }
        }
    });

    use_context_provider(|| auth_state);
    use_context_provider(|| tokens);

    rsx! {
        {children}
    }
}

/// Handle for making backend calls as the signed-in user.
#[derive(Clone, Copy)]
pub struct ApiHandle {
    config: Signal<MarketplaceConfig>,
    auth: Signal<AuthState>,
    tokens: Signal<PlatformTokenStore>,
}

pub fn use_api() -> ApiHandle {
    ApiHandle {
        config: use_client_config(),
        auth: use_auth(),
        tokens: use_context::<Signal<PlatformTokenStore>>(),
    }
}

impl ApiHandle {
    /// A client for the configured backend, authorised when signed in.
    pub fn client(&self) -> ApiClient {
        let client = ApiClient::from_config(&self.config.peek());
        match self.auth.peek().token.as_deref() {
            Some(token) => client.with_token(token),
            None => client,
        }
    }

    pub fn config(&self) -> MarketplaceConfig {
        self.config.peek().clone()
    }

    /// Persist a fresh session from register or login.
    pub async fn sign_in(mut self, session: AuthSession) {
        let store = self.tokens.peek().clone();
        store.save(&session.token).await;
        tracing::info!(role = ?session.profile.role, "Signed in");
        self.auth.set(AuthState::from_session(session));
    }

    pub async fn sign_out(mut self) {
        let store = self.tokens.peek().clone();
        store.clear().await;
        self.auth.set(AuthState::signed_out());
    }

    /// Replace the cached profile after an update.
    pub fn set_profile(mut self, profile: Profile) {
        self.auth.write().profile = Some(profile);
    }

    /// Turn an error into display text. A 401 also ends the session.
    pub fn error_message(self, err: &ApiError) -> String {
        if err.is_unauthorized() {
            spawn(async move { self.sign_out().await });
        }
        err.user_message()
    }
}

/// Button to log out the current user.
#[component]
pub fn LogoutButton(
    #[props(default = "Log out".to_string(), into)] label: String,
    #[props(default = "".to_string(), into)] class: String,
) -> Element {
    let api = use_api();
    let nav = use_navigator();

    let onclick = move |_| async move {
        api.sign_out().await;
        nav.replace("/login");
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}
