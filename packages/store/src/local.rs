//! # `localStorage` token store: browser-side persistence
//!
//! [`LocalStorageTokenStore`] keeps the bearer token under
//! [`TOKEN_KEY`](crate::TOKEN_KEY) in `window.localStorage`, so a reload keeps
//! the user signed in.
//!
//! All trait methods swallow errors: private browsing modes and disabled
//! storage simply look like an empty store.

use web_sys::Storage;

use crate::token::{sanitize, TokenStore, TOKEN_KEY};

/// localStorage-backed TokenStore for the web platform.
#[derive(Clone, Debug, Default)]
pub struct LocalStorageTokenStore;

impl LocalStorageTokenStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl TokenStore for LocalStorageTokenStore {
    async fn load(&self) -> Option<String> {
        let storage = Self::storage()?;
        sanitize(storage.get_item(TOKEN_KEY).ok().flatten())
    }

    async fn save(&self, token: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(TOKEN_KEY, token.trim());
        }
    }

    async fn clear(&self) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(TOKEN_KEY);
        }
    }
}
