use std::sync::{Arc, Mutex};

use crate::token::{sanitize, TokenStore};

/// In-memory TokenStore for tests and non-browser targets.
#[derive(Clone, Debug, Default)]
pub struct MemoryTokenStore {
    token: Arc<Mutex<Option<String>>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that already holds a token.
    pub fn with_token(token: &str) -> Self {
        let store = Self::default();
        if let Ok(mut slot) = store.token.lock() {
            *slot = sanitize(Some(token.to_string()));
        }
        store
    }
}

impl TokenStore for MemoryTokenStore {
    async fn load(&self) -> Option<String> {
        self.token.lock().ok().and_then(|t| t.clone())
    }

    async fn save(&self, token: &str) {
        if let Ok(mut slot) = self.token.lock() {
            *slot = sanitize(Some(token.to_string()));
        }
    }

    async fn clear(&self) {
        if let Ok(mut slot) = self.token.lock() {
            *slot = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_save_load_clear() {
        let store = MemoryTokenStore::new();

        // Initially empty
        assert!(store.load().await.is_none());

        store.save("tok-123").await;
        assert_eq!(store.load().await.as_deref(), Some("tok-123"));

        // Overwrite
        store.save("tok-456").await;
        assert_eq!(store.load().await.as_deref(), Some("tok-456"));

        store.clear().await;
        assert!(store.load().await.is_none());
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let store = MemoryTokenStore::new();
        let other = store.clone();

        store.save("shared").await;
        assert_eq!(other.load().await.as_deref(), Some("shared"));
    }

    #[tokio::test]
    async fn test_blank_token_is_not_stored() {
        let store = MemoryTokenStore::with_token("  ");
        assert!(store.load().await.is_none());

        store.save("").await;
        assert!(store.load().await.is_none());
    }
}
