//! # Bearer-token persistence
//!
//! The backend authenticates every dashboard call with a bearer token handed
//! out by the register and login endpoints. The token is the only piece of
//! client-owned durable state, so it sits behind the small [`TokenStore`]
//! trait and the platform picks an implementation:
//!
//! | Implementation | Where |
//! |----------------|-------|
//! | [`crate::MemoryTokenStore`] | tests and non-browser targets |
//! | `LocalStorageTokenStore` | the browser (`web` feature on `wasm32`) |
//!
//! Implementations never fail loudly. A store that cannot be read behaves
//! like an empty one, which the UI treats as "signed out".

use std::future::Future;

/// Key the token is stored under in browser `localStorage`.
pub const TOKEN_KEY: &str = "marketplace.token";

/// Async storage for the session bearer token.
pub trait TokenStore {
    fn load(&self) -> impl Future<Output = Option<String>>;
    fn save(&self, token: &str) -> impl Future<Output = ()>;
    fn clear(&self) -> impl Future<Output = ()>;
}

/// Trims a raw stored value, treating blanks as absent.
pub(crate) fn sanitize(raw: Option<String>) -> Option<String> {
    raw.map(|t| t.trim().to_string()).filter(|t| !t.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_drops_blank_tokens() {
        assert_eq!(sanitize(None), None);
        assert_eq!(sanitize(Some("   ".to_string())), None);
        assert_eq!(sanitize(Some(" abc ".to_string())), Some("abc".to_string()));
    }
}
