//! Platform token store selection.
//!
//! - **Web** (WASM + `web` feature): `localStorage` via [`store::LocalStorageTokenStore`]
//! - **Everything else** (server-side rendering, tests): [`store::MemoryTokenStore`]

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type PlatformTokenStore = store::LocalStorageTokenStore;

#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
pub type PlatformTokenStore = store::MemoryTokenStore;

/// Create the token store for the current platform.
pub fn make_token_store() -> PlatformTokenStore {
    PlatformTokenStore::new()
}
