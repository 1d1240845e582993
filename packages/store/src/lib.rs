pub mod config;
pub mod token;

mod memory;
pub use memory::MemoryTokenStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local::LocalStorageTokenStore;

pub use config::MarketplaceConfig;
pub use token::{TokenStore, TOKEN_KEY};
