mod modal_overlay;
pub use modal_overlay::{ConfirmDialog, ModalOverlay};

mod profile;
pub use profile::{ContactUpdateDialog, KycFormView, ProfileFormView};

mod media_kit;
pub use media_kit::MediaKitView;

mod subscription;
pub use subscription::SubscriptionView;

mod social;
pub use social::{SocialAccountsView, YoutubeCallbackView};
