use dioxus::prelude::*;
use ui::use_auth;

use crate::Route;

mod site_layout;
pub use site_layout::{NotFound, SiteLayout};

mod home;
pub use home::Home;

mod pricing;
pub use pricing::Pricing;

mod login;
pub use login::Login;

mod signup;
pub use signup::{AgencySignupPage, BrandSignupPage, InfluencerSignupPage, SignupChooser};

mod dashboard;
pub use dashboard::{
    Commercials, Dashboard, DashboardLayout, ProfilePage, Social, Subscription, YoutubeCallback,
};

/// Send signed-in visitors of the login and signup pages to the dashboard.
pub(crate) fn use_redirect_when_signed_in() {
    let auth = use_auth();
    let nav = use_navigator();
    use_effect(move || {
        let state = auth();
        if !state.loading && state.is_signed_in() {
            nav.replace(Route::Dashboard {});
        }
    });
}
