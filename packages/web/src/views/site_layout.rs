use dioxus::prelude::*;
use ui::sections::Footer;
use ui::{use_auth, LogoutButton, Navbar};

use crate::Route;

/// Public chrome: navbar, page content, footer.
#[component]
pub fn SiteLayout() -> Element {
    let auth = use_auth();
    let signed_in = auth().is_signed_in();

    rsx! {
        Navbar {
            Link { class: "nav-link", to: Route::Pricing {}, "Pricing" }
            if signed_in {
                Link { class: "nav-link", to: Route::Dashboard {}, "Dashboard" }
                LogoutButton { class: "btn btn-ghost" }
            } else {
                Link { class: "nav-link", to: Route::Login {}, "Log in" }
                Link { class: "btn btn-primary", to: Route::SignupChooser {}, "Sign up" }
            }
        }
        main {
            class: "page",
            Outlet::<Route> {}
        }
        Footer {}
    }
}

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    rsx! {
        section {
            class: "card not-found",
            h1 { "Page not found" }
            p { class: "muted", "Nothing lives at /{path}." }
            Link { class: "btn btn-primary", to: Route::Home {}, "Back to home" }
        }
    }
}
