use api::models::KycStatus;
use api::Role;
use dioxus::prelude::*;
use ui::components::{Alert, AlertKind};
use ui::views::{
    KycFormView, MediaKitView, ProfileFormView, SocialAccountsView, SubscriptionView,
    YoutubeCallbackView,
};
use ui::{use_api, use_auth, LogoutButton};

use crate::Route;

/// Signed-in area. Sends visitors without a session to the login page and
/// waits for the profile before rendering any page.
#[component]
pub fn DashboardLayout() -> Element {
    let api = use_api();
    let auth = use_auth();
    let nav = use_navigator();

    use_effect(move || {
        let state = auth();
        if !state.loading && !state.is_signed_in() {
            nav.replace(Route::Login {});
        }
    });

    // The profile is missing when the startup check hit a transient error
    let _ = use_resource(move || async move {
        let state = auth();
        if state.loading || !state.is_signed_in() || state.profile.is_some() {
            return;
        }
        match api.client().profile().await {
            Ok(profile) => api.set_profile(profile),
            Err(e) => tracing::warn!("Failed to load profile: {}", api.error_message(&e)),
        }
    });

    let state = auth();
    let signed_in = state.is_signed_in();
    let Some(profile) = state.profile.filter(|_| signed_in) else {
        return rsx! {
            div { class: "page-loading", "Loading your dashboard..." }
        };
    };

    rsx! {
        div {
            class: "dashboard",
            nav {
                class: "dashboard-nav",
                div {
                    class: "dashboard-user",
                    strong { "{profile.display_name()}" }
                    span { class: "badge", "{profile.role.label()}" }
                }
                Link { to: Route::Dashboard {}, active_class: "active", "Overview" }
                Link { to: Route::Social {}, active_class: "active", "Social accounts" }
                Link { to: Route::Subscription {}, active_class: "active", "Subscription" }
                Link { to: Route::ProfilePage {}, active_class: "active", "Profile & KYC" }
                if profile.role == Role::Influencer {
                    Link { to: Route::Commercials {}, active_class: "active", "Media kit" }
                }
                LogoutButton { class: "btn btn-ghost" }
            }
            div {
                class: "dashboard-main",
                Outlet::<Route> {}
            }
        }
    }
}

/// Overview: contact status, plan, KYC and linked channels at a glance.
#[component]
pub fn Dashboard() -> Element {
    let api = use_api();
    let auth = use_auth();
    let channels = use_resource(move || async move { api.client().channels().await });

    let Some(profile) = auth().profile else {
        return rsx! {};
    };

    let plan = profile
        .active_subscription
        .as_ref()
        .filter(|s| s.is_active())
        .map(|s| s.plan_name.clone())
        .unwrap_or_else(|| "Free".to_string());
    let kyc = profile.kyc_status();
    let channel_count = match &*channels.read() {
        Some(Ok(list)) => list.len().to_string(),
        Some(Err(_)) => "-".to_string(),
        None => "...".to_string(),
    };
    let contacts_verified = profile.email_verified && profile.phone_verified;

    rsx! {
        h1 { class: "page-title", "Welcome, {profile.display_name()}" }
        if !contacts_verified {
            Alert {
                kind: AlertKind::Info,
                message: "Verify your email and phone from the profile page so brands can reach you.",
            }
        }
        div {
            class: "stat-grid",
            StatCard { label: "Plan", value: plan, to: Route::Subscription {} }
            StatCard { label: "KYC", value: kyc.label().to_string(), to: Route::ProfilePage {} }
            StatCard { label: "Linked channels", value: channel_count, to: Route::Social {} }
        }
        if kyc == KycStatus::Rejected {
            Alert {
                message: "Your KYC details were rejected. Update them from the profile page.",
            }
        }
    }
}

#[component]
fn StatCard(label: &'static str, value: String, to: Route) -> Element {
    rsx! {
        Link {
            class: "card stat-card",
            to: to,
            span { class: "stat-label", "{label}" }
            strong { class: "stat-value", "{value}" }
        }
    }
}

#[component]
pub fn Social() -> Element {
    rsx! {
        h1 { class: "page-title", "Social accounts" }
        SocialAccountsView {}
    }
}

#[component]
pub fn YoutubeCallback(code: String) -> Element {
    let nav = use_navigator();
    let code = Some(code).filter(|c| !c.trim().is_empty());

    rsx! {
        h1 { class: "page-title", "Social accounts" }
        YoutubeCallbackView {
            code: code,
            on_done: move |_| {
                nav.replace(Route::Social {});
            },
        }
    }
}

#[component]
pub fn Subscription() -> Element {
    rsx! {
        h1 { class: "page-title", "Subscription" }
        SubscriptionView {}
    }
}

#[component]
pub fn ProfilePage() -> Element {
    rsx! {
        h1 { class: "page-title", "Profile & KYC" }
        ProfileFormView {}
        KycFormView {}
    }
}

#[component]
pub fn Commercials() -> Element {
    let auth = use_auth();
    let is_influencer = auth().profile.is_some_and(|p| p.role == Role::Influencer);

    rsx! {
        h1 { class: "page-title", "Media kit" }
        if is_influencer {
            MediaKitView {}
        } else {
            Alert {
                kind: AlertKind::Info,
                message: "Media kits are for influencer accounts.",
            }
        }
    }
}
