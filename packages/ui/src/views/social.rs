use api::flows::LinkFlow;
use api::models::{Channel, Platform};
use dioxus::prelude::*;

use crate::auth::use_api;
use crate::components::{Alert, AlertKind, Button, ButtonVariant};
use crate::icons::{FaInstagram, FaYoutube};
use crate::log_flow;
use crate::notice::{notify, use_notices, NoticeLevel};
use crate::views::ConfirmDialog;
use crate::Icon;

/// Send the browser to another site (the OAuth consent screen).
fn redirect_to(url: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().set_href(url) {
                tracing::error!("Failed to redirect: {e:?}");
            }
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::warn!("Cannot redirect outside the browser: {url}");
    }
}

/// Absolute callback URL for the consent screen. Outside the browser there
/// is no origin, so the path is returned as is.
fn callback_url(path: &str) -> String {
    match browser_origin() {
        Some(origin) => join_origin(&origin, path),
        None => path.to_string(),
    }
}

fn browser_origin() -> Option<String> {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window().and_then(|w| w.location().origin().ok())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

fn join_origin(origin: &str, path: &str) -> String {
    format!(
        "{}/{}",
        origin.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Linked channels with connect and unlink actions.
#[component]
pub fn SocialAccountsView() -> Element {
    let api = use_api();
    let mut notices = use_notices();
    let mut flow = use_signal(LinkFlow::default);
    let mut unlinking = use_signal(|| Option::<Channel>::None);
    let mut unlink_busy = use_signal(|| false);

    let mut channels = use_resource(move || async move { api.client().channels().await });

    let handle_connect = move |_: MouseEvent| {
        if let Err(e) = flow.write().request() {
            tracing::warn!("{e}");
            return;
        }
        let redirect_uri = callback_url(&api.config().social.youtube_callback_path);
        spawn(async move {
            match api.client().youtube_auth_url(&redirect_uri).await {
                Ok(url) => {
                    log_flow(flow.write().consent_url(url.clone()));
                    redirect_to(&url);
                }
                Err(e) => log_flow(flow.write().fail(api.error_message(&e))),
            }
        });
    };

    let handle_unlink = move |_: ()| {
        let Some(channel) = unlinking() else {
            return;
        };
        spawn(async move {
            unlink_busy.set(true);
            match api.client().unlink_channel(&channel.id).await {
                Ok(_) => {
                    notify(
                        &mut notices,
                        NoticeLevel::Success,
                        &format!("{} disconnected", channel.title),
                    );
                    channels.restart();
                }
                Err(e) => {
                    let message = api.error_message(&e);
                    notify(&mut notices, NoticeLevel::Error, &message);
                }
            }
            unlink_busy.set(false);
            unlinking.set(None);
        });
    };

    let list = channels.read().clone();
    let state = flow();

    rsx! {
        section {
            class: "card",
            div {
                class: "card-header",
                h2 { class: "card-title", "Social accounts" }
                Button {
                    disabled: state.is_busy(),
                    onclick: handle_connect,
                    Icon { icon: FaYoutube, width: 14, height: 14 }
                    if state.is_busy() { " Connecting..." } else { " Connect YouTube" }
                }
            }
            if let Some(err) = state.error() {
                Alert { message: err.to_string() }
            }
            {
                match list {
                    None => rsx! {
                        p { class: "muted", "Loading channels..." }
                    },
                    Some(Err(e)) => rsx! {
                        Alert { message: e.user_message() }
                    },
                    Some(Ok(list)) if list.is_empty() => rsx! {
                        p { class: "muted", "No accounts linked yet. Connect a channel so brands can see your reach." }
                    },
                    Some(Ok(list)) => rsx! {
                        ul {
                            class: "channel-list",
                            for channel in list {
                                ChannelRow {
                                    key: "{channel.id}",
                                    channel: channel.clone(),
                                    on_unlink: move |c: Channel| unlinking.set(Some(c)),
                                }
                            }
                        }
                    },
                }
            }
        }

        if let Some(channel) = unlinking() {
            ConfirmDialog {
                title: "Disconnect account?",
                message: format!("{} will no longer appear on your profile.", channel.title),
                confirm_label: "Disconnect",
                destructive: true,
                busy: unlink_busy(),
                on_confirm: handle_unlink,
                on_cancel: move |_| unlinking.set(None),
            }
        }
    }
}

#[component]
fn ChannelRow(channel: Channel, on_unlink: EventHandler<Channel>) -> Element {
    let handle = channel.handle.clone().unwrap_or_default();
    let target = channel.clone();
    rsx! {
        li {
            class: "channel-row",
            {
                match channel.platform {
                    Platform::Youtube => rsx! { Icon { icon: FaYoutube, width: 18, height: 18 } },
                    Platform::Instagram => rsx! { Icon { icon: FaInstagram, width: 18, height: 18 } },
                }
            }
            div {
                class: "channel-info",
                if let Some(url) = channel.url.clone() {
                    a { href: "{url}", target: "_blank", rel: "noopener", "{channel.title}" }
                } else {
                    span { "{channel.title}" }
                }
                span { class: "muted", " {handle}" }
            }
            span { class: "badge", "{channel.audience_label()} followers" }
            Button {
                variant: ButtonVariant::Ghost,
                onclick: move |_| on_unlink.call(target.clone()),
                "Disconnect"
            }
        }
    }
}

/// Landing page for the OAuth redirect. Exchanges `code` for a linked
/// channel, then calls `on_done`.
#[component]
pub fn YoutubeCallbackView(code: Option<String>, on_done: EventHandler<()>) -> Element {
    let api = use_api();
    let mut notices = use_notices();
    let mut flow = use_signal(|| {
        let mut flow = LinkFlow::default();
        log_flow(flow.callback_received());
        flow
    });

    // Runs once per mount; the code is single use
    use_hook(move || {
        spawn(async move {
            let result = match code.as_deref() {
                Some(code) => api.client().verify_youtube(code).await,
                None => Err(api::ValidationError::Required("Authorization code").into()),
            };
            match result {
                Ok(channel) => {
                    notify(
                        &mut notices,
                        NoticeLevel::Success,
                        &format!("{} linked", channel.title),
                    );
                    log_flow(flow.write().linked(channel));
                    on_done.call(());
                }
                Err(e) => log_flow(flow.write().fail(api.error_message(&e))),
            }
        });
    });

    rsx! {
        section {
            class: "card callback-card",
            {
                match flow() {
                    LinkFlow::Failed { message } => rsx! {
                        Alert { message: message }
                        Button {
                            variant: ButtonVariant::Outline,
                            onclick: move |_| on_done.call(()),
                            "Back to social accounts"
                        }
                    },
                    LinkFlow::Linked { channel } => rsx! {
                        Alert { kind: AlertKind::Success, message: format!("{} is now linked.", channel.title) }
                    },
                    _ => rsx! {
                        p { class: "muted", "Linking your YouTube channel..." }
                    },
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::config::SocialConfig;

    #[test]
    fn test_callback_url_uses_configured_path() {
        let social = SocialConfig::default();
        assert_eq!(
            join_origin("https://app.example.com/", &social.youtube_callback_path),
            "https://app.example.com/dashboard/social/youtube/callback"
        );
        // No browser origin in native tests
        assert_eq!(callback_url("/custom/callback"), "/custom/callback");
    }
}
