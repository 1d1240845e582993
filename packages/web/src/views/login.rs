//! Email and password login.

use dioxus::prelude::*;
use ui::components::{Alert, Button, FormField, Input};
use ui::use_api;

use super::use_redirect_when_signed_in;
use crate::Route;

#[component]
pub fn Login() -> Element {
    use_redirect_when_signed_in();

    let api = use_api();
    let nav = use_navigator();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut submitting = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            submitting.set(true);
            error.set(None);
            match api.client().login(&email(), &password()).await {
                Ok(session) => {
                    api.sign_in(session).await;
                    nav.replace(Route::Dashboard {});
                }
                Err(e) => {
                    tracing::info!("Login failed: {e}");
                    error.set(Some(e.user_message()));
                }
            }
            submitting.set(false);
        });
    };

    rsx! {
        div {
            class: "auth-page",
            form {
                class: "card auth-card",
                onsubmit: handle_submit,
                h1 { class: "card-title", "Welcome back" }
                p { class: "muted", "Log in to manage your profile, channels and plan." }
                FormField { label: "Email", html_for: "login-email",
                    Input {
                        id: "login-email",
                        r#type: "email",
                        autocomplete: "email".to_string(),
                        value: email(),
                        oninput: move |e: FormEvent| email.set(e.value()),
                    }
                }
                FormField { label: "Password", html_for: "login-password",
                    Input {
                        id: "login-password",
                        r#type: "password",
                        autocomplete: "current-password".to_string(),
                        value: password(),
                        oninput: move |e: FormEvent| password.set(e.value()),
                    }
                }
                if let Some(err) = error() {
                    Alert { message: err }
                }
                Button {
                    r#type: "submit",
                    class: "btn-block",
                    disabled: submitting(),
                    if submitting() { "Logging in..." } else { "Log in" }
                }
                p {
                    class: "auth-switch",
                    "New here? "
                    Link { to: Route::SignupChooser {}, "Create an account" }
                }
            }
        }
    }
}
