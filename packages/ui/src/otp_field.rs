//! Contact field with send-code / verify-code controls.

use std::time::Duration;

use api::flows::ContactVerification;
use api::models::{OtpChannel, Role};
use dioxus::prelude::*;

use crate::auth::use_api;
use crate::components::{Button, ButtonVariant, Input};
use crate::icons::FaCircleCheck;
use crate::notice::{notify, use_notices, NoticeLevel};
use crate::timer::sleep;
use crate::Icon;

/// Seconds before another code can be requested.
const RESEND_COOLDOWN_SECS: u32 = 30;

/// Which backend endpoints the field talks to.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum OtpTarget {
    /// Signup OTP for a not-yet-registered account of this role.
    Signup(Role),
    /// Changing the signed-in user's email or phone.
    Contact,
}

/// An email or phone input that is verified by a one-time code.
///
/// The owner keeps the value and the [`ContactVerification`] state; the field
/// performs the requests and reports progress through the callbacks.
#[component]
pub fn OtpField(
    target: OtpTarget,
    channel: OtpChannel,
    value: String,
    verification: ContactVerification,
    /// Disable the whole field (e.g. phone before the email is verified).
    #[props(default)]
    locked: bool,
    on_edit: EventHandler<String>,
    /// Called with the normalized value the code was sent to.
    on_code_sent: EventHandler<String>,
    on_verified: EventHandler<()>,
) -> Element {
    let api = use_api();
    let mut notices = use_notices();
    let mut code = use_signal(String::new);
    let mut busy = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);
    let mut cooldown = use_signal(|| 0u32);

    let verified = verification.is_verified();
    let code_sent = verification.is_code_sent();
    let input_id = format!("otp-{}", channel.path_segment());

    let send_value = value.clone();
    let send_code = move |_: MouseEvent| {
        let value = send_value.clone();
        spawn(async move {
            busy.set(true);
            error.set(None);
            let client = api.client();
            let result = match target {
                OtpTarget::Signup(role) => client.send_signup_otp(role, channel, &value).await,
                OtpTarget::Contact => client.request_contact_otp(channel, &value).await,
            };
            match result {
                Ok(_) => {
                    code.set(String::new());
                    let normalized = channel.normalize(&value);
                    notify(
                        &mut notices,
                        NoticeLevel::Success,
                        &format!("Code sent to {normalized}"),
                    );
                    on_code_sent.call(normalized);
                    cooldown.set(RESEND_COOLDOWN_SECS);
                    spawn(async move {
                        while cooldown() > 0 {
                            sleep(Duration::from_secs(1)).await;
                            cooldown -= 1;
                        }
                    });
                }
                Err(e) => error.set(Some(api.error_message(&e))),
            }
            busy.set(false);
        });
    };

    let verify_value = value.clone();
    let verify_code = move |_: MouseEvent| {
        let value = verify_value.clone();
        spawn(async move {
            busy.set(true);
            error.set(None);
            let client = api.client();
            let result = match target {
                OtpTarget::Signup(role) => client
                    .verify_signup_otp(role, channel, &value, &code())
                    .await
                    .map(|_| ()),
                OtpTarget::Contact => client
                    .verify_contact_otp(channel, &value, &code())
                    .await
                    .map(|profile| api.set_profile(profile)),
            };
            match result {
                Ok(()) => {
                    code.set(String::new());
                    on_verified.call(());
                }
                Err(e) => error.set(Some(api.error_message(&e))),
            }
            busy.set(false);
        });
    };

    let send_label = match (cooldown(), code_sent) {
        (0, false) => "Send code".to_string(),
        (0, true) => "Resend code".to_string(),
        (secs, _) => format!("Resend in {secs}s"),
    };

    rsx! {
        div {
            class: "otp-field",
            label { class: "label", r#for: "{input_id}", "{channel.label()}" }
            div {
                class: "otp-row",
                Input {
                    id: input_id.clone(),
                    r#type: match channel {
                        OtpChannel::Email => "email".to_string(),
                        OtpChannel::Phone => "tel".to_string(),
                    },
                    value: value.clone(),
                    disabled: locked || verified || busy(),
                    oninput: move |evt: FormEvent| on_edit.call(evt.value()),
                }
                if verified {
                    span {
                        class: "otp-verified",
                        Icon { icon: FaCircleCheck, width: 14, height: 14 }
                        " Verified"
                    }
                } else {
                    Button {
                        variant: ButtonVariant::Outline,
                        disabled: locked || busy() || cooldown() > 0 || value.trim().is_empty(),
                        onclick: send_code,
                        "{send_label}"
                    }
                }
            }
            if code_sent && !verified {
                div {
                    class: "otp-row",
                    Input {
                        placeholder: "6-digit code".to_string(),
                        value: code(),
                        maxlength: 6,
                        autocomplete: "one-time-code".to_string(),
                        disabled: busy(),
                        oninput: move |evt: FormEvent| code.set(evt.value()),
                    }
                    Button {
                        disabled: busy() || code().trim().is_empty(),
                        onclick: verify_code,
                        "Verify"
                    }
                }
            }
            if let Some(err) = error() {
                p { class: "form-error", "{err}" }
            }
        }
    }
}
