use api::flows::ContactVerification;
use api::models::{KycDetails, KycStatus, OtpChannel, ProfileUpdate};
use dioxus::prelude::*;

use crate::auth::{use_api, use_auth};
use crate::components::{Alert, Button, ButtonVariant, FormField, Input, Textarea};
use crate::notice::{notify, use_notices, NoticeLevel};
use crate::otp_field::{OtpField, OtpTarget};
use crate::views::ModalOverlay;

/// Editable name, bio, city and categories, plus the verified contacts with
/// "Change" buttons that open [`ContactUpdateDialog`].
#[component]
pub fn ProfileFormView() -> Element {
    let api = use_api();
    let auth = use_auth();
    let mut notices = use_notices();

    let initial = auth.peek().profile.as_ref().map(|p| p.to_update()).unwrap_or_default();
    let mut name = use_signal(|| initial.name.clone());
    let mut bio = use_signal(|| initial.bio.clone().unwrap_or_default());
    let mut city = use_signal(|| initial.city.clone().unwrap_or_default());
    let mut categories = use_signal(|| initial.categories.join(", "));
    let mut saving = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);
    let mut editing_contact = use_signal(|| Option::<OtpChannel>::None);

    let Some(profile) = auth().profile else {
        return rsx! {
            p { class: "muted", "Loading profile..." }
        };
    };

    let handle_save = move |_: MouseEvent| {
        spawn(async move {
            error.set(None);
            saving.set(true);
            let update = ProfileUpdate {
                name: name().trim().to_string(),
                bio: Some(bio().trim().to_string()).filter(|b| !b.is_empty()),
                city: Some(city().trim().to_string()).filter(|c| !c.is_empty()),
                categories: ProfileUpdate::parse_categories(&categories()),
            };
            match api.client().update_profile(&update).await {
                Ok(profile) => {
                    api.set_profile(profile);
                    notify(&mut notices, NoticeLevel::Success, "Profile saved");
                }
                Err(e) => error.set(Some(api.error_message(&e))),
            }
            saving.set(false);
        });
    };

    let phone = profile.phone.clone().unwrap_or_else(|| "Not added".to_string());

    rsx! {
        section {
            class: "card",
            h2 { class: "card-title", "Profile" }
            div {
                class: "contact-list",
                ContactRow {
                    label: "Email",
                    value: profile.email.clone(),
                    verified: profile.email_verified,
                    on_change: move |_| editing_contact.set(Some(OtpChannel::Email)),
                }
                ContactRow {
                    label: "Phone",
                    value: phone,
                    verified: profile.phone_verified,
                    on_change: move |_| editing_contact.set(Some(OtpChannel::Phone)),
                }
            }
            FormField { label: "Name", html_for: "profile-name",
                Input { id: "profile-name", value: name(), oninput: move |e: FormEvent| name.set(e.value()) }
            }
            FormField { label: "City", html_for: "profile-city",
                Input { id: "profile-city", value: city(), oninput: move |e: FormEvent| city.set(e.value()) }
            }
            FormField {
                label: "Categories",
                html_for: "profile-categories",
                hint: "Comma separated, e.g. Travel, Food".to_string(),
                Input {
                    id: "profile-categories",
                    value: categories(),
                    oninput: move |e: FormEvent| categories.set(e.value()),
                }
            }
            FormField { label: "Bio", html_for: "profile-bio",
                Textarea { id: "profile-bio", value: bio(), oninput: move |e: FormEvent| bio.set(e.value()) }
            }
            if let Some(err) = error() {
                Alert { message: err }
            }
            div {
                class: "form-actions",
                Button {
                    disabled: saving(),
                    onclick: handle_save,
                    if saving() { "Saving..." } else { "Save profile" }
                }
            }
        }

        if let Some(channel) = editing_contact() {
            ContactUpdateDialog {
                channel: channel,
                on_close: move |_| editing_contact.set(None),
            }
        }
    }
}

#[component]
fn ContactRow(#[props(into)] label: String, value: String, verified: bool, on_change: EventHandler<()>) -> Element {
    rsx! {
        div {
            class: "contact-row",
            span { class: "contact-label", "{label}" }
            span { class: "contact-value", "{value}" }
            if verified {
                span { class: "badge success", "Verified" }
            } else {
                span { class: "badge", "Unverified" }
            }
            Button {
                variant: ButtonVariant::Ghost,
                onclick: move |_| on_change.call(()),
                "Change"
            }
        }
    }
}

/// Change the account email or phone. The new value only replaces the old
/// one once its OTP has been verified.
#[component]
pub fn ContactUpdateDialog(channel: OtpChannel, on_close: EventHandler<()>) -> Element {
    let mut notices = use_notices();
    let mut value = use_signal(String::new);
    let mut verification = use_signal(ContactVerification::default);

    let title = format!("Change {}", channel.label().to_lowercase());

    rsx! {
        ModalOverlay {
            title: title,
            on_close: move |_| on_close.call(()),
            p { class: "modal-body", "We'll send a code to the new {channel.path_segment()} to confirm it." }
            OtpField {
                target: OtpTarget::Contact,
                channel: channel,
                value: value(),
                verification: verification(),
                on_edit: move |v: String| {
                    verification.write().edited(&v);
                    value.set(v);
                },
                on_code_sent: move |sent: String| {
                    if let Err(e) = verification.write().code_sent(&sent) {
                        tracing::warn!("{e}");
                    }
                },
                on_verified: move |_| {
                    if let Err(e) = verification.write().verified() {
                        tracing::warn!("{e}");
                    }
                    notify(
                        &mut notices,
                        NoticeLevel::Success,
                        &format!("{} updated", channel.label()),
                    );
                    on_close.call(());
                },
            }
            div {
                class: "modal-actions",
                Button {
                    variant: ButtonVariant::Ghost,
                    onclick: move |_| on_close.call(()),
                    "Cancel"
                }
            }
        }
    }
}

/// Payout identity and bank details. Locked once verified.
#[component]
pub fn KycFormView() -> Element {
    let api = use_api();
    let auth = use_auth();
    let mut notices = use_notices();

    let initial = auth.peek().profile.as_ref().and_then(|p| p.kyc.clone()).unwrap_or_default();
    let mut pan = use_signal(|| initial.pan.clone());
    let mut gstin = use_signal(|| initial.gstin.clone().unwrap_or_default());
    let mut holder = use_signal(|| initial.account_holder.clone());
    let mut account = use_signal(|| initial.account_number.clone());
    let mut ifsc = use_signal(|| initial.ifsc.clone());
    let mut saving = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);

    let status = auth().profile.as_ref().map(|p| p.kyc_status()).unwrap_or_default();
    let locked = !status.editable();

    let handle_submit = move |_: MouseEvent| {
        spawn(async move {
            error.set(None);
            saving.set(true);
            let details = KycDetails {
                pan: pan(),
                gstin: Some(gstin()).filter(|g| !g.trim().is_empty()),
                account_holder: holder(),
                account_number: account(),
                ifsc: ifsc(),
                status: KycStatus::Pending,
            };
            match api.client().update_kyc(&details).await {
                Ok(profile) => {
                    api.set_profile(profile);
                    notify(&mut notices, NoticeLevel::Success, "KYC details submitted for review");
                }
                Err(e) => error.set(Some(api.error_message(&e))),
            }
            saving.set(false);
        });
    };

    let badge = match status {
        KycStatus::Verified => "badge success",
        KycStatus::Rejected => "badge danger",
        _ => "badge",
    };

    rsx! {
        section {
            class: "card",
            div {
                class: "card-header",
                h2 { class: "card-title", "KYC details" }
                span { class: badge, "{status.label()}" }
            }
            if status == KycStatus::Rejected {
                Alert { message: "Your KYC was rejected. Please check the details and submit again." }
            }
            FormField { label: "PAN", html_for: "kyc-pan",
                Input { id: "kyc-pan", value: pan(), disabled: locked, maxlength: 10,
                    oninput: move |e: FormEvent| pan.set(e.value()) }
            }
            FormField { label: "GSTIN (optional)", html_for: "kyc-gstin",
                Input { id: "kyc-gstin", value: gstin(), disabled: locked, maxlength: 15,
                    oninput: move |e: FormEvent| gstin.set(e.value()) }
            }
            FormField { label: "Account holder name", html_for: "kyc-holder",
                Input { id: "kyc-holder", value: holder(), disabled: locked,
                    oninput: move |e: FormEvent| holder.set(e.value()) }
            }
            FormField { label: "Account number", html_for: "kyc-account",
                Input { id: "kyc-account", value: account(), disabled: locked,
                    oninput: move |e: FormEvent| account.set(e.value()) }
            }
            FormField { label: "IFSC", html_for: "kyc-ifsc",
                Input { id: "kyc-ifsc", value: ifsc(), disabled: locked, maxlength: 11,
                    oninput: move |e: FormEvent| ifsc.set(e.value()) }
            }
            if let Some(err) = error() {
                Alert { message: err }
            }
            if !locked {
                div {
                    class: "form-actions",
                    Button {
                        disabled: saving(),
                        onclick: handle_submit,
                        if saving() { "Submitting..." } else { "Submit KYC" }
                    }
                }
            }
        }
    }
}
