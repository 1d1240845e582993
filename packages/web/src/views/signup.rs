//! Role chooser and the three OTP-gated signup wizards.
//!
//! Every wizard verifies the email, then the phone, and only then unlocks
//! the role-specific details. The account is registered with the contact
//! values that were actually verified, not whatever is in the inputs.

use api::flows::{ContactVerification, SignupProgress};
use api::models::{AgencySignup, BrandSignup, InfluencerSignup, OtpChannel, ProfileUpdate, Registration};
use api::validation::validate_password_pair;
use api::{FlowError, Role};
use dioxus::prelude::*;
use ui::components::{Alert, Button, FormField, Input, StepIndicator};
use ui::{use_api, ApiHandle, OtpField, OtpTarget};

use super::use_redirect_when_signed_in;
use crate::Route;

#[component]
pub fn SignupChooser() -> Element {
    use_redirect_when_signed_in();

    rsx! {
        section {
            class: "section",
            h1 { class: "section-title", "Create your account" }
            p { class: "muted", "Choose how you'll use the marketplace." }
            div {
                class: "role-grid",
                RoleChoice {
                    to: Route::InfluencerSignupPage {},
                    title: "Influencer",
                    body: "Link your channels, publish a media kit and get discovered by brands.",
                }
                RoleChoice {
                    to: Route::BrandSignupPage {},
                    title: "Brand",
                    body: "Find creators who fit your product and run campaigns with them.",
                }
                RoleChoice {
                    to: Route::AgencySignupPage {},
                    title: "Agency",
                    body: "Represent a roster of creators and connect them with brands.",
                }
            }
            p {
                class: "auth-switch",
                "Already have an account? "
                Link { to: Route::Login {}, "Log in" }
            }
        }
    }
}

#[component]
fn RoleChoice(to: Route, title: &'static str, body: &'static str) -> Element {
    rsx! {
        Link {
            class: "card role-card role-choice",
            to: to,
            h3 { "{title}" }
            p { "{body}" }
        }
    }
}

/// Signals shared by every signup wizard.
#[derive(Clone, Copy, PartialEq)]
struct SignupState {
    progress: Signal<SignupProgress>,
    email: Signal<String>,
    phone: Signal<String>,
    password: Signal<String>,
    confirm: Signal<String>,
    submitting: Signal<bool>,
    error: Signal<Option<String>>,
}

fn use_signup_state() -> SignupState {
    SignupState {
        progress: use_signal(SignupProgress::new),
        email: use_signal(String::new),
        phone: use_signal(String::new),
        password: use_signal(String::new),
        confirm: use_signal(String::new),
        submitting: use_signal(|| false),
        error: use_signal(|| None),
    }
}

impl SignupState {
    /// The verified email and phone, or `None` after showing why the form
    /// can't be sent yet.
    fn checked_contacts(mut self) -> Option<(String, String)> {
        let checked = verified_credentials(&self.progress.peek(), &self.password.peek(), &self.confirm.peek());
        match checked {
            Ok(contacts) => Some(contacts),
            Err(message) => {
                self.error.set(Some(message));
                None
            }
        }
    }

    /// Register and sign in. Returns whether the account was created.
    async fn register<R: Registration + Clone>(mut self, api: ApiHandle, form: R) -> bool {
        self.submitting.set(true);
        self.error.set(None);
        let result = api.client().register(&form).await;
        self.submitting.set(false);
        match result {
            Ok(session) => {
                warn_rejected(self.progress.write().complete());
                tracing::info!(role = ?R::ROLE, "Account created");
                api.sign_in(session).await;
                true
            }
            Err(e) => {
                self.error.set(Some(api.error_message(&e)));
                false
            }
        }
    }
}

fn verified_value(contact: &ContactVerification) -> Option<String> {
    if contact.is_verified() {
        contact.value().map(str::to_string)
    } else {
        None
    }
}

/// Contacts to register with, once both are verified and the password
/// checks out.
fn verified_credentials(
    progress: &SignupProgress,
    password: &str,
    confirm: &str,
) -> Result<(String, String), String> {
    let (Some(email), Some(phone)) = (verified_value(&progress.email), verified_value(&progress.phone))
    else {
        return Err("Verify your email and phone number first".to_string());
    };
    validate_password_pair(password, confirm).map_err(|e| e.to_string())?;
    Ok((email, phone))
}

fn warn_rejected(result: Result<(), FlowError>) {
    if let Err(e) = result {
        tracing::warn!("{e}");
    }
}

fn optional(value: &str) -> Option<String> {
    Some(value.trim().to_string()).filter(|v| !v.is_empty())
}

/// Contact verification, password fields and submit button around the
/// role-specific `children`.
#[component]
fn SignupForm(role: Role, state: SignupState, on_submit: EventHandler<()>, children: Element) -> Element {
    let SignupState {
        mut progress,
        mut email,
        mut phone,
        mut password,
        mut confirm,
        submitting,
        error,
    } = state;
    let current = progress();
    let unlocked = current.details_unlocked();

    rsx! {
        div {
            class: "auth-page",
            form {
                class: "card auth-card signup-card",
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    on_submit.call(());
                },
                h1 { class: "card-title", "Join as {role.label()}" }
                StepIndicator { current: current.current_step() }

                OtpField {
                    target: OtpTarget::Signup(role),
                    channel: OtpChannel::Email,
                    value: email(),
                    verification: current.email.clone(),
                    on_edit: move |value: String| {
                        progress.write().email_edited(&value);
                        email.set(value);
                    },
                    on_code_sent: move |sent: String| warn_rejected(progress.write().email.code_sent(&sent)),
                    on_verified: move |_: ()| warn_rejected(progress.write().email.verified()),
                }
                OtpField {
                    target: OtpTarget::Signup(role),
                    channel: OtpChannel::Phone,
                    value: phone(),
                    verification: current.phone.clone(),
                    locked: !current.phone_unlocked(),
                    on_edit: move |value: String| {
                        progress.write().phone_edited(&value);
                        phone.set(value);
                    },
                    on_code_sent: move |sent: String| warn_rejected(progress.write().send_phone_code(&sent)),
                    on_verified: move |_: ()| warn_rejected(progress.write().phone.verified()),
                }

                fieldset {
                    class: "signup-details",
                    disabled: !unlocked,
                    {children}
                    FormField {
                        label: "Password",
                        html_for: "signup-password",
                        hint: "At least 8 characters with upper and lower case, a number and a symbol".to_string(),
                        Input {
                            id: "signup-password",
                            r#type: "password",
                            autocomplete: "new-password".to_string(),
                            value: password(),
                            oninput: move |e: FormEvent| password.set(e.value()),
                        }
                    }
                    FormField { label: "Confirm password", html_for: "signup-confirm",
                        Input {
                            id: "signup-confirm",
                            r#type: "password",
                            autocomplete: "new-password".to_string(),
                            value: confirm(),
                            oninput: move |e: FormEvent| confirm.set(e.value()),
                        }
                    }
                }

                if let Some(err) = error() {
                    Alert { message: err }
                }
                Button {
                    r#type: "submit",
                    class: "btn-block",
                    disabled: !unlocked || submitting(),
                    if submitting() { "Creating account..." } else { "Create account" }
                }
                p {
                    class: "auth-switch",
                    "Already have an account? "
                    Link { to: Route::Login {}, "Log in" }
                }
            }
        }
    }
}

#[component]
pub fn InfluencerSignupPage() -> Element {
    use_redirect_when_signed_in();

    let api = use_api();
    let nav = use_navigator();
    let state = use_signup_state();
    let mut name = use_signal(String::new);
    let mut city = use_signal(String::new);
    let mut categories = use_signal(String::new);

    let handle_submit = move |_: ()| {
        let Some((email, phone)) = state.checked_contacts() else {
            return;
        };
        let form = InfluencerSignup {
            name: name(),
            email,
            phone,
            password: state.password.peek().clone(),
            city: optional(&city()),
            categories: ProfileUpdate::parse_categories(&categories()),
        };
        spawn(async move {
            if state.register(api, form).await {
                nav.replace(Route::Dashboard {});
            }
        });
    };

    rsx! {
        SignupForm { role: Role::Influencer, state: state, on_submit: handle_submit,
            FormField { label: "Full name", html_for: "signup-name",
                Input { id: "signup-name", value: name(), oninput: move |e: FormEvent| name.set(e.value()) }
            }
            FormField { label: "City", html_for: "signup-city",
                Input { id: "signup-city", value: city(), oninput: move |e: FormEvent| city.set(e.value()) }
            }
            FormField {
                label: "Categories",
                html_for: "signup-categories",
                hint: "Comma separated, e.g. Travel, Food".to_string(),
                Input {
                    id: "signup-categories",
                    value: categories(),
                    oninput: move |e: FormEvent| categories.set(e.value()),
                }
            }
        }
    }
}

#[component]
pub fn BrandSignupPage() -> Element {
    use_redirect_when_signed_in();

    let api = use_api();
    let nav = use_navigator();
    let state = use_signup_state();
    let mut company = use_signal(String::new);
    let mut contact = use_signal(String::new);
    let mut website = use_signal(String::new);
    let mut industry = use_signal(String::new);

    let handle_submit = move |_: ()| {
        let Some((email, phone)) = state.checked_contacts() else {
            return;
        };
        let form = BrandSignup {
            company_name: company(),
            contact_name: contact(),
            email,
            phone,
            password: state.password.peek().clone(),
            website: optional(&website()),
            industry: optional(&industry()),
        };
        spawn(async move {
            if state.register(api, form).await {
                nav.replace(Route::Dashboard {});
            }
        });
    };

    rsx! {
        SignupForm { role: Role::Brand, state: state, on_submit: handle_submit,
            FormField { label: "Company name", html_for: "signup-company",
                Input { id: "signup-company", value: company(), oninput: move |e: FormEvent| company.set(e.value()) }
            }
            FormField { label: "Your name", html_for: "signup-contact",
                Input { id: "signup-contact", value: contact(), oninput: move |e: FormEvent| contact.set(e.value()) }
            }
            FormField { label: "Website", html_for: "signup-website",
                Input {
                    id: "signup-website",
                    r#type: "url",
                    placeholder: "https://",
                    value: website(),
                    oninput: move |e: FormEvent| website.set(e.value()),
                }
            }
            FormField { label: "Industry", html_for: "signup-industry",
                Input { id: "signup-industry", value: industry(), oninput: move |e: FormEvent| industry.set(e.value()) }
            }
        }
    }
}

#[component]
pub fn AgencySignupPage() -> Element {
    use_redirect_when_signed_in();

    let api = use_api();
    let nav = use_navigator();
    let mut state = use_signup_state();
    let mut agency = use_signal(String::new);
    let mut contact = use_signal(String::new);
    let mut website = use_signal(String::new);
    let mut roster = use_signal(String::new);

    let handle_submit = move |_: ()| {
        let Some((email, phone)) = state.checked_contacts() else {
            return;
        };
        let roster_size = match optional(&roster()).map(|r| r.parse::<u32>()) {
            None => None,
            Some(Ok(size)) => Some(size),
            Some(Err(_)) => {
                state.error.set(Some("Roster size must be a whole number".to_string()));
                return;
            }
        };
        let form = AgencySignup {
            agency_name: agency(),
            contact_name: contact(),
            email,
            phone,
            password: state.password.peek().clone(),
            website: optional(&website()),
            roster_size,
        };
        spawn(async move {
            if state.register(api, form).await {
                nav.replace(Route::Dashboard {});
            }
        });
    };

    rsx! {
        SignupForm { role: Role::Agency, state: state, on_submit: handle_submit,
            FormField { label: "Agency name", html_for: "signup-agency",
                Input { id: "signup-agency", value: agency(), oninput: move |e: FormEvent| agency.set(e.value()) }
            }
            FormField { label: "Your name", html_for: "signup-contact",
                Input { id: "signup-contact", value: contact(), oninput: move |e: FormEvent| contact.set(e.value()) }
            }
            FormField { label: "Website", html_for: "signup-website",
                Input {
                    id: "signup-website",
                    r#type: "url",
                    placeholder: "https://",
                    value: website(),
                    oninput: move |e: FormEvent| website.set(e.value()),
                }
            }
            FormField { label: "Creators managed", html_for: "signup-roster",
                Input {
                    id: "signup-roster",
                    r#type: "number",
                    value: roster(),
                    oninput: move |e: FormEvent| roster.set(e.value()),
                }
            }
        }
    }
}
