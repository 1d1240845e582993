//! Presentational blocks for the marketing pages.

use api::models::{Plan, Role};
use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant};
use crate::icons::FaCheck;
use crate::Icon;

#[component]
pub fn Hero(
    #[props(into)] title: String,
    #[props(into)] subtitle: String,
    #[props(into)] cta_label: String,
    #[props(into)] cta_to: String,
    #[props(default)] secondary: Option<(String, String)>,
) -> Element {
    rsx! {
        section {
            class: "hero",
            h1 { class: "hero-title", "{title}" }
            p { class: "hero-subtitle", "{subtitle}" }
            div {
                class: "hero-actions",
                Link { class: "btn btn-primary", to: "{cta_to}", "{cta_label}" }
                if let Some((label, to)) = secondary {
                    Link { class: "btn btn-outline", to: "{to}", "{label}" }
                }
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Feature {
    pub title: &'static str,
    pub body: &'static str,
}

#[component]
pub fn FeatureGrid(#[props(into)] heading: String, features: Vec<Feature>) -> Element {
    rsx! {
        section {
            class: "section",
            h2 { class: "section-title", "{heading}" }
            div {
                class: "feature-grid",
                for feature in features {
                    div {
                        key: "{feature.title}",
                        class: "card feature-card",
                        h3 { "{feature.title}" }
                        p { "{feature.body}" }
                    }
                }
            }
        }
    }
}

/// Numbered steps.
#[component]
pub fn HowItWorks(#[props(into)] heading: String, steps: Vec<Feature>) -> Element {
    rsx! {
        section {
            class: "section",
            h2 { class: "section-title", "{heading}" }
            ol {
                class: "steps",
                for (i, step) in steps.into_iter().enumerate() {
                    li {
                        key: "{i}",
                        class: "step",
                        span { class: "step-number", "{i + 1}" }
                        div {
                            h3 { "{step.title}" }
                            p { "{step.body}" }
                        }
                    }
                }
            }
        }
    }
}

/// One signup call-to-action card per role.
#[component]
pub fn RoleCallout(role: Role, #[props(into)] blurb: String) -> Element {
    let to = format!("/signup/{}", role.path_segment());
    rsx! {
        div {
            class: "card role-card",
            h3 { "For {role.label()}s" }
            p { "{blurb}" }
            Link { class: "btn btn-primary", to: "{to}", "Join as {role.label()}" }
        }
    }
}

/// A plan's price, features and purchase button.
#[component]
pub fn PlanCard(
    plan: Plan,
    #[props(default = "Choose plan".to_string(), into)] action_label: String,
    #[props(default)] current: bool,
    #[props(default)] busy: bool,
    #[props(default)] disabled: bool,
    on_select: Option<EventHandler<Plan>>,
) -> Element {
    let class = if plan.highlighted {
        "card plan-card highlighted"
    } else {
        "card plan-card"
    };
    let selected = plan.clone();

    rsx! {
        div {
            class: class,
            h3 { class: "plan-name", "{plan.name}" }
            p {
                class: "plan-price",
                "{plan.price_label()} "
                span { class: "plan-interval", "{plan.interval.per_label()}" }
            }
            ul {
                class: "plan-features",
                for feature in plan.features.iter() {
                    li {
                        key: "{feature}",
                        Icon { icon: FaCheck, width: 12, height: 12 }
                        " {feature}"
                    }
                }
            }
            if current {
                span { class: "badge", "Current plan" }
            } else if let Some(handler) = on_select {
                Button {
                    variant: if plan.highlighted { ButtonVariant::Primary } else { ButtonVariant::Outline },
                    disabled: busy || disabled,
                    onclick: move |_| handler.call(selected.clone()),
                    if busy { "Processing..." } else { "{action_label}" }
                }
            }
        }
    }
}

#[component]
pub fn Footer() -> Element {
    rsx! {
        footer {
            class: "footer",
            div {
                class: "footer-links",
                Link { to: "/pricing", "Pricing" }
                Link { to: "/signup", "Sign up" }
                Link { to: "/login", "Log in" }
            }
            p { class: "footer-note", "Creator Marketplace connects creators, brands and agencies." }
        }
    }
}
