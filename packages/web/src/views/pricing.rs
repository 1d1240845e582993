use api::models::Plan;
use dioxus::prelude::*;
use ui::components::Alert;
use ui::sections::PlanCard;
use ui::{use_api, use_auth};

use crate::Route;

/// Public plan list. Choosing a plan leads to signup, or to the
/// subscription page when already signed in.
#[component]
pub fn Pricing() -> Element {
    let api = use_api();
    let auth = use_auth();
    let nav = use_navigator();
    let plans = use_resource(move || async move { api.client().plans().await });

    let handle_select = move |_: Plan| {
        if auth.peek().is_signed_in() {
            nav.push(Route::Subscription {});
        } else {
            nav.push(Route::SignupChooser {});
        }
    };

    let loaded = plans.read().clone();

    rsx! {
        section {
            class: "section",
            h1 { class: "section-title", "Plans for every stage" }
            p { class: "muted", "Cancel anytime from your dashboard." }
            {
                match loaded {
                    None => rsx! {
                        p { class: "muted", "Loading plans..." }
                    },
                    Some(Err(e)) => rsx! {
                        Alert { message: e.user_message() }
                    },
                    Some(Ok(list)) => rsx! {
                        div {
                            class: "plan-grid",
                            for plan in list {
                                PlanCard {
                                    key: "{plan.id}",
                                    action_label: if plan.is_free() { "Start free" } else { "Get started" },
                                    on_select: handle_select,
                                    plan: plan.clone(),
                                }
                            }
                        }
                    },
                }
            }
        }
    }
}
