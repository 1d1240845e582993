use api::flows::PurchaseFlow;
use api::models::{PaymentReceipt, Plan, SubscriptionRecord};
use dioxus::prelude::*;

use crate::auth::{use_api, use_auth, ApiHandle};
use crate::checkout::{open_checkout, CheckoutOptions, CheckoutOutcome};
use crate::components::{Alert, AlertKind, Button, ButtonVariant};
use crate::log_flow;
use crate::notice::{notify, use_notices, NoticeLevel};
use crate::sections::PlanCard;
use crate::views::ConfirmDialog;

/// Current plan, plan picker with checkout, and billing history with
/// cancellation.
#[component]
pub fn SubscriptionView() -> Element {
    let api = use_api();
    let auth = use_auth();
    let mut notices = use_notices();
    let mut flow = use_signal(PurchaseFlow::default);
    let mut cancelling = use_signal(|| Option::<SubscriptionRecord>::None);
    let mut cancel_busy = use_signal(|| false);

    let plans = use_resource(move || async move { api.client().plans().await });
    let mut history = use_resource(move || async move { api.client().subscription_history().await });

    let payments_enabled = api.config().payments_enabled();

    let handle_select = move |plan: Plan| {
        if let Err(e) = flow.write().start(&plan.id) {
            tracing::warn!("{e}");
            return;
        }
        spawn(async move {
            let client = api.client();
            let order = match client.create_order(&plan.id).await {
                Ok(order) => order,
                Err(e) => {
                    log_flow(flow.write().fail(api.error_message(&e)));
                    return;
                }
            };
            log_flow(flow.write().order_created(order.clone()));

            let profile = auth.peek().profile.clone();
            let options = CheckoutOptions::new(&api.config().payments, &order, &plan.name, profile.as_ref());
            match open_checkout(options).await {
                CheckoutOutcome::Paid(receipt) => {
                    if !capture_payment(&mut flow.write(), receipt.clone()) {
                        return;
                    }
                    match client.verify_payment(&plan.id, &receipt).await {
                        Ok(record) => {
                            log_flow(flow.write().verified(record));
                            notify(
                                &mut notices,
                                NoticeLevel::Success,
                                &format!("You're now on the {} plan", plan.name),
                            );
                            history.restart();
                            refresh_profile(api).await;
                        }
                        Err(e) => log_flow(flow.write().fail(api.error_message(&e))),
                    }
                }
                CheckoutOutcome::Dismissed => {
                    log_flow(flow.write().checkout_dismissed());
                    notify(&mut notices, NoticeLevel::Info, "Payment cancelled");
                }
                CheckoutOutcome::Unavailable(message) => log_flow(flow.write().fail(message)),
            }
        });
    };

    let handle_cancel = move |_: ()| {
        let Some(record) = cancelling() else {
            return;
        };
        spawn(async move {
            cancel_busy.set(true);
            match api.client().cancel_subscription(&record.id).await {
                Ok(_) => {
                    notify(&mut notices, NoticeLevel::Success, "Subscription cancelled");
                    history.restart();
                    refresh_profile(api).await;
                }
                Err(e) => {
                    let message = api.error_message(&e);
                    notify(&mut notices, NoticeLevel::Error, &message);
                }
            }
            cancel_busy.set(false);
            cancelling.set(None);
        });
    };

    let records = match &*history.read() {
        Some(Ok(records)) => records.clone(),
        _ => Vec::new(),
    };
    let current = records
        .iter()
        .find(|r| r.is_active())
        .cloned()
        .or_else(|| auth().profile.and_then(|p| p.active_subscription).filter(|s| s.is_active()));
    let current_plan_id = current.as_ref().map(|r| r.plan_id.clone());

    let plan_list = plans.read().clone();
    let history_error = match &*history.read() {
        Some(Err(e)) => Some(e.user_message()),
        _ => None,
    };
    let state = flow();

    rsx! {
        section {
            class: "card",
            h2 { class: "card-title", "Current plan" }
            if let Some(record) = current.clone() {
                div {
                    class: "current-plan",
                    p {
                        strong { "{record.plan_name}" }
                        " · {record.amount_label()}"
                    }
                    if let Some(expires) = record.expires_at.clone() {
                        p { class: "muted", "Renews or expires on {expires}" }
                    }
                    Button {
                        variant: ButtonVariant::Destructive,
                        onclick: move |_| cancelling.set(Some(record.clone())),
                        "Cancel subscription"
                    }
                }
            } else {
                p { class: "muted", "You don't have an active subscription." }
            }
        }

        section {
            class: "section",
            h2 { class: "section-title", "Plans" }
            if !payments_enabled {
                Alert { kind: AlertKind::Info, message: "Online payments are not configured." }
            }
            {
                match &state {
                    PurchaseFlow::Active { record } => rsx! {
                        div {
                            class: "purchase-result",
                            Alert {
                                kind: AlertKind::Success,
                                message: format!("Payment verified. {} is active.", record.plan_name),
                            }
                            Button {
                                variant: ButtonVariant::Ghost,
                                onclick: move |_| log_flow(flow.write().reset()),
                                "Done"
                            }
                        }
                    },
                    PurchaseFlow::Failed { message } => rsx! {
                        div {
                            class: "purchase-result",
                            Alert { message: message.clone() }
                            Button {
                                variant: ButtonVariant::Ghost,
                                onclick: move |_| log_flow(flow.write().reset()),
                                "Dismiss"
                            }
                        }
                    },
                    PurchaseFlow::Verifying { .. } => rsx! {
                        Alert { kind: AlertKind::Info, message: "Verifying your payment..." }
                    },
                    _ => rsx! {},
                }
            }
            {
                match plan_list {
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
                                    current: current_plan_id.as_deref() == Some(plan.id.as_str()),
                                    busy: state.in_progress() && state.plan_id() == Some(plan.id.as_str()),
                                    disabled: state.in_progress() || !payments_enabled || plan.is_free(),
                                    action_label: if plan.is_free() { "Free" } else { "Subscribe" },
                                    on_select: handle_select,
                                    plan: plan.clone(),
                                }
                            }
                        }
                    },
                }
            }
        }

        section {
            class: "card",
            h2 { class: "card-title", "Billing history" }
            if let Some(err) = history_error {
                Alert { message: err }
            } else if records.is_empty() {
                p { class: "muted", "No payments yet." }
            } else {
                table {
                    class: "history-table",
                    thead {
                        tr {
                            th { "Plan" }
                            th { "Amount" }
                            th { "Status" }
                            th { "Started" }
                            th { "Expires" }
                        }
                    }
                    tbody {
                        for record in records.iter() {
                            tr {
                                key: "{record.id}",
                                td { "{record.plan_name}" }
                                td { "{record.amount_label()}" }
                                td { "{record.status.label()}" }
                                td { {record.started_at.clone().unwrap_or_else(|| "-".to_string())} }
                                td { {record.expires_at.clone().unwrap_or_else(|| "-".to_string())} }
                            }
                        }
                    }
                }
            }
        }

        if let Some(record) = cancelling() {
            ConfirmDialog {
                title: "Cancel subscription?",
                message: format!(
                    "Your {} plan will stop renewing and premium features will be turned off.",
                    record.plan_name,
                ),
                confirm_label: "Cancel subscription",
                destructive: true,
                busy: cancel_busy(),
                on_confirm: handle_cancel,
                on_cancel: move |_| cancelling.set(None),
            }
        }
    }
}

/// Record a captured payment. A receipt for some other order fails the flow
/// instead, so it is never sent for verification.
fn capture_payment(flow: &mut PurchaseFlow, receipt: PaymentReceipt) -> bool {
    match flow.payment_captured(receipt) {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!("{e}");
            log_flow(flow.fail("The payment did not match this order. Please try again."));
            false
        }
    }
}

/// Reload the profile so the active plan shown elsewhere stays current.
async fn refresh_profile(api: ApiHandle) {
    match api.client().profile().await {
        Ok(profile) => api.set_profile(profile),
        Err(e) => tracing::warn!("Failed to refresh profile: {e}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::models::Order;

    fn checkout_open() -> PurchaseFlow {
        let mut flow = PurchaseFlow::default();
        flow.start("pro").unwrap();
        flow.order_created(Order {
            order_id: "order_1".to_string(),
            amount: 99_900,
            currency: "INR".to_string(),
            plan_id: "pro".to_string(),
        })
        .unwrap();
        flow
    }

    fn receipt(order_id: &str) -> PaymentReceipt {
        PaymentReceipt {
            order_id: order_id.to_string(),
            payment_id: "pay_1".to_string(),
            signature: "sig".to_string(),
        }
    }

    #[test]
    fn test_capture_payment_for_open_order() {
        let mut flow = checkout_open();
        assert!(capture_payment(&mut flow, receipt("order_1")));
        assert!(matches!(flow, PurchaseFlow::Verifying { .. }));
    }

    #[test]
    fn test_mismatched_receipt_fails_and_unblocks_plans() {
        let mut flow = checkout_open();
        assert!(!capture_payment(&mut flow, receipt("order_X")));
        assert!(!flow.in_progress());
        assert_eq!(
            flow.error(),
            Some("The payment did not match this order. Please try again.")
        );
        flow.reset().unwrap();
        assert_eq!(flow, PurchaseFlow::Idle);
    }
}
