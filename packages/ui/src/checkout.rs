//! Bridge to the Razorpay Checkout browser widget.
//!
//! The widget script is loaded by the app shell (see [`CHECKOUT_SCRIPT_URL`]).
//! [`open_checkout`] opens it for a backend-created order through
//! `document::eval` and waits for the first of two outcomes: the success
//! handler (yielding a [`PaymentReceipt`]) or the dismiss handler.

use api::models::{Order, PaymentReceipt, Profile};
use dioxus::prelude::*;
use serde::{Deserialize, Serialize};
use store::config::PaymentsConfig;

pub const CHECKOUT_SCRIPT_URL: &str = "https://checkout.razorpay.com/v1/checkout.js";

const CHECKOUT_JS: &str = r#"
const opts = await dioxus.recv();
if (typeof Razorpay === "undefined") {
    dioxus.send({ status: "unavailable" });
    return;
}
const rzp = new Razorpay({
    key: opts.key,
    amount: opts.amount,
    currency: opts.currency,
    name: opts.name,
    description: opts.description,
    order_id: opts.orderId,
    prefill: opts.prefill,
    handler: (r) => dioxus.send({
        status: "paid",
        orderId: r.razorpay_order_id,
        paymentId: r.razorpay_payment_id,
        signature: r.razorpay_signature,
    }),
    modal: { ondismiss: () => dioxus.send({ status: "dismissed" }) },
});
rzp.open();
"#;

/// Options handed to the widget.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutOptions {
    pub key: String,
    pub amount: u64,
    pub currency: String,
    pub name: String,
    pub description: String,
    pub order_id: String,
    pub prefill: Prefill,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Prefill {
    pub name: String,
    pub email: String,
    pub contact: String,
}

impl CheckoutOptions {
    /// The order's currency wins; the configured one covers a blank value.
    pub fn new(payments: &PaymentsConfig, order: &Order, plan_name: &str, profile: Option<&Profile>) -> Self {
        let prefill = profile
            .map(|p| Prefill {
                name: p.name.clone(),
                email: p.email.clone(),
                contact: p.phone.clone().unwrap_or_default(),
            })
            .unwrap_or_default();
        Self {
            key: payments.key_id.clone(),
            amount: order.amount,
            currency: Some(order.currency.trim())
                .filter(|c| !c.is_empty())
                .unwrap_or(payments.currency.as_str())
                .to_string(),
            name: payments.merchant_name.clone(),
            description: format!("{plan_name} subscription"),
            order_id: order.order_id.clone(),
            prefill,
        }
    }
}

/// Message posted back by the widget script.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase", rename_all_fields = "camelCase")]
enum CheckoutReply {
    Paid {
        order_id: String,
        payment_id: String,
        signature: String,
    },
    Dismissed,
    Unavailable,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CheckoutOutcome {
    Paid(PaymentReceipt),
    Dismissed,
    /// The widget could not be opened.
    Unavailable(String),
}

impl From<CheckoutReply> for CheckoutOutcome {
    fn from(reply: CheckoutReply) -> Self {
        match reply {
            CheckoutReply::Paid {
                order_id,
                payment_id,
                signature,
            } => CheckoutOutcome::Paid(PaymentReceipt {
                order_id,
                payment_id,
                signature,
            }),
            CheckoutReply::Dismissed => CheckoutOutcome::Dismissed,
            CheckoutReply::Unavailable => {
                CheckoutOutcome::Unavailable("Payment checkout failed to load".to_string())
            }
        }
    }
}

/// Open the checkout widget and wait for the user to pay or close it.
pub async fn open_checkout(options: CheckoutOptions) -> CheckoutOutcome {
    let mut eval = document::eval(CHECKOUT_JS);
    if let Err(e) = eval.send(options) {
        tracing::error!("Failed to open checkout: {e:?}");
        return CheckoutOutcome::Unavailable("Could not open payment checkout".to_string());
    }
    match eval.recv::<CheckoutReply>().await {
        Ok(reply) => reply.into(),
        Err(e) => {
            tracing::error!("Checkout returned an unexpected reply: {e:?}");
            CheckoutOutcome::Unavailable("Payment checkout failed".to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paid_reply_becomes_receipt() {
        let reply: CheckoutReply = serde_json::from_str(
            r#"{"status":"paid","orderId":"order_1","paymentId":"pay_1","signature":"sig"}"#,
        )
        .unwrap();
        assert_eq!(
            CheckoutOutcome::from(reply),
            CheckoutOutcome::Paid(PaymentReceipt {
                order_id: "order_1".to_string(),
                payment_id: "pay_1".to_string(),
                signature: "sig".to_string(),
            })
        );
    }

    #[test]
    fn test_dismissed_and_unavailable_replies() {
        let reply: CheckoutReply = serde_json::from_str(r#"{"status":"dismissed"}"#).unwrap();
        assert_eq!(CheckoutOutcome::from(reply), CheckoutOutcome::Dismissed);

        let reply: CheckoutReply = serde_json::from_str(r#"{"status":"unavailable"}"#).unwrap();
        assert!(matches!(CheckoutOutcome::from(reply), CheckoutOutcome::Unavailable(_)));
    }

    #[test]
    fn test_options_wire_names() {
        let payments = PaymentsConfig {
            key_id: "rzp_test_1".to_string(),
            ..PaymentsConfig::default()
        };
        let order = Order {
            order_id: "order_9".to_string(),
            amount: 49_900,
            currency: "INR".to_string(),
            plan_id: "pro".to_string(),
        };
        let json = serde_json::to_value(CheckoutOptions::new(&payments, &order, "Pro", None)).unwrap();
        assert_eq!(json["key"], "rzp_test_1");
        assert_eq!(json["orderId"], "order_9");
        assert_eq!(json["amount"], 49_900);
        assert_eq!(json["name"], "Creator Marketplace");
        assert_eq!(json["description"], "Pro subscription");
        assert_eq!(json["prefill"]["email"], "");
    }

    #[test]
    fn test_options_currency_falls_back_to_config() {
        let payments = PaymentsConfig {
            currency: "USD".to_string(),
            ..PaymentsConfig::default()
        };
        let mut order = Order {
            order_id: "order_9".to_string(),
            amount: 1_000,
            currency: String::new(),
            plan_id: "pro".to_string(),
        };
        assert_eq!(CheckoutOptions::new(&payments, &order, "Pro", None).currency, "USD");

        order.currency = "INR".to_string();
        assert_eq!(CheckoutOptions::new(&payments, &order, "Pro", None).currency, "INR");
    }
}
