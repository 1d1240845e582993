//! # Subscription models
//!
//! Purchasing a plan is a three-call handshake with the backend and the
//! payment gateway:
//!
//! 1. `POST /api/subscription/order` with an [`OrderRequest`] creates a
//!    gateway [`Order`].
//! 2. The checkout widget collects payment and hands back a
//!    [`PaymentReceipt`] (order id, payment id, signature).
//! 3. `POST /api/subscription/verify` with a [`PaymentVerification`] lets the
//!    backend check the signature and activate a [`SubscriptionRecord`].
//!
//! Amounts are integers in minor units (paise for INR). [`format_amount`]
//! renders them for display.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BillingInterval {
    #[default]
    Monthly,
    Quarterly,
    Yearly,
}

impl BillingInterval {
    pub fn per_label(self) -> &'static str {
        match self {
            BillingInterval::Monthly => "/ month",
            BillingInterval::Quarterly => "/ quarter",
            BillingInterval::Yearly => "/ year",
        }
    }
}

/// A purchasable subscription tier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    pub id: String,
    pub name: String,
    /// Price in minor units.
    pub amount: u64,
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default)]
    pub interval: BillingInterval,
    #[serde(default)]
    pub features: Vec<String>,
    /// Rendered as the recommended tier.
    #[serde(default)]
    pub highlighted: bool,
}

fn default_currency() -> String {
    "INR".to_string()
}

impl Plan {
    pub fn price_label(&self) -> String {
        format_amount(self.amount, &self.currency)
    }

    pub fn is_free(&self) -> bool {
        self.amount == 0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    pub plan_id: String,
}

/// Payment-gateway order created by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub order_id: String,
    pub amount: u64,
    #[serde(default = "default_currency")]
    pub currency: String,
    pub plan_id: String,
}

/// What the checkout widget reports on a successful payment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentReceipt {
    pub order_id: String,
    pub payment_id: String,
    pub signature: String,
}

/// Body of `POST /api/subscription/verify`. Field names follow the gateway.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentVerification {
    pub razorpay_order_id: String,
    pub razorpay_payment_id: String,
    pub razorpay_signature: String,
    #[serde(rename = "planId")]
    pub plan_id: String,
}

impl PaymentVerification {
    pub fn new(plan_id: &str, receipt: &PaymentReceipt) -> Self {
        Self {
            razorpay_order_id: receipt.order_id.clone(),
            razorpay_payment_id: receipt.payment_id.clone(),
            razorpay_signature: receipt.signature.clone(),
            plan_id: plan_id.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionStatus {
    #[default]
    Pending,
    Active,
    Cancelled,
    Expired,
}

impl SubscriptionStatus {
    pub fn label(self) -> &'static str {
        match self {
            SubscriptionStatus::Pending => "Pending",
            SubscriptionStatus::Active => "Active",
            SubscriptionStatus::Cancelled => "Cancelled",
            SubscriptionStatus::Expired => "Expired",
        }
    }
}

/// One purchased subscription, current or historical.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionRecord {
    pub id: String,
    pub plan_id: String,
    #[serde(default)]
    pub plan_name: String,
    #[serde(default)]
    pub status: SubscriptionStatus,
    #[serde(default)]
    pub amount: u64,
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default)]
    pub started_at: Option<String>,
    #[serde(default)]
    pub expires_at: Option<String>,
}

impl SubscriptionRecord {
    pub fn is_active(&self) -> bool {
        self.status == SubscriptionStatus::Active
    }

    /// Only an active subscription can be cancelled.
    pub fn is_cancellable(&self) -> bool {
        self.is_active()
    }

    pub fn amount_label(&self) -> String {
        format_amount(self.amount, &self.currency)
    }
}

/// Format a minor-unit amount for display.
///
/// INR uses the rupee sign and Indian digit grouping (`₹1,24,999`); other
/// currencies use their code and thousands grouping. Paise/cents are shown
/// only when non-zero.
pub fn format_amount(minor: u64, currency: &str) -> String {
    let major = minor / 100;
    let fraction = minor % 100;
    let (prefix, grouped) = match currency {
        "INR" => ("₹".to_string(), group_indian(major)),
        "USD" => ("$".to_string(), group_thousands(major)),
        other => (format!("{other} "), group_thousands(major)),
    };
    if fraction == 0 {
        format!("{prefix}{grouped}")
    } else {
        format!("{prefix}{grouped}.{fraction:02}")
    }
}

/// Parse a price typed in major units (`"1,499"`, `"499.5"`) into minor units.
///
/// Returns `None` for anything that is not a plain non-negative amount with at
/// most two decimals.
pub fn parse_amount(input: &str) -> Option<u64> {
    let cleaned: String = input
        .trim()
        .trim_start_matches('₹')
        .chars()
        .filter(|c| *c != ',')
        .collect();
    let (whole, fraction) = match cleaned.split_once('.') {
        Some((w, f)) => (w, f),
        None => (cleaned.as_str(), ""),
    };
    if whole.is_empty() || !whole.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    if fraction.len() > 2 || !fraction.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    let whole: u64 = whole.parse().ok()?;
    let fraction: u64 = match fraction.len() {
        0 => 0,
        1 => fraction.parse::<u64>().ok()? * 10,
        _ => fraction.parse().ok()?,
    };
    whole.checked_mul(100)?.checked_add(fraction)
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

fn group_indian(n: u64) -> String {
    let digits = n.to_string();
    if digits.len() <= 3 {
        return digits;
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut out = String::new();
    for (i, c) in head.chars().enumerate() {
        if i > 0 && (head.len() - i) % 2 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    format!("{out},{tail}")
}
