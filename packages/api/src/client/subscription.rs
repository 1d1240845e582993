//! Plans and the order/verify/cancel handshake.

use reqwest::Method;

use super::ApiClient;
use crate::error::ApiError;
use crate::models::{
    Order, OrderRequest, PaymentReceipt, PaymentVerification, Plan, SubscriptionRecord,
};

impl ApiClient {
    pub async fn plans(&self) -> Result<Vec<Plan>, ApiError> {
        self.get("/api/subscription/plans").await
    }

    /// Create a payment-gateway order for a plan.
    pub async fn create_order(&self, plan_id: &str) -> Result<Order, ApiError> {
        let body = OrderRequest {
            plan_id: plan_id.to_string(),
        };
        self.send_json(Method::POST, "/api/subscription/order", &body)
            .await
    }

    /// Hand the checkout receipt to the backend for signature verification.
    pub async fn verify_payment(
        &self,
        plan_id: &str,
        receipt: &PaymentReceipt,
    ) -> Result<SubscriptionRecord, ApiError> {
        let body = PaymentVerification::new(plan_id, receipt);
        self.send_json(Method::POST, "/api/subscription/verify", &body)
            .await
    }

    pub async fn cancel_subscription(&self, id: &str) -> Result<SubscriptionRecord, ApiError> {
        let path = format!("/api/subscription/cancel/{id}");
        self.send_empty(Method::PUT, &path).await
    }

    /// Past and current subscriptions, newest first as the backend orders them.
    pub async fn subscription_history(&self) -> Result<Vec<SubscriptionRecord>, ApiError> {
        self.get("/api/subscription/history").await
    }
}
