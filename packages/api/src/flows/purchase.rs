//! Plan purchase: order → checkout → verify.

use super::FlowError;
use crate::models::{Order, PaymentReceipt, SubscriptionRecord};

/// Where a plan purchase is.
///
/// `Idle → OrderCreated → Verifying → Active`, with `Failed` reachable from
/// every in-progress state. Closing the checkout widget returns
/// `OrderCreated → Idle`.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum PurchaseFlow {
    #[default]
    Idle,
    /// Creating the order for `plan_id`.
    Ordering { plan_id: String },
    /// The backend created a gateway order; the checkout widget is open.
    OrderCreated { order: Order },
    /// Payment captured; waiting for the backend to verify the signature.
    Verifying { order: Order, receipt: PaymentReceipt },
    Active { record: SubscriptionRecord },
    Failed { message: String },
}

impl PurchaseFlow {
    fn name(&self) -> &'static str {
        match self {
            PurchaseFlow::Idle => "idle",
            PurchaseFlow::Ordering { .. } => "creating an order",
            PurchaseFlow::OrderCreated { .. } => "in checkout",
            PurchaseFlow::Verifying { .. } => "verifying payment",
            PurchaseFlow::Active { .. } => "active",
            PurchaseFlow::Failed { .. } => "failed",
        }
    }

    /// The user picked a plan. Allowed from `Idle` and after a failure.
    pub fn start(&mut self, plan_id: &str) -> Result<(), FlowError> {
        match self {
            PurchaseFlow::Idle | PurchaseFlow::Failed { .. } => {
                *self = PurchaseFlow::Ordering {
                    plan_id: plan_id.to_string(),
                };
                Ok(())
            }
            _ => Err(FlowError::out_of_order(self.name(), "start a purchase")),
        }
    }

    pub fn order_created(&mut self, order: Order) -> Result<(), FlowError> {
        match self {
            PurchaseFlow::Ordering { plan_id } if *plan_id == order.plan_id => {
                *self = PurchaseFlow::OrderCreated { order };
                Ok(())
            }
            _ => Err(FlowError::out_of_order(self.name(), "accept an order")),
        }
    }

    /// Checkout reported a payment for the open order.
    pub fn payment_captured(&mut self, receipt: PaymentReceipt) -> Result<(), FlowError> {
        match self {
            PurchaseFlow::OrderCreated { order } if order.order_id == receipt.order_id => {
                let order = order.clone();
                *self = PurchaseFlow::Verifying { order, receipt };
                Ok(())
            }
            _ => Err(FlowError::out_of_order(self.name(), "capture a payment")),
        }
    }

    /// The user closed the checkout widget without paying.
    pub fn checkout_dismissed(&mut self) -> Result<(), FlowError> {
        match self {
            PurchaseFlow::OrderCreated { .. } => {
                *self = PurchaseFlow::Idle;
                Ok(())
            }
            _ => Err(FlowError::out_of_order(self.name(), "dismiss checkout")),
        }
    }

    pub fn verified(&mut self, record: SubscriptionRecord) -> Result<(), FlowError> {
        match self {
            PurchaseFlow::Verifying { .. } => {
                *self = PurchaseFlow::Active { record };
                Ok(())
            }
            _ => Err(FlowError::out_of_order(self.name(), "activate")),
        }
    }

    /// A request in the flow failed.
    pub fn fail(&mut self, message: impl Into<String>) -> Result<(), FlowError> {
        if self.in_progress() {
            *self = PurchaseFlow::Failed {
                message: message.into(),
            };
            Ok(())
        } else {
            Err(FlowError::out_of_order(self.name(), "fail"))
        }
    }

    /// Back to `Idle` once a finished or failed purchase has been shown.
    pub fn reset(&mut self) -> Result<(), FlowError> {
        match self {
            PurchaseFlow::Active { .. } | PurchaseFlow::Failed { .. } | PurchaseFlow::Idle => {
                *self = PurchaseFlow::Idle;
                Ok(())
            }
            _ => Err(FlowError::out_of_order(self.name(), "reset")),
        }
    }

    /// A request is outstanding or the checkout widget is open.
    pub fn in_progress(&self) -> bool {
        matches!(
            self,
            PurchaseFlow::Ordering { .. }
                | PurchaseFlow::OrderCreated { .. }
                | PurchaseFlow::Verifying { .. }
        )
    }

    /// Plan currently being bought, if any.
    pub fn plan_id(&self) -> Option<&str> {
        match self {
            PurchaseFlow::Ordering { plan_id } => Some(plan_id.as_str()),
            PurchaseFlow::OrderCreated { order } | PurchaseFlow::Verifying { order, .. } => {
                Some(order.plan_id.as_str())
            }
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            PurchaseFlow::Failed { message } => Some(message.as_str()),
            _ => None,
        }
    }
}
