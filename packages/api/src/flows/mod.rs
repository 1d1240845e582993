//! # Multi-step flows
//!
//! The three wizards in the app (OTP-gated signup, plan purchase, social
//! account linking) are each a short, linearly ordered state machine. They
//! live here, free of any UI code, so the pages only hold one of these in a
//! signal and ask it what to render.
//!
//! Every transition is a method returning `Result<(), FlowError>`. An event
//! that arrives in the wrong state is rejected and leaves the state untouched,
//! so a double click or a stale callback cannot skip a step.

mod link;
mod otp;
mod purchase;

pub use link::LinkFlow;
pub use otp::{ContactVerification, SignupProgress, SignupStep};
pub use purchase::PurchaseFlow;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FlowError {
    #[error("cannot {event} while {state}")]
    OutOfOrder {
        state: &'static str,
        event: &'static str,
    },
}

impl FlowError {
    pub(crate) fn out_of_order(state: &'static str, event: &'static str) -> Self {
        FlowError::OutOfOrder { state, event }
    }
}
