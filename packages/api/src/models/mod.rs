//! Wire models for the marketplace backend.

mod auth;
mod commercials;
mod profile;
mod social;
mod subscription;

pub use auth::{
    Ack, AgencySignup, AuthSession, BrandSignup, InfluencerSignup, LoginRequest, OtpChannel,
    OtpRequest, OtpVerifyRequest, Registration,
};
pub use commercials::{Commercials, Deliverable, RateItem};
pub use profile::{KycDetails, KycStatus, Profile, ProfileUpdate, Role};
pub use social::{AuthUrl, Channel, Platform, YoutubeVerifyRequest};
pub use subscription::{
    format_amount, parse_amount, BillingInterval, Order, OrderRequest, PaymentReceipt,
    PaymentVerification, Plan, SubscriptionRecord, SubscriptionStatus,
};
