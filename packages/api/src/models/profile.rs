//! # Profile model
//!
//! [`Profile`] is the client-side mirror of the backend's user record, loaded
//! from `GET /api/profile` and returned by register/login. It is owned and
//! validated server-side; the client only edits it through [`ProfileUpdate`],
//! [`KycDetails`] and the OTP-gated contact update.
//!
//! [`Role`] doubles as the URL segment for the role-specific signup endpoints
//! (`/api/influencer/...`, `/api/brand/...`, `/api/agency/...`).

use serde::{Deserialize, Serialize};

use super::subscription::SubscriptionRecord;
use crate::validation::{
    validate_account_number, validate_gstin, validate_ifsc, validate_optional, validate_pan,
    validate_required, ValidationError,
};

/// Marketplace account type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Influencer,
    Brand,
    Agency,
}

impl Role {
    /// Path segment used by the signup endpoints and routes.
    pub fn path_segment(self) -> &'static str {
        match self {
            Role::Influencer => "influencer",
            Role::Brand => "brand",
            Role::Agency => "agency",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Role::Influencer => "Influencer",
            Role::Brand => "Brand",
            Role::Agency => "Agency",
        }
    }
}

/// KYC review state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum KycStatus {
    #[default]
    NotSubmitted,
    Pending,
    Verified,
    Rejected,
}

impl KycStatus {
    pub fn label(self) -> &'static str {
        match self {
            KycStatus::NotSubmitted => "Not submitted",
            KycStatus::Pending => "Under review",
            KycStatus::Verified => "Verified",
            KycStatus::Rejected => "Rejected",
        }
    }

    /// Verified details are locked; everything else can be (re)submitted.
    pub fn editable(self) -> bool {
        self != KycStatus::Verified
    }
}

/// Payout identity and bank details.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KycDetails {
    pub pan: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gstin: Option<String>,
    pub account_holder: String,
    pub account_number: String,
    pub ifsc: String,
    #[serde(default)]
    pub status: KycStatus,
}

impl KycDetails {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_pan(&self.pan)?;
        validate_optional(self.gstin.as_deref(), validate_gstin)?;
        validate_required("Account holder name", &self.account_holder)?;
        validate_account_number(&self.account_number)?;
        validate_ifsc(&self.ifsc)?;
        Ok(())
    }

    /// Upper-case identifiers and drop whitespace before sending.
    pub fn normalized(&self) -> Self {
        Self {
            pan: self.pan.trim().to_uppercase(),
            gstin: self
                .gstin
                .as_deref()
                .map(|g| g.trim().to_uppercase())
                .filter(|g| !g.is_empty()),
            account_holder: self.account_holder.trim().to_string(),
            account_number: self.account_number.chars().filter(|c| !c.is_whitespace()).collect(),
            ifsc: self.ifsc.trim().to_uppercase(),
            status: self.status,
        }
    }
}

/// The signed-in user's profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: String,
    #[serde(default)]
    pub role: Role,
    #[serde(default)]
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email_verified: bool,
    #[serde(default)]
    pub phone_verified: bool,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub kyc: Option<KycDetails>,
    #[serde(default)]
    pub active_subscription: Option<SubscriptionRecord>,
}

impl Profile {
    /// Get display name, falling back to email if name is not set.
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            &self.email
        } else {
            &self.name
        }
    }

    pub fn kyc_status(&self) -> KycStatus {
        self.kyc.as_ref().map(|k| k.status).unwrap_or_default()
    }

    /// Seed for the editable profile form.
    pub fn to_update(&self) -> ProfileUpdate {
        ProfileUpdate {
            name: self.name.clone(),
            bio: self.bio.clone(),
            city: self.city.clone(),
            categories: self.categories.clone(),
        }
    }
}

/// Editable subset of the profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default)]
    pub categories: Vec<String>,
}

impl ProfileUpdate {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_required("Name", &self.name)
    }

    /// Parse a comma-separated category list as typed into the form.
    pub fn parse_categories(input: &str) -> Vec<String> {
        let mut out: Vec<String> = Vec::new();
        for cat in input.split(',').map(str::trim).filter(|c| !c.is_empty()) {
            if !out.iter().any(|c| c.eq_ignore_ascii_case(cat)) {
                out.push(cat.to_string());
            }
        }
        out
    }
}
