//! Signup, login and OTP payloads.

use serde::{Deserialize, Serialize};

use super::profile::{Profile, Role};
use crate::validation::{
    normalize_phone, validate_email, validate_optional, validate_password, validate_phone,
    validate_required, validate_url, ValidationError,
};

/// Which contact an OTP is sent to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OtpChannel {
    Email,
    Phone,
}

impl OtpChannel {
    pub fn path_segment(self) -> &'static str {
        match self {
            OtpChannel::Email => "email",
            OtpChannel::Phone => "phone",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            OtpChannel::Email => "Email",
            OtpChannel::Phone => "Phone number",
        }
    }

    /// Validate a contact value for this channel.
    pub fn validate(self, value: &str) -> Result<(), ValidationError> {
        match self {
            OtpChannel::Email => validate_email(value),
            OtpChannel::Phone => validate_phone(value),
        }
    }

    /// The form the backend expects: trimmed lowercase email, bare 10-digit phone.
    pub fn normalize(self, value: &str) -> String {
        match self {
            OtpChannel::Email => value.trim().to_lowercase(),
            OtpChannel::Phone => normalize_phone(value),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OtpRequest {
    pub channel: OtpChannel,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OtpVerifyRequest {
    pub channel: OtpChannel,
    pub value: String,
    pub otp: String,
}

/// Generic acknowledgement body (`{"message": "..."}`), tolerant of an empty body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Ack {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub success: Option<bool>,
}

/// Returned by register and login.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthSession {
    pub token: String,
    pub profile: Profile,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn new(email: &str, password: &str) -> Self {
        Self {
            email: email.trim().to_lowercase(),
            password: password.to_string(),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_email(&self.email)?;
        validate_required("Password", &self.password)
    }
}

/// A role-specific signup form.
///
/// Every role verifies the same two contacts by OTP before registering, so
/// the signup wizard is generic over this trait.
pub trait Registration: Serialize {
    const ROLE: Role;

    fn validate(&self) -> Result<(), ValidationError>;
    /// Canonicalise contact fields before sending.
    fn normalize(&mut self);
}

fn validate_contact_and_password(
    email: &str,
    phone: &str,
    password: &str,
) -> Result<(), ValidationError> {
    validate_email(email)?;
    validate_phone(phone)?;
    validate_password(password)
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InfluencerSignup {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default)]
    pub categories: Vec<String>,
}

impl Registration for InfluencerSignup {
    const ROLE: Role = Role::Influencer;

    fn validate(&self) -> Result<(), ValidationError> {
        validate_required("Name", &self.name)?;
        validate_contact_and_password(&self.email, &self.phone, &self.password)
    }

    fn normalize(&mut self) {
        self.name = self.name.trim().to_string();
        self.email = OtpChannel::Email.normalize(&self.email);
        self.phone = OtpChannel::Phone.normalize(&self.phone);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandSignup {
    pub company_name: String,
    pub contact_name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
}

impl Registration for BrandSignup {
    const ROLE: Role = Role::Brand;

    fn validate(&self) -> Result<(), ValidationError> {
        validate_required("Company name", &self.company_name)?;
        validate_required("Contact name", &self.contact_name)?;
        validate_contact_and_password(&self.email, &self.phone, &self.password)?;
        validate_optional(self.website.as_deref(), validate_url)
    }

    fn normalize(&mut self) {
        self.company_name = self.company_name.trim().to_string();
        self.contact_name = self.contact_name.trim().to_string();
        self.email = OtpChannel::Email.normalize(&self.email);
        self.phone = OtpChannel::Phone.normalize(&self.phone);
        self.website = self.website.take().map(|w| w.trim().to_string()).filter(|w| !w.is_empty());
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgencySignup {
    pub agency_name: String,
    pub contact_name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    /// Number of creators the agency manages.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roster_size: Option<u32>,
}

impl Registration for AgencySignup {
    const ROLE: Role = Role::Agency;

    fn validate(&self) -> Result<(), ValidationError> {
        validate_required("Agency name", &self.agency_name)?;
        validate_required("Contact name", &self.contact_name)?;
        validate_contact_and_password(&self.email, &self.phone, &self.password)?;
        validate_optional(self.website.as_deref(), validate_url)
    }

    fn normalize(&mut self) {
        self.agency_name = self.agency_name.trim().to_string();
        self.contact_name = self.contact_name.trim().to_string();
        self.email = OtpChannel::Email.normalize(&self.email);
        self.phone = OtpChannel::Phone.normalize(&self.phone);
        self.website = self.website.take().map(|w| w.trim().to_string()).filter(|w| !w.is_empty());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn influencer() -> InfluencerSignup {
        InfluencerSignup {
            name: " Maya Rao ".to_string(),
            email: " Maya@Example.com".to_string(),
            phone: "+91 98765 43210".to_string(),
            password: "Str0ng!pass".to_string(),
            city: None,
            categories: vec!["Travel".to_string()],
        }
    }

    #[test]
    fn test_influencer_signup_validate_and_normalize() {
        let mut form = influencer();
        assert!(form.validate().is_ok());

        form.normalize();
        assert_eq!(form.name, "Maya Rao");
        assert_eq!(form.email, "maya@example.com");
        assert_eq!(form.phone, "9876543210");

        let json = serde_json::to_value(&form).unwrap();
        assert_eq!(json["name"], "Maya Rao");
        assert!(json.get("city").is_none());
    }

    #[test]
    fn test_influencer_signup_reports_first_failure() {
        let form = InfluencerSignup {
            name: String::new(),
            ..influencer()
        };
        assert_eq!(form.validate(), Err(ValidationError::Required("Name")));

        let form = InfluencerSignup {
            password: "weak".to_string(),
            ..influencer()
        };
        assert_eq!(form.validate(), Err(ValidationError::Password));
    }

    #[test]
    fn test_brand_signup_website_is_optional_but_checked() {
        let mut form = BrandSignup {
            company_name: "Acme".to_string(),
            contact_name: "Ravi".to_string(),
            email: "ravi@acme.in".to_string(),
            phone: "9123456780".to_string(),
            password: "Str0ng!pass".to_string(),
            website: Some("  ".to_string()),
            industry: None,
        };
        assert!(form.validate().is_ok());

        form.normalize();
        assert_eq!(form.website, None);
        let json = serde_json::to_value(&form).unwrap();
        assert_eq!(json["companyName"], "Acme");

        form.website = Some("acme".to_string());
        assert_eq!(form.validate(), Err(ValidationError::Url));
    }

    #[test]
    fn test_agency_signup_wire_names() {
        let form = AgencySignup {
            agency_name: "Talent Co".to_string(),
            contact_name: "Asha".to_string(),
            email: "asha@talent.co".to_string(),
            phone: "9000000001".to_string(),
            password: "Str0ng!pass".to_string(),
            website: None,
            roster_size: Some(40),
        };
        assert!(form.validate().is_ok());
        let json = serde_json::to_value(&form).unwrap();
        assert_eq!(json["agencyName"], "Talent Co");
        assert_eq!(json["rosterSize"], 40);
        assert_eq!(AgencySignup::ROLE, Role::Agency);
    }

    #[test]
    fn test_otp_channel() {
        assert_eq!(OtpChannel::Email.normalize(" A@B.co "), "a@b.co");
        assert_eq!(OtpChannel::Phone.normalize("0 9876543210"), "9876543210");
        assert_eq!(OtpChannel::Phone.validate("12"), Err(ValidationError::Phone));
        assert_eq!(
            serde_json::to_string(&OtpRequest {
                channel: OtpChannel::Phone,
                value: "9876543210".to_string()
            })
            .unwrap(),
            r#"{"channel":"phone","value":"9876543210"}"#
        );
    }

    #[test]
    fn test_login_request() {
        let req = LoginRequest::new(" Maya@Example.com ", "secret");
        assert_eq!(req.email, "maya@example.com");
        assert!(req.validate().is_ok());
        assert_eq!(
            LoginRequest::new("maya@example.com", "").validate(),
            Err(ValidationError::Required("Password"))
        );
    }
}
