//! Profile, KYC, contact update and media kit endpoints.

use reqwest::Method;

use super::ApiClient;
use crate::error::ApiError;
use crate::models::{
    Ack, Commercials, KycDetails, OtpChannel, OtpRequest, OtpVerifyRequest, Profile,
    ProfileUpdate,
};
use crate::validation::validate_otp;

impl ApiClient {
    pub async fn profile(&self) -> Result<Profile, ApiError> {
        self.get("/api/profile").await
    }

    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<Profile, ApiError> {
        update.validate()?;
        self.send_json(Method::PUT, "/api/profile", update).await
    }

    pub async fn update_kyc(&self, kyc: &KycDetails) -> Result<Profile, ApiError> {
        kyc.validate()?;
        self.send_json(Method::PUT, "/api/profile/kyc", &kyc.normalized())
            .await
    }

    /// Start changing the account email or phone: the backend sends an OTP to
    /// the new value.
    pub async fn request_contact_otp(
        &self,
        channel: OtpChannel,
        value: &str,
    ) -> Result<Ack, ApiError> {
        channel.validate(value)?;
        let body = OtpRequest {
            channel,
            value: channel.normalize(value),
        };
        let path = format!("/api/profile/register/{}", channel.path_segment());
        self.send_json(Method::POST, &path, &body).await
    }

    /// Confirm the new contact with its OTP. Returns the updated profile.
    pub async fn verify_contact_otp(
        &self,
        channel: OtpChannel,
        value: &str,
        otp: &str,
    ) -> Result<Profile, ApiError> {
        channel.validate(value)?;
        validate_otp(otp)?;
        let body = OtpVerifyRequest {
            channel,
            value: channel.normalize(value),
            otp: otp.trim().to_string(),
        };
        let path = format!("/api/profile/register/{}/verify", channel.path_segment());
        self.send_json(Method::PUT, &path, &body).await
    }

    /// The media kit, or the default empty one when none has been saved.
    pub async fn commercials(&self) -> Result<Commercials, ApiError> {
        Ok(self
            .get_optional("/api/profile/commercials")
            .await?
            .unwrap_or_default())
    }

    pub async fn save_commercials(&self, commercials: &Commercials) -> Result<Commercials, ApiError> {
        commercials.validate()?;
        self.send_json(Method::PUT, "/api/profile/commercials", commercials)
            .await
    }
}
