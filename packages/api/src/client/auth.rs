//! Signup OTP, registration and login.

use reqwest::Method;

use super::ApiClient;
use crate::error::ApiError;
use crate::models::{
    Ack, AuthSession, LoginRequest, OtpChannel, OtpRequest, OtpVerifyRequest, Registration, Role,
};
use crate::validation::validate_otp;

impl ApiClient {
    /// Send a signup OTP to an email address or phone number.
    pub async fn send_signup_otp(
        &self,
        role: Role,
        channel: OtpChannel,
        value: &str,
    ) -> Result<Ack, ApiError> {
        channel.validate(value)?;
        let body = OtpRequest {
            channel,
            value: channel.normalize(value),
        };
        let path = format!("/api/{}/otp/send", role.path_segment());
        self.send_json(Method::POST, &path, &body).await
    }

    /// Check a signup OTP.
    pub async fn verify_signup_otp(
        &self,
        role: Role,
        channel: OtpChannel,
        value: &str,
        otp: &str,
    ) -> Result<Ack, ApiError> {
        channel.validate(value)?;
        validate_otp(otp)?;
        let body = OtpVerifyRequest {
            channel,
            value: channel.normalize(value),
            otp: otp.trim().to_string(),
        };
        let path = format!("/api/{}/otp/verify", role.path_segment());
        self.send_json(Method::POST, &path, &body).await
    }

    /// Register a new account of the form's role.
    pub async fn register<R: Registration + Clone>(&self, form: &R) -> Result<AuthSession, ApiError> {
        form.validate()?;
        let mut body = form.clone();
        body.normalize();
        let path = format!("/api/{}/register", R::ROLE.path_segment());
        self.send_json(Method::POST, &path, &body).await
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<AuthSession, ApiError> {
        let body = LoginRequest::new(email, password);
        body.validate()?;
        self.send_json(Method::POST, "/api/auth/login", &body).await
    }
}
