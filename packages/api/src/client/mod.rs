//! # REST client for the marketplace backend
//!
//! [`ApiClient`] is a thin, cloneable wrapper around a [`reqwest::Client`]
//! that knows the backend base URL and, once signed in, the bearer token. It
//! works unchanged in the browser (reqwest's fetch backend) and natively
//! (tests, server).
//!
//! The endpoint methods live in sibling modules, grouped by resource:
//!
//! | Module | Endpoints |
//! |--------|-----------|
//! | [`auth`] | `/api/{role}/otp/*`, `/api/{role}/register`, `/api/auth/login` |
//! | [`profile`] | `/api/profile`, `/api/profile/kyc`, `/api/profile/register/*`, `/api/profile/commercials` |
//! | [`subscription`] | `/api/subscription/*` |
//! | [`social`] | `/api/social/*` |
//!
//! ## Responses
//!
//! Success bodies are decoded straight into the wire models. An empty success
//! body decodes as `{}`, which is what [`crate::models::Ack`] expects.
//! Failures become an [`ApiError`]: a 401 on a request that carried a token
//! is [`ApiError::Unauthorized`], any other status is [`ApiError::Server`] carrying the body's `message` (or
//! `error`) field, or a generic status line when the body has neither.

mod auth;
mod profile;
mod social;
mod subscription;

use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use store::MarketplaceConfig;

use crate::error::ApiError;

/// Client for the marketplace REST backend.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

impl ApiClient {
    /// Create an unauthenticated client for the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim().trim_end_matches('/').to_string(),
            token: None,
        }
    }

    pub fn from_config(config: &MarketplaceConfig) -> Self {
        Self::new(config.api.base_url.clone())
    }

    /// Attach a bearer token to every subsequent request.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        let token = token.into();
        self.token = if token.trim().is_empty() {
            None
        } else {
            Some(token.trim().to_string())
        };
        self
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        tracing::debug!("{} {}", method, path);
        let req = self.http.request(method, self.url(path));
        match &self.token {
            Some(token) => req.bearer_auth(token),
            None => req,
        }
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let resp = self.request(Method::GET, path).send().await?;
        decode(resp, self.token.is_some()).await
    }

    pub(crate) async fn get_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, ApiError> {
        let resp = self.request(Method::GET, path).query(query).send().await?;
        decode(resp, self.token.is_some()).await
    }

    /// GET that maps 404 to `None`.
    pub(crate) async fn get_optional<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<Option<T>, ApiError> {
        let resp = self.request(Method::GET, path).send().await?;
        if resp.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        decode(resp, self.token.is_some()).await.map(Some)
    }

    pub(crate) async fn send_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let resp = self.request(method, path).json(body).send().await?;
        decode(resp, self.token.is_some()).await
    }

    pub(crate) async fn send_empty<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
    ) -> Result<T, ApiError> {
        let resp = self.request(method, path).send().await?;
        decode(resp, self.token.is_some()).await
    }
}

/// Without a token a 401 is an ordinary rejection (e.g. a wrong password)
/// and keeps the backend's message.
async fn decode<T: DeserializeOwned>(resp: Response, authenticated: bool) -> Result<T, ApiError> {
    let status = resp.status();
    let text = resp.text().await?;
    if !status.is_success() {
        if status == StatusCode::UNAUTHORIZED && authenticated {
            return Err(ApiError::Unauthorized);
        }
        let message = error_message(status.as_u16(), &text);
        tracing::warn!("request failed with {}: {}", status, message);
        return Err(ApiError::Server {
            status: status.as_u16(),
            message,
        });
    }
    let body = if text.trim().is_empty() { "{}" } else { text.as_str() };
    Ok(serde_json::from_str(body)?)
}

/// Pull a human-readable message out of an error body.
pub(crate) fn error_message(status: u16, body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message.or(b.error))
        .map(|m| m.trim().to_string())
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| format!("Request failed with status {status}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joining() {
        let client = ApiClient::new("https://api.example.com/");
        assert_eq!(client.base_url(), "https://api.example.com");
        assert_eq!(
            client.url("/api/profile"),
            "https://api.example.com/api/profile"
        );
        assert_eq!(client.url("api/profile"), "https://api.example.com/api/profile");
    }

    #[test]
    fn test_with_token_ignores_blank() {
        let client = ApiClient::new("http://x.test").with_token("  ");
        assert_eq!(client.token(), None);
        let client = client.with_token(" abc ");
        assert_eq!(client.token(), Some("abc"));
    }

    #[test]
    fn test_error_message() {
        assert_eq!(error_message(400, r#"{"message":"OTP expired"}"#), "OTP expired");
        assert_eq!(error_message(409, r#"{"error":"Email taken"}"#), "Email taken");
        assert_eq!(error_message(500, "<html>oops</html>"), "Request failed with status 500");
        assert_eq!(error_message(502, r#"{"message":"  "}"#), "Request failed with status 502");
    }
}
