//! Social account linking.

use reqwest::Method;

use super::ApiClient;
use crate::error::ApiError;
use crate::models::{Ack, AuthUrl, Channel, YoutubeVerifyRequest};
use crate::validation::validate_required;

impl ApiClient {
    /// URL of the YouTube OAuth consent screen. The provider sends the user
    /// back to `redirect_uri` with the authorization code.
    pub async fn youtube_auth_url(&self, redirect_uri: &str) -> Result<String, ApiError> {
        validate_required("Redirect URI", redirect_uri)?;
        let body: AuthUrl = self
            .get_query("/api/social/youtube/auth", &[("redirect_uri", redirect_uri.trim())])
            .await?;
        Ok(body.url)
    }

    /// Exchange the OAuth callback code for a linked channel.
    pub async fn verify_youtube(&self, code: &str) -> Result<Channel, ApiError> {
        validate_required("Authorization code", code)?;
        let body = YoutubeVerifyRequest {
            code: code.to_string(),
        };
        self.send_json(Method::POST, "/api/social/youtube/verify", &body)
            .await
    }

    pub async fn channels(&self) -> Result<Vec<Channel>, ApiError> {
        self.get("/api/social/channels").await
    }

    pub async fn unlink_channel(&self, id: &str) -> Result<Ack, ApiError> {
        let path = format!("/api/social/channels/{id}");
        self.send_empty(Method::DELETE, &path).await
    }
}
