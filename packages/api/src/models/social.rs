//! Linked social channels.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Youtube,
    Instagram,
}

impl Platform {
    pub fn label(self) -> &'static str {
        match self {
            Platform::Youtube => "YouTube",
            Platform::Instagram => "Instagram",
        }
    }
}

/// A social account linked to the profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Channel {
    pub id: String,
    pub platform: Platform,
    pub title: String,
    #[serde(default)]
    pub handle: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub subscribers: u64,
    #[serde(default)]
    pub linked_at: Option<String>,
}

impl Channel {
    /// Compact audience size: `950`, `12.3K`, `1.2M`.
    pub fn audience_label(&self) -> String {
        compact_count(self.subscribers)
    }
}

fn compact_count(n: u64) -> String {
    let (tenths, suffix) = match n {
        0..=999 => return n.to_string(),
        1_000..=999_999 => (n / 100, "K"),
        _ => (n / 100_000, "M"),
    };
    match tenths % 10 {
        0 => format!("{}{suffix}", tenths / 10),
        d => format!("{}.{d}{suffix}", tenths / 10),
    }
}

/// Body of `GET /api/social/youtube/auth`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthUrl {
    pub url: String,
}

/// Body of `POST /api/social/youtube/verify`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YoutubeVerifyRequest {
    pub code: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compact_count() {
        assert_eq!(compact_count(0), "0");
        assert_eq!(compact_count(950), "950");
        assert_eq!(compact_count(1_000), "1K");
        assert_eq!(compact_count(12_345), "12.3K");
        assert_eq!(compact_count(999_999), "999.9K");
        assert_eq!(compact_count(1_250_000), "1.2M");
        assert_eq!(compact_count(3_000_000), "3M");
    }

    #[test]
    fn test_channel_decodes() {
        let channel: Channel = serde_json::from_str(
            r#"{"id":"c1","platform":"youtube","title":"Maya Travels","subscribers":48200}"#,
        )
        .unwrap();
        assert_eq!(channel.platform, Platform::Youtube);
        assert_eq!(channel.audience_label(), "48.2K");
        assert!(channel.handle.is_none());
    }
}
