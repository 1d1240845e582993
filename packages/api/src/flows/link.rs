//! Social account linking over OAuth.

use super::FlowError;
use crate::models::Channel;

/// `Idle → AwaitingConsent → Verifying → Linked`.
///
/// The consent screen is a full-page redirect, so the callback page starts a
/// fresh flow directly in `Verifying`.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum LinkFlow {
    #[default]
    Idle,
    /// Fetching the consent URL.
    Requesting,
    /// Redirecting the browser to the provider's consent screen.
    AwaitingConsent { url: String },
    /// Exchanging the callback code.
    Verifying,
    Linked { channel: Channel },
    Failed { message: String },
}

impl LinkFlow {
    fn name(&self) -> &'static str {
        match self {
            LinkFlow::Idle => "idle",
            LinkFlow::Requesting => "requesting consent",
            LinkFlow::AwaitingConsent { .. } => "awaiting consent",
            LinkFlow::Verifying => "verifying",
            LinkFlow::Linked { .. } => "linked",
            LinkFlow::Failed { .. } => "failed",
        }
    }

    pub fn request(&mut self) -> Result<(), FlowError> {
        match self {
            LinkFlow::Idle | LinkFlow::Failed { .. } => {
                *self = LinkFlow::Requesting;
                Ok(())
            }
            _ => Err(FlowError::out_of_order(self.name(), "connect")),
        }
    }

    pub fn consent_url(&mut self, url: String) -> Result<(), FlowError> {
        match self {
            LinkFlow::Requesting => {
                *self = LinkFlow::AwaitingConsent { url };
                Ok(())
            }
            _ => Err(FlowError::out_of_order(self.name(), "open consent")),
        }
    }

    /// The OAuth callback arrived with a code.
    pub fn callback_received(&mut self) -> Result<(), FlowError> {
        match self {
            LinkFlow::Idle | LinkFlow::AwaitingConsent { .. } => {
                *self = LinkFlow::Verifying;
                Ok(())
            }
            _ => Err(FlowError::out_of_order(self.name(), "verify")),
        }
    }

    pub fn linked(&mut self, channel: Channel) -> Result<(), FlowError> {
        match self {
            LinkFlow::Verifying => {
                *self = LinkFlow::Linked { channel };
                Ok(())
            }
            _ => Err(FlowError::out_of_order(self.name(), "link")),
        }
    }

    pub fn fail(&mut self, message: impl Into<String>) -> Result<(), FlowError> {
        if self.is_busy() {
            *self = LinkFlow::Failed {
                message: message.into(),
            };
            Ok(())
        } else {
            Err(FlowError::out_of_order(self.name(), "fail"))
        }
    }

    pub fn reset(&mut self) {
        *self = LinkFlow::Idle;
    }

    /// A request is outstanding or the browser is leaving for the consent screen.
    pub fn is_busy(&self) -> bool {
        matches!(
            self,
            LinkFlow::Requesting | LinkFlow::AwaitingConsent { .. } | LinkFlow::Verifying
        )
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            LinkFlow::Failed { message } => Some(message.as_str()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Platform;

    fn channel() -> Channel {
        Channel {
            id: "c1".to_string(),
            platform: Platform::Youtube,
            title: "Maya Travels".to_string(),
            handle: Some("@mayatravels".to_string()),
            url: None,
            subscribers: 48_200,
            linked_at: None,
        }
    }

    #[test]
    fn test_full_link() {
        let mut flow = LinkFlow::default();
        flow.request().unwrap();
        assert!(flow.is_busy());
        flow.consent_url("https://accounts.google.com/o/oauth2".to_string())
            .unwrap();
        flow.callback_received().unwrap();
        flow.linked(channel()).unwrap();
        assert!(matches!(flow, LinkFlow::Linked { .. }));
        assert!(!flow.is_busy());
    }

    #[test]
    fn test_callback_page_starts_in_verifying() {
        let mut flow = LinkFlow::default();
        flow.callback_received().unwrap();
        assert_eq!(flow, LinkFlow::Verifying);
        flow.fail("Invalid code").unwrap();
        assert_eq!(flow.error(), Some("Invalid code"));
    }

    #[test]
    fn test_out_of_order_is_rejected() {
        let mut flow = LinkFlow::default();
        assert!(flow.linked(channel()).is_err());
        assert!(flow.consent_url("u".to_string()).is_err());
        assert!(flow.fail("x").is_err());
        assert_eq!(flow, LinkFlow::Idle);

        flow.request().unwrap();
        // A second click while requesting is ignored
        assert!(flow.request().is_err());
        assert_eq!(flow, LinkFlow::Requesting);
        // Callback cannot arrive before the consent URL was opened
        assert!(flow.callback_received().is_err());
    }

    #[test]
    fn test_retry_after_failure() {
        let mut flow = LinkFlow::default();
        flow.request().unwrap();
        flow.fail("Network error").unwrap();
        flow.request().unwrap();
        assert_eq!(flow, LinkFlow::Requesting);
        flow.reset();
        assert_eq!(flow, LinkFlow::Idle);
    }
}
