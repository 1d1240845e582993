//! # Media kit ("commercials")
//!
//! The influencer's pricing sheet: one [`RateItem`] per deliverable, plus a
//! negotiability flag and free-form notes. Stored with
//! `PUT /api/profile/commercials`; an account without one reads as
//! [`Commercials::default`].

use serde::{Deserialize, Serialize};

use super::subscription::format_amount;
use crate::validation::ValidationError;

/// Kind of content a rate applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Deliverable {
    InstagramReel,
    InstagramPost,
    InstagramStory,
    YoutubeVideo,
    YoutubeShort,
    Custom,
}

impl Deliverable {
    pub const ALL: [Deliverable; 6] = [
        Deliverable::InstagramReel,
        Deliverable::InstagramPost,
        Deliverable::InstagramStory,
        Deliverable::YoutubeVideo,
        Deliverable::YoutubeShort,
        Deliverable::Custom,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Deliverable::InstagramReel => "Instagram Reel",
            Deliverable::InstagramPost => "Instagram Post",
            Deliverable::InstagramStory => "Instagram Story",
            Deliverable::YoutubeVideo => "YouTube Video",
            Deliverable::YoutubeShort => "YouTube Short",
            Deliverable::Custom => "Custom",
        }
    }

    /// Stable key used for `<select>` values.
    pub fn key(self) -> &'static str {
        match self {
            Deliverable::InstagramReel => "instagramReel",
            Deliverable::InstagramPost => "instagramPost",
            Deliverable::InstagramStory => "instagramStory",
            Deliverable::YoutubeVideo => "youtubeVideo",
            Deliverable::YoutubeShort => "youtubeShort",
            Deliverable::Custom => "custom",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.key() == key)
    }
}

/// Price for one deliverable, in minor units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateItem {
    pub deliverable: Deliverable,
    pub price: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl RateItem {
    pub fn new(deliverable: Deliverable, price: u64) -> Self {
        Self {
            deliverable,
            price,
            description: None,
        }
    }

    /// Name shown in tables: the custom description when there is one.
    pub fn title(&self) -> String {
        match (&self.deliverable, self.description.as_deref()) {
            (Deliverable::Custom, Some(d)) if !d.trim().is_empty() => d.trim().to_string(),
            (d, _) => d.label().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Commercials {
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default = "default_negotiable")]
    pub negotiable: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default)]
    pub rates: Vec<RateItem>,
}

fn default_currency() -> String {
    "INR".to_string()
}

fn default_negotiable() -> bool {
    true
}

impl Default for Commercials {
    fn default() -> Self {
        Self {
            currency: default_currency(),
            negotiable: default_negotiable(),
            notes: None,
            rates: Vec::new(),
        }
    }
}

impl Commercials {
    /// Rejects zero prices and the same standard deliverable listed twice.
    /// Any number of custom rows is allowed.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut seen: Vec<Deliverable> = Vec::new();
        for rate in &self.rates {
            if rate.price == 0 {
                return Err(ValidationError::ZeroPrice(rate.title()));
            }
            if rate.deliverable != Deliverable::Custom {
                if seen.contains(&rate.deliverable) {
                    return Err(ValidationError::DuplicateRate(rate.title()));
                }
                seen.push(rate.deliverable);
            }
        }
        Ok(())
    }

    pub fn price_label(&self, rate: &RateItem) -> String {
        format_amount(rate.price, &self.currency)
    }

    /// Lowest listed price, for the "starting at" summary.
    pub fn starting_price(&self) -> Option<u64> {
        self.rates.iter().map(|r| r.price).min()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty_and_valid() {
        let c = Commercials::default();
        assert!(c.rates.is_empty());
        assert!(c.validate().is_ok());
        assert_eq!(c.starting_price(), None);

        // An empty object from the backend decodes to sensible defaults
        let decoded: Commercials = serde_json::from_str("{}").unwrap();
        assert_eq!(decoded, Commercials::default());
        assert!(decoded.negotiable);

        let decoded: Commercials = serde_json::from_str(r#"{"negotiable":false}"#).unwrap();
        assert!(!decoded.negotiable);
    }

    #[test]
    fn test_rejects_zero_price_and_duplicates() {
        let mut c = Commercials::default();
        c.rates.push(RateItem::new(Deliverable::InstagramReel, 500_000));
        c.rates.push(RateItem::new(Deliverable::YoutubeVideo, 0));
        assert_eq!(
            c.validate(),
            Err(ValidationError::ZeroPrice("YouTube Video".to_string()))
        );

        c.rates[1].price = 1_500_000;
        c.rates.push(RateItem::new(Deliverable::InstagramReel, 600_000));
        assert_eq!(
            c.validate(),
            Err(ValidationError::DuplicateRate("Instagram Reel".to_string()))
        );
    }

    #[test]
    fn test_multiple_custom_rows_allowed() {
        let mut c = Commercials::default();
        let mut a = RateItem::new(Deliverable::Custom, 100_000);
        a.description = Some("Event appearance".to_string());
        let b = RateItem::new(Deliverable::Custom, 200_000);
        c.rates = vec![a, b];
        assert!(c.validate().is_ok());
        assert_eq!(c.rates[0].title(), "Event appearance");
        assert_eq!(c.rates[1].title(), "Custom");
        assert_eq!(c.starting_price(), Some(100_000));
        assert_eq!(c.price_label(&c.rates[0]), "₹1,000");
    }

    #[test]
    fn test_deliverable_keys_match_wire_format() {
        for d in Deliverable::ALL {
            let json = serde_json::to_string(&d).unwrap();
            assert_eq!(json, format!("\"{}\"", d.key()));
            assert_eq!(Deliverable::from_key(d.key()), Some(d));
        }
    }
}
