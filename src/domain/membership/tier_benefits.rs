//! Tier-based entitlements.
//!
//! Defines the monthly price and what a member gets at each tier.

use super::MembershipTier;
use serde::{Deserialize, Serialize};

/// Entitlements for a membership tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierBenefits {
    /// The tier these benefits apply to.
    pub tier: MembershipTier,
    /// Monthly price in whole US dollars.
    pub monthly_price_usd: u32,
    /// Guides reply immediately instead of when available.
    pub instant_reply: bool,
    /// Phone / WhatsApp contact with a guide.
    pub direct_contact: bool,
    /// Access to the mystic training programme.
    pub mystic_training: bool,
}

impl TierBenefits {
    /// Get the benefits for a specific tier.
    ///
    /// | Tier | Price | Instant reply | Direct contact | Training |
    /// |------|-------|---------------|----------------|----------|
    /// | Basic | $0 | No | No | No |
    /// | Enlightened | $10 | Yes | No | No |
    /// | Sage | $50 | Yes | Yes | No |
    /// | Trainee | $100 | Yes | Yes | Yes |
    pub fn for_tier(tier: MembershipTier) -> Self {
        match tier {
            MembershipTier::Basic => Self {
                tier,
                monthly_price_usd: 0,
                instant_reply: false,
                direct_contact: false,
                mystic_training: false,
            },
            MembershipTier::Enlightened => Self {
                tier,
                monthly_price_usd: 10,
                instant_reply: true,
                direct_contact: false,
                mystic_training: false,
            },
            MembershipTier::Sage => Self {
                tier,
                monthly_price_usd: 50,
                instant_reply: true,
                direct_contact: true,
                mystic_training: false,
            },
            MembershipTier::Trainee => Self {
                tier,
                monthly_price_usd: 100,
                instant_reply: true,
                direct_contact: true,
                mystic_training: true,
            },
        }
    }

    /// Short human-readable list of what the tier includes.
    pub fn summary(&self) -> String {
        let mut perks = Vec::new();
        if self.instant_reply {
            perks.push("instant reply");
        } else {
            perks.push("reply when a guide is available");
        }
        if self.direct_contact {
            perks.push("phone/WhatsApp");
        }
        if self.mystic_training {
            perks.push("mystic training");
        }
        perks.join(", ")
    }
}
