//! Membership tier definitions.
//!
//! Represents the subscription levels available at the lodge.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Membership subscription tier.
///
/// Variants are declared in order of increasing entitlement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MembershipTier {
    /// Free tier - questions are answered when a guide is available.
    Basic,

    /// Instant reply from a guide.
    Enlightened,

    /// Instant reply plus phone/WhatsApp contact.
    Sage,

    /// Everything in Sage plus the mystic training programme.
    Trainee,
}

impl MembershipTier {
    /// Every tier, lowest entitlement first.
    pub const fn all() -> [MembershipTier; 4] {
        [
            MembershipTier::Basic,
            MembershipTier::Enlightened,
            MembershipTier::Sage,
            MembershipTier::Trainee,
        ]
    }

    /// Returns true if this tier is a paid tier.
    pub fn is_paid(&self) -> bool {
        !matches!(self, MembershipTier::Basic)
    }

    /// Returns the wire name for this tier (as persisted).
    pub fn as_str(&self) -> &'static str {
        match self {
            MembershipTier::Basic => "BASIC",
            MembershipTier::Enlightened => "ENLIGHTENED",
            MembershipTier::Sage => "SAGE",
            MembershipTier::Trainee => "TRAINEE",
        }
    }

    /// Returns the display name for this tier.
    pub fn display_name(&self) -> &'static str {
        match self {
            MembershipTier::Basic => "Basic",
            MembershipTier::Enlightened => "Enlightened",
            MembershipTier::Sage => "Sage",
            MembershipTier::Trainee => "Trainee",
        }
    }

    /// Returns the numeric rank of this tier for comparison.
    ///
    /// Higher rank = more entitlements.
    pub fn rank(&self) -> u8 {
        match self {
            MembershipTier::Basic => 0,
            MembershipTier::Enlightened => 1,
            MembershipTier::Sage => 2,
            MembershipTier::Trainee => 3,
        }
    }

    /// True if moving to `target` raises entitlement.
    pub fn is_upgrade_to(&self, target: MembershipTier) -> bool {
        target.rank() > self.rank()
    }
}

impl std::fmt::Display for MembershipTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for MembershipTier {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        MembershipTier::all()
            .into_iter()
            .find(|tier| tier.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                ValidationError::invalid_format(
                    "tier",
                    format!("unknown tier '{}', expected one of BASIC, ENLIGHTENED, SAGE, TRAINEE", wanted),
                )
            })
    }
}
