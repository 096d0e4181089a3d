//! Membership module - subscription tiers and their entitlements.

mod tier;
mod tier_benefits;

pub use tier::MembershipTier;
pub use tier_benefits::TierBenefits;
