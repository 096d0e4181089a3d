//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors, state machine)
//! - `membership` - Subscription tiers and their entitlements
//! - `user` - The signed-in person's profile
//! - `guidance` - Chat threads and messages

pub mod foundation;
pub mod guidance;
pub mod membership;
pub mod user;
