//! User module - the signed-in person's profile.

mod profile;

pub use profile::{ProfilePatch, UserProfile};
