//! Session module - the signed-in profile and its persistence lifecycle.
//!
//! - `SessionStore` - initialize / login / logout / update tier / edit profile
//! - `SessionError` - failures reported by those operations

mod errors;
mod store;

pub use errors::SessionError;
pub use store::{SessionStore, DEFAULT_SESSION_KEY};
