//! Application layer - orchestrates domain types over the ports.
//!
//! - `session` - the session store and its persistence lifecycle
//! - `routing` - the router/guard evaluated once per navigation

pub mod routing;
pub mod session;

pub use routing::{navigation, NavBar, NavLink, Route, Router, View};
pub use session::{SessionError, SessionStore, DEFAULT_SESSION_KEY};
