//! Routing module - path parsing, the session guard, and navigation chrome.

mod guard;
mod navigation;
mod route;

pub use guard::{Router, View};
pub use navigation::{navigation, NavBar, NavLink};
pub use route::Route;
