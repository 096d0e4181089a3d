//! Navigation bar model shown to signed-in users.

use super::Route;
use crate::domain::membership::MembershipTier;
use crate::domain::user::UserProfile;

/// A single entry in the navigation bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub route: Route,
    pub label: &'static str,
    pub active: bool,
}

/// The bar rendered above every guarded view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavBar {
    pub links: Vec<NavLink>,
    /// Badge next to the logout button.
    pub tier: MembershipTier,
}

impl NavBar {
    pub fn active_link(&self) -> Option<&NavLink> {
        self.links.iter().find(|link| link.active)
    }
}

const LINKS: [(Route, &str); 4] = [
    (Route::Journal, "Journal"),
    (Route::NewQuestion, "Seek Guidance"),
    (Route::Membership, "Tiers"),
    (Route::Profile, "Profile"),
];

/// Build the navigation bar, or `None` when nobody is signed in.
///
/// A link is active when `current_path` parses to exactly its route, so chat
/// detail pages highlight nothing.
pub fn navigation(session: Option<&UserProfile>, current_path: &str) -> Option<NavBar> {
    let profile = session?;
    let current = Route::parse(current_path);

    let links = LINKS
        .into_iter()
        .map(|(route, label)| NavLink {
            active: current.as_ref() == Some(&route),
            route,
            label,
        })
        .collect();

    Some(NavBar {
        links,
        tier: profile.tier(),
    })
}
