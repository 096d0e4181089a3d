//! Router/Guard - the single place that decides which view a path shows.
//!
//! Every route requires a session. Without one, any path (known or not,
//! deep links included) resolves to the login view. The requested path is
//! not carried through the login prompt; after signing in the user lands on
//! [`Route::DEFAULT`].

use std::fmt;

use tracing::debug;

use super::Route;
use crate::domain::foundation::ThreadId;
use crate::domain::user::UserProfile;

/// What the shell should render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    Login,
    Dashboard,
    Profile,
    NewQuestion,
    Membership,
    ChatDetail { thread_id: ThreadId },
    NotFound { path: String },
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            View::Login => write!(f, "Login"),
            View::Dashboard => write!(f, "Dashboard"),
            View::Profile => write!(f, "Profile"),
            View::NewQuestion => write!(f, "New Question"),
            View::Membership => write!(f, "Membership"),
            View::ChatDetail { thread_id } => write!(f, "Chat {}", thread_id),
            View::NotFound { path } => write!(f, "Not Found ({})", path),
        }
    }
}

/// Stateless router evaluated once per navigation.
#[derive(Debug, Clone, Copy, Default)]
pub struct Router;

impl Router {
    pub fn new() -> Self {
        Self
    }

    /// Resolve `path` for the given session.
    pub fn resolve(&self, path: &str, session: Option<&UserProfile>) -> View {
        if session.is_none() {
            debug!(%path, "No session, showing login");
            return View::Login;
        }

        match Route::parse(path) {
            Some(route) => Self::view_for(route),
            None => {
                debug!(%path, "Unrecognized path");
                View::NotFound {
                    path: path.to_string(),
                }
            }
        }
    }

    /// Route shown right after a successful login.
    pub fn landing_after_login(&self) -> Route {
        Route::DEFAULT
    }

    fn view_for(route: Route) -> View {
        match route {
            Route::Journal => View::Dashboard,
            Route::Profile => View::Profile,
            Route::NewQuestion => View::NewQuestion,
            Route::Membership => View::Membership,
            Route::ChatDetail(thread_id) => View::ChatDetail { thread_id },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::membership::MembershipTier;

    const PATHS: [&str; 7] = [
        "/",
        "/profile",
        "/new",
        "/membership",
        "/chat/abc",
        "#/chat/abc",
        "/nowhere",
    ];

    fn seeker() -> UserProfile {
        UserProfile::new("A", "a@x.com", MembershipTier::Basic).unwrap()
    }

    #[test]
    fn every_path_shows_login_without_session() {
        let router = Router::new();
        for path in PATHS {
            assert_eq!(router.resolve(path, None), View::Login, "path {}", path);
        }
    }

    #[test]
    fn routes_map_to_their_views_with_session() {
        let router = Router::new();
        let profile = seeker();
        let s = Some(&profile);

        assert_eq!(router.resolve("/", s), View::Dashboard);
        assert_eq!(router.resolve("/profile", s), View::Profile);
        assert_eq!(router.resolve("/new", s), View::NewQuestion);
        assert_eq!(router.resolve("/membership", s), View::Membership);
        assert_eq!(
            router.resolve("#/chat/abc", s),
            View::ChatDetail {
                thread_id: ThreadId::new("abc").unwrap()
            }
        );
    }

    #[test]
    fn unknown_path_with_session_is_not_found() {
        let profile = seeker();
        assert_eq!(
            Router::new().resolve("/nowhere", Some(&profile)),
            View::NotFound {
                path: "/nowhere".to_string()
            }
        );
    }

    #[test]
    fn login_always_lands_on_default_route() {
        assert_eq!(Router::new().landing_after_login(), Route::Journal);
    }

    #[test]
    fn mixed_case_route_resolves_with_session() {
        let profile = seeker();
        let router = Router::new();
        assert_eq!(router.resolve("#/Profile", Some(&profile)), View::Profile);
        assert_eq!(router.resolve("#/Profile", None), View::Login);
    }
}
