//! Route table for the hash-fragment paths the portal understands.

use std::fmt;

use crate::domain::foundation::ThreadId;

/// A recognized navigation target.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    /// `/` - the journal of the seeker's threads.
    Journal,
    /// `/profile`
    Profile,
    /// `/new` - ask a new question.
    NewQuestion,
    /// `/membership` - compare and change tiers.
    Membership,
    /// `/chat/:id`
    ChatDetail(ThreadId),
}

impl Route {
    /// Where every guarded flow lands by default, including after login.
    pub const DEFAULT: Route = Route::Journal;

    /// Parse a navigation path.
    ///
    /// Accepts an optional leading `#` and a trailing `/`, ignores any
    /// `?query` suffix, and matches route names case-insensitively. Returns
    /// `None` for paths outside the route table.
    pub fn parse(path: &str) -> Option<Route> {
        let path = path.trim();
        let path = path.strip_prefix('#').unwrap_or(path);
        let path = path.split_once('?').map_or(path, |(p, _)| p);

        let segments: Vec<&str> = path
            .trim_start_matches('/')
            .trim_end_matches('/')
            .split('/')
            .filter(|s| !s.is_empty())
            .collect();

        let Some((head, rest)) = segments.split_first() else {
            return Some(Route::Journal);
        };

        // Route names match in any case; the thread id is kept as typed.
        match (head.to_ascii_lowercase().as_str(), rest) {
            ("profile", []) => Some(Route::Profile),
            ("new", []) => Some(Route::NewQuestion),
            ("membership", []) => Some(Route::Membership),
            ("chat", [id]) => ThreadId::new(*id).ok().map(Route::ChatDetail),
            _ => None,
        }
    }

    /// Canonical path for this route.
    pub fn path(&self) -> String {
        match self {
            Route::Journal => "/".to_string(),
            Route::Profile => "/profile".to_string(),
            Route::NewQuestion => "/new".to_string(),
            Route::Membership => "/membership".to_string(),
            Route::ChatDetail(id) => format!("/chat/{}", id),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path())
    }
}
