//! Text shell - the rendering side of the portal for terminal use.
//!
//! A `Shell` is one "page load": it initializes the session from storage,
//! applies a single action through the session store, and renders the
//! resulting view with the navigation bar.

use std::sync::Arc;

use crate::application::{navigation, NavBar, Route, Router, SessionError, SessionStore, View};
use crate::domain::membership::{MembershipTier, TierBenefits};
use crate::domain::user::{ProfilePatch, UserProfile};
use crate::ports::KeyValueStore;

/// A resolved navigation: the view plus chrome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Screen {
    pub path: String,
    pub view: View,
    pub nav: Option<NavBar>,
}

/// Session store and router wired together.
pub struct Shell {
    session: SessionStore,
    router: Router,
}

impl Shell {
    /// Build a shell over `storage` and load any persisted session.
    pub fn boot(storage: Arc<dyn KeyValueStore>, session_key: &str) -> Self {
        let mut session = SessionStore::with_key(storage, session_key);
        session.initialize();
        Self {
            session,
            router: Router::new(),
        }
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    /// Resolve `path` through the guard.
    pub fn open(&self, path: &str) -> Screen {
        let profile = self.session.current_profile();
        Screen {
            path: path.to_string(),
            view: self.router.resolve(path, profile),
            nav: navigation(profile, path),
        }
    }

    /// Sign in and land on the default route.
    pub fn login(&mut self, profile: UserProfile) -> Result<Screen, SessionError> {
        self.session.login(profile)?;
        Ok(self.open(&self.router.landing_after_login().path()))
    }

    /// Sign out; the next screen is always the login prompt.
    pub fn logout(&mut self) -> Result<Screen, SessionError> {
        self.session.logout()?;
        Ok(self.open(&Route::DEFAULT.path()))
    }

    /// Change tier from the membership page.
    pub fn upgrade(&mut self, tier: MembershipTier) -> Result<Screen, SessionError> {
        self.session.update_tier(tier)?;
        Ok(self.open(&Route::Membership.path()))
    }

    /// Save edits from the profile page.
    pub fn edit_profile(&mut self, patch: &ProfilePatch) -> Result<Screen, SessionError> {
        self.session.update_profile(patch)?;
        Ok(self.open(&Route::Profile.path()))
    }

    pub fn whoami(&self) -> String {
        match self.session.current_profile() {
            Some(profile) => render_profile(profile),
            None => "Not signed in".to_string(),
        }
    }

    pub fn teardown(self) {
        self.session.teardown();
    }
}

/// Multi-line description of a profile.
pub fn render_profile(profile: &UserProfile) -> String {
    let mut tier_line = format!("Tier: {}", profile.tier().display_name());
    if let Some(progress) = profile.active_training_progress() {
        if progress.is_complete() {
            tier_line.push_str(" (training complete)");
        } else {
            tier_line.push_str(&format!(" (training {})", progress));
        }
    }

    let mut lines = vec![
        format!("[{}] {} <{}>", profile.initial(), profile.name(), profile.email()),
        tier_line,
    ];
    lines.extend(
        [
            ("Location", profile.location()),
            ("Bio", profile.bio()),
            ("Avatar", profile.avatar()),
        ]
        .into_iter()
        .filter_map(|(label, value)| value.map(|value| format!("{}: {}", label, value))),
    );
    lines.join("\n")
}

/// Navigation bar on one line, active link bracketed.
pub fn render_nav(nav: &NavBar) -> String {
    let links: Vec<String> = nav
        .links
        .iter()
        .map(|link| {
            if link.active {
                format!("[{}]", link.label)
            } else {
                link.label.to_string()
            }
        })
        .collect();
    format!("{} | {} | Logout", links.join("  "), nav.tier)
}

/// Navigation bar (if any) followed by the view name.
pub fn render_screen(screen: &Screen) -> String {
    match &screen.nav {
        Some(nav) => format!("{}\n{}", render_nav(nav), screen.view),
        None => screen.view.to_string(),
    }
}

/// Tier comparison table. `*` marks the member's current tier, `^` the
/// tiers above it.
pub fn render_tiers(current: Option<MembershipTier>) -> String {
    MembershipTier::all()
        .into_iter()
        .map(|tier| {
            let benefits = TierBenefits::for_tier(tier);
            let marker = match current {
                Some(held) if held == tier => "*",
                Some(held) if held.is_upgrade_to(tier) => "^",
                _ => " ",
            };
            let price = if tier.is_paid() {
                format!("${}/mo", benefits.monthly_price_usd)
            } else {
                "free".to_string()
            };
            format!(
                "{} {:<12} {:>7}  {}",
                marker,
                tier.as_str(),
                price,
                benefits.summary()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryKeyValueStore;
    use crate::application::DEFAULT_SESSION_KEY;
    use crate::domain::foundation::Percentage;

    fn boot(storage: &InMemoryKeyValueStore) -> Shell {
        Shell::boot(Arc::new(storage.clone()), DEFAULT_SESSION_KEY)
    }

    fn seeker() -> UserProfile {
        UserProfile::new("Amina", "amina@example.com", MembershipTier::Basic).unwrap()
    }

    #[test]
    fn logged_out_shell_shows_login_without_nav() {
        let shell = boot(&InMemoryKeyValueStore::new());
        let screen = shell.open("/membership");
        assert_eq!(screen.view, View::Login);
        assert_eq!(screen.nav, None);
        assert_eq!(render_screen(&screen), "Login");
    }

    #[test]
    fn login_lands_on_dashboard() {
        let mut shell = boot(&InMemoryKeyValueStore::new());
        let screen = shell.login(seeker()).unwrap();
        assert_eq!(screen.view, View::Dashboard);
        assert_eq!(screen.path, "/");
        assert!(render_screen(&screen).starts_with("[Journal]"));
    }

    #[test]
    fn session_survives_a_new_page_load() {
        let storage = InMemoryKeyValueStore::new();
        let mut shell = boot(&storage);
        shell.login(seeker()).unwrap();
        shell.upgrade(MembershipTier::Sage).unwrap();
        shell.teardown();

        let reloaded = boot(&storage);
        assert_eq!(
            reloaded.session().current_profile().map(|p| p.tier()),
            Some(MembershipTier::Sage)
        );
        assert_eq!(reloaded.open("/profile").view, View::Profile);
    }

    #[test]
    fn logout_returns_to_login() {
        let mut shell = boot(&InMemoryKeyValueStore::new());
        shell.login(seeker()).unwrap();
        let screen = shell.logout().unwrap();
        assert_eq!(screen.view, View::Login);
        assert_eq!(shell.whoami(), "Not signed in");
    }

    #[test]
    fn edit_profile_renders_new_fields() {
        let mut shell = boot(&InMemoryKeyValueStore::new());
        shell.login(seeker()).unwrap();
        let screen = shell
            .edit_profile(&ProfilePatch {
                location: Some("Konya".to_string()),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(screen.view, View::Profile);
        assert!(shell.whoami().contains("Location: Konya"));
    }

    #[test]
    fn render_profile_shows_training_only_for_trainee() {
        let profile = seeker().with_training_progress(Percentage::new(40));
        assert!(!render_profile(&profile).contains("training"));
        assert!(render_profile(&profile.with_tier(MembershipTier::Trainee))
            .contains("Tier: Trainee (training 40%)"));
    }

    #[test]
    fn render_tiers_marks_current() {
        let table = render_tiers(Some(MembershipTier::Enlightened));
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[1].starts_with("* ENLIGHTENED"));
        assert!(lines[0].starts_with("  BASIC"));
        assert!(lines[3].contains("$100/mo"));
    }

    #[test]
    fn render_tiers_flags_upgrades_and_free_tier() {
        let table = render_tiers(Some(MembershipTier::Enlightened));
        let lines: Vec<&str> = table.lines().collect();
        assert!(lines[2].starts_with("^ SAGE"));
        assert!(lines[3].starts_with("^ TRAINEE"));
        assert!(lines[0].contains("free"));
        assert!(!lines[0].contains('$'));

        let signed_out = render_tiers(None);
        assert!(signed_out.lines().all(|line| line.starts_with("  ")));
    }

    #[test]
    fn render_profile_reports_finished_training() {
        let profile = seeker()
            .with_tier(MembershipTier::Trainee)
            .with_training_progress(Percentage::new(100));
        assert!(render_profile(&profile).contains("Tier: Trainee (training complete)"));
    }

    #[test]
    fn render_profile_lists_optional_fields_in_order() {
        let profile = seeker().with_bio("Listening").with_location("Konya");
        assert_eq!(
            render_profile(&profile),
            "[A] Amina <amina@example.com>\nTier: Basic\nLocation: Konya\nBio: Listening"
        );
    }
}
