//! SessionStore - single source of truth for who is signed in.
//!
//! Holds zero or one [`UserProfile`] and mirrors it into a [`KeyValueStore`]
//! under a fixed key. Every mutation follows the same order:
//!
//! ```text
//! compute next value → write to storage → publish in memory
//! ```
//!
//! so the in-memory profile is never ahead of what is durable. A failed write
//! leaves the previously published value in place.

use std::sync::Arc;

use tracing::{debug, info, warn};

use super::SessionError;
use crate::domain::membership::MembershipTier;
use crate::domain::user::{ProfilePatch, UserProfile};
use crate::ports::KeyValueStore;

/// Key the session record is stored under unless configured otherwise.
pub const DEFAULT_SESSION_KEY: &str = "rumi_user";

/// Owns the current session and its persisted record.
pub struct SessionStore {
    storage: Arc<dyn KeyValueStore>,
    key: String,
    current: Option<UserProfile>,
}

impl SessionStore {
    /// Create a store over `storage` using [`DEFAULT_SESSION_KEY`].
    ///
    /// The store starts logged out; call [`initialize`](Self::initialize) to
    /// load a persisted session.
    pub fn new(storage: Arc<dyn KeyValueStore>) -> Self {
        Self::with_key(storage, DEFAULT_SESSION_KEY)
    }

    /// Create a store that keeps its record under `key`.
    pub fn with_key(storage: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
            current: None,
        }
    }

    /// Load the persisted profile, treating any read or parse failure as
    /// "no profile".
    pub fn initialize(&mut self) -> Option<UserProfile> {
        match self.try_initialize() {
            Ok(profile) => profile,
            Err(e) => {
                warn!(key = %self.key, error = %e, "Ignoring unreadable session record");
                None
            }
        }
    }

    /// Load the persisted profile, reporting why it could not be read.
    ///
    /// On error the store is left logged out.
    pub fn try_initialize(&mut self) -> Result<Option<UserProfile>, SessionError> {
        self.current = None;

        let raw = self
            .storage
            .get(&self.key)
            .map_err(SessionError::StorageRead)?;

        let Some(raw) = raw else {
            debug!(key = %self.key, "No persisted session");
            return Ok(None);
        };

        let profile: UserProfile =
            serde_json::from_str(&raw).map_err(SessionError::MalformedRecord)?;

        debug!(key = %self.key, tier = %profile.tier(), "Restored persisted session");
        self.current = Some(profile.clone());
        Ok(Some(profile))
    }

    /// Sign in, fully replacing any prior session.
    pub fn login(&mut self, profile: UserProfile) -> Result<(), SessionError> {
        let email = profile.email().to_string();
        let tier = profile.tier();
        self.persist(profile)?;
        info!(%email, %tier, "Signed in");
        Ok(())
    }

    /// Sign out, deleting the persisted record.
    pub fn logout(&mut self) -> Result<(), SessionError> {
        self.storage
            .remove(&self.key)
            .map_err(SessionError::StorageWrite)?;

        if let Some(previous) = self.current.take() {
            info!(email = %previous.email(), "Signed out");
        }
        Ok(())
    }

    /// Change the membership tier. Does nothing when logged out.
    pub fn update_tier(&mut self, tier: MembershipTier) -> Result<(), SessionError> {
        let Some(current) = &self.current else {
            debug!(%tier, "Tier change ignored: no session");
            return Ok(());
        };

        let from = current.tier();
        let next = current.with_tier(tier);
        self.persist(next)?;
        info!(%from, to = %tier, "Membership tier changed");
        Ok(())
    }

    /// Merge editable fields into the profile. Does nothing when logged out.
    pub fn update_profile(&mut self, patch: &ProfilePatch) -> Result<(), SessionError> {
        let Some(current) = &self.current else {
            debug!("Profile edit ignored: no session");
            return Ok(());
        };

        let next = current.merged(patch)?;
        self.persist(next)?;
        debug!("Profile updated");
        Ok(())
    }

    /// The live in-memory profile.
    pub fn current_profile(&self) -> Option<&UserProfile> {
        self.current.as_ref()
    }

    pub fn is_logged_in(&self) -> bool {
        self.current.is_some()
    }

    /// Storage key of the session record.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// End of the page lifetime. Drops in-memory state; storage is untouched.
    pub fn teardown(self) {
        debug!(key = %self.key, logged_in = self.current.is_some(), "Session store torn down");
    }

    fn persist(&mut self, next: UserProfile) -> Result<(), SessionError> {
        let serialized = serde_json::to_string(&next).map_err(SessionError::Serialization)?;
        self.storage
            .set(&self.key, &serialized)
            .map_err(SessionError::StorageWrite)?;
        self.current = Some(next);
        Ok(())
    }
}
