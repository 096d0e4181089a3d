//! UserProfile record and the editable-field patch applied to it.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Percentage, ValidationError};
use crate::domain::membership::MembershipTier;

/// The signed-in person.
///
/// Serialized with camelCase keys; this is the persisted record layout, so
/// renaming a field breaks records already on disk. Deserialization applies
/// the same name and email checks as [`UserProfile::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "ProfileRecord")]
pub struct UserProfile {
    name: String,
    email: String,
    tier: MembershipTier,
    #[serde(skip_serializing_if = "Option::is_none")]
    avatar: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    training_progress: Option<Percentage>,
}

impl UserProfile {
    /// Create a profile, validating name and email.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        tier: MembershipTier,
    ) -> Result<Self, ValidationError> {
        let name = validate_name(name.into())?;
        let email = validate_email(email.into())?;
        Ok(Self {
            name,
            email,
            tier,
            avatar: None,
            bio: None,
            location: None,
            training_progress: None,
        })
    }

    pub fn with_avatar(mut self, avatar: impl Into<String>) -> Self {
        self.avatar = Some(avatar.into());
        self
    }

    pub fn with_bio(mut self, bio: impl Into<String>) -> Self {
        self.bio = Some(bio.into());
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn with_training_progress(mut self, progress: Percentage) -> Self {
        self.training_progress = Some(progress);
        self
    }

    /// Copy of this profile with only the tier replaced.
    pub fn with_tier(&self, tier: MembershipTier) -> Self {
        Self {
            tier,
            ..self.clone()
        }
    }

    /// Copy of this profile with the patch merged in.
    ///
    /// Fields the patch leaves as `None` are kept. An empty string clears an
    /// optional field; a blank name is rejected.
    pub fn merged(&self, patch: &ProfilePatch) -> Result<Self, ValidationError> {
        let mut next = self.clone();
        if let Some(name) = &patch.name {
            next.name = validate_name(name.clone())?;
        }
        if let Some(avatar) = &patch.avatar {
            next.avatar = non_empty(avatar);
        }
        if let Some(bio) = &patch.bio {
            next.bio = non_empty(bio);
        }
        if let Some(location) = &patch.location {
            next.location = non_empty(location);
        }
        Ok(next)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn tier(&self) -> MembershipTier {
        self.tier
    }

    pub fn avatar(&self) -> Option<&str> {
        self.avatar.as_deref()
    }

    pub fn bio(&self) -> Option<&str> {
        self.bio.as_deref()
    }

    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    /// Stored training progress, regardless of tier.
    pub fn training_progress(&self) -> Option<Percentage> {
        self.training_progress
    }

    /// Training progress, only while on the Trainee tier.
    pub fn active_training_progress(&self) -> Option<Percentage> {
        match self.tier {
            MembershipTier::Trainee => self.training_progress,
            _ => None,
        }
    }

    /// First letter of the name, upper-cased, for avatar placeholders.
    pub fn initial(&self) -> char {
        self.name
            .chars()
            .next()
            .map(|c| c.to_uppercase().next().unwrap_or(c))
            .unwrap_or('?')
    }
}

/// Unvalidated persisted form of [`UserProfile`].
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProfileRecord {
    name: String,
    email: String,
    tier: MembershipTier,
    #[serde(default)]
    avatar: Option<String>,
    #[serde(default)]
    bio: Option<String>,
    #[serde(default)]
    location: Option<String>,
    #[serde(default)]
    training_progress: Option<Percentage>,
}

impl TryFrom<ProfileRecord> for UserProfile {
    type Error = ValidationError;

    fn try_from(record: ProfileRecord) -> Result<Self, Self::Error> {
        let mut profile = UserProfile::new(record.name, record.email, record.tier)?;
        profile.avatar = record.avatar;
        profile.bio = record.bio;
        profile.location = record.location;
        profile.training_progress = record.training_progress;
        Ok(profile)
    }
}

/// Partial set of editable profile fields. `None` leaves a field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfilePatch {
    pub name: Option<String>,
    pub avatar: Option<String>,
    pub bio: Option<String>,
    pub location: Option<String>,
}

impl ProfilePatch {
    /// True when applying the patch cannot change anything.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.avatar.is_none() && self.bio.is_none() && self.location.is_none()
    }
}

fn validate_name(name: String) -> Result<String, ValidationError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::empty_field("name"));
    }
    Ok(trimmed.to_string())
}

fn validate_email(email: String) -> Result<String, ValidationError> {
    let email = email.trim().to_string();
    if email.is_empty() {
        return Err(ValidationError::empty_field("email"));
    }
    let well_formed = matches!(
        email.split_once('@'),
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() && !domain.contains('@')
    );
    if !well_formed {
        return Err(ValidationError::invalid_format(
            "email",
            "expected local@domain",
        ));
    }
    Ok(email)
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeker() -> UserProfile {
        UserProfile::new("Amina", "amina@example.com", MembershipTier::Basic).unwrap()
    }

    #[test]
    fn new_trims_name_and_email() {
        let profile = UserProfile::new("  Amina ", " amina@example.com ", MembershipTier::Sage).unwrap();
        assert_eq!(profile.name(), "Amina");
        assert_eq!(profile.email(), "amina@example.com");
        assert_eq!(profile.tier(), MembershipTier::Sage);
    }

    #[test]
    fn new_rejects_blank_name() {
        let result = UserProfile::new("   ", "a@x.com", MembershipTier::Basic);
        assert_eq!(result, Err(ValidationError::empty_field("name")));
    }

    #[test]
    fn new_rejects_malformed_email() {
        for email in ["nobody", "@x.com", "a@", "a@b@c"] {
            assert!(
                matches!(
                    UserProfile::new("A", email, MembershipTier::Basic),
                    Err(ValidationError::InvalidFormat { .. })
                ),
                "{} should be rejected",
                email
            );
        }
    }

    #[test]
    fn with_tier_changes_only_tier() {
        let profile = seeker().with_bio("seeking").with_training_progress(Percentage::new(30));
        let upgraded = profile.with_tier(MembershipTier::Trainee);

        assert_eq!(upgraded.tier(), MembershipTier::Trainee);
        assert_eq!(upgraded.with_tier(MembershipTier::Basic), profile);
    }

    #[test]
    fn merged_keeps_untouched_fields() {
        let profile = seeker().with_location("Konya");
        let patch = ProfilePatch {
            bio: Some("Student of the reed flute".to_string()),
            ..Default::default()
        };

        let merged = profile.merged(&patch).unwrap();
        assert_eq!(merged.bio(), Some("Student of the reed flute"));
        assert_eq!(merged.location(), Some("Konya"));
        assert_eq!(merged.name(), "Amina");
        assert_eq!(merged.email(), profile.email());
    }

    #[test]
    fn merged_clears_optional_field_with_empty_string() {
        let profile = seeker().with_avatar("https://img/1.png");
        let patch = ProfilePatch {
            avatar: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(profile.merged(&patch).unwrap().avatar(), None);
    }

    #[test]
    fn merged_rejects_blank_name() {
        let patch = ProfilePatch {
            name: Some(" ".to_string()),
            ..Default::default()
        };
        assert!(seeker().merged(&patch).is_err());
    }

    #[test]
    fn active_training_progress_requires_trainee_tier() {
        let profile = seeker().with_training_progress(Percentage::new(60));
        assert_eq!(profile.active_training_progress(), None);
        assert_eq!(
            profile.with_tier(MembershipTier::Trainee).active_training_progress(),
            Some(Percentage::new(60))
        );
    }

    #[test]
    fn serializes_with_camel_case_and_omits_absent_fields() {
        let profile = seeker().with_training_progress(Percentage::new(5));
        let json = serde_json::to_string(&profile).unwrap();
        assert_eq!(
            json,
            r#"{"name":"Amina","email":"amina@example.com","tier":"BASIC","trainingProgress":5}"#
        );
    }

    #[test]
    fn deserializes_record_written_by_older_shell() {
        let json = r#"{"name":"A","email":"a@x.com","tier":"SAGE","location":"Balkh"}"#;
        let profile: UserProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.tier(), MembershipTier::Sage);
        assert_eq!(profile.location(), Some("Balkh"));
        assert_eq!(profile.bio(), None);
    }

    #[test]
    fn deserialize_rejects_record_with_invalid_identity() {
        let blank_name = r#"{"name":"","email":"a@x.com","tier":"BASIC"}"#;
        let bad_email = r#"{"name":"A","email":"nope","tier":"BASIC"}"#;
        assert!(serde_json::from_str::<UserProfile>(blank_name).is_err());
        assert!(serde_json::from_str::<UserProfile>(bad_email).is_err());
    }

    #[test]
    fn initial_is_upper_case() {
        let profile = UserProfile::new("rumi", "r@x.com", MembershipTier::Basic).unwrap();
        assert_eq!(profile.initial(), 'R');
    }

    #[test]
    fn empty_patch_reports_empty() {
        assert!(ProfilePatch::default().is_empty());
    }
}
