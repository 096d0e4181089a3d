//! ChatThread record and its status state machine.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Message;
use crate::domain::foundation::{StateMachine, ThreadId, Timestamp, ValidationError};
use crate::domain::membership::MembershipTier;

/// What a seeker is asking about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QuestionCategory {
    Dream,
    SpiritualExperience,
    SpiritualSyndrome,
    MysticalTraining,
}

impl QuestionCategory {
    pub fn label(&self) -> &'static str {
        match self {
            QuestionCategory::Dream => "Dream",
            QuestionCategory::SpiritualExperience => "Spiritual Experience",
            QuestionCategory::SpiritualSyndrome => "Spiritual Syndrome",
            QuestionCategory::MysticalTraining => "Mystical Training",
        }
    }
}

/// Lifecycle of a thread.
///
/// ```text
/// PENDING ──► ADMIN_DELAY ──► ACTIVE ──► RESOLVED
///    └────────────────────────►┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ThreadStatus {
    #[default]
    Pending,
    AdminDelay,
    Active,
    Resolved,
}

impl StateMachine for ThreadStatus {
    fn valid_transitions(&self) -> &'static [Self] {
        use ThreadStatus::*;
        match self {
            Pending => &[AdminDelay, Active],
            AdminDelay => &[Active],
            Active => &[Resolved],
            Resolved => &[],
        }
    }
}

impl fmt::Display for ThreadStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ThreadStatus::Pending => "PENDING",
            ThreadStatus::AdminDelay => "ADMIN_DELAY",
            ThreadStatus::Active => "ACTIVE",
            ThreadStatus::Resolved => "RESOLVED",
        };
        write!(f, "{}", s)
    }
}

/// A guidance conversation. Messages are kept in append order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatThread {
    pub id: ThreadId,
    pub title: String,
    pub category: QuestionCategory,
    messages: Vec<Message>,
    status: ThreadStatus,
    pub created_at: Timestamp,
    /// Tier of the asker when the question was opened.
    pub tier_at_time: MembershipTier,
}

impl ChatThread {
    /// Opens a new thread with the seeker's first message.
    pub fn open(
        title: impl Into<String>,
        category: QuestionCategory,
        tier: MembershipTier,
        first_message: Message,
    ) -> Result<Self, ValidationError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(ValidationError::empty_field("title"));
        }
        Ok(Self {
            id: ThreadId::generate(),
            title,
            category,
            messages: vec![first_message],
            status: ThreadStatus::Pending,
            created_at: Timestamp::now(),
            tier_at_time: tier,
        })
    }

    pub fn status(&self) -> ThreadStatus {
        self.status
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn last_message(&self) -> Option<&Message> {
        self.messages.last()
    }

    /// Appends a message. Resolved threads are closed.
    pub fn push_message(&mut self, message: Message) -> Result<(), ValidationError> {
        if self.status.is_terminal() {
            return Err(ValidationError::invalid_format(
                "status",
                "thread is resolved",
            ));
        }
        self.messages.push(message);
        Ok(())
    }

    /// Moves the thread to `target` if the state machine allows it.
    pub fn transition_to(&mut self, target: ThreadStatus) -> Result<(), ValidationError> {
        self.status = self.status.transition_to(target)?;
        Ok(())
    }
}
