//! Messages exchanged within a guidance thread.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{MessageId, Timestamp, ValidationError};

/// Who wrote a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Admin,
    System,
}

/// Kind of media attached to a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Image,
    Video,
}

/// A media attachment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Media {
    pub url: String,
    pub kind: MediaType,
}

/// A single message in a thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: MessageId,
    pub sender: Sender,
    pub text: String,
    pub timestamp: Timestamp,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub translated_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_type: Option<MediaType>,
}

impl Message {
    /// Creates a text message stamped now. Blank text is rejected.
    pub fn new(sender: Sender, text: impl Into<String>) -> Result<Self, ValidationError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(ValidationError::empty_field("text"));
        }
        Ok(Self {
            id: MessageId::generate(),
            sender,
            text,
            timestamp: Timestamp::now(),
            translated_text: None,
            media_url: None,
            media_type: None,
        })
    }

    pub fn with_translation(mut self, translated: impl Into<String>) -> Self {
        self.translated_text = Some(translated.into());
        self
    }

    pub fn with_media(mut self, media: Media) -> Self {
        self.media_url = Some(media.url);
        self.media_type = Some(media.kind);
        self
    }

    /// The attachment, if both url and kind are present.
    pub fn media(&self) -> Option<Media> {
        match (&self.media_url, self.media_type) {
            (Some(url), Some(kind)) => Some(Media {
                url: url.clone(),
                kind,
            }),
            _ => None,
        }
    }
}
