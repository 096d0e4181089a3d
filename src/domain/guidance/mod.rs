//! Guidance module - chat threads between seekers and guides.
//!
//! These are display records owned by the views; the session core does not
//! persist them.

mod message;
mod thread;

pub use message::{Media, MediaType, Message, Sender};
pub use thread::{ChatThread, QuestionCategory, ThreadStatus};
