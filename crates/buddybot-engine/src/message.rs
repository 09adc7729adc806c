//! Chat log messages.
//!
//! A [`Message`] is appended for every user submission and every bot reply.
//! Messages are never edited after they are appended; the log only shrinks
//! when the whole conversation is reset.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Who authored a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    /// Typed or clicked by the person at the keyboard.
    User,
    /// Produced by the bot, either locally or as a server reply.
    Bot,
}

/// How a message body should be displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageFormat {
    /// Displayed verbatim.
    #[default]
    Plain,
    /// Passed through the Markdown renderer before display.
    Markdown,
    /// Displayed verbatim as a warning (the chat service failed).
    Warning,
}

/// A single entry in the chat log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Message body.
    pub text: String,
    /// Author of the message.
    pub sender: Sender,
    /// Display format of the body.
    #[serde(default)]
    pub format: MessageFormat,
    /// When the message was appended.
    pub timestamp: DateTime<Utc>,
}

impl Message {
    /// Create a plain-text user message.
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            sender: Sender::User,
            format: MessageFormat::Plain,
            timestamp: Utc::now(),
        }
    }

    /// Create a plain-text bot message (greeting, prompts).
    pub fn bot(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            sender: Sender::Bot,
            format: MessageFormat::Plain,
            timestamp: Utc::now(),
        }
    }

    /// Create a bot message holding a Markdown reply from the chat service.
    pub fn bot_markdown(text: impl Into<String>) -> Self {
        Self {
            format: MessageFormat::Markdown,
            ..Self::bot(text)
        }
    }

    /// Create a bot warning, shown when the chat service fails.
    pub fn bot_warning(text: impl Into<String>) -> Self {
        Self {
            format: MessageFormat::Warning,
            ..Self::bot(text)
        }
    }

    /// Whether the message was written by the user.
    pub fn is_user(&self) -> bool {
        self.sender == Sender::User
    }
}
