//! Conversation pane module.
//!
//! The conversation pane is the main area of the TUI, containing:
//! - The message log (scrollable, follows new messages)
//! - Option buttons while the bot waits for a choice
//! - The input line (placeholder depends on the conversation step)

mod placeholder;
mod scroll;
mod transcript;
mod widget;

pub use scroll::{ScrollState, SCROLL_SPEED};
pub use widget::ConversationPane;
