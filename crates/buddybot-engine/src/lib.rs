//! buddybot-engine: Headless conversation engine for BuddyBot
//!
//! This crate provides the core chat logic, including:
//! - The chat widget state machine (budget, ingredient and cart steps)
//! - The `/chat` HTTP client
//! - Theme preference resolution and persistence
//! - Configuration

pub mod client;
pub mod config;
pub mod conversation;
pub mod message;
pub mod theme;
pub mod widget;

// Re-export commonly used types
pub use client::{ChatService, ChatServiceUnavailable, ClientBuildError, HttpChatClient};
pub use config::{Config, ConfigError};
pub use conversation::{ConversationState, QuickAction, QuickActionKind};
pub use message::{Message, MessageFormat, Sender};
pub use theme::{
    resolve_theme, system_preference, JsonFileStore, MemoryStore, PreferenceStore, StoreError,
    ThemePreference, THEME_KEY,
};
pub use widget::{ChatWidget, RequestId, SendOutcome, SendRequest, WidgetSettings};

/// Returns the engine version.
pub fn engine_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
