//! UI widgets for the TUI.
//!
//! This module provides:
//! - [`StatusBar`] - Header with bot name, conversation step and theme
//! - [`QuickActionBar`] and [`ButtonRow`] - Wrapped rows of buttons
//! - [`FooterHints`] - Bottom keybinding hints
//! - [`SettingsMenu`] and [`HelpOverlay`] - Popups
//! - [`TextInputState`] - Editable input line with history

mod buttons;
mod footer_hints;
mod help;
mod settings_menu;
mod status_bar;
mod text_input;

pub use buttons::{ButtonRow, QuickActionBar};
pub use footer_hints::{hints_for_focus, FooterHints};
pub use help::HelpOverlay;
pub use settings_menu::{SettingsEntry, SettingsMenu, SettingsMenuState};
pub use status_bar::{StatusBar, StatusBarContent};
pub use text_input::TextInputState;
