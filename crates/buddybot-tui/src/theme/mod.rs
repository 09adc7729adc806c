//! Theme components for the TUI.
//!
//! [`Theme`] holds the Catppuccin Mocha (dark) and Latte (light) palettes.

mod colors;

pub use colors::Theme;
