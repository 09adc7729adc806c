//! Layout components for the TUI.
//!
//! This module provides:
//! - [`render_shell`] - Main screen renderer
//! - [`Focus`] - Which region has keyboard focus
//! - [`centered_fixed`] - Popup placement

mod focus;
mod shell;

pub use focus::Focus;
pub use shell::{centered_fixed, render_shell};
