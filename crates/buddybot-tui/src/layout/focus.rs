//! Keyboard focus regions.

/// Which region receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The input line (typing always lands here).
    #[default]
    Input,
    /// The quick-action bar.
    QuickActions,
    /// The Yes/No option buttons under the log.
    Options,
}

impl Focus {
    /// Next region in Tab order. Options are skipped when none are shown.
    #[must_use]
    pub fn next(self, has_options: bool) -> Self {
        match self {
            Self::Input => Self::QuickActions,
            Self::QuickActions if has_options => Self::Options,
            Self::QuickActions | Self::Options => Self::Input,
        }
    }

    /// Previous region in Tab order.
    #[must_use]
    pub fn prev(self, has_options: bool) -> Self {
        match self {
            Self::Input if has_options => Self::Options,
            Self::Input | Self::Options => Self::QuickActions,
            Self::QuickActions => Self::Input,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Input => "Input",
            Self::QuickActions => "Quick actions",
            Self::Options => "Options",
        }
    }
}
