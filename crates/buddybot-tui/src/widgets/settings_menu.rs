//! Settings popup: dark-mode toggle and clear chat.

use buddybot_engine::ThemePreference;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

use crate::layout::centered_fixed;
use crate::theme::Theme;

/// Entries of the settings menu, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsEntry {
    DarkMode,
    ClearChat,
}

impl SettingsEntry {
    pub const ALL: [Self; 2] = [Self::DarkMode, Self::ClearChat];
}

/// Open-menu state: which entry is highlighted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SettingsMenuState {
    selected: usize,
}

impl SettingsMenuState {
    pub fn selected(self) -> SettingsEntry {
        SettingsEntry::ALL[self.selected]
    }

    pub fn next(&mut self) {
        self.selected = (self.selected + 1) % SettingsEntry::ALL.len();
    }

    pub fn prev(&mut self) {
        self.selected = self
            .selected
            .checked_sub(1)
            .unwrap_or(SettingsEntry::ALL.len() - 1);
    }
}

/// Settings popup widget.
pub struct SettingsMenu<'a> {
    state: SettingsMenuState,
    preference: ThemePreference,
    theme: &'a Theme,
}

impl<'a> SettingsMenu<'a> {
    pub fn new(state: SettingsMenuState, preference: ThemePreference, theme: &'a Theme) -> Self {
        Self {
            state,
            preference,
            theme,
        }
    }
}

impl Widget for SettingsMenu<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let overlay_area = centered_fixed(32.min(area.width), 6.min(area.height), area);
        Clear.render(overlay_area, buf);

        let lines: Vec<Line<'_>> = SettingsEntry::ALL
            .iter()
            .map(|entry| {
                let label = match entry {
                    SettingsEntry::DarkMode => {
                        let mark = if self.preference.is_dark() { "x" } else { " " };
                        format!(" [{mark}] Dark mode")
                    }
                    SettingsEntry::ClearChat => "     Clear chat".to_string(),
                };
                let style = if *entry == self.state.selected() {
                    Style::default()
                        .fg(self.theme.base)
                        .bg(self.theme.primary)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(self.theme.text)
                };
                Line::from(Span::styled(label, style))
            })
            .chain([
                Line::default(),
                Line::styled(" Enter select · Esc close", Style::default().fg(self.theme.muted)),
            ])
            .collect();

        let block = Block::default()
            .title(" Settings ")
            .title_style(Style::default().fg(self.theme.text))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.border_focused))
            .style(Style::default().bg(self.theme.base));

        Paragraph::new(lines).block(block).render(overlay_area, buf);
    }
}
