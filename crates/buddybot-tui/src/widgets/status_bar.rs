//! Header bar at the top of the TUI.
//!
//! Format: `● BuddyBot │ Budget            ⋯ 1 pending │ ☾ Dark`

use buddybot_engine::{ChatWidget, ConversationState, ThemePreference};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::text::visual_width;
use crate::theme::Theme;

/// What the header shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusBarContent {
    pub title: String,
    pub state: ConversationState,
    pub theme: ThemePreference,
    /// Requests in flight.
    pub pending: usize,
}

impl StatusBarContent {
    pub fn from_widget(widget: &ChatWidget) -> Self {
        Self {
            title: widget.settings().bot_name.clone(),
            state: widget.state(),
            theme: widget.theme(),
            pending: widget.pending_count(),
        }
    }

    /// Content shown when the terminal is below the minimum size.
    pub fn too_small(title: &str) -> Line<'static> {
        Line::from(format!("{title}: terminal too small"))
    }
}

/// Header bar widget.
pub struct StatusBar<'a> {
    content: &'a StatusBarContent,
    theme: &'a Theme,
}

impl<'a> StatusBar<'a> {
    pub fn new(content: &'a StatusBarContent, theme: &'a Theme) -> Self {
        Self { content, theme }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let separator = || Span::styled(" │ ", Style::default().fg(self.theme.muted));

        let state_color = if self.content.state.is_awaiting() {
            self.theme.warning
        } else {
            self.theme.subtext
        };
        let mut left = vec![
            Span::styled("● ", Style::default().fg(self.theme.primary)),
            Span::styled(
                self.content.title.clone(),
                Style::default()
                    .fg(self.theme.text)
                    .add_modifier(Modifier::BOLD),
            ),
            separator(),
            Span::styled(self.content.state.label(), Style::default().fg(state_color)),
        ];

        let mut right = Vec::new();
        if self.content.pending > 0 {
            right.push(Span::styled(
                format!("⋯ {} pending", self.content.pending),
                Style::default().fg(self.theme.info),
            ));
            right.push(separator());
        }
        let (icon, name) = match self.content.theme {
            ThemePreference::Dark => ("☾", "Dark"),
            ThemePreference::Light => ("☀", "Light"),
        };
        right.push(Span::styled(
            format!("{icon} {name} "),
            Style::default().fg(self.theme.secondary),
        ));

        let left_width: usize = left.iter().map(|s| visual_width(&s.content)).sum();
        let right_width: usize = right.iter().map(|s| visual_width(&s.content)).sum();
        let padding = (area.width as usize).saturating_sub(left_width + right_width);
        left.push(Span::raw(" ".repeat(padding)));
        left.extend(right);

        Paragraph::new(Line::from(left))
            .style(Style::default().bg(self.theme.surface))
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{buffer_to_string, create_test_terminal};

    fn content(state: ConversationState, pending: usize) -> StatusBarContent {
        StatusBarContent {
            title: "BuddyBot".into(),
            state,
            theme: ThemePreference::Dark,
            pending,
        }
    }

    #[test]
    fn test_renders_title_state_and_theme() {
        let mut terminal = create_test_terminal(60, 1);
        let content = content(ConversationState::AwaitingBudget, 0);
        let theme = Theme::default();
        terminal
            .draw(|f| f.render_widget(StatusBar::new(&content, &theme), f.area()))
            .unwrap();

        let text = buffer_to_string(terminal.backend().buffer());
        assert!(text.contains("BuddyBot"));
        assert!(text.contains("Budget"));
        assert!(text.contains("Dark"));
        assert!(!text.contains("pending"));
    }

    #[test]
    fn test_renders_pending_count() {
        let mut terminal = create_test_terminal(60, 1);
        let content = content(ConversationState::Idle, 2);
        let theme = Theme::default();
        terminal
            .draw(|f| f.render_widget(StatusBar::new(&content, &theme), f.area()))
            .unwrap();

        let text = buffer_to_string(terminal.backend().buffer());
        assert!(text.contains("2 pending"));
        assert!(text.contains("Chatting"));
    }
}
