//! Help overlay listing the key bindings.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

use crate::layout::centered_fixed;
use crate::theme::Theme;

const BINDINGS: &[(&str, &str)] = &[
    ("Enter", "Send message / select"),
    ("Tab / Shift+Tab", "Next / previous section"),
    ("←/→", "Choose a button"),
    ("↑/↓", "Input history"),
    ("PgUp/PgDn", "Scroll conversation"),
    ("Ctrl+Y", "Copy last reply"),
    ("Ctrl+T", "Toggle dark mode"),
    ("Ctrl+L", "Clear chat"),
    ("Ctrl+S / F2", "Settings"),
    ("F1", "Toggle this help"),
    ("Esc / Ctrl+C", "Quit"),
];

/// Centered help overlay.
pub struct HelpOverlay<'a> {
    theme: &'a Theme,
}

impl<'a> HelpOverlay<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }
}

impl Widget for HelpOverlay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut lines = vec![Line::default()];
        for (key, action) in BINDINGS {
            lines.push(Line::from(vec![
                Span::styled(format!("  {key:<17}"), Style::default().fg(self.theme.primary)),
                Span::styled(*action, Style::default().fg(self.theme.text)),
            ]));
        }
        lines.push(Line::default());
        lines.push(Line::styled(
            "  [Press any key to close]",
            Style::default().fg(self.theme.muted),
        ));

        let height = u16::try_from(lines.len() + 2).unwrap_or(u16::MAX);
        let width = 50.min(area.width.saturating_sub(4));
        let overlay_area = centered_fixed(width, height.min(area.height), area);

        Clear.render(overlay_area, buf);

        let block = Block::default()
            .title(" Help ")
            .title_style(
                Style::default()
                    .fg(self.theme.text)
                    .add_modifier(Modifier::BOLD),
            )
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.border_focused))
            .style(Style::default().bg(self.theme.base));

        Paragraph::new(lines).block(block).render(overlay_area, buf);
    }
}
