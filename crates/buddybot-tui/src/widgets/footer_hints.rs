//! Footer bar with keybinding hints.
//!
//! Format: `Input            [Enter] send │ [Tab] focus │ [F1] help`

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::layout::Focus;
use crate::text::visual_width;
use crate::theme::Theme;

/// A single keybinding hint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyHint {
    /// The key or key combination (e.g., "Tab", "Ctrl+T").
    pub key: String,
    /// What it does (e.g., "focus", "theme").
    pub action: String,
}

impl KeyHint {
    pub fn new(key: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            action: action.into(),
        }
    }
}

/// Hints for the focused region.
#[must_use]
pub fn hints_for_focus(focus: Focus) -> Vec<KeyHint> {
    let mut hints = match focus {
        Focus::Input => vec![KeyHint::new("Enter", "send"), KeyHint::new("↑/↓", "history")],
        Focus::QuickActions | Focus::Options => {
            vec![KeyHint::new("←/→", "choose"), KeyHint::new("Enter", "select")]
        }
    };
    hints.push(KeyHint::new("Tab", "focus"));
    hints.push(KeyHint::new("F2", "settings"));
    hints.push(KeyHint::new("F1", "help"));
    hints
}

/// Footer bar widget.
pub struct FooterHints<'a> {
    hints: &'a [KeyHint],
    theme: &'a Theme,
    focus: Option<Focus>,
    notice: Option<&'a str>,
}

impl<'a> FooterHints<'a> {
    pub fn new(hints: &'a [KeyHint], theme: &'a Theme) -> Self {
        Self {
            hints,
            theme,
            focus: None,
            notice: None,
        }
    }

    /// Show a transient message in place of the focus label.
    #[must_use]
    pub fn notice(mut self, notice: Option<&'a str>) -> Self {
        self.notice = notice;
        self
    }

    /// Show the focused region on the left.
    #[must_use]
    pub fn focus(mut self, focus: Focus) -> Self {
        self.focus = Some(focus);
        self
    }
}

impl Widget for FooterHints<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut left_spans = Vec::new();
        if let Some(notice) = self.notice {
            left_spans.push(Span::styled(notice, Style::default().fg(self.theme.success)));
        } else if let Some(focus) = self.focus {
            left_spans.push(Span::styled(
                focus.label(),
                Style::default().fg(self.theme.primary),
            ));
        }

        let left_width: usize = left_spans.iter().map(|s| visual_width(&s.content)).sum();
        let total_width = area.width as usize;

        // Drop the leading hints until the rest fits.
        let hint_width = |hint: &KeyHint| visual_width(&hint.key) + visual_width(&hint.action) + 3;
        let mut first = 0;
        while first < self.hints.len() {
            let shown = &self.hints[first..];
            let width: usize =
                shown.iter().map(hint_width).sum::<usize>() + 3 * (shown.len() - 1);
            if left_width + width <= total_width {
                break;
            }
            first += 1;
        }

        let mut right_spans = Vec::new();
        for (i, hint) in self.hints[first..].iter().enumerate() {
            if i > 0 {
                right_spans.push(Span::styled(" │ ", Style::default().fg(self.theme.muted)));
            }
            right_spans.push(Span::styled("[", Style::default().fg(self.theme.muted)));
            right_spans.push(Span::styled(
                hint.key.as_str(),
                Style::default().fg(self.theme.primary),
            ));
            right_spans.push(Span::styled("] ", Style::default().fg(self.theme.muted)));
            right_spans.push(Span::styled(
                hint.action.as_str(),
                Style::default().fg(self.theme.subtext),
            ));
        }
        let right_width: usize = right_spans.iter().map(|s| visual_width(&s.content)).sum();

        let padding = total_width.saturating_sub(left_width + right_width);
        left_spans.push(Span::raw(" ".repeat(padding)));
        left_spans.extend(right_spans);

        Paragraph::new(Line::from(left_spans))
            .style(Style::default().bg(self.theme.surface))
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{buffer_to_string, create_test_terminal};

    #[test]
    fn test_input_hints() {
        let hints = hints_for_focus(Focus::Input);
        assert_eq!(hints[0], KeyHint::new("Enter", "send"));
        assert!(hints.iter().any(|h| h.key == "F1"));
    }

    #[test]
    fn test_bar_hints() {
        let hints = hints_for_focus(Focus::QuickActions);
        assert_eq!(hints[0].action, "choose");
        assert_eq!(hints_for_focus(Focus::Options), hints);
    }

    #[test]
    fn test_render() {
        let theme = Theme::default();
        let hints = hints_for_focus(Focus::Input);
        let mut terminal = create_test_terminal(100, 1);
        terminal
            .draw(|f| {
                f.render_widget(FooterHints::new(&hints, &theme).focus(Focus::Input), f.area());
            })
            .unwrap();

        let text = buffer_to_string(terminal.backend().buffer());
        assert!(text.starts_with("Input"));
        assert!(text.contains("[Enter] send"));
        assert!(text.ends_with("[F1] help"));
    }

    #[test]
    fn test_notice_replaces_focus_label() {
        let theme = Theme::default();
        let hints = hints_for_focus(Focus::Input);
        let mut terminal = create_test_terminal(100, 1);
        terminal
            .draw(|f| {
                let footer = FooterHints::new(&hints, &theme)
                    .focus(Focus::Input)
                    .notice(Some("Copied last reply"));
                f.render_widget(footer, f.area());
            })
            .unwrap();

        let text = buffer_to_string(terminal.backend().buffer());
        assert!(text.starts_with("Copied last reply"));
    }

    #[test]
    fn test_narrow_footer_drops_leading_hints() {
        let theme = Theme::default();
        let hints = hints_for_focus(Focus::Input);
        let mut terminal = create_test_terminal(30, 1);
        terminal
            .draw(|f| f.render_widget(FooterHints::new(&hints, &theme), f.area()))
            .unwrap();

        let text = buffer_to_string(terminal.backend().buffer());
        assert!(text.ends_with("[F1] help"));
        assert!(!text.contains("send"));
    }
}
