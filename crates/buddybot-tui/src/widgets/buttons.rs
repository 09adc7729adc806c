//! Rows of selectable buttons (quick actions, Yes/No options).
//!
//! Buttons flow left to right and wrap onto further rows when they don't
//! fit the available width.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::text::{truncate_to_width, visual_width};
use crate::theme::Theme;

/// Columns between neighbouring buttons.
const GAP: usize = 1;

fn button_text(label: &str, max_width: usize) -> String {
    truncate_to_width(&format!("[ {label} ]"), max_width)
}

/// Assign each button to a row. Returns the button indices of every row.
fn flow(labels: &[&str], width: usize) -> Vec<Vec<usize>> {
    let mut rows: Vec<Vec<usize>> = Vec::new();
    let mut used = 0;
    for (i, label) in labels.iter().enumerate() {
        let w = visual_width(&button_text(label, width));
        match rows.last_mut() {
            Some(row) if used + GAP + w <= width => {
                row.push(i);
                used += GAP + w;
            }
            _ => {
                rows.push(vec![i]);
                used = w;
            }
        }
    }
    rows
}

/// A wrapped row of buttons with an optional selection.
pub struct ButtonRow<'a> {
    labels: &'a [&'a str],
    selected: Option<usize>,
    focused: bool,
    theme: &'a Theme,
}

impl<'a> ButtonRow<'a> {
    pub fn new(labels: &'a [&'a str], theme: &'a Theme) -> Self {
        Self {
            labels,
            selected: None,
            focused: false,
            theme,
        }
    }

    /// Highlight a button. The highlight is only drawn while focused.
    #[must_use]
    pub fn selected(mut self, selected: Option<usize>) -> Self {
        self.selected = selected;
        self
    }

    #[must_use]
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Rows needed to show every button at this width.
    pub fn height(labels: &[&str], width: u16) -> u16 {
        u16::try_from(flow(labels, width as usize).len()).unwrap_or(u16::MAX)
    }

    /// Which button occupies a cell, for mouse clicks.
    pub fn hit_test(labels: &[&str], area: Rect, column: u16, row: u16) -> Option<usize> {
        if !area.contains((column, row).into()) {
            return None;
        }
        let width = area.width as usize;
        let rows = flow(labels, width);
        let indices = rows.get((row - area.y) as usize)?;
        let mut x = 0;
        let target = (column - area.x) as usize;
        for &i in indices {
            let w = visual_width(&button_text(labels[i], width));
            if target >= x && target < x + w {
                return Some(i);
            }
            x += w + GAP;
        }
        None
    }
}

impl Widget for ButtonRow<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let width = area.width as usize;
        if width == 0 {
            return;
        }

        let normal = Style::default().fg(self.theme.primary);
        let highlighted = Style::default()
            .fg(self.theme.base)
            .bg(self.theme.primary)
            .add_modifier(Modifier::BOLD);

        let lines: Vec<Line<'_>> = flow(self.labels, width)
            .into_iter()
            .map(|row| {
                let mut spans = Vec::new();
                for (n, i) in row.into_iter().enumerate() {
                    if n > 0 {
                        spans.push(Span::raw(" ".repeat(GAP)));
                    }
                    let style = if self.focused && self.selected == Some(i) {
                        highlighted
                    } else {
                        normal
                    };
                    spans.push(Span::styled(button_text(self.labels[i], width), style));
                }
                Line::from(spans)
            })
            .collect();

        Paragraph::new(lines).render(area, buf);
    }
}

/// Bordered bar of quick-action buttons.
pub struct QuickActionBar<'a> {
    row: ButtonRow<'a>,
    theme: &'a Theme,
    focused: bool,
}

impl<'a> QuickActionBar<'a> {
    pub fn new(labels: &'a [&'a str], selected: usize, focused: bool, theme: &'a Theme) -> Self {
        Self {
            row: ButtonRow::new(labels, theme)
                .selected(Some(selected))
                .focused(focused),
            theme,
            focused,
        }
    }

    /// Total height including borders.
    pub fn height(labels: &[&str], width: u16) -> u16 {
        ButtonRow::height(labels, width.saturating_sub(2)) + 2
    }

    /// Area the buttons occupy inside the border.
    pub fn inner(area: Rect) -> Rect {
        Block::default().borders(Borders::ALL).inner(area)
    }
}

impl Widget for QuickActionBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_color = if self.focused {
            self.theme.border_focused
        } else {
            self.theme.border
        };
        let block = Block::default()
            .title(" Quick actions ")
            .title_style(Style::default().fg(self.theme.text))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color))
            .style(Style::default().bg(self.theme.base));

        let inner = block.inner(area);
        block.render(area, buf);
        self.row.render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{buffer_to_string, create_test_terminal};

    const LABELS: [&str; 3] = ["Cheer me up!", "Budget list", "Yes"];

    #[test]
    fn test_flow_single_row_when_it_fits() {
        assert_eq!(flow(&LABELS, 80), vec![vec![0, 1, 2]]);
    }

    #[test]
    fn test_flow_wraps_to_new_rows() {
        // "[ Cheer me up! ]" is 16 wide, "[ Budget list ]" 15.
        assert_eq!(flow(&LABELS, 24), vec![vec![0], vec![1, 2]]);
        assert_eq!(ButtonRow::height(&LABELS, 24), 2);
    }

    #[test]
    fn test_hit_test() {
        let area = Rect::new(2, 5, 80, 1);
        assert_eq!(ButtonRow::hit_test(&LABELS, area, 2, 5), Some(0));
        assert_eq!(ButtonRow::hit_test(&LABELS, area, 2 + 17, 5), Some(1));
        // The gap between buttons.
        assert_eq!(ButtonRow::hit_test(&LABELS, area, 2 + 16, 5), None);
        assert_eq!(ButtonRow::hit_test(&LABELS, area, 2, 6), None);
    }

    #[test]
    fn test_render_shows_all_labels() {
        let theme = Theme::default();
        let mut terminal = create_test_terminal(60, 3);
        terminal
            .draw(|f| {
                let bar = QuickActionBar::new(&LABELS, 0, true, &theme);
                f.render_widget(bar, f.area());
            })
            .unwrap();

        let text = buffer_to_string(terminal.backend().buffer());
        assert!(text.contains("Quick actions"));
        assert!(text.contains("[ Cheer me up! ]"));
        assert!(text.contains("[ Yes ]"));
    }

    #[test]
    fn test_selection_highlighted_only_when_focused() {
        let theme = Theme::default();
        for focused in [true, false] {
            let mut terminal = create_test_terminal(40, 1);
            terminal
                .draw(|f| {
                    let row = ButtonRow::new(&LABELS, &theme)
                        .selected(Some(0))
                        .focused(focused);
                    f.render_widget(row, f.area());
                })
                .unwrap();

            let cell = terminal.backend().buffer().cell((2, 0)).unwrap().clone();
            assert_eq!(cell.bg == theme.primary, focused);
        }
    }
}
