//! Conversation pane widget.
//!
//! Combines the message log, the option buttons, and the input line.

use buddybot_engine::ChatWidget;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    symbols::line,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, StatefulWidget, Widget},
};

use crate::layout::Focus;
use crate::text::visual_width;
use crate::theme::Theme;
use crate::widgets::{ButtonRow, TextInputState};

use super::placeholder::input_placeholder;
use super::scroll::ScrollState;
use super::transcript::transcript_lines;

/// Height of the input line.
const INPUT_HEIGHT: u16 = 1;

/// Height of the divider line.
const DIVIDER_HEIGHT: u16 = 1;

const PROMPT: &str = "> ";

/// Regions inside the conversation pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PaneAreas {
    pub log: Rect,
    pub options: Rect,
    pub divider: Rect,
    pub input: Rect,
}

/// Conversation pane widget.
///
/// ```text
/// ┌─ Conversation ───────────────────────┐
/// │ BuddyBot · 10:02                     │
/// │   Hey there! I'm BuddyBot, your ...  │
/// │                                      │
/// │ [ Yes ] [ No ]                       │
/// │──────────────────────────────────────│
/// │ > Type your message...               │
/// └──────────────────────────────────────┘
/// ```
pub struct ConversationPane<'a> {
    widget: &'a ChatWidget,
    input: &'a TextInputState,
    theme: &'a Theme,
    focus: Focus,
    option_selected: usize,
    tick: usize,
}

impl<'a> ConversationPane<'a> {
    pub fn new(widget: &'a ChatWidget, input: &'a TextInputState, theme: &'a Theme) -> Self {
        Self {
            widget,
            input,
            theme,
            focus: Focus::Input,
            option_selected: 0,
            tick: 0,
        }
    }

    #[must_use]
    pub fn focus(mut self, focus: Focus) -> Self {
        self.focus = focus;
        self
    }

    /// Highlighted option button (shown while options are focused).
    #[must_use]
    pub fn option_selected(mut self, index: usize) -> Self {
        self.option_selected = index;
        self
    }

    /// Animation tick for the typing spinner.
    #[must_use]
    pub fn tick(mut self, tick: usize) -> Self {
        self.tick = tick;
        self
    }

    fn block(&self) -> Block<'static> {
        let border_color = if self.focus == Focus::QuickActions {
            self.theme.border
        } else {
            self.theme.border_focused
        };
        Block::default()
            .title(" Conversation ")
            .title_style(Style::default().fg(self.theme.text))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color))
            .style(Style::default().bg(self.theme.base))
    }

    /// Split the pane into its regions.
    pub fn areas(area: Rect, options: &[&str]) -> PaneAreas {
        let inner = Block::default().borders(Borders::ALL).inner(area);
        let options_height = if options.is_empty() {
            0
        } else {
            ButtonRow::height(options, inner.width)
        };

        let fixed = options_height + DIVIDER_HEIGHT + INPUT_HEIGHT;
        if inner.height <= fixed {
            // Not enough space: only the input line.
            let input = Rect::new(inner.x, inner.y, inner.width, inner.height.min(INPUT_HEIGHT));
            return PaneAreas {
                input,
                ..PaneAreas::default()
            };
        }

        let log_height = inner.height - fixed;
        let options_y = inner.y + log_height;
        let divider_y = options_y + options_height;
        let input_y = divider_y + DIVIDER_HEIGHT;
        PaneAreas {
            log: Rect::new(inner.x, inner.y, inner.width, log_height),
            options: Rect::new(inner.x, options_y, inner.width, options_height),
            divider: Rect::new(inner.x, divider_y, inner.width, DIVIDER_HEIGHT),
            input: Rect::new(inner.x, input_y, inner.width, INPUT_HEIGHT),
        }
    }

    fn render_log(&self, area: Rect, buf: &mut Buffer, scroll: &mut ScrollState) {
        let lines = transcript_lines(self.widget, self.theme, area.width as usize, self.tick);
        scroll.sync(lines.len(), area.height as usize);

        let visible: Vec<Line<'static>> = lines
            .into_iter()
            .skip(scroll.offset())
            .take(area.height as usize)
            .collect();
        Paragraph::new(visible).render(area, buf);
    }

    fn render_divider(&self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 {
            return;
        }
        let divider = line::HORIZONTAL.repeat(area.width as usize);
        Paragraph::new(Line::styled(divider, Style::default().fg(self.theme.border)))
            .render(area, buf);
    }

    fn render_input(&self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let focused = self.focus == Focus::Input;
        let prompt_width = visual_width(PROMPT);
        let text_width = (area.width as usize).saturating_sub(prompt_width);

        let mut spans = vec![Span::styled(PROMPT, Style::default().fg(self.theme.primary))];
        let cursor_col = if self.input.is_empty() {
            spans.push(Span::styled(
                input_placeholder(self.widget.state()),
                Style::default().fg(self.theme.muted),
            ));
            0
        } else {
            let (visible, col) = self.input.visible_window(text_width);
            spans.push(Span::styled(visible, Style::default().fg(self.theme.text)));
            col
        };
        Paragraph::new(Line::from(spans)).render(area, buf);

        if focused {
            let x = area.x + u16::try_from(prompt_width + cursor_col).unwrap_or(u16::MAX);
            if x < area.right() {
                if let Some(cell) = buf.cell_mut((x, area.y)) {
                    cell.set_style(Style::default().add_modifier(Modifier::REVERSED));
                }
            }
        }
    }
}

impl StatefulWidget for ConversationPane<'_> {
    type State = ScrollState;

    fn render(self, area: Rect, buf: &mut Buffer, scroll: &mut ScrollState) {
        let block = self.block();
        block.render(area, buf);

        let options: Vec<&str> = self.widget.options().iter().map(String::as_str).collect();
        let areas = Self::areas(area, &options);

        if areas.log.height > 0 {
            self.render_log(areas.log, buf, scroll);
        }
        if areas.options.height > 0 {
            ButtonRow::new(&options, self.theme)
                .selected(Some(self.option_selected))
                .focused(self.focus == Focus::Options)
                .render(areas.options, buf);
        }
        self.render_divider(areas.divider, buf);
        self.render_input(areas.input, buf);
    }
}
