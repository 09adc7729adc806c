//! Markdown rendering using pulldown-cmark.
//!
//! Bot replies are usually short lists (groceries, ingredients, facts), so
//! the renderer cares most about lists, emphasis and simple tables. Output
//! is wrapped to the available width with hanging indents for list items.

use pulldown_cmark::{Event, HeadingLevel, Options, Parser, Tag, TagEnd};
use ratatui::{
    style::Style,
    text::{Line, Span},
};

use crate::theme::Theme;

use super::styles::MarkdownStyles;
use super::width::visual_width;
use super::wrap::wrap_line;

/// Widest a horizontal rule gets.
const MAX_RULE_WIDTH: usize = 40;

/// Render markdown text to styled, wrapped ratatui Lines.
///
/// A `width` of 0 disables wrapping.
pub fn render_markdown(input: &str, width: usize, theme: &Theme) -> Vec<Line<'static>> {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);
    options.insert(Options::ENABLE_TABLES);

    let parser = Parser::new_ext(input, options);
    let mut renderer = MarkdownRenderer::new(MarkdownStyles::from_theme(theme), width);
    renderer.run(parser);

    let mut lines: Vec<Line<'static>> = renderer
        .lines
        .into_iter()
        .flat_map(|(line, hang)| wrap_line(line, width, hang))
        .collect();
    while lines.last().is_some_and(|l| l.width() == 0) {
        lines.pop();
    }
    lines
}

struct MarkdownRenderer {
    styles: MarkdownStyles,
    width: usize,
    /// Finished lines with the hanging indent their continuations need.
    lines: Vec<(Line<'static>, usize)>,
    style_stack: Vec<Style>,
    current_spans: Vec<Span<'static>>,
    current_hang: usize,
    /// One entry per open list: the next item number, or `None` for bullets.
    list_stack: Vec<Option<u64>>,
    pending_marker: Option<String>,
    in_code_block: bool,
    in_blockquote: bool,
    table_cell: usize,
    link: Option<Link>,
}

struct Link {
    dest: String,
    text: String,
}

impl MarkdownRenderer {
    fn new(styles: MarkdownStyles, width: usize) -> Self {
        Self {
            styles,
            width,
            lines: Vec::new(),
            style_stack: Vec::new(),
            current_spans: Vec::new(),
            current_hang: 0,
            list_stack: Vec::new(),
            pending_marker: None,
            in_code_block: false,
            in_blockquote: false,
            table_cell: 0,
            link: None,
        }
    }

    fn run<'a>(&mut self, parser: impl Iterator<Item = Event<'a>>) {
        for event in parser {
            self.handle_event(event);
        }
        self.flush_line();
    }

    fn handle_event(&mut self, event: Event<'_>) {
        match event {
            Event::Start(tag) => self.start(tag),
            Event::End(tag) => self.end(tag),
            Event::Text(text) => self.add_text(&text),
            Event::Code(code) => {
                self.take_marker();
                self.current_spans
                    .push(Span::styled(format!("`{code}`"), self.styles.code));
            }
            Event::SoftBreak => self.add_text(" "),
            Event::HardBreak => self.flush_line(),
            Event::Rule => {
                self.flush_line();
                let width = if self.width == 0 {
                    MAX_RULE_WIDTH
                } else {
                    self.width.min(MAX_RULE_WIDTH)
                };
                self.lines
                    .push((Line::styled("─".repeat(width), self.styles.rule), 0));
                self.blank_line();
            }
            Event::TaskListMarker(checked) => {
                let checkbox = if checked { "[x] " } else { "[ ] " };
                self.take_marker();
                self.current_spans
                    .push(Span::styled(checkbox, self.styles.list_marker));
            }
            _ => {}
        }
    }

    fn start(&mut self, tag: Tag<'_>) {
        match tag {
            Tag::Heading { level, .. } => {
                self.flush_line();
                self.style_stack.push(self.heading_style(level));
            }
            Tag::Emphasis => self.style_stack.push(self.styles.emphasis),
            Tag::Strong => self.style_stack.push(self.styles.strong),
            Tag::Strikethrough => self.style_stack.push(self.styles.strikethrough),
            Tag::Link { dest_url, .. } | Tag::Image { dest_url, .. } => {
                self.style_stack.push(self.styles.link);
                self.link = Some(Link {
                    dest: dest_url.to_string(),
                    text: String::new(),
                });
            }
            Tag::CodeBlock(_) => {
                self.flush_line();
                self.in_code_block = true;
            }
            Tag::List(start) => {
                self.flush_line();
                self.list_stack.push(start);
            }
            Tag::Item => {
                self.flush_line();
                let depth = self.list_stack.len().saturating_sub(1);
                let bullet = match self.list_stack.last_mut() {
                    Some(Some(n)) => {
                        let bullet = format!("{n}. ");
                        *n += 1;
                        bullet
                    }
                    _ => "• ".to_string(),
                };
                let marker = format!("{}{bullet}", "  ".repeat(depth));
                self.current_hang = visual_width(&marker);
                self.pending_marker = Some(marker);
            }
            Tag::BlockQuote => {
                self.flush_line();
                self.in_blockquote = true;
            }
            Tag::Table(_) => self.flush_line(),
            Tag::TableHead => {
                self.table_cell = 0;
                self.style_stack.push(self.styles.strong);
            }
            Tag::TableRow => self.table_cell = 0,
            Tag::TableCell => {
                if self.table_cell > 0 {
                    self.current_spans
                        .push(Span::styled(" │ ", self.styles.rule));
                }
                self.table_cell += 1;
            }
            _ => {}
        }
    }

    fn end(&mut self, tag: TagEnd) {
        match tag {
            TagEnd::Heading(_) => {
                self.flush_line();
                self.style_stack.pop();
                self.blank_line();
            }
            TagEnd::Emphasis | TagEnd::Strong | TagEnd::Strikethrough => {
                self.style_stack.pop();
            }
            TagEnd::Link | TagEnd::Image => {
                self.style_stack.pop();
                if let Some(link) = self.link.take() {
                    if !link.dest.is_empty() && link.dest != link.text {
                        self.current_spans
                            .push(Span::styled(format!(" ({})", link.dest), self.styles.rule));
                    }
                }
            }
            TagEnd::CodeBlock => {
                self.flush_line();
                self.in_code_block = false;
                self.blank_line();
            }
            TagEnd::List(_) => {
                self.flush_line();
                self.list_stack.pop();
                if self.list_stack.is_empty() {
                    self.blank_line();
                }
            }
            TagEnd::Item => self.flush_line(),
            TagEnd::BlockQuote => {
                self.flush_line();
                self.in_blockquote = false;
                self.blank_line();
            }
            TagEnd::Paragraph => {
                self.flush_line();
                if self.list_stack.is_empty() {
                    self.blank_line();
                }
            }
            TagEnd::TableHead => {
                self.style_stack.pop();
                self.flush_line();
            }
            TagEnd::TableRow => self.flush_line(),
            TagEnd::Table => self.blank_line(),
            _ => {}
        }
    }

    fn add_text(&mut self, text: &str) {
        if self.in_code_block {
            for line in text.lines() {
                self.current_spans
                    .push(Span::styled(format!("  {line}"), self.styles.code_block));
                self.flush_line();
            }
            return;
        }

        self.take_marker();
        if self.in_blockquote && self.current_spans.is_empty() {
            self.current_spans
                .push(Span::styled("> ", self.styles.blockquote));
            self.current_hang = 2;
        }
        if let Some(link) = self.link.as_mut() {
            link.text.push_str(text);
        }

        let style = self.current_style();
        self.current_spans.push(Span::styled(text.to_string(), style));
    }

    /// Emit the pending list marker ahead of the item's first content.
    fn take_marker(&mut self) {
        if let Some(marker) = self.pending_marker.take() {
            self.current_spans
                .push(Span::styled(marker, self.styles.list_marker));
        }
    }

    fn current_style(&self) -> Style {
        let mut style = if self.in_blockquote {
            self.styles.text.patch(self.styles.blockquote)
        } else {
            self.styles.text
        };
        for s in &self.style_stack {
            style = style.patch(*s);
        }
        style
    }

    fn heading_style(&self, level: HeadingLevel) -> Style {
        match level {
            HeadingLevel::H1 => self.styles.h1,
            HeadingLevel::H2 => self.styles.h2,
            _ => self.styles.h3,
        }
    }

    fn flush_line(&mut self) {
        if !self.current_spans.is_empty() {
            let spans = std::mem::take(&mut self.current_spans);
            self.lines.push((Line::from(spans), self.current_hang));
        }
        if self.list_stack.is_empty() && !self.in_blockquote {
            self.current_hang = 0;
        }
    }

    /// Separate blocks with a single empty line.
    fn blank_line(&mut self) {
        if self.lines.last().is_some_and(|(l, _)| l.width() > 0) {
            self.lines.push((Line::default(), 0));
        }
    }
}
