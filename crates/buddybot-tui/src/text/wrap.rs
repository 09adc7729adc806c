//! Text wrapping for plain strings and styled ratatui Lines.

use ratatui::{
    style::Style,
    text::{Line, Span},
};

use super::width::{char_width, visual_width};

/// Wrap a plain string to the given width.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![text.to_string()];
    }
    textwrap::wrap(text, width)
        .into_iter()
        .map(std::borrow::Cow::into_owned)
        .collect()
}

/// Wrap one styled line. Continuation lines are indented by `indent` cells
/// (capped at half the width), which keeps list items hanging.
pub fn wrap_line(line: Line<'static>, width: usize, indent: usize) -> Vec<Line<'static>> {
    if width == 0 || line.width() <= width {
        return vec![line];
    }

    let mut wrapper = Wrapper::new(width, indent.min(width / 2), line.style);
    let mut pending_space: Option<(String, Style)> = None;

    for span in &line.spans {
        for (token, is_space) in tokens(&span.content) {
            if is_space {
                if wrapper.lines.is_empty() && wrapper.at_line_start() {
                    // Leading indentation of the first line is content.
                    wrapper.push(&token, span.style);
                } else {
                    match pending_space.as_mut() {
                        Some((text, _)) => text.push_str(&token),
                        None => pending_space = Some((token, span.style)),
                    }
                }
            } else {
                wrapper.word(&token, span.style, pending_space.take());
            }
        }
    }

    wrapper.finish()
}

/// Split text into alternating runs of whitespace and non-whitespace.
fn tokens(text: &str) -> Vec<(String, bool)> {
    let mut out: Vec<(String, bool)> = Vec::new();
    for ch in text.chars() {
        let space = ch.is_whitespace();
        match out.last_mut() {
            Some((run, is_space)) if *is_space == space => run.push(ch),
            _ => out.push((ch.to_string(), space)),
        }
    }
    out
}

struct Wrapper {
    width: usize,
    indent: usize,
    line_style: Style,
    lines: Vec<Line<'static>>,
    spans: Vec<Span<'static>>,
    used: usize,
    line_start: usize,
}

impl Wrapper {
    fn new(width: usize, indent: usize, line_style: Style) -> Self {
        Self {
            width,
            indent,
            line_style,
            lines: Vec::new(),
            spans: Vec::new(),
            used: 0,
            line_start: 0,
        }
    }

    fn at_line_start(&self) -> bool {
        self.used == self.line_start
    }

    fn push(&mut self, text: &str, style: Style) {
        self.used += visual_width(text);
        if let Some(last) = self.spans.last_mut() {
            if last.style == style {
                last.content.to_mut().push_str(text);
                return;
            }
        }
        self.spans.push(Span::styled(text.to_string(), style));
    }

    fn break_line(&mut self) {
        let spans = std::mem::take(&mut self.spans);
        self.lines.push(Line::from(spans).style(self.line_style));
        self.used = 0;
        self.line_start = 0;
        if self.indent > 0 {
            self.push(&" ".repeat(self.indent), Style::default());
            self.line_start = self.indent;
        }
    }

    fn word(&mut self, word: &str, style: Style, space: Option<(String, Style)>) {
        let width = visual_width(word);
        if !self.at_line_start() {
            let space_width = space.as_ref().map_or(0, |(s, _)| visual_width(s));
            if self.used + space_width + width <= self.width {
                if let Some((s, space_style)) = space {
                    self.push(&s, space_style);
                }
                self.push(word, style);
                return;
            }
            self.break_line();
        }

        if self.used + width <= self.width {
            self.push(word, style);
            return;
        }

        // Longer than a whole line: break between characters.
        for ch in word.chars() {
            if self.used + char_width(ch) > self.width && !self.at_line_start() {
                self.break_line();
            }
            let mut buf = [0u8; 4];
            self.push(ch.encode_utf8(&mut buf), style);
        }
    }

    fn finish(mut self) -> Vec<Line<'static>> {
        if !self.at_line_start() || self.lines.is_empty() {
            let spans = std::mem::take(&mut self.spans);
            self.lines.push(Line::from(spans).style(self.line_style));
        }
        self.lines
    }
}
