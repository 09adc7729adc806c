//! Single-line text input state with history.

use crate::text::char_width;

/// Editable input line. The cursor is a character index, never a byte
/// offset, so multi-byte text (₹, emoji) edits cleanly.
#[derive(Debug, Clone, Default)]
pub struct TextInputState {
    content: String,
    cursor: usize,
    /// Submitted entries, oldest first.
    history: Vec<String>,
    /// Position while browsing history; `None` when editing fresh input.
    history_index: Option<usize>,
    /// Input being edited before history browsing started.
    saved_input: String,
}

impl TextInputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Cursor position in characters.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Whether the user is currently browsing history.
    pub fn is_browsing_history(&self) -> bool {
        self.history_index.is_some()
    }

    fn char_count(&self) -> usize {
        self.content.chars().count()
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.content
            .char_indices()
            .nth(char_index)
            .map_or(self.content.len(), |(i, _)| i)
    }

    /// Insert a character at the cursor. Control characters are ignored.
    pub fn insert(&mut self, ch: char) {
        if ch.is_control() {
            return;
        }
        let at = self.byte_index(self.cursor);
        self.content.insert(at, ch);
        self.cursor += 1;
    }

    /// Insert a string at the cursor (pasted text). Line breaks become spaces.
    pub fn insert_str(&mut self, s: &str) {
        for ch in s.chars() {
            if ch == '\n' || ch == '\r' || ch == '\t' {
                self.insert(' ');
            } else {
                self.insert(ch);
            }
        }
    }

    /// Delete the character before the cursor.
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let at = self.byte_index(self.cursor);
            self.content.remove(at);
        }
    }

    /// Delete the character at the cursor.
    pub fn delete(&mut self) {
        if self.cursor < self.char_count() {
            let at = self.byte_index(self.cursor);
            self.content.remove(at);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.char_count() {
            self.cursor += 1;
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.char_count();
    }

    /// Delete everything before the cursor.
    pub fn clear_to_start(&mut self) {
        let at = self.byte_index(self.cursor);
        self.content.replace_range(..at, "");
        self.cursor = 0;
    }

    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }

    /// Take the content, recording non-blank entries in history.
    pub fn submit(&mut self) -> String {
        let content = std::mem::take(&mut self.content);
        self.cursor = 0;
        if !content.trim().is_empty() && self.history.last() != Some(&content) {
            self.history.push(content.clone());
        }
        self.history_index = None;
        self.saved_input.clear();
        content
    }

    /// Recall the previous (older) history entry.
    pub fn history_prev(&mut self) {
        if self.history.is_empty() {
            return;
        }
        let index = match self.history_index {
            None => {
                self.saved_input = std::mem::take(&mut self.content);
                self.history.len() - 1
            }
            Some(0) => 0,
            Some(i) => i - 1,
        };
        self.history_index = Some(index);
        self.content = self.history[index].clone();
        self.move_end();
    }

    /// Move toward newer entries, restoring the saved input past the newest.
    pub fn history_next(&mut self) {
        let Some(index) = self.history_index else {
            return;
        };
        if index + 1 < self.history.len() {
            self.history_index = Some(index + 1);
            self.content = self.history[index + 1].clone();
        } else {
            self.history_index = None;
            self.content = std::mem::take(&mut self.saved_input);
        }
        self.move_end();
    }

    /// The part of the content that fits in `width` cells, keeping the
    /// cursor visible. Returns the visible text and the cursor's column in it.
    pub fn visible_window(&self, width: usize) -> (String, usize) {
        let chars: Vec<char> = self.content.chars().collect();
        if width == 0 {
            return (String::new(), 0);
        }

        // Scroll so the cursor (plus one cell for it) fits.
        let mut start = 0;
        let cursor_col = |start: usize| -> usize {
            chars[start..self.cursor].iter().map(|c| char_width(*c)).sum()
        };
        while start < self.cursor && cursor_col(start) + 1 > width {
            start += 1;
        }

        let mut visible = String::new();
        let mut used = 0;
        for ch in &chars[start..] {
            let w = char_width(*ch);
            if used + w > width {
                break;
            }
            visible.push(*ch);
            used += w;
        }

        (visible, cursor_col(start))
    }
}
