//! Line-based scrolling with follow mode for the message log.

/// Lines scrolled per mouse wheel tick.
pub const SCROLL_SPEED: usize = 3;

/// Scroll position of the message log.
///
/// While following, the newest line stays visible. Scrolling up stops
/// following; scrolling back to the bottom resumes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrollState {
    /// Index of the first visible line.
    offset: usize,
    follow: bool,
    /// Total rendered lines, as of the last draw.
    content_height: usize,
    /// Visible lines, as of the last draw.
    viewport_height: usize,
}

impl Default for ScrollState {
    fn default() -> Self {
        Self {
            offset: 0,
            follow: true,
            content_height: 0,
            viewport_height: 0,
        }
    }
}

impl ScrollState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn is_following(&self) -> bool {
        self.follow
    }

    fn max_offset(&self) -> usize {
        self.content_height.saturating_sub(self.viewport_height)
    }

    /// Record the latest layout and clamp (or follow) accordingly.
    pub fn sync(&mut self, content_height: usize, viewport_height: usize) {
        self.content_height = content_height;
        self.viewport_height = viewport_height;
        if self.follow {
            self.offset = self.max_offset();
        } else {
            self.offset = self.offset.min(self.max_offset());
        }
    }

    pub fn scroll_up(&mut self, amount: usize) {
        self.offset = self.offset.saturating_sub(amount);
        self.follow = self.offset >= self.max_offset();
    }

    pub fn scroll_down(&mut self, amount: usize) {
        self.offset = (self.offset + amount).min(self.max_offset());
        self.follow = self.offset >= self.max_offset();
    }

    pub fn page_up(&mut self) {
        self.scroll_up(self.viewport_height.saturating_sub(1).max(1));
    }

    pub fn page_down(&mut self) {
        self.scroll_down(self.viewport_height.saturating_sub(1).max(1));
    }

    /// Jump to the newest line and resume following.
    pub fn to_bottom(&mut self) {
        self.follow = true;
        self.offset = self.max_offset();
    }

    pub fn to_top(&mut self) {
        self.offset = 0;
        self.follow = self.max_offset() == 0;
    }
}
