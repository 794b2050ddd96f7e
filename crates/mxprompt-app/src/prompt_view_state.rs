//! Prompt editor scroll state
//!
//! The reducer moves `offset`; the renderer reports the wrapped row count and
//! viewport height each frame through `update_content_size`, which keeps the
//! offset inside the content.

/// Vertical scroll position of the generated prompt card
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PromptViewState {
    /// First visible wrapped row
    pub offset: usize,
    /// Wrapped rows in the prompt (set during render)
    pub total_lines: usize,
    /// Rows that fit in the card (set during render)
    pub visible_lines: usize,
}

impl PromptViewState {
    pub fn new() -> Self {
        Self::default()
    }

    fn max_offset(&self) -> usize {
        self.total_lines.saturating_sub(self.visible_lines)
    }

    /// Scroll up by n rows
    pub fn scroll_up(&mut self, n: usize) {
        self.offset = self.offset.saturating_sub(n);
    }

    /// Scroll down by n rows, stopping at the last full page
    pub fn scroll_down(&mut self, n: usize) {
        self.offset = (self.offset + n).min(self.max_offset());
    }

    pub fn scroll_to_top(&mut self) {
        self.offset = 0;
    }

    pub fn scroll_to_bottom(&mut self) {
        self.offset = self.max_offset();
    }

    /// Page size keeps two rows of overlap, and is never zero
    fn page(&self) -> usize {
        self.visible_lines.saturating_sub(2).max(1)
    }

    pub fn page_up(&mut self) {
        self.scroll_up(self.page());
    }

    pub fn page_down(&mut self) {
        self.scroll_down(self.page());
    }

    /// Whether rows exist below the viewport
    pub fn has_more_below(&self) -> bool {
        self.offset < self.max_offset()
    }

    /// Record the rendered size and clamp the offset to it
    pub fn update_content_size(&mut self, total_lines: usize, visible_lines: usize) {
        self.total_lines = total_lines;
        self.visible_lines = visible_lines;
        self.offset = self.offset.min(self.max_offset());
    }

    /// Back to the top, forgetting the last rendered size
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
