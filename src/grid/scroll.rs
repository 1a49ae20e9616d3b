//! Shared scroll offset of the grid's containing view.

/// Vertical scroll state of the container the grid lives in.
///
/// # Clamping Behavior
/// The offset is always kept in `[0, max_offset()]` where
/// `max_offset = max(0, content_height - viewport_height)`. Every mutator
/// re-clamps, so the offset cannot leave that range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollState {
    offset: f64,
    viewport_height: f64,
    content_height: f64,
}

impl ScrollState {
    /// Create a scroll state at offset 0.
    pub fn new(viewport_height: f64, content_height: f64) -> Self {
        Self {
            offset: 0.0,
            viewport_height: viewport_height.max(0.0),
            content_height: content_height.max(0.0),
        }
    }

    /// Current offset from the top of the content.
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Visible height.
    pub fn viewport_height(&self) -> f64 {
        self.viewport_height
    }

    /// Total content height.
    pub fn content_height(&self) -> f64 {
        self.content_height
    }

    /// Largest valid offset.
    pub fn max_offset(&self) -> f64 {
        (self.content_height - self.viewport_height).max(0.0)
    }

    /// Update the viewport height, re-clamping the offset.
    pub fn set_viewport_height(&mut self, height: f64) {
        self.viewport_height = height.max(0.0);
        self.offset = self.clamp(self.offset);
    }

    /// Update the content height, re-clamping the offset.
    #[cfg(test)]
    pub(crate) fn set_content_height(&mut self, height: f64) {
        self.content_height = height.max(0.0);
        self.offset = self.clamp(self.offset);
    }

    /// Scroll to an absolute offset (clamped). Returns the applied delta.
    pub fn scroll_to(&mut self, offset: f64) -> f64 {
        let before = self.offset;
        self.offset = self.clamp(offset);
        self.offset - before
    }

    /// Scroll by a relative amount (clamped). Returns the applied delta.
    pub fn scroll_by(&mut self, delta: f64) -> f64 {
        self.scroll_to(self.offset + delta)
    }

    /// Scroll needed to keep an item at `item_y` (content space) on screen.
    ///
    /// The item is visible while `offset <= item_y <= offset + viewport -
    /// item_height`. Above that band the result is negative, below it
    /// positive, and in both cases limited to the distance left to scroll in
    /// that direction. Inside the band the result is 0.
    pub fn auto_scroll_delta(&self, item_y: f64, item_height: f64) -> f64 {
        let lower = self.offset;
        let upper = lower + self.viewport_height - item_height;

        if item_y < lower {
            -(lower - item_y).min(self.offset)
        } else if item_y > upper {
            let left_to_scroll = (self.max_offset() - self.offset).max(0.0);
            (item_y - upper).min(left_to_scroll)
        } else {
            0.0
        }
    }

    fn clamp(&self, offset: f64) -> f64 {
        if offset.is_nan() {
            return 0.0;
        }
        offset.clamp(0.0, self.max_offset())
    }
}
