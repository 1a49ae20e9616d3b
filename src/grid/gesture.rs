//! Pointer gesture tracking.
//!
//! Turns absolute pointer positions into the start / cumulative translation /
//! end stream the reorder engine consumes.

use super::geometry::Point;

/// Tracks one pointer press at a time.
#[derive(Debug, Clone, Default)]
pub struct GestureTracker {
    start: Option<Point>,
}

impl GestureTracker {
    /// Create an idle tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a gesture at `point`. A press while already pressed restarts it.
    pub fn press(&mut self, point: Point) {
        self.start = Some(point);
    }

    /// Translation from the press point to `point`, or `None` when idle.
    pub fn drag(&self, point: Point) -> Option<Point> {
        self.start.map(|start| point - start)
    }

    /// End the gesture. Returns whether a gesture was in progress.
    pub fn release(&mut self) -> bool {
        self.start.take().is_some()
    }

    /// Whether a press is in progress.
    #[cfg(test)]
    pub(crate) fn is_pressed(&self) -> bool {
        self.start.is_some()
    }
}
