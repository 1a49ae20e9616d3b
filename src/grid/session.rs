//! Drag session: the short-lived record of one reorder gesture.

use super::geometry::Point;
use crate::model::WidgetId;

/// Where a session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// The pointer is down and moving the widget.
    Dragging,
    /// The pointer was released; the widget is animating into its slot.
    Settling,
}

/// State captured at gesture start and carried until the settle finishes.
///
/// `origin` is the widget's displayed position when the gesture began,
/// shifted by any auto-scroll that happened since, so that
/// `origin + translation` is always where the widget should be drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct DragSession {
    id: WidgetId,
    origin: Point,
    phase: SessionPhase,
    active: bool,
}

impl DragSession {
    /// Start a session for `id` whose widget is currently drawn at `origin`.
    pub fn start(id: WidgetId, origin: Point) -> Self {
        Self {
            id,
            origin,
            phase: SessionPhase::Dragging,
            active: true,
        }
    }

    /// The dragged widget.
    pub fn id(&self) -> &WidgetId {
        &self.id
    }

    /// Gesture origin offset.
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Lifecycle phase.
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// Whether the widget is still elevated.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Raw widget position for a cumulative gesture translation.
    pub fn position_for(&self, translation: Point) -> Point {
        self.origin + translation
    }

    /// Compensate the origin for a programmatic vertical scroll.
    pub fn shift_origin_y(&mut self, delta: f64) {
        self.origin.y += delta;
    }

    /// Gesture ended; the widget now settles.
    pub fn release(&mut self) {
        self.phase = SessionPhase::Settling;
    }

    /// Settle animation finished.
    pub fn deactivate(&mut self) {
        self.active = false;
    }
}
