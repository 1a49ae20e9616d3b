//! Grid reorder engine.
//!
//! Owns the logical model (the [`PositionMap`]) and the presentation state
//! (one [`ItemPresenter`] per widget). Presentation is derived: it is
//! reconciled from the map after every mutation and never written back.
//!
//! # Lifecycle per widget
//!
//! ```text
//! Idle ──start_drag (editing)──▶ Dragging ──end_drag / editing off──▶ Settling
//!  ▲                               │  ▲                                    │
//!  │                               └──┘ update_drag                        │
//!  └──────────────────────── tick: settle animation done ◀─────────────────┘
//! ```

use super::animation::{AnimatedPoint, Spring, DEFAULT_SETTLE_DURATION};
use super::geometry::{GridGeometry, Point, SlotIndex};
use super::positions::{PositionMap, SlotChange};
use super::scroll::ScrollState;
use super::session::{DragSession, SessionPhase};
use crate::model::{GridError, WidgetId};
use std::collections::HashMap;
use std::sync::mpsc::{self, Receiver, Sender};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Stacking order of an elevated (dragged or settling) widget.
pub const ELEVATED_Z_INDEX: u16 = 100;

/// Scale of an elevated widget.
pub const ACTIVE_SCALE: f64 = 1.05;

/// Per-widget lifecycle phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemPhase {
    /// Following its slot.
    Idle,
    /// Following the pointer.
    Dragging,
    /// Animating into its final slot after release.
    Settling,
}

/// Notifications published to subscribers.
#[derive(Debug, Clone, PartialEq)]
pub enum GridEvent {
    /// A widget's slot changed.
    SlotChanged(SlotChange),
    /// The container must scroll to `offset`.
    Scrolled {
        /// New absolute offset.
        offset: f64,
        /// Applied change.
        delta: f64,
    },
    /// A drag began.
    DragStarted(WidgetId),
    /// The pointer was released; `slot` is the final slot.
    DragEnded {
        /// Dragged widget.
        id: WidgetId,
        /// Slot it settles into.
        slot: SlotIndex,
    },
    /// The settle animation finished and the widget is no longer elevated.
    Settled(WidgetId),
}

/// Outcome of one [`ReorderEngine::update_drag`] call.
#[derive(Debug, Clone, PartialEq)]
pub struct DragUpdate {
    /// Where the dragged widget is now drawn.
    pub position: Point,
    /// The dragged widget's slot after any swap.
    pub slot: SlotIndex,
    /// The widget it swapped with, if any.
    pub swapped_with: Option<WidgetId>,
    /// Programmatic scroll applied (0 when none).
    pub scroll_delta: f64,
}

/// Render snapshot of one widget.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemView {
    /// Widget id.
    pub id: WidgetId,
    /// Logical slot.
    pub slot: SlotIndex,
    /// Displayed top-left corner in content space.
    pub position: Point,
    /// Displayed scale (1.0 at rest).
    pub scale: f64,
    /// Stacking order; higher draws on top.
    pub z_index: u16,
    /// Lifecycle phase.
    pub phase: ItemPhase,
}

/// Presentation state owned by each widget.
#[derive(Debug, Clone)]
struct ItemPresenter {
    position: AnimatedPoint,
    scale: Spring,
}

impl ItemPresenter {
    fn at(point: Point) -> Self {
        Self {
            position: AnimatedPoint::at(point),
            scale: Spring::new(1.0),
        }
    }

    fn tick(&mut self, dt: Duration) {
        self.position.tick(dt);
        self.scale.tick(dt);
    }

    fn is_animating(&self) -> bool {
        !self.position.is_complete() || !self.scale.is_at_rest()
    }
}

/// Drag-and-drop reordering for a fixed-column widget grid.
///
/// Single-threaded: every entry point takes `&mut self` and runs to
/// completion. At most one widget is dragged at a time; other widgets may
/// still be settling from earlier gestures.
#[derive(Debug)]
pub struct ReorderEngine {
    geometry: GridGeometry,
    positions: PositionMap,
    scroll: ScrollState,
    editing: bool,
    settle_duration: Duration,
    presenters: HashMap<WidgetId, ItemPresenter>,
    sessions: Vec<DragSession>,
    subscribers: Vec<Sender<GridEvent>>,
}

impl ReorderEngine {
    /// Create an engine with every widget resting at its slot.
    pub fn new(geometry: GridGeometry, positions: PositionMap, viewport_height: f64) -> Self {
        let presenters = positions
            .iter()
            .map(|(id, slot)| (id.clone(), ItemPresenter::at(geometry.position_of(slot))))
            .collect();
        let scroll = ScrollState::new(viewport_height, geometry.content_height(positions.len()));

        Self {
            geometry,
            positions,
            scroll,
            editing: false,
            settle_duration: DEFAULT_SETTLE_DURATION,
            presenters,
            sessions: Vec::new(),
            subscribers: Vec::new(),
        }
    }

    /// Override the settle animation duration.
    pub fn with_settle_duration(mut self, duration: Duration) -> Self {
        self.settle_duration = duration;
        self
    }

    /// Grid geometry.
    pub fn geometry(&self) -> &GridGeometry {
        &self.geometry
    }

    /// Authoritative position map.
    pub fn positions(&self) -> &PositionMap {
        &self.positions
    }

    /// Scroll state of the container.
    pub fn scroll(&self) -> &ScrollState {
        &self.scroll
    }

    /// Whether edit mode is on.
    pub fn is_editing(&self) -> bool {
        self.editing
    }

    /// Widget currently following the pointer.
    pub fn dragged_id(&self) -> Option<&WidgetId> {
        self.dragging().map(DragSession::id)
    }

    /// Register for [`GridEvent`]s. Dropped receivers are pruned lazily.
    pub fn subscribe(&mut self) -> Receiver<GridEvent> {
        let (tx, rx) = mpsc::channel();
        self.subscribers.push(tx);
        rx
    }

    /// Toggle edit mode.
    ///
    /// Turning edit mode off mid-drag force-ends the drag exactly like
    /// [`ReorderEngine::end_drag`]. Returns the slot the widget settles into
    /// in that case.
    pub fn set_editing(&mut self, editing: bool) -> Option<SlotIndex> {
        self.editing = editing;
        info!(editing, "Edit mode changed");
        if !editing && self.dragging().is_some() {
            info!("Edit mode disabled mid-drag, forcing drag end");
            return self.end_drag();
        }
        None
    }

    /// Update the visible height of the container.
    pub fn set_viewport_height(&mut self, height: f64) {
        self.scroll.set_viewport_height(height);
    }

    /// User scroll. Returns the applied delta.
    pub fn scroll_by(&mut self, delta: f64) -> f64 {
        let applied = self.scroll.scroll_by(delta);
        if applied != 0.0 {
            self.emit(GridEvent::Scrolled {
                offset: self.scroll.offset(),
                delta: applied,
            });
        }
        applied
    }

    /// Begin dragging `id`.
    ///
    /// Returns `Ok(false)` without doing anything when edit mode is off. The
    /// widget's currently displayed coordinates become the gesture origin, so
    /// grabbing a widget mid-settle continues from where it is drawn.
    pub fn start_drag(&mut self, id: &WidgetId) -> Result<bool, GridError> {
        if !self.editing {
            debug!(id = %id, "Ignoring drag start outside edit mode");
            return Ok(false);
        }
        if !self.positions.contains(id) {
            return Err(GridError::UnknownWidget(id.clone()));
        }
        if let Some(current) = self.dragging() {
            warn!(id = %id, dragging = %current.id(), "Rejecting second concurrent drag");
            return Err(GridError::DragInProgress(current.id().clone()));
        }

        // Grabbing a settling widget replaces its old session
        self.sessions.retain(|session| session.id() != id);

        let presenter = self
            .presenters
            .get_mut(id)
            .ok_or_else(|| GridError::UnknownWidget(id.clone()))?;
        let origin = presenter.position.value();
        presenter.position.jump_to(origin);
        presenter.scale.set_target(ACTIVE_SCALE);

        self.sessions.push(DragSession::start(id.clone(), origin));
        info!(id = %id, x = origin.x, y = origin.y, "Drag started");
        self.emit(GridEvent::DragStarted(id.clone()));
        Ok(true)
    }

    /// Follow the pointer. `translation` is cumulative since the press.
    ///
    /// Moves the dragged widget, swaps it with the occupant of the slot under
    /// it, and auto-scrolls when it crosses the viewport edge. Returns
    /// `Ok(None)` when no drag is in progress.
    pub fn update_drag(&mut self, translation: Point) -> Result<Option<DragUpdate>, GridError> {
        let Some((id, raw)) = self
            .dragging()
            .map(|session| (session.id().clone(), session.position_for(translation)))
        else {
            return Ok(None);
        };
        let Some(max_slot) = self.positions.max_slot() else {
            return Ok(None);
        };

        let candidate = self.geometry.slot_at(raw, max_slot);
        let swapped_with = self.positions.move_to(&id, candidate)?;

        let mut position = raw;
        let delta = self
            .scroll
            .auto_scroll_delta(raw.y, self.geometry.item_size().height);
        let scroll_delta = if delta != 0.0 {
            let applied = self.scroll.scroll_by(delta);
            if let Some(session) = self.dragging_mut() {
                session.shift_origin_y(applied);
                position = session.position_for(translation);
            }
            debug!(delta = applied, offset = self.scroll.offset(), "Auto-scrolled during drag");
            self.emit(GridEvent::Scrolled {
                offset: self.scroll.offset(),
                delta: applied,
            });
            applied
        } else {
            0.0
        };

        if let Some(presenter) = self.presenters.get_mut(&id) {
            presenter.position.jump_to(position);
        }
        self.reconcile();

        let slot = self
            .positions
            .slot_of(&id)
            .ok_or_else(|| GridError::UnknownWidget(id.clone()))?;
        Ok(Some(DragUpdate {
            position,
            slot,
            swapped_with,
            scroll_delta,
        }))
    }

    /// Release the dragged widget.
    ///
    /// Starts the settle animation towards the widget's final slot. The widget
    /// stays elevated until [`ReorderEngine::tick`] observes the animation
    /// finishing. Returns the final slot, or `None` when nothing was dragged.
    pub fn end_drag(&mut self) -> Option<SlotIndex> {
        let session = self
            .sessions
            .iter_mut()
            .find(|session| session.phase() == SessionPhase::Dragging)?;
        session.release();
        let id = session.id().clone();

        let slot = self.positions.slot_of(&id)?;
        let target = self.geometry.position_of(slot);
        if let Some(presenter) = self.presenters.get_mut(&id) {
            presenter.position.animate_to(target, self.settle_duration);
        }
        info!(id = %id, slot = slot.get(), "Drag ended, settling");
        self.emit(GridEvent::DragEnded { id, slot });
        Some(slot)
    }

    /// Advance every animation by `dt`.
    ///
    /// Finishes settles whose animation completed: the widget drops back to
    /// normal stacking and scale, and if its slot changed while it settled it
    /// animates to the new slot. Returns whether anything is still animating.
    pub fn tick(&mut self, dt: Duration) -> bool {
        for presenter in self.presenters.values_mut() {
            presenter.tick(dt);
        }

        let mut settled = Vec::new();
        for session in &mut self.sessions {
            if session.phase() != SessionPhase::Settling {
                continue;
            }
            let done = self
                .presenters
                .get(session.id())
                .is_none_or(|presenter| presenter.position.is_complete());
            if done {
                session.deactivate();
                settled.push(session.id().clone());
            }
        }
        self.sessions.retain(DragSession::is_active);

        for id in settled {
            let target = self
                .positions
                .slot_of(&id)
                .map(|slot| self.geometry.position_of(slot));
            if let Some(presenter) = self.presenters.get_mut(&id) {
                presenter.scale.set_target(1.0);
                if let Some(target) = target.filter(|t| *t != presenter.position.target()) {
                    presenter.position.animate_to(target, self.settle_duration);
                }
            }
            debug!(id = %id, "Settle complete");
            self.emit(GridEvent::Settled(id));
        }

        self.is_animating()
    }

    /// Whether any widget is moving, scaling or settling.
    pub fn is_animating(&self) -> bool {
        self.presenters.values().any(ItemPresenter::is_animating)
            || self
                .sessions
                .iter()
                .any(|session| session.phase() == SessionPhase::Settling)
    }

    /// Lifecycle phase of `id`.
    pub fn phase_of(&self, id: &WidgetId) -> ItemPhase {
        match self.session_for(id).map(DragSession::phase) {
            Some(SessionPhase::Dragging) => ItemPhase::Dragging,
            Some(SessionPhase::Settling) => ItemPhase::Settling,
            None => ItemPhase::Idle,
        }
    }

    /// Render snapshot, bottom-most first.
    pub fn items(&self) -> Vec<ItemView> {
        let mut items: Vec<ItemView> = self
            .positions
            .iter()
            .map(|(id, slot)| self.item_view(id, slot))
            .collect();
        // Stable sort keeps slot order among equal z
        items.sort_by_key(|item| item.z_index);
        items
    }

    /// Topmost widget whose displayed rectangle contains `point`.
    pub fn hit_test(&self, point: Point) -> Option<WidgetId> {
        self.items()
            .into_iter()
            .rev()
            .find(|item| self.geometry.item_contains(item.position, point))
            .map(|item| item.id)
    }

    fn item_view(&self, id: &WidgetId, slot: SlotIndex) -> ItemView {
        let (position, scale) = self
            .presenters
            .get(id)
            .map(|presenter| (presenter.position.value(), presenter.scale.position()))
            .unwrap_or_else(|| (self.geometry.position_of(slot), 1.0));
        let elevated = self.session_for(id).is_some_and(DragSession::is_active);

        ItemView {
            id: id.clone(),
            slot,
            position,
            scale,
            z_index: if elevated { ELEVATED_Z_INDEX } else { 0 },
            phase: self.phase_of(id),
        }
    }

    /// Animate every idle widget whose slot changed; publish the changes.
    fn reconcile(&mut self) {
        for change in self.positions.take_changes() {
            if self.phase_of(&change.id) == ItemPhase::Idle {
                let target = self.geometry.position_of(change.to);
                if let Some(presenter) = self.presenters.get_mut(&change.id) {
                    presenter.position.animate_to(target, self.settle_duration);
                }
            }
            self.emit(GridEvent::SlotChanged(change));
        }
    }

    fn session_for(&self, id: &WidgetId) -> Option<&DragSession> {
        self.sessions.iter().find(|session| session.id() == id)
    }

    fn dragging(&self) -> Option<&DragSession> {
        self.sessions
            .iter()
            .find(|session| session.phase() == SessionPhase::Dragging)
    }

    fn dragging_mut(&mut self) -> Option<&mut DragSession> {
        self.sessions
            .iter_mut()
            .find(|session| session.phase() == SessionPhase::Dragging)
    }

    fn emit(&mut self, event: GridEvent) {
        self.subscribers.retain(|tx| tx.send(event.clone()).is_ok());
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
