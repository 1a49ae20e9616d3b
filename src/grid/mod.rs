//! Grid reorder engine - the drag-and-drop core of the dashboard
//!
//! Backend-agnostic: coordinates are `f64` in content space, time advances
//! only through explicit `tick(dt)` calls, and gestures arrive as plain
//! start / translation / end calls.
//!
//! # Module Structure
//!
//! - `geometry`: Point, SlotIndex, ItemSize, GridGeometry (slot ↔ coordinate)
//! - `positions`: PositionMap - authoritative widget → slot bijection
//! - `scroll`: ScrollState - clamped container scroll offset, auto-scroll math
//! - `session`: DragSession - per-gesture record
//! - `animation`: easing, Tween, AnimatedPoint, Spring
//! - `gesture`: GestureTracker - absolute pointer → cumulative translation
//! - `engine`: ReorderEngine - ties it together

pub mod animation;
pub mod engine;
pub mod geometry;
pub mod gesture;
pub mod positions;
pub mod scroll;
pub mod session;

pub use engine::{DragUpdate, GridEvent, ItemPhase, ItemView, ReorderEngine};
pub use geometry::{GridGeometry, ItemSize, Point, SlotIndex};
pub use gesture::GestureTracker;
pub use positions::{PositionMap, SlotChange};
pub use scroll::ScrollState;
