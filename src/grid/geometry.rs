//! Slot geometry: slot index ↔ grid coordinate.

use crate::model::GridError;
use std::ops::{Add, Sub};

/// A coordinate in grid content space.
///
/// Units are whatever the host renders in (pixels, terminal cells). The
/// origin is the top-left corner of the scrollable content, not the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl Point {
    /// The origin.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Create a new point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Slot index within the grid. 0-indexed, row-major.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct SlotIndex(usize);

impl SlotIndex {
    /// Create a new SlotIndex from a raw 0-based value.
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    /// Get the raw 0-based index value.
    pub fn get(&self) -> usize {
        self.0
    }
}

impl From<usize> for SlotIndex {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

/// Size of one grid item.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemSize {
    /// Item width.
    pub width: f64,
    /// Item height.
    pub height: f64,
}

impl ItemSize {
    /// Create an item size.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Square items of side `size`.
    pub fn square(size: f64) -> Self {
        Self::new(size, size)
    }
}

/// Fixed-column grid of equally sized items.
///
/// # Invariants
/// - `columns >= 1`
/// - item width and height are finite and `> 0`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridGeometry {
    columns: usize,
    item: ItemSize,
}

impl GridGeometry {
    /// Create a geometry, rejecting zero columns and non-positive sizes.
    pub fn new(columns: usize, item: ItemSize) -> Result<Self, GridError> {
        let valid_side = |side: f64| side.is_finite() && side > 0.0;
        if columns == 0 || !valid_side(item.width) || !valid_side(item.height) {
            return Err(GridError::EmptyLayout {
                columns,
                width: item.width,
                height: item.height,
            });
        }
        Ok(Self { columns, item })
    }

    /// Number of columns.
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Size of one item.
    pub fn item_size(&self) -> ItemSize {
        self.item
    }

    /// Top-left coordinate of `slot`.
    pub fn position_of(&self, slot: SlotIndex) -> Point {
        let column = slot.get() % self.columns;
        let row = slot.get() / self.columns;
        Point::new(
            column as f64 * self.item.width,
            row as f64 * self.item.height,
        )
    }

    /// Slot nearest to `point`, clamped to `[0, max_slot]`.
    ///
    /// Each axis snaps to the nearest cell. Negative coordinates clamp to the
    /// first row/column and the column never exceeds the last column, so a
    /// point dragged past the right edge stays in its row.
    pub fn slot_at(&self, point: Point, max_slot: SlotIndex) -> SlotIndex {
        let column = snap(point.x, self.item.width).min(self.columns - 1);
        let row = snap(point.y, self.item.height);
        let slot = row.saturating_mul(self.columns).saturating_add(column);
        SlotIndex::new(slot.min(max_slot.get()))
    }

    /// Number of rows needed for `items` items.
    pub fn rows_for(&self, items: usize) -> usize {
        items.div_ceil(self.columns)
    }

    /// Total content height for `items` items.
    pub fn content_height(&self, items: usize) -> f64 {
        self.rows_for(items) as f64 * self.item.height
    }

    /// Whether `point` falls inside an item whose top-left corner is `origin`.
    pub fn item_contains(&self, origin: Point, point: Point) -> bool {
        point.x >= origin.x
            && point.x < origin.x + self.item.width
            && point.y >= origin.y
            && point.y < origin.y + self.item.height
    }
}

/// Nearest cell index along one axis; NaN and negatives map to 0.
fn snap(coordinate: f64, cell: f64) -> usize {
    let cells = (coordinate / cell).round();
    if cells.is_nan() || cells <= 0.0 {
        0
    } else {
        // `as` saturates for values beyond usize::MAX
        cells as usize
    }
}
