//! Dashboard screen: header, widget grid and status bar.
//!
//! Widgets are drawn at their animated content-space coordinates shifted by
//! the scroll offset. Each card is rendered into its own scratch buffer and
//! copied cell by cell into the grid area, so cards that are partly scrolled
//! out of view or dragged past an edge are clipped instead of squashed.

use super::constants::{HEADER_HEIGHT, STATUS_BAR_HEIGHT};
use super::styles::{
    EDITABLE_BORDER, EDIT_MODE_BADGE, ELEVATED_BORDER, MUTED_TEXT, WIDGET_BORDER, WIDGET_TITLE,
};
use super::StatusMessage;
use crate::grid::engine::ELEVATED_Z_INDEX;
use crate::grid::{ItemSize, ItemView, Point, ReorderEngine};
use crate::model::WidgetKind;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
    Frame,
};

/// Screen regions of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardAreas {
    /// Title and mode indicator.
    pub header: Rect,
    /// Scrollable widget grid.
    pub grid: Rect,
    /// Status text and key hints.
    pub status: Rect,
}

/// Split the frame into header, grid and status bar.
pub fn calculate_areas(area: Rect) -> DashboardAreas {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(STATUS_BAR_HEIGHT),
        ])
        .split(area);

    DashboardAreas {
        header: chunks[0],
        grid: chunks[1],
        status: chunks[2],
    }
}

/// Map a terminal cell inside `grid` to a content-space point.
///
/// Returns `None` for cells outside the grid area.
pub fn content_point(grid: Rect, scroll_offset: f64, column: u16, row: u16) -> Option<Point> {
    let inside = column >= grid.left()
        && column < grid.right()
        && row >= grid.top()
        && row < grid.bottom();
    inside.then(|| {
        Point::new(
            f64::from(column - grid.x),
            f64::from(row - grid.y) + scroll_offset,
        )
    })
}

/// Render the whole dashboard.
pub fn render_dashboard(frame: &mut Frame, engine: &ReorderEngine, status: Option<&StatusMessage>) {
    let areas = calculate_areas(frame.area());
    render_header(frame, areas.header, engine);
    render_grid(frame.buffer_mut(), areas.grid, engine);
    render_status_bar(frame, areas.status, engine, status);
}

fn render_header(frame: &mut Frame, area: Rect, engine: &ReorderEngine) {
    let mut spans = vec![Span::styled(" findeck ", WIDGET_TITLE)];
    if engine.is_editing() {
        spans.push(Span::styled(" EDIT ", EDIT_MODE_BADGE));
        spans.push(Span::styled(" drag a widget to move it", MUTED_TEXT));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    engine: &ReorderEngine,
    status: Option<&StatusMessage>,
) {
    let mut spans = match status {
        Some(message) => vec![Span::styled(message.text.clone(), message.kind.style())],
        None => {
            let hints = if engine.is_editing() {
                "drag: move | e/Esc: done | ↑↓/wheel: scroll | q: quit"
            } else {
                "e: edit layout | ↑↓/wheel: scroll | q: quit"
            };
            vec![Span::styled(hints, MUTED_TEXT)]
        }
    };

    let scroll = engine.scroll();
    if scroll.max_offset() > 0.0 {
        spans.push(Span::styled(
            format!("  [{:.0}/{:.0}]", scroll.offset(), scroll.max_offset()),
            MUTED_TEXT,
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Draw every widget into `grid`, bottom-most first.
pub fn render_grid(buf: &mut Buffer, grid: Rect, engine: &ReorderEngine) {
    let size = engine.geometry().item_size();
    let offset = engine.scroll().offset();
    let editing = engine.is_editing();

    for item in engine.items() {
        let extent = CardExtent::for_item(&item, size, offset);
        if extent.width == 0 || extent.height == 0 {
            continue;
        }
        let mut scratch = Buffer::empty(Rect::new(0, 0, extent.width, extent.height));
        card(&item, editing).render(scratch.area, &mut scratch);
        blit(
            &scratch,
            buf,
            i32::from(grid.x) + extent.x,
            i32::from(grid.y) + extent.y,
            grid,
        );
    }
}

/// Card rectangle relative to the grid's top-left corner, after scaling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct CardExtent {
    x: i32,
    y: i32,
    width: u16,
    height: u16,
}

impl CardExtent {
    fn for_item(item: &ItemView, size: ItemSize, scroll_offset: f64) -> Self {
        let width = (size.width * item.scale).round().max(0.0);
        let height = (size.height * item.scale).round().max(0.0);
        // Scale about the card's centre
        let x = item.position.x - (width - size.width) / 2.0;
        let y = item.position.y - scroll_offset - (height - size.height) / 2.0;

        Self {
            x: x.round() as i32,
            y: y.round() as i32,
            width: width.min(f64::from(u16::MAX)) as u16,
            height: height.min(f64::from(u16::MAX)) as u16,
        }
    }
}

fn card(item: &ItemView, editing: bool) -> Paragraph<'static> {
    let kind = WidgetKind::from_id_str(item.id.as_str());
    let title = kind.map_or_else(|| item.id.to_string(), |kind| kind.title().to_string());
    let body: Vec<Line<'static>> = kind
        .map(WidgetKind::body)
        .unwrap_or_default()
        .iter()
        .map(|line| Line::from(*line))
        .collect();

    let elevated = item.z_index >= ELEVATED_Z_INDEX;
    let (border_type, border_style): (BorderType, Style) = if elevated {
        (BorderType::Thick, ELEVATED_BORDER)
    } else if editing {
        (BorderType::Rounded, EDITABLE_BORDER)
    } else {
        (BorderType::Plain, WIDGET_BORDER)
    };

    Paragraph::new(body).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(border_type)
            .border_style(border_style)
            .title(Span::styled(format!(" {title} "), WIDGET_TITLE)),
    )
}

/// Copy `src` into `dst` with its top-left cell at `(x, y)`, skipping cells
/// outside `clip`.
fn blit(src: &Buffer, dst: &mut Buffer, x: i32, y: i32, clip: Rect) {
    for sy in 0..src.area.height {
        let ty = y + i32::from(sy);
        if ty < i32::from(clip.top()) || ty >= i32::from(clip.bottom()) {
            continue;
        }
        for sx in 0..src.area.width {
            let tx = x + i32::from(sx);
            if tx < i32::from(clip.left()) || tx >= i32::from(clip.right()) {
                continue;
            }
            // Both coordinates are inside `clip`, so they fit in u16
            let target = (tx as u16, ty as u16);
            if let (Some(cell), Some(slot)) = (src.cell((sx, sy)), dst.cell_mut(target)) {
                *slot = cell.clone();
            }
        }
    }
}

#[cfg(test)]
#[path = "dashboard_tests.rs"]
mod tests;
