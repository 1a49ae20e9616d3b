//! Rendering tests for the dashboard grid.

use super::*;
use crate::grid::{GridGeometry, ItemPhase, PositionMap, SlotIndex};
use crate::model::{default_widget_ids, WidgetId};
use crate::view::StatusKind;
use ratatui::{backend::TestBackend, Terminal};

fn engine(viewport_height: f64) -> ReorderEngine {
    let geometry = GridGeometry::new(2, ItemSize::new(28.0, 8.0)).unwrap();
    let positions = PositionMap::from_order(default_widget_ids()).unwrap();
    ReorderEngine::new(geometry, positions, viewport_height)
}

fn rows(buffer: &Buffer) -> Vec<String> {
    (0..buffer.area.height)
        .map(|y| {
            (0..buffer.area.width)
                .map(|x| buffer.cell((x, y)).map_or(" ", |cell| cell.symbol()))
                .collect()
        })
        .collect()
}

fn render(engine: &ReorderEngine) -> Vec<String> {
    let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
    terminal
        .draw(|frame| render_dashboard(frame, engine, None))
        .unwrap();
    rows(terminal.backend().buffer())
}

#[test]
fn areas_reserve_header_and_status_rows() {
    let areas = calculate_areas(Rect::new(0, 0, 60, 20));
    assert_eq!(areas.header, Rect::new(0, 0, 60, 1));
    assert_eq!(areas.grid, Rect::new(0, 1, 60, 18));
    assert_eq!(areas.status, Rect::new(0, 19, 60, 1));
}

#[test]
fn content_point_adds_scroll_offset() {
    let grid = Rect::new(0, 1, 60, 18);
    assert_eq!(content_point(grid, 0.0, 3, 1), Some(Point::new(3.0, 0.0)));
    assert_eq!(content_point(grid, 4.0, 3, 5), Some(Point::new(3.0, 8.0)));
}

#[test]
fn content_point_outside_grid_is_none() {
    let grid = Rect::new(0, 1, 60, 18);
    assert_eq!(content_point(grid, 0.0, 3, 0), None);
    assert_eq!(content_point(grid, 0.0, 60, 5), None);
    assert_eq!(content_point(grid, 0.0, 3, 19), None);
}

#[test]
fn widgets_are_drawn_at_their_slots() {
    let rows = render(&engine(18.0));
    // Row 1 holds the top border of slot 0 and slot 1
    assert!(rows[1].starts_with("┌ Balance "), "got {:?}", rows[1]);
    assert_eq!(rows[1].chars().nth(28), Some('┌'));
    assert!(rows[1].contains("Spending"));
    assert!(rows[9].contains("Cards"));
    assert!(rows[9].contains("Transactions"));
    assert!(rows[2].contains("₩ 3,482,190"));
}

#[test]
fn cards_below_the_viewport_are_clipped() {
    let rows = render(&engine(18.0));
    // Third row of widgets starts at grid row 16, screen row 17; only two
    // of its rows fit above the status bar
    assert!(rows[17].contains("Savings"));
    assert!(!rows[19].contains("Savings"));
}

#[test]
fn scrolling_shifts_cards_up() {
    let mut engine = engine(18.0);
    engine.scroll_by(6.0);
    let rows = render(&engine);
    // Balance's top border scrolled out; its bottom border is now on screen row 2
    assert!(!rows.iter().any(|row| row.contains("Balance")));
    assert!(rows[2].starts_with("└"), "got {:?}", rows[2]);
    assert!(rows[3].contains("Cards"));
}

#[test]
fn status_bar_shows_scroll_position_when_scrollable() {
    let rows = render(&engine(18.0));
    assert!(rows[19].contains("[0/6]"), "got {:?}", rows[19]);
}

#[test]
fn header_shows_edit_badge() {
    let mut engine = engine(18.0);
    engine.set_editing(true);
    let rows = render(&engine);
    assert!(rows[0].contains("EDIT"));
    assert!(rows[19].contains("drag: move"));
}

#[test]
fn status_message_replaces_hints() {
    let engine = engine(24.0);
    let status = StatusMessage {
        text: "Moved cards to position 1".to_string(),
        kind: StatusKind::Info,
    };
    let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
    terminal
        .draw(|frame| render_dashboard(frame, &engine, Some(&status)))
        .unwrap();
    let rows = rows(terminal.backend().buffer());
    assert!(rows[19].contains("Moved cards to position 1"));
    assert!(!rows[19].contains("e: edit layout"));
}

#[test]
fn dragged_card_is_drawn_on_top_with_thick_border() {
    let mut engine = engine(18.0);
    engine.set_editing(true);
    let balance = WidgetId::new("balance").unwrap();
    engine.start_drag(&balance).unwrap();
    // Hover half-way over Spending without reaching its slot
    engine.update_drag(Point::new(10.0, 0.0)).unwrap();
    assert_eq!(engine.positions().slot_of(&balance), Some(SlotIndex::new(0)));
    assert_eq!(engine.phase_of(&balance), ItemPhase::Dragging);

    let rows = render(&engine);
    assert!(rows[1].contains("┏"), "elevated card uses a thick border: {:?}", rows[1]);
    assert!(rows[1].contains("Balance"));
}

#[test]
fn card_extent_grows_about_the_centre() {
    let view = ItemView {
        id: WidgetId::new("balance").unwrap(),
        slot: SlotIndex::new(0),
        position: Point::new(28.0, 8.0),
        scale: 1.05,
        z_index: ELEVATED_Z_INDEX,
        phase: ItemPhase::Dragging,
    };
    let extent = CardExtent::for_item(&view, ItemSize::new(28.0, 8.0), 0.0);
    assert_eq!(extent.width, 29);
    assert_eq!(extent.height, 8);
    assert_eq!(extent.x, 28);
    assert_eq!(extent.y, 8);
}

#[test]
fn blit_clips_to_target_area() {
    let mut src = Buffer::empty(Rect::new(0, 0, 3, 3));
    for y in 0..3 {
        for x in 0..3 {
            if let Some(cell) = src.cell_mut((x, y)) {
                cell.set_symbol("x");
            }
        }
    }
    let mut dst = Buffer::empty(Rect::new(0, 0, 4, 4));
    blit(&src, &mut dst, -1, 2, Rect::new(0, 1, 4, 2));

    let rows = rows(&dst);
    assert_eq!(rows, vec!["    ", "    ", "xx  ", "    "]);
}
